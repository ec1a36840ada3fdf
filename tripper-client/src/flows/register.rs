use shared::{config::client::ClientConfig, models::RegisterForm};
use std::sync::Arc;
use tracing::info;

use super::SubmitState;
use crate::{api::TravelApi, error::ClientError};

const REGISTRATION_FAILED: &str = "Registration failed";
/// Shown when the two password fields differ.
pub const PASSWORD_MISMATCH: &str = "Passwords do not match";

/// Check a registration form locally. `None` means it may be sent.
#[must_use]
pub fn validate(form: &RegisterForm) -> Option<&'static str> {
    let required = [&form.name, &form.email, &form.password, &form.phone_number];
    if required.iter().any(|value| value.trim().is_empty()) {
        return Some("Please fill in all required fields");
    }
    if form.password != form.password_repeat {
        return Some(PASSWORD_MISMATCH);
    }
    None
}

/// Creates an account from the registration form.
#[derive(Debug, Clone)]
pub struct RegisterFlow<A> {
    api: A,
    config: Arc<ClientConfig>,
}

impl<A: TravelApi> RegisterFlow<A> {
    /// Flow redirecting to `config.login_path` on success.
    #[must_use]
    pub fn new(api: A, config: Arc<ClientConfig>) -> Self {
        Self { api, config }
    }

    /// Submit the registration form. Success redirects to the login page
    /// without creating a session.
    pub async fn submit(&self, form: &RegisterForm) -> SubmitState {
        if let Some(message) = validate(form) {
            return SubmitState::failed(message);
        }

        match self.api.register(form).await {
            Ok(_) => {
                info!(role = %form.role, "registration succeeded");
                SubmitState::Succeeded {
                    redirect_to: self.config.login_path.clone(),
                }
            }
            Err(ClientError::Status { message, .. }) => {
                SubmitState::failed(message.unwrap_or_else(|| REGISTRATION_FAILED.to_string()))
            }
            Err(err) => SubmitState::failed(err.user_message()),
        }
    }
}
