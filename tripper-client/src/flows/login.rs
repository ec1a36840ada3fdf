use shared::{
    config::client::ClientConfig,
    models::LoginRequest,
    session::{Session, SessionStore},
};
use std::sync::Arc;
use tracing::{info, warn};

use super::SubmitState;
use crate::{api::TravelApi, error::ClientError};

const LOGIN_FAILED: &str = "Login failed";

/// Exchanges credentials for a session.
#[derive(Debug, Clone)]
pub struct LoginFlow<A> {
    api: A,
    session: SessionStore,
    config: Arc<ClientConfig>,
}

impl<A: TravelApi> LoginFlow<A> {
    /// Flow writing successful logins into `session`.
    #[must_use]
    pub fn new(api: A, session: SessionStore, config: Arc<ClientConfig>) -> Self {
        Self {
            api,
            session,
            config,
        }
    }

    /// Submit the login form.
    ///
    /// Blank fields fail without a request. On success the token is stored
    /// with the configured API key and the state carries the landing page.
    /// A rejected login leaves any existing session untouched.
    pub async fn submit(&self, credentials: &LoginRequest) -> SubmitState {
        if credentials.email.trim().is_empty() || credentials.password.is_empty() {
            return SubmitState::failed("Email and password are required");
        }

        match self.api.login(credentials).await {
            Ok(response) if !response.token.trim().is_empty() => {
                let session = Session::new(response.token, self.config.api_key.clone());
                if let Err(err) = self.session.set(session) {
                    warn!(error = %err, "login succeeded but the session was not persisted");
                }
                info!("login succeeded");
                SubmitState::Succeeded {
                    redirect_to: self.config.landing_path.clone(),
                }
            }
            Ok(_) => {
                warn!("login response carried an empty token");
                SubmitState::failed(LOGIN_FAILED)
            }
            Err(ClientError::Status { message, .. }) => {
                SubmitState::failed(message.unwrap_or_else(|| LOGIN_FAILED.to_string()))
            }
            Err(err) => SubmitState::failed(err.user_message()),
        }
    }
}
