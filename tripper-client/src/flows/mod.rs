//! Page flows: login, registration, and the gated content pages.

pub mod content;
pub mod login;
pub mod register;

pub use content::{CartNotice, ContentPages, HomeContent, PageLoad};
pub use login::LoginFlow;
pub use register::RegisterFlow;

/// Progress of a form submission.
///
/// `Idle → Submitting → {Succeeded, Failed}`. A failed submission is retried
/// by submitting again; there is no terminal lock-out state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// A request is in flight.
    Submitting,
    /// The submission went through; navigate to `redirect_to`.
    Succeeded {
        /// Page to show next.
        redirect_to: String,
    },
    /// The submission was rejected locally or remotely.
    Failed {
        /// Message shown inline under the form.
        message: String,
    },
}

impl SubmitState {
    /// Whether a request is in flight.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Inline error message, if the last submission failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Navigation target, if the last submission succeeded.
    #[must_use]
    pub fn redirect(&self) -> Option<&str> {
        match self {
            Self::Succeeded { redirect_to } => Some(redirect_to),
            _ => None,
        }
    }

    pub(crate) fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }
}
