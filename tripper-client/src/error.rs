use reqwest::StatusCode;
use shared::models::ShapeError;
use thiserror::Error;

/// Failures surfaced by the API client and the page flows.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No response was received.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("request failed with {status}{}", message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Status {
        /// HTTP status returned.
        status: StatusCode,
        /// Message from the error body, if any.
        message: Option<String>,
    },

    /// An authenticated request was rejected; the session has been dropped.
    #[error("session rejected by the server")]
    Unauthorized,

    /// The payload did not have the expected shape.
    #[error(transparent)]
    UnexpectedShape(#[from] ShapeError),

    /// The payload was not valid JSON for the expected type.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Local validation failed before any request was made.
    #[error("{0}")]
    Validation(String),

    /// The owning page went away before the request finished.
    #[error("request cancelled")]
    Cancelled,
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err)
        }
    }
}

impl ClientError {
    /// Message suitable for showing inline on a page.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Unable to connect to server".to_string(),
            Self::Status { status, message } => message
                .clone()
                .unwrap_or_else(|| format!("Request failed: {status}")),
            Self::Unauthorized => "Your session has expired. Please log in again.".to_string(),
            Self::UnexpectedShape(err) => format!("{err}."),
            Self::Decode(_) => "Unexpected response from server".to_string(),
            Self::Validation(message) => message.clone(),
            Self::Cancelled => "Request cancelled".to_string(),
        }
    }

    /// Whether the error means the caller must log in again.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_prefers_the_body() {
        let err = ClientError::Status {
            status: StatusCode::BAD_REQUEST,
            message: Some("Email already used".to_string()),
        };
        assert_eq!(err.user_message(), "Email already used");
        assert_eq!(err.to_string(), "request failed with 400 Bad Request: Email already used");
    }

    #[test]
    fn status_without_body_mentions_the_code() {
        let err = ClientError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: None,
        };
        assert_eq!(err.user_message(), "Request failed: 500 Internal Server Error");
    }

    #[test]
    fn shape_errors_read_as_sentences() {
        let err = ClientError::from(ShapeError::NotAnArray { what: "Promotions" });
        assert_eq!(
            err.user_message(),
            "Promotions data is not in the expected format."
        );
    }

    #[test]
    fn only_unauthorized_requires_login() {
        assert!(ClientError::Unauthorized.is_unauthorized());
        assert!(!ClientError::Cancelled.is_unauthorized());
        assert!(!ClientError::Validation("x".into()).is_unauthorized());
    }
}
