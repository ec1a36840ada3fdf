use serde::{Deserialize, Serialize};

/// Error body returned by the travel API on non-2xx answers.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// The main error message, when the service sent one.
    #[serde(default)]
    pub message: Option<String>,
    /// Optional status text such as "Unauthorized".
    #[serde(default)]
    pub status: Option<String>,
}

impl ErrorResponse {
    /// Parse a response body, tolerating empty or non-JSON bodies.
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.message, &self.status) {
            (Some(message), Some(status)) => write!(f, "{status}: {message}"),
            (Some(message), None) => f.write_str(message),
            (None, Some(status)) => f.write_str(status),
            (None, None) => f.write_str("unknown error"),
        }
    }
}

impl std::error::Error for ErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_read_from_json_body() {
        let error = ErrorResponse::from_body(r#"{"code":"401","status":"Unauthorized","message":"Invalid password"}"#);
        assert_eq!(error.message.as_deref(), Some("Invalid password"));
        assert_eq!(error.to_string(), "Unauthorized: Invalid password");
    }

    #[test]
    fn non_json_body_falls_back() {
        let error = ErrorResponse::from_body("<html>bad gateway</html>");
        assert_eq!(error, ErrorResponse::default());
        assert_eq!(error.to_string(), "unknown error");
    }

    #[test]
    fn empty_body_has_no_message() {
        let error = ErrorResponse::from_body("");
        assert_eq!(error.message, None);
    }
}
