use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Credentials submitted by the login form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Account email address.
    pub email: String,
    /// Account password.
    pub password: String,
}

impl LoginRequest {
    /// Create a request from form values.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Successful login answer. Only the token is consumed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests.
    pub token: String,
    /// Optional human-readable status.
    #[serde(default)]
    pub message: Option<String>,
}

/// Account role offered by the registration form.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Administrative account.
    Admin,
    /// Regular traveller account.
    #[default]
    User,
}

impl Role {
    /// Wire representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            _ => Err("unknown role"),
        }
    }
}

/// File attached to a multipart form, passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    /// Original file name.
    pub file_name: String,
    /// MIME type reported by the browser, if any.
    pub content_type: Option<String>,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

/// Registration form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    /// Display name. Required.
    pub name: String,
    /// Login email. Required.
    pub email: String,
    /// Required.
    pub password: String,
    /// Must equal `password`; checked locally, never sent.
    pub password_repeat: String,
    pub role: Role,
    /// Required.
    pub phone_number: String,
    /// Sent as the `profilePicture` part when present.
    pub profile_picture: Option<Upload>,
}

impl RegisterForm {
    /// Text fields in submission order, keyed by their wire names.
    #[must_use]
    pub fn text_fields(&self) -> [(&'static str, String); 6] {
        [
            ("name", self.name.clone()),
            ("email", self.email.clone()),
            ("password", self.password.clone()),
            ("passwordRepeat", self.password_repeat.clone()),
            ("role", self.role.as_str().to_string()),
            ("phoneNumber", self.phone_number.clone()),
        ]
    }
}

/// Answer to a registration request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_strings() {
        for role in [Role::Admin, Role::User] {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
        assert!("owner".parse::<Role>().is_err());
        assert_eq!(Role::default(), Role::User);
    }

    #[test]
    fn login_response_ignores_extra_fields() {
        let body = r#"{"code":"200","status":"OK","message":"Success","token":"abc","data":{"id":"1"}}"#;
        let response: LoginResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.token, "abc");
        assert_eq!(response.message.as_deref(), Some("Success"));
    }

    #[test]
    fn register_fields_use_wire_names() {
        let form = RegisterForm {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            password: "pw".into(),
            password_repeat: "pw".into(),
            role: Role::Admin,
            phone_number: "0812".into(),
            profile_picture: None,
        };
        let names: Vec<_> = form.text_fields().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            ["name", "email", "password", "passwordRepeat", "role", "phoneNumber"]
        );
        assert_eq!(form.text_fields()[4].1, "admin");
    }
}
