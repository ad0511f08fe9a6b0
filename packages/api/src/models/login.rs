//! # Login request and response bodies
//!
//! ## [`LoginRequest`]
//!
//! The JSON body POSTed to the login endpoint: `{email, password, role}`. The
//! password is held as a [`SecretString`] so that `Debug` output (and therefore
//! any log line that formats the request) shows `[REDACTED]` instead of the
//! plaintext. It is exposed only while serialising the body.
//!
//! ## [`LoginResponse`]
//!
//! The success body `{token, role, user}`. `role` is kept as the raw string the
//! service returned; [`LoginResponse::role`] parses it and yields `None` for
//! values this portal does not know. `user` is opaque and stored verbatim.
//!
//! ## [`LoginErrorBody`]
//!
//! The optional `{error}` body attached to non-2xx responses.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, Serializer};

use super::Role;

/// Credentials sent to the login service.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(serialize_with = "expose_password")]
    pub password: SecretString,
    pub role: Role,
}

fn expose_password<S: Serializer>(password: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(password.expose_secret())
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
            role,
        }
    }
}

/// Successful login payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: String,
    pub user: serde_json::Value,
}

impl LoginResponse {
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }
}

/// Error payload returned with a rejected login.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let request = LoginRequest::new("ada@example.com", "hunter2hunter2", Role::Doctor);

        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(
            body,
            json!({
                "email": "ada@example.com",
                "password": "hunter2hunter2",
                "role": "doctor",
            })
        );
    }

    #[test]
    fn test_request_debug_redacts_password() {
        let request = LoginRequest::new("ada@example.com", "hunter2hunter2", Role::Patient);

        let debug = format!("{request:?}");

        assert!(debug.contains("ada@example.com"));
        assert!(!debug.contains("hunter2hunter2"));
    }

    #[test]
    fn test_response_decoding() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"token":"t1","role":"doctor","user":{"id":1}}"#).unwrap();

        assert_eq!(response.token, "t1");
        assert_eq!(response.role(), Some(Role::Doctor));
        assert_eq!(response.user, json!({"id": 1}));
    }

    #[test]
    fn test_response_with_unknown_role() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"token":"t1","role":"nurse","user":{}}"#).unwrap();

        assert_eq!(response.role, "nurse");
        assert_eq!(response.role(), None);
    }

    #[test]
    fn test_response_missing_token_is_rejected() {
        let result = serde_json::from_str::<LoginResponse>(r#"{"role":"doctor","user":{}}"#);
        assert!(result.is_err());
    }
}
