use thiserror::Error;

/// Message shown when a failed login carries no server-provided reason.
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

/// Why a login attempt did not produce a [`crate::LoginResponse`].
#[derive(Debug, Error)]
pub enum LoginError {
    /// The request never got a response (DNS, connection, TLS, ...).
    #[error("login request failed: {0}")]
    Transport(String),
    /// The service answered with a non-2xx status.
    #[error("login rejected with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },
    /// A 2xx response whose body is not a login payload.
    #[error("malformed login response: {0}")]
    Decode(String),
}

impl LoginError {
    /// Text to display on the form: the service's own `error` string when it
    /// sent one, the generic message otherwise.
    pub fn field_message(&self) -> &str {
        match self {
            LoginError::Rejected {
                message: Some(message),
                ..
            } => message,
            _ => UNEXPECTED_ERROR,
        }
    }
}
