//! # Login client
//!
//! [`LoginService`] is the seam between the sign-in workflow and the network:
//! one async method that turns a [`LoginRequest`] into a [`LoginResponse`] or a
//! [`LoginError`]. The workflow is generic over it so tests can substitute a
//! scripted implementation.
//!
//! [`HttpLoginService`] is the production implementation. It issues exactly one
//! `POST` per call with no timeout and no retries, and classifies the outcome:
//!
//! | Outcome | Result |
//! |---------|--------|
//! | No response | [`LoginError::Transport`] |
//! | Non-2xx status | [`LoginError::Rejected`], with `message` taken from an `{error}` body when present |
//! | 2xx, body is not `{token, role, user}` | [`LoginError::Decode`] |
//! | 2xx, well-formed body | `Ok(LoginResponse)` |

use std::future::Future;

use crate::config::PortalConfig;
use crate::error::LoginError;
use crate::models::{LoginErrorBody, LoginRequest, LoginResponse};

/// Authenticates credentials against a remote service.
pub trait LoginService {
    fn login(
        &self,
        request: &LoginRequest,
    ) -> impl Future<Output = Result<LoginResponse, LoginError>>;
}

/// reqwest-backed [`LoginService`] posting JSON to a fixed endpoint.
#[derive(Clone, Debug)]
pub struct HttpLoginService {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpLoginService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &PortalConfig) -> Self {
        Self::new(config.login_url.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl LoginService for HttpLoginService {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, LoginError> {
        tracing::debug!(endpoint = %self.endpoint, role = %request.role, "sending login request");

        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| LoginError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<LoginErrorBody>(&body)
                .ok()
                .map(|b| b.error);
            return Err(LoginError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| LoginError::Decode(e.to_string()))
    }
}
