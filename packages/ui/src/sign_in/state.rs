//! # Sign-in state store and submission workflow
//!
//! [`SignInStore`] owns everything the form mutates: the [`FormState`] typed by
//! the user and the [`FieldErrors`] of the last attempt. Field edits go through
//! a single entry point, [`SignInStore::dispatch`]. A submission is split at its
//! one suspension point, the login request:
//!
//! 1. [`begin_submit`](SignInStore::begin_submit) validates synchronously. It
//!    returns the [`LoginRequest`] to send, or why nothing should be sent
//!    ([`SubmitRejected`]). A successful call raises `is_submitting`, and every
//!    later call fails with [`SubmitRejected::InFlight`] until the attempt ends.
//! 2. The caller awaits a [`api::LoginService`] with that request.
//! 3. [`complete_submit`](SignInStore::complete_submit) applies the result:
//!    persist credentials and redirect, or show the failure under the password
//!    field and reopen the form.
//!
//! Storage and navigation are passed in as [`KeyValueStore`] and [`Navigator`]
//! so the whole workflow runs in tests without a browser.

use std::fmt;

use api::{LoginError, LoginRequest, LoginResponse, PortalConfig, Role, UNEXPECTED_ERROR};
use store::{KeyValueStore, StoreError};

use crate::navigation::Navigator;
use crate::validation::{
    validate_email, validate_password, EMAIL_ERROR, PASSWORD_ERROR, ROLE_ERROR,
};

/// Storage key for the session token returned by the login service.
pub const TOKEN_KEY: &str = "token";

/// Everything typed or toggled on the form.
#[derive(Clone, Default, PartialEq)]
pub struct FormState {
    pub email: String,
    pub password: String,
    pub role: Option<Role>,
    pub remember_device: bool,
    pub show_password: bool,
    pub is_submitting: bool,
}

impl fmt::Debug for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormState")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("role", &self.role)
            .field("remember_device", &self.remember_device)
            .field("show_password", &self.show_password)
            .field("is_submitting", &self.is_submitting)
            .finish()
    }
}

impl FormState {
    pub fn email_placeholder(&self) -> &'static str {
        match self.role {
            Some(Role::Doctor) => "doctor@healthconnect.com",
            _ => "patient@example.com",
        }
    }

    pub fn password_input_type(&self) -> &'static str {
        if self.show_password {
            "text"
        } else {
            "password"
        }
    }

    /// The strength meter is only shown once something has been typed.
    pub fn shows_strength_meter(&self) -> bool {
        !self.password.is_empty()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting {
            "Signing in..."
        } else {
            "Sign In"
        }
    }
}

/// Per-field messages from the last submit attempt. Empty means no error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: String,
    pub password: String,
    pub role: String,
}

impl FieldErrors {
    /// Run every validator against `form`.
    pub fn check(form: &FormState) -> Self {
        let message = |ok: bool, text: &str| if ok { String::new() } else { text.to_string() };
        Self {
            email: message(validate_email(&form.email), EMAIL_ERROR),
            password: message(validate_password(&form.password), PASSWORD_ERROR),
            role: message(form.role.is_some(), ROLE_ERROR),
        }
    }

    pub fn is_clear(&self) -> bool {
        self.email.is_empty() && self.password.is_empty() && self.role.is_empty()
    }
}

/// Field edits accepted by [`SignInStore::dispatch`].
#[derive(Clone, Debug, PartialEq)]
pub enum FormAction {
    SetEmail(String),
    SetPassword(String),
    SelectRole(Role),
    SetRememberDevice(bool),
    TogglePasswordVisibility,
}

/// Why [`SignInStore::begin_submit`] produced no request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitRejected {
    /// A login request is already pending.
    InFlight,
    /// At least one field failed validation; see [`SignInStore::errors`].
    Invalid,
}

/// How a submitted attempt ended.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Credentials stored and the browser sent to the role's dashboard.
    Redirected { role: Role, url: String },
    /// The attempt failed; `message` is shown under the password field.
    Failed { message: String },
    /// The service accepted the login but answered with a role this portal
    /// has no dashboard for. The token is stored; nothing else happens.
    UnrecognizedRole { role: String },
}

/// Write the token, then the user payload under its role's key.
///
/// Returns the parsed role, or `None` when the response names an unknown role
/// (in which case only the token is written). If the user payload cannot be
/// written the token is removed again, so a failed call leaves no credentials.
pub fn persist_login(
    response: &LoginResponse,
    storage: &impl KeyValueStore,
) -> Result<Option<Role>, StoreError> {
    storage.set(TOKEN_KEY, &response.token)?;
    let Some(role) = response.role() else {
        return Ok(None);
    };
    if let Err(e) = storage.set_json(role.storage_key(), &response.user) {
        if let Err(cleanup) = storage.remove(TOKEN_KEY) {
            tracing::warn!("Failed to remove token after a partial write: {}", cleanup);
        }
        return Err(e);
    }
    Ok(Some(role))
}

/// State store behind the sign-in form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignInStore {
    form: FormState,
    errors: FieldErrors,
}

impl SignInStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Apply a field edit.
    pub fn dispatch(&mut self, action: FormAction) {
        match action {
            FormAction::SetEmail(email) => self.form.email = email,
            FormAction::SetPassword(password) => self.form.password = password,
            FormAction::SelectRole(role) => self.form.role = Some(role),
            FormAction::SetRememberDevice(remember) => self.form.remember_device = remember,
            FormAction::TogglePasswordVisibility => {
                self.form.show_password = !self.form.show_password;
            }
        }
    }

    /// Validate the form and, if it passes, mark it as submitting and build
    /// the login request.
    pub fn begin_submit(&mut self) -> Result<LoginRequest, SubmitRejected> {
        if self.form.is_submitting {
            return Err(SubmitRejected::InFlight);
        }

        self.errors = FieldErrors::check(&self.form);
        match (self.errors.is_clear(), self.form.role) {
            (true, Some(role)) => {
                self.form.is_submitting = true;
                tracing::info!(role = %role, "Submitting sign-in");
                Ok(LoginRequest::new(
                    self.form.email.clone(),
                    self.form.password.clone(),
                    role,
                ))
            }
            _ => {
                self.form.is_submitting = false;
                tracing::debug!(errors = ?self.errors, "Sign-in blocked by validation");
                Err(SubmitRejected::Invalid)
            }
        }
    }

    /// Apply the login service's answer to a request from
    /// [`begin_submit`](Self::begin_submit).
    pub fn complete_submit(
        &mut self,
        result: Result<LoginResponse, LoginError>,
        storage: &impl KeyValueStore,
        navigator: &impl Navigator,
        config: &PortalConfig,
    ) -> SubmitOutcome {
        let response = match result {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Sign-in failed: {}", e);
                return self.fail(e.field_message().to_string());
            }
        };

        match persist_login(&response, storage) {
            Ok(Some(role)) => {
                let url = config.dashboard_url(role).to_string();
                tracing::info!(role = %role, "Signed in, redirecting to {}", url);
                navigator.redirect(&url);
                // The page is being replaced; the form stays locked meanwhile.
                SubmitOutcome::Redirected { role, url }
            }
            Ok(None) => {
                tracing::warn!(role = %response.role, "Login response has an unrecognized role");
                self.form.is_submitting = false;
                SubmitOutcome::UnrecognizedRole {
                    role: response.role,
                }
            }
            Err(e) => {
                tracing::error!("Failed to store login credentials: {}", e);
                self.fail(UNEXPECTED_ERROR.to_string())
            }
        }
    }

    fn fail(&mut self, message: String) -> SubmitOutcome {
        self.errors.password = message.clone();
        self.form.is_submitting = false;
        SubmitOutcome::Failed { message }
    }
}
