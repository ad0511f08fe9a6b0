//! # Portal configuration — external endpoints
//!
//! The sign-in portal talks to four external origins: the login service, the two
//! role dashboards, and the registration site. [`PortalConfig`] collects them.
//! Every field defaults to the production address compiled into the binary, so
//! `PortalConfig::default()` is the configuration the web build runs with.
//!
//! Tests and alternative deployments build their own value, usually with
//! [`PortalConfig::with_login_url`].

use crate::Role;

pub const DEFAULT_LOGIN_URL: &str = "https://medical-backend-l140.onrender.com/api/login";
pub const DEFAULT_DOCTOR_DASHBOARD_URL: &str = "https://docotr-dashboard.vercel.app/";
pub const DEFAULT_PATIENT_DASHBOARD_URL: &str = "https://patient-dashboard-pink.vercel.app/";
pub const DEFAULT_REGISTRATION_URL: &str = "https://medical-webpage-signup-aafo.vercel.app/";

/// External endpoints used by the sign-in portal.
#[derive(Clone, Debug, PartialEq)]
pub struct PortalConfig {
    /// Login endpoint receiving the `{email, password, role}` POST.
    pub login_url: String,
    pub doctor_dashboard_url: String,
    pub patient_dashboard_url: String,
    /// Target of the "New User Registration" link.
    pub registration_url: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            login_url: DEFAULT_LOGIN_URL.to_string(),
            doctor_dashboard_url: DEFAULT_DOCTOR_DASHBOARD_URL.to_string(),
            patient_dashboard_url: DEFAULT_PATIENT_DASHBOARD_URL.to_string(),
            registration_url: DEFAULT_REGISTRATION_URL.to_string(),
        }
    }
}

impl PortalConfig {
    /// Builder method to point the form at another login endpoint.
    pub fn with_login_url(mut self, url: impl Into<String>) -> Self {
        self.login_url = url.into();
        self
    }

    /// Dashboard a user of `role` is sent to after signing in.
    pub fn dashboard_url(&self, role: Role) -> &str {
        match role {
            Role::Doctor => &self.doctor_dashboard_url,
            Role::Patient => &self.patient_dashboard_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PortalConfig::default();
        assert_eq!(config.login_url, DEFAULT_LOGIN_URL);
        assert_eq!(config.dashboard_url(Role::Doctor), DEFAULT_DOCTOR_DASHBOARD_URL);
        assert_eq!(config.dashboard_url(Role::Patient), DEFAULT_PATIENT_DASHBOARD_URL);
        assert_eq!(config.registration_url, DEFAULT_REGISTRATION_URL);
    }

    #[test]
    fn test_with_login_url() {
        let config = PortalConfig::default().with_login_url("http://127.0.0.1:9000/login");
        assert_eq!(config.login_url, "http://127.0.0.1:9000/login");
        assert_eq!(config.registration_url, DEFAULT_REGISTRATION_URL);
    }
}
