//! This crate contains all shared UI for the sign-in portal.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod validation;
pub use validation::{validate_email, validate_password};

mod password_strength;
pub use password_strength::{PasswordStrength, Strength, StrengthLevel};

mod role_selector;
pub use role_selector::RoleSelector;

pub mod navigation;
pub use navigation::{BrowserNavigator, Navigator};

mod platform;
pub use platform::make_store;

pub mod sign_in;
pub use sign_in::{FieldErrors, FormAction, FormState, SignInForm, SignInStore, SubmitOutcome};

mod app_shell;
pub use app_shell::{use_portal_config, AppShell};
