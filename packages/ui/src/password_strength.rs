//! Advisory password strength meter.

use dioxus::prelude::*;

use crate::validation::MIN_PASSWORD_LEN;

/// Highest score a password can reach.
pub const MAX_STRENGTH: u8 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    pub fn label(self) -> &'static str {
        match self {
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Medium => "Medium",
            StrengthLevel::Strong => "Strong",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            StrengthLevel::Weak => "red",
            StrengthLevel::Medium => "yellow",
            StrengthLevel::Strong => "green",
        }
    }
}

/// Number of composition conditions a password satisfies, 0 to 5.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Strength(u8);

impl Strength {
    /// Score `password`: one point each for reaching the minimum length and for
    /// containing an uppercase letter, a lowercase letter, a digit, and a
    /// character outside `[A-Za-z0-9]`.
    pub fn of(password: &str) -> Self {
        let checks = [
            password.chars().count() >= MIN_PASSWORD_LEN,
            password.chars().any(|c| c.is_ascii_uppercase()),
            password.chars().any(|c| c.is_ascii_lowercase()),
            password.chars().any(|c| c.is_ascii_digit()),
            password.chars().any(|c| !c.is_ascii_alphanumeric()),
        ];
        Self(checks.iter().filter(|&&passed| passed).count() as u8)
    }

    pub fn score(self) -> u8 {
        self.0
    }

    pub fn level(self) -> StrengthLevel {
        match self.0 {
            0..=2 => StrengthLevel::Weak,
            3 => StrengthLevel::Medium,
            _ => StrengthLevel::Strong,
        }
    }

    /// Width of the meter fill, as a percentage.
    pub fn fill_percent(self) -> u8 {
        self.0 * 100 / MAX_STRENGTH
    }
}

/// Strength bar and label for the password being typed.
#[component]
pub fn PasswordStrength(password: String) -> Element {
    let strength = Strength::of(&password);
    let level = strength.level();
    let label = level.label();
    let color = level.color();
    let width = strength.fill_percent();

    rsx! {
        div {
            class: "strength",
            div {
                class: "strength-track",
                div {
                    class: "strength-fill strength-fill--{color}",
                    style: "width: {width}%;",
                }
            }
            p {
                class: "strength-label strength-label--{color}",
                "Password Strength: {label}"
            }
        }
    }
}
