//! Field validators for the sign-in form.

use std::sync::LazyLock;

use regex::Regex;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

pub const EMAIL_ERROR: &str = "Please enter a valid email address";
pub const PASSWORD_ERROR: &str = "Password must be at least 8 characters";
pub const ROLE_ERROR: &str = "Please select a role";

/// `local@domain.tld`: no whitespace, exactly one `@`, a dot somewhere after it.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Whether `email` looks like a deliverable address.
pub fn validate_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Whether `password` is long enough. Composition is scored separately and
/// never blocks submission.
pub fn validate_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        for email in [
            "patient@example.com",
            "doctor@healthconnect.com",
            "first.last+tag@sub.domain.org",
            "a@b.c",
        ] {
            assert!(validate_email(email), "{email} should be valid");
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "",
            "bad",
            "no-at.example.com",
            "user@localhost",
            "user@",
            "@example.com",
            "user@example.",
            "two@@example.com",
            "has space@example.com",
            "user@exa mple.com",
        ] {
            assert!(!validate_email(email), "{email:?} should be invalid");
        }
    }

    #[test]
    fn test_email_needs_dot_after_at() {
        // A dot in the local part alone is not enough
        assert!(!validate_email("first.last@localhost"));
        assert!(validate_email("first.last@localhost.dev"));
    }

    #[test]
    fn test_password_length_boundary() {
        assert!(!validate_password(""));
        assert!(!validate_password("short"));
        assert!(!validate_password("1234567"));
        assert!(validate_password("12345678"));
        assert!(validate_password("a much longer passphrase"));
    }

    #[test]
    fn test_password_counts_characters_not_bytes() {
        // 7 characters, 14 bytes
        assert!(!validate_password("ééééééé"));
        assert!(validate_password("éééééééé"));
    }

    #[test]
    fn test_password_has_no_composition_rule() {
        assert!(validate_password("aaaaaaaa"));
        assert!(validate_password("        "));
    }
}
