use std::fmt;

use serde::{Deserialize, Serialize};

/// Account category chosen on the sign-in form.
///
/// Serialises as `"patient"` / `"doctor"`, which is also the local storage key
/// the user payload is written under after a successful login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Doctor,
}

impl Role {
    /// Both roles, in display order.
    pub const ALL: [Role; 2] = [Role::Patient, Role::Doctor];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Doctor => "doctor",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Patient => "Patient",
            Role::Doctor => "Doctor",
        }
    }

    /// Local storage key for the user payload of this role.
    pub fn storage_key(self) -> &'static str {
        self.as_str()
    }

    /// Parse the wire identifier. Anything other than the two known roles is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "patient" => Some(Role::Patient),
            "doctor" => Some(Role::Doctor),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_string(&Role::Doctor).unwrap(), "\"doctor\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"patient\"").unwrap(),
            Role::Patient
        );
        assert!(serde_json::from_str::<Role>("\"admin\"").is_err());
    }

    #[test]
    fn test_parse() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(role));
            assert_eq!(role.to_string(), role.as_str());
        }
        assert_eq!(Role::parse("Doctor"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn test_storage_key_matches_wire_name() {
        assert_eq!(Role::Doctor.storage_key(), "doctor");
        assert_eq!(Role::Patient.storage_key(), "patient");
    }
}
