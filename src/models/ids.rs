//! Strongly-typed ID wrappers for capitals and expenses
//!
//! Using newtype wrappers prevents accidentally passing an expense ID where a
//! capital ID is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parse an ID from a string
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                s.parse()
            }

            /// Check whether the short display form (or the full UUID)
            /// starts with the given prefix
            pub fn matches_prefix(&self, prefix: &str) -> bool {
                let prefix = prefix.trim();
                if prefix.is_empty() {
                    return false;
                }
                let full = self.0.to_string();
                let bare = prefix.strip_prefix($display_prefix).unwrap_or(prefix);
                !bare.is_empty() && full.starts_with(&bare.to_lowercase())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                if let Ok(uuid) = Uuid::parse_str(s) {
                    return Ok(Self(uuid));
                }
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(CapitalId, "cap-");
define_id!(ExpenseId, "exp-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = CapitalId::new();
        let display = id.to_string();
        assert!(display.starts_with("cap-"));
        assert_eq!(display.len(), 12);

        let id = ExpenseId::new();
        assert!(id.to_string().starts_with("exp-"));
    }

    #[test]
    fn test_id_parse_full_and_prefixed() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id = CapitalId::parse(uuid_str).unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);

        let prefixed: CapitalId = format!("cap-{}", uuid_str).parse().unwrap();
        assert_eq!(prefixed, id);

        assert!(ExpenseId::parse("exp-550e8400").is_err());
    }

    #[test]
    fn test_matches_prefix() {
        let id = ExpenseId::from(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap());
        assert!(id.matches_prefix("exp-550e8400"));
        assert!(id.matches_prefix("550E84"));
        assert!(!id.matches_prefix("exp-"));
        assert!(!id.matches_prefix(""));
        assert!(!id.matches_prefix("exp-123"));
    }

    #[test]
    fn test_id_serialization() {
        let id = CapitalId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: CapitalId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
