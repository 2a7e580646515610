//! Expense record identifiers
//!
//! IDs are short opaque strings: the first 8 hex characters of a random
//! UUIDv4. Uniqueness is best-effort; collisions are not actively checked.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A short opaque identifier for an expense record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    /// Generate a new random ID (8 hex chars of a UUIDv4)
    pub fn new() -> Self {
        let hex = Uuid::new_v4().simple().to_string();
        Self(hex[..8].to_string())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_is_eight_hex_chars() {
        let id = ExpenseId::new();
        assert_eq!(id.as_str().len(), 8);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_ids_are_distinct() {
        let a = ExpenseId::new();
        let b = ExpenseId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id: ExpenseId = serde_json::from_str("\"deadbeef\"").unwrap();
        assert_eq!(id.as_str(), "deadbeef");

        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"deadbeef\"");
    }
}
