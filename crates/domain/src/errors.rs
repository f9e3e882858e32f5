//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for ShiftCal
///
/// Only contract violations (malformed keys, inverted ranges) and
/// infrastructure failures surface here. A shift record pointing at a deleted
/// shift type is not an error; it renders as "no shift type".
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ShiftCalError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Not signed in: {0}")]
    Unauthenticated(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ShiftCalError {
    /// Whether the failure came from the remote document store.
    ///
    /// Persistence failures are transient from the user's point of view: the
    /// local state stays ahead of the stored document until the next
    /// successful write or reload.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Persistence(_) | Self::Database(_))
    }
}

/// Result type alias for ShiftCal operations
pub type Result<T> = std::result::Result<T, ShiftCalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let err = ShiftCalError::InvalidRange("2024-03-17 is before 2024-03-15".into());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "InvalidRange");
        assert_eq!(json["message"], "2024-03-17 is before 2024-03-15");
    }

    #[test]
    fn persistence_errors_are_transient() {
        assert!(ShiftCalError::Persistence("write rejected".into()).is_transient());
        assert!(ShiftCalError::Database("busy".into()).is_transient());
        assert!(!ShiftCalError::InvalidInput("bad key".into()).is_transient());
    }
}
