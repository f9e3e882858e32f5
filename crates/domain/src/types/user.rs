//! Authenticated user identity
//!
//! The identifier is opaque: it scopes the stored document and is never
//! interpreted.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ShiftCalError};

/// Opaque authenticated-user identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Wrap a non-blank identifier.
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ShiftCalError::InvalidInput("user id must not be blank".into()));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the identity provider currently knows about the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    /// Identity not resolved yet.
    Loading,
    SignedOut,
    SignedIn(UserId),
}

impl AuthState {
    pub fn user(&self) -> Option<&UserId> {
        match self {
            Self::SignedIn(user) => Some(user),
            Self::Loading | Self::SignedOut => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_ids_are_rejected() {
        assert!(UserId::new("").is_err());
        assert!(UserId::new("   ").is_err());
        assert_eq!(UserId::new("uid-42").unwrap().as_str(), "uid-42");
    }

    #[test]
    fn only_signed_in_state_has_a_user() {
        let user = UserId::new("uid-42").unwrap();
        assert_eq!(AuthState::SignedIn(user.clone()).user(), Some(&user));
        assert_eq!(AuthState::Loading.user(), None);
        assert_eq!(AuthState::SignedOut.user(), None);
    }
}
