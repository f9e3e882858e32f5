//! Static identity provider
//!
//! Credential handling happens outside this application. The provider is
//! seeded with an already authenticated user id (from configuration or the
//! command line) and only tracks whether that session has been ended.

use async_trait::async_trait;
use parking_lot::RwLock;
use shiftcal_core::IdentityProvider;
use shiftcal_domain::{AuthState, Result as DomainResult, UserId};
use tracing::info;

/// Identity provider backed by a fixed user id.
#[derive(Debug)]
pub struct StaticIdentityProvider {
    state: RwLock<AuthState>,
}

impl StaticIdentityProvider {
    /// Provider for `user`, or signed out when `None`.
    pub fn new(user: Option<UserId>) -> Self {
        let state = user.map_or(AuthState::SignedOut, AuthState::SignedIn);
        Self { state: RwLock::new(state) }
    }

    /// Provider built from a raw configured id; blank ids mean signed out.
    pub fn from_config(user_id: Option<&str>) -> Self {
        Self::new(user_id.and_then(|raw| UserId::new(raw).ok()))
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn current(&self) -> DomainResult<AuthState> {
        Ok(self.state.read().clone())
    }

    async fn sign_out(&self) -> DomainResult<()> {
        let mut state = self.state.write();
        if let Some(user) = state.user() {
            info!(user = %user, "session ended");
        }
        *state = AuthState::SignedOut;
        Ok(())
    }
}
