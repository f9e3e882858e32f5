//! Port interfaces for session persistence and identity
//!
//! These traits define the boundaries between the schedule coordinator and
//! infrastructure implementations.

use async_trait::async_trait;
use shiftcal_domain::{AuthState, DocumentPatch, Result, UserDocument, UserId};

/// Per-user document storage.
///
/// One document per user, holding the shift-type mapping and the shift
/// mapping. Writes use merge semantics: fields present in the patch replace
/// the stored field, absent fields are left as stored.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read the user's document, `None` when it was never written.
    async fn read(&self, user: &UserId) -> Result<Option<UserDocument>>;

    /// Merge `patch` into the user's document, creating it when absent.
    async fn write(&self, user: &UserId, patch: DocumentPatch) -> Result<()>;
}

/// Source of the authenticated user.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Current session state.
    async fn current(&self) -> Result<AuthState>;

    /// End the session. Later calls to [`IdentityProvider::current`] report
    /// [`AuthState::SignedOut`].
    async fn sign_out(&self) -> Result<()>;
}
