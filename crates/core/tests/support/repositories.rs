//! Mock port implementations for testing
//!
//! In-memory mocks for the document store and identity provider, enabling
//! deterministic coordinator tests without a database.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use shiftcal_core::{DocumentStore, IdentityProvider};
use shiftcal_domain::{
    AuthState, DocumentPatch, Result as DomainResult, ShiftCalError, UserDocument, UserId,
};

/// In-memory mock for `DocumentStore`.
///
/// Applies merge writes to a map of documents, records every patch and can
/// be switched into a failing mode to exercise optimistic updates.
#[derive(Default, Clone)]
pub struct MockDocumentStore {
    documents: Arc<Mutex<HashMap<UserId, UserDocument>>>,
    writes: Arc<Mutex<Vec<DocumentPatch>>>,
    fail_writes: Arc<AtomicBool>,
    reads: Arc<AtomicUsize>,
}

impl MockDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a stored document for `user`.
    pub fn with_document(self, user: &UserId, document: UserDocument) -> Self {
        self.documents.lock().insert(user.clone(), document);
        self
    }

    /// Make every later write fail with a persistence error.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn document(&self, user: &UserId) -> Option<UserDocument> {
        self.documents.lock().get(user).cloned()
    }

    pub fn writes(&self) -> Vec<DocumentPatch> {
        self.writes.lock().clone()
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentStore for MockDocumentStore {
    async fn read(&self, user: &UserId) -> DomainResult<Option<UserDocument>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.documents.lock().get(user).cloned())
    }

    async fn write(&self, user: &UserId, patch: DocumentPatch) -> DomainResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(ShiftCalError::Persistence("mock store rejected the write".into()));
        }
        self.writes.lock().push(patch.clone());
        self.documents.lock().entry(user.clone()).or_default().merge(patch);
        Ok(())
    }
}

/// Identity provider returning a fixed, switchable state.
#[derive(Clone)]
pub struct MockIdentityProvider {
    state: Arc<Mutex<AuthState>>,
}

impl MockIdentityProvider {
    pub fn signed_in(user: &UserId) -> Self {
        Self { state: Arc::new(Mutex::new(AuthState::SignedIn(user.clone()))) }
    }

    pub fn with_state(state: AuthState) -> Self {
        Self { state: Arc::new(Mutex::new(state)) }
    }

    pub fn set(&self, state: AuthState) {
        *self.state.lock() = state;
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn current(&self) -> DomainResult<AuthState> {
        Ok(self.state.lock().clone())
    }

    async fn sign_out(&self) -> DomainResult<()> {
        *self.state.lock() = AuthState::SignedOut;
        Ok(())
    }
}
