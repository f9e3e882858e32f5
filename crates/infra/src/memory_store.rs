//! In-memory document store
//!
//! Process-local `DocumentStore` used by the memory backend and by tests.
//! Documents live in a `DashMap` keyed by user id, so concurrent reads and
//! writes for different users never contend.

use async_trait::async_trait;
use dashmap::DashMap;
use shiftcal_core::DocumentStore;
use shiftcal_domain::{DocumentPatch, Result as DomainResult, UserDocument, UserId};
use tracing::debug;

/// Volatile document store; contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    documents: DashMap<UserId, UserDocument>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with a stored document.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn read(&self, user: &UserId) -> DomainResult<Option<UserDocument>> {
        Ok(self.documents.get(user).map(|entry| entry.value().clone()))
    }

    async fn write(&self, user: &UserId, patch: DocumentPatch) -> DomainResult<()> {
        self.documents.entry(user.clone()).or_default().merge(patch);
        debug!(user = %user, "document merged in memory");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use shiftcal_domain::constants::default_shift_types;
    use shiftcal_domain::ShiftMap;

    use super::*;

    #[tokio::test]
    async fn merge_write_keeps_absent_fields() {
        let store = MemoryDocumentStore::new();
        let user = UserId::new("uid-mem").unwrap();

        store.write(&user, DocumentPatch::shift_types(default_shift_types())).await.unwrap();
        store.write(&user, DocumentPatch::shifts(ShiftMap::new())).await.unwrap();

        let document = store.read(&user).await.unwrap().unwrap();
        assert_eq!(document.shift_types, Some(default_shift_types()));
        assert_eq!(document.shifts, Some(ShiftMap::new()));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn unknown_user_reads_none() {
        let store = MemoryDocumentStore::new();
        assert!(store.read(&UserId::new("nobody").unwrap()).await.unwrap().is_none());
        assert!(store.is_empty());
    }
}
