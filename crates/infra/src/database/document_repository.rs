//! SQLite-backed user document store.
//!
//! Implements the `DocumentStore` port. Each mapping is stored as a JSON
//! column so the persisted shape matches the document exchanged with the
//! core. All database operations run in `spawn_blocking` to avoid blocking
//! the async runtime.

use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension};
use serde::de::DeserializeOwned;
use shiftcal_core::DocumentStore;
use shiftcal_domain::{
    check_shift_keys, DocumentPatch, Result as DomainResult, ShiftCalError, ShiftMap, UserDocument,
    UserId,
};
use tokio::task;
use tracing::debug;

use super::manager::{map_sql_error, DbConnection, DbManager};
use crate::errors::InfraError;

/// SQLite-backed document store with merge-upsert writes.
pub struct SqliteDocumentStore {
    db: Arc<DbManager>,
}

impl SqliteDocumentStore {
    /// Create a new store with the given database manager.
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }

    /// Read the stored document for `user`.
    pub async fn read(&self, user: &UserId) -> DomainResult<Option<UserDocument>> {
        let db = Arc::clone(&self.db);
        let user = user.clone();

        task::spawn_blocking(move || -> DomainResult<Option<UserDocument>> {
            let conn = db.get_connection()?;
            query_document(&conn, &user)
        })
        .await
        .map_err(map_join_error)?
    }

    /// Merge `patch` into the stored document for `user`.
    pub async fn write(&self, user: &UserId, patch: DocumentPatch) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let user = user.clone();

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            upsert_document(&conn, &user, &patch)
        })
        .await
        .map_err(map_join_error)?
    }
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    async fn read(&self, user: &UserId) -> DomainResult<Option<UserDocument>> {
        Self::read(self, user).await
    }

    async fn write(&self, user: &UserId, patch: DocumentPatch) -> DomainResult<()> {
        Self::write(self, user, patch).await
    }
}

// ============================================================================
// Synchronous SQL Operations (called inside spawn_blocking)
// ============================================================================

fn query_document(conn: &DbConnection, user: &UserId) -> DomainResult<Option<UserDocument>> {
    let row = conn
        .query_row(
            "SELECT shift_types, shifts FROM user_documents WHERE user_id = ?1",
            params![user.as_str()],
            |row| Ok((row.get::<_, Option<String>>(0)?, row.get::<_, Option<String>>(1)?)),
        )
        .optional()
        .map_err(map_sql_error)?;

    let Some((shift_types, shifts)) = row else {
        debug!(user = %user, "no stored document");
        return Ok(None);
    };

    let shifts: Option<ShiftMap> = decode_column(shifts)?;
    if let Some(shifts) = &shifts {
        check_shift_keys(shifts).map_err(|e| {
            ShiftCalError::Persistence(format!("stored shifts for {user} are inconsistent: {e}"))
        })?;
    }

    Ok(Some(UserDocument { shift_types: decode_column(shift_types)?, shifts }))
}

/// Upsert where a NULL column in the patch keeps the stored value.
fn upsert_document(conn: &DbConnection, user: &UserId, patch: &DocumentPatch) -> DomainResult<()> {
    let shift_types = encode_column(patch.shift_types.as_ref())?;
    let shifts = encode_column(patch.shifts.as_ref())?;
    let now = chrono::Utc::now().timestamp();

    conn.execute(
        "INSERT INTO user_documents (user_id, shift_types, shifts, updated_at)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(user_id) DO UPDATE SET
            shift_types = COALESCE(excluded.shift_types, user_documents.shift_types),
            shifts = COALESCE(excluded.shifts, user_documents.shifts),
            updated_at = excluded.updated_at",
        params![user.as_str(), shift_types, shifts, now],
    )
    .map_err(map_sql_error)?;

    debug!(
        user = %user,
        shift_types = patch.shift_types.is_some(),
        shifts = patch.shifts.is_some(),
        "document upserted"
    );
    Ok(())
}

fn encode_column<T: serde::Serialize>(value: Option<&T>) -> DomainResult<Option<String>> {
    value
        .map(serde_json::to_string)
        .transpose()
        .map_err(|e| ShiftCalError::from(InfraError::from(e)))
}

fn decode_column<T: DeserializeOwned>(raw: Option<String>) -> DomainResult<Option<T>> {
    raw.as_deref()
        .map(serde_json::from_str)
        .transpose()
        .map_err(|e| ShiftCalError::from(InfraError::from(e)))
}

/// Map JoinError from spawn_blocking to ShiftCalError.
fn map_join_error(err: task::JoinError) -> ShiftCalError {
    ShiftCalError::from(InfraError::from(err))
}

// ============================================================================
// Tests
// ============================================================================
