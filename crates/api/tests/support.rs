//! Shared helpers for app-level integration tests

#![allow(dead_code)]

use shiftcal_domain::{Config, IdentityConfig, StoreBackend, StoreConfig};
use shiftcal_lib::context::AppContext;
use tempfile::TempDir;

pub const TEST_USER: &str = "uid-test";

/// Config using the in-memory store, signed in as `user`.
pub fn memory_config(user: Option<&str>) -> Config {
    Config {
        store: StoreConfig { backend: StoreBackend::Memory, ..StoreConfig::default() },
        identity: IdentityConfig { user_id: user.map(str::to_string) },
        ..Config::default()
    }
}

/// Config using a SQLite file inside `dir`, signed in as `user`.
pub fn sqlite_config(dir: &TempDir, user: Option<&str>) -> Config {
    Config {
        store: StoreConfig {
            backend: StoreBackend::Sqlite,
            path: dir.path().join("shiftcal.db").to_string_lossy().to_string(),
            pool_size: 2,
        },
        identity: IdentityConfig { user_id: user.map(str::to_string) },
        ..Config::default()
    }
}

/// Signed-in context over a fresh in-memory store.
pub async fn memory_context() -> AppContext {
    AppContext::new_with_config(memory_config(Some(TEST_USER)))
        .await
        .expect("failed to create in-memory context")
}
