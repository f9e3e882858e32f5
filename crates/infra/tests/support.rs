#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use shiftcal_infra::database::{DbManager, SqliteDocumentStore};
use tempfile::TempDir;

/// Temporary database wrapper that keeps the underlying file alive for the
/// duration of a test run.
pub struct TestDatabase {
    pub manager: Arc<DbManager>,
    temp_dir: TempDir,
}

impl TestDatabase {
    /// Create a new temporary database with the schema applied.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("temp dir should be created");
        let manager = open(temp_dir.path().join("shiftcal.db"));
        Self { manager, temp_dir }
    }

    pub fn path(&self) -> PathBuf {
        self.temp_dir.path().join("shiftcal.db")
    }

    pub fn store(&self) -> SqliteDocumentStore {
        SqliteDocumentStore::new(Arc::clone(&self.manager))
    }

    /// A second manager over the same file, as after a process restart.
    pub fn reopen(&self) -> Arc<DbManager> {
        open(self.path())
    }
}

impl Default for TestDatabase {
    fn default() -> Self {
        Self::new()
    }
}

fn open(path: PathBuf) -> Arc<DbManager> {
    let manager = DbManager::new(path, 2).expect("db manager should be created");
    manager.run_migrations().expect("schema migrations should apply");
    Arc::new(manager)
}
