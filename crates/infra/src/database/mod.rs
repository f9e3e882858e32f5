//! Database implementations

pub mod document_repository;
pub mod manager;

pub use document_repository::SqliteDocumentStore;
pub use manager::{DbConnection, DbManager};
