//! # ShiftCal Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The SQLite document store (r2d2 pool, JSON columns)
//! - The in-memory document store
//! - The static identity provider
//! - Configuration loading from environment and files
//!
//! ## Architecture
//! - Implements traits defined in `shiftcal-core`
//! - Contains all "impure" code (I/O, database, environment)

pub mod config;
pub mod database;
pub mod errors;
pub mod identity;
pub mod memory_store;

// Re-export commonly used items
pub use database::{DbManager, SqliteDocumentStore};
pub use errors::InfraError;
pub use identity::StaticIdentityProvider;
pub use memory_store::MemoryDocumentStore;
