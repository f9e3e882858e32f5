//! # ShiftCal Domain
//!
//! Business domain types and models for ShiftCal.
//!
//! This crate contains:
//! - Shift records, shift types and the per-user stored document
//! - Canonical date keys and `HH:MM` clock times
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Palette, default shift types and calendar labels
//!
//! ## Architecture
//! - No dependencies on other ShiftCal crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::calendar_labels::{month_name, SHORT_WEEK_DAYS, WEEK_DAYS};
