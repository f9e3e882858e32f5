//! # ShiftCal App
//!
//! Application layer - commands, wiring and the `shiftcal` command line.
//!
//! This crate contains:
//! - Commands (frontend → backend bridge returning view DTOs)
//! - Application context (dependency injection)
//! - Tracing setup and command logging helpers
//! - The command-line front end
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Frontends call commands only; they never touch ports directly

pub mod cli;
pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
