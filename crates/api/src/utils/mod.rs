//! Cross-cutting helpers for the command layer

pub mod command_helpers;
pub mod logging;
