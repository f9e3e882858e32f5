//! Commands - frontend to backend bridge
//!
//! Each command runs through [`crate::utils::command_helpers::execute_command`]
//! and returns a serializable DTO.

mod calendar;
mod session;
mod shift_types;
mod shifts;

pub use calendar::*;
pub use session::*;
pub use shift_types::*;
pub use shifts::*;
