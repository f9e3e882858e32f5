//! # ShiftCal Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Calendar grid generation and anchor navigation
//! - The shift assignment engine and the shift type registry
//! - Port interfaces (traits) for the document store and identity provider
//! - The application state reducer and the `ScheduleService` coordinator
//!
//! ## Architecture Principles
//! - Only depends on `shiftcal-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Engines are synchronous and pure; only `ScheduleService` awaits

pub mod calendar;
pub mod registry;
pub mod schedule;
pub mod session;

pub use calendar::{build_cells, CalendarCell, CalendarGrid};
pub use registry::{ShiftTypeRegistry, ShiftTypeUpdate};
pub use schedule::{DateRange, ShiftSchedule};
pub use session::ports::{DocumentStore, IdentityProvider};
pub use session::{Action, AppState, ScheduleService};
