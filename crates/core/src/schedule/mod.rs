//! Shift assignment engine

pub mod assignment;
pub mod range;

pub use assignment::ShiftSchedule;
pub use range::DateRange;
