//! Domain utilities

pub mod calendar_labels;
