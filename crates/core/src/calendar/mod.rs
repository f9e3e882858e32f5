//! Calendar grid generation, anchor navigation and render cells

pub mod cells;
pub mod grid;
pub mod navigation;

pub use cells::{build_cells, CalendarCell};
pub use grid::{grid_days, month_days, monday_offset, week_days, CalendarGrid, DAYS_PER_WEEK};
pub use navigation::{go_to_today, navigate, select_month, select_year, shift_month, shift_week};
