//! Date grid generator
//!
//! Produces the ordered cell dates for a month or week layout. Weeks start on
//! Monday. Month grids pad with trailing days of the previous month and
//! leading days of the next month so every row is full.

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use shiftcal_domain::ViewMode;

/// Cells in one grid row.
pub const DAYS_PER_WEEK: usize = 7;

/// Days between the Monday on or before `date` and `date` (Monday = 0).
///
/// Same as `(weekday + 6) mod 7` with weekday counted Sunday = 0.
pub fn monday_offset(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_monday()
}

fn first_of_month(anchor: NaiveDate) -> NaiveDate {
    anchor.with_day(1).unwrap_or(anchor)
}

fn days_back(date: NaiveDate, count: u32) -> NaiveDate {
    date.checked_sub_days(Days::new(u64::from(count))).unwrap_or(date)
}

/// Cell dates for the month containing `anchor`.
///
/// Only the anchor's year and month matter. The result always holds the whole
/// month, starts on a Monday and has a length that is a multiple of seven.
pub fn month_days(anchor: NaiveDate) -> Vec<NaiveDate> {
    let first = first_of_month(anchor);
    let leading = monday_offset(first);
    let month_len = first.iter_days().take_while(|day| day.month() == first.month()).count();

    let filled = leading as usize + month_len;
    let total = filled.div_ceil(DAYS_PER_WEEK) * DAYS_PER_WEEK;

    days_back(first, leading).iter_days().take(total).collect()
}

/// Seven consecutive dates starting at the Monday on or before `anchor`.
pub fn week_days(anchor: NaiveDate) -> Vec<NaiveDate> {
    days_back(anchor, monday_offset(anchor)).iter_days().take(DAYS_PER_WEEK).collect()
}

/// Cell dates for `anchor` in the given layout.
pub fn grid_days(anchor: NaiveDate, mode: ViewMode) -> Vec<NaiveDate> {
    match mode {
        ViewMode::Month => month_days(anchor),
        ViewMode::Week => week_days(anchor),
    }
}

/// A generated grid together with the inputs that produced it.
///
/// Regenerating from the same anchor and mode yields the same days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarGrid {
    anchor: NaiveDate,
    mode: ViewMode,
    days: Vec<NaiveDate>,
}

impl CalendarGrid {
    pub fn new(anchor: NaiveDate, mode: ViewMode) -> Self {
        Self { anchor, mode, days: grid_days(anchor, mode) }
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    /// Rows of seven days.
    pub fn weeks(&self) -> impl Iterator<Item = &[NaiveDate]> {
        self.days.chunks(DAYS_PER_WEEK)
    }

    pub fn week_count(&self) -> usize {
        self.days.len() / DAYS_PER_WEEK
    }

    /// Whether `date` falls in the anchor's month (adjacent-month padding
    /// cells return `false`).
    pub fn in_anchor_month(&self, date: NaiveDate) -> bool {
        date.year() == self.anchor.year() && date.month() == self.anchor.month()
    }

    /// First and last date shown.
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((*self.days.first()?, *self.days.last()?))
    }
}
