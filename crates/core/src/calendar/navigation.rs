//! Anchor-date navigation
//!
//! Every transition returns a valid calendar date whose year a date key can
//! carry. Where the target month is shorter than the current day-of-month
//! the day is clamped to the month end.

use chrono::{Datelike, Days, Months, NaiveDate};
use shiftcal_domain::{
    is_keyable, Result, ShiftCalError, Step, ViewMode, MAX_KEY_YEAR, MIN_KEY_YEAR,
};

use super::grid::DAYS_PER_WEEK;

/// Move one month back or forward. At the edge of the key range the anchor
/// stays put.
pub fn shift_month(anchor: NaiveDate, step: Step) -> NaiveDate {
    let moved = match step {
        Step::Previous => anchor.checked_sub_months(Months::new(1)),
        Step::Next => anchor.checked_add_months(Months::new(1)),
    };
    moved.filter(|date| is_keyable(*date)).unwrap_or(anchor)
}

/// Move seven days back or forward.
pub fn shift_week(anchor: NaiveDate, step: Step) -> NaiveDate {
    let week = Days::new(DAYS_PER_WEEK as u64);
    let moved = match step {
        Step::Previous => anchor.checked_sub_days(week),
        Step::Next => anchor.checked_add_days(week),
    };
    moved.filter(|date| is_keyable(*date)).unwrap_or(anchor)
}

/// Previous/next step in the unit of the current layout.
pub fn navigate(anchor: NaiveDate, mode: ViewMode, step: Step) -> NaiveDate {
    match mode {
        ViewMode::Month => shift_month(anchor, step),
        ViewMode::Week => shift_week(anchor, step),
    }
}

/// Jump back to today.
pub fn go_to_today(today: NaiveDate) -> NaiveDate {
    today
}

/// Show `month` (1-based) of the anchor's year, anchored on its first day.
pub fn select_month(anchor: NaiveDate, month: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(anchor.year(), month, 1)
        .ok_or_else(|| ShiftCalError::InvalidInput(format!("month must be 1-12, got {month}")))
}

/// Show the anchor's month and day in `year`; 29 February becomes the 28th
/// in a common year.
pub fn select_year(anchor: NaiveDate, year: i32) -> Result<NaiveDate> {
    let out_of_range = || {
        ShiftCalError::InvalidInput(format!(
            "year must be {MIN_KEY_YEAR}-{MAX_KEY_YEAR}, got {year}"
        ))
    };
    if !(MIN_KEY_YEAR..=MAX_KEY_YEAR).contains(&year) {
        return Err(out_of_range());
    }
    let first = NaiveDate::from_ymd_opt(year, anchor.month(), 1).ok_or_else(out_of_range)?;

    let month_end = first
        .iter_days()
        .take_while(|day| day.month() == first.month())
        .last()
        .unwrap_or(first);

    Ok(first.with_day(anchor.day()).unwrap_or(month_end))
}
