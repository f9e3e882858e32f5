//! Inclusive, validated date ranges

use chrono::NaiveDate;
use shiftcal_domain::{ensure_keyable, Result, ShiftCalError};

/// Inclusive `[start, end]` range of calendar days with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build a range; a missing `end` means the single day `start`.
    ///
    /// Fails fast with [`ShiftCalError::InvalidRange`] when `end < start`,
    /// and with `InvalidInput` when either end has no date key.
    pub fn new(start: NaiveDate, end: Option<NaiveDate>) -> Result<Self> {
        let start = ensure_keyable(start)?;
        let end = ensure_keyable(end.unwrap_or(start))?;
        if end < start {
            return Err(ShiftCalError::InvalidRange(format!(
                "end date {end} is before start date {start}"
            )));
        }
        Ok(Self { start, end })
    }

    /// The single day `date`.
    pub fn single(date: NaiveDate) -> Self {
        Self { start: date, end: date }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days covered (at least 1).
    pub fn len(&self) -> usize {
        usize::try_from(self.end.signed_duration_since(self.start).num_days()).unwrap_or(0) + 1
    }

    /// Always `false`; a valid range covers at least one day.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Days in ascending order, stepping one calendar day at a time.
    ///
    /// Bounded by [`DateRange::len`], so iteration always terminates.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take(self.len())
    }
}
