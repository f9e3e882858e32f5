//! Canonical `YYYY-MM-DD` date keys
//!
//! Keys are derived from calendar fields (year, month, day-of-month) and never
//! from a UTC timestamp conversion, so a date picked late in the evening in a
//! zone behind UTC keeps its calendar day. Dates are carried as
//! [`NaiveDate`], a date-only value, so adding days and comparing never
//! crosses a daylight-saving or UTC-parsing boundary.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ShiftCalError};

/// Length of a canonical key, `YYYY-MM-DD`.
const DATE_KEY_LEN: usize = 10;

/// First year a key can name.
pub const MIN_KEY_YEAR: i32 = 0;

/// Last year a key can name.
pub const MAX_KEY_YEAR: i32 = 9999;

/// Canonical identifier of one calendar day.
///
/// Only dates in years [`MIN_KEY_YEAR`]..=[`MAX_KEY_YEAR`] have a key that
/// [`DateKey::parse`] reads back; callers building keys from arbitrary dates
/// check them with [`ensure_keyable`] first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Build the key for a calendar date.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The calendar date this key names.
    pub fn date(self) -> NaiveDate {
        self.0
    }

    /// Parse a strict `YYYY-MM-DD` key.
    ///
    /// Rejects anything that is not exactly four year digits, two month
    /// digits and two day digits separated by `-`, as well as dates that do
    /// not exist (e.g. `2023-02-29`).
    pub fn parse(raw: &str) -> Result<Self> {
        let bytes = raw.as_bytes();
        let well_formed = bytes.len() == DATE_KEY_LEN
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(idx, byte)| idx == 4 || idx == 7 || byte.is_ascii_digit());

        if !well_formed {
            return Err(ShiftCalError::InvalidInput(format!("malformed date key: {raw:?}")));
        }

        let field = |range: std::ops::Range<usize>| -> Result<u32> {
            raw[range]
                .parse::<u32>()
                .map_err(|e| ShiftCalError::InvalidInput(format!("malformed date key {raw:?}: {e}")))
        };

        let year = i32::try_from(field(0..4)?)
            .map_err(|e| ShiftCalError::InvalidInput(format!("malformed date key {raw:?}: {e}")))?;
        let month = field(5..7)?;
        let day = field(8..10)?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| ShiftCalError::InvalidInput(format!("date key {raw:?} is not a real date")))
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.0.year(), self.0.month(), self.0.day())
    }
}

impl FromStr for DateKey {
    type Err = ShiftCalError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DateKey {
    type Error = ShiftCalError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<DateKey> for String {
    fn from(value: DateKey) -> Self {
        value.to_string()
    }
}

impl From<NaiveDate> for DateKey {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

/// Key for a calendar date.
pub fn to_date_key(date: NaiveDate) -> DateKey {
    DateKey::new(date)
}

/// Calendar date named by a key. Round-trips exactly with [`to_date_key`].
pub fn from_date_key(key: &DateKey) -> NaiveDate {
    key.date()
}

/// Whether `date` lies in the years a key can carry.
pub fn is_keyable(date: NaiveDate) -> bool {
    (MIN_KEY_YEAR..=MAX_KEY_YEAR).contains(&date.year())
}

/// `date`, or `InvalidInput` when its year is outside
/// [`MIN_KEY_YEAR`]..=[`MAX_KEY_YEAR`].
pub fn ensure_keyable(date: NaiveDate) -> Result<NaiveDate> {
    if is_keyable(date) {
        Ok(date)
    } else {
        Err(ShiftCalError::InvalidInput(format!(
            "date {date} is outside years {MIN_KEY_YEAR:04}-{MAX_KEY_YEAR}"
        )))
    }
}

/// Parse a raw `YYYY-MM-DD` string straight into a date.
pub fn parse_date_key(raw: &str) -> Result<NaiveDate> {
    DateKey::parse(raw).map(DateKey::date)
}

/// Key for an instant, read from its own zone's calendar fields.
///
/// For a `DateTime<Local>` this is the user's wall-clock day, not the UTC day.
pub fn date_key_from_local<Tz: TimeZone>(instant: &DateTime<Tz>) -> DateKey {
    DateKey::new(instant.date_naive())
}

/// Today's date on the local wall clock.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Anchor a date at noon, for callers that need a time-bearing value.
pub fn at_local_noon(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default())
}
