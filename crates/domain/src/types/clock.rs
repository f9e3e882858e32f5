//! Wall-clock `HH:MM` times used for shift start and end

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ShiftCalError};

/// A 24-hour `HH:MM` time of day.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Build from hour and minute, `None` when out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Parse a strict `HH:MM` string (two digits each, 00–23 and 00–59).
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = || ShiftCalError::InvalidInput(format!("invalid HH:MM time: {raw:?}"));

        let (hours, minutes) = raw.split_once(':').ok_or_else(invalid)?;
        let two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
        if !two_digits(hours) || !two_digits(minutes) {
            return Err(invalid());
        }

        let hour = hours.parse::<u32>().map_err(|_| invalid())?;
        let minute = minutes.parse::<u32>().map_err(|_| invalid())?;
        Self::from_hm(hour, minute).ok_or_else(invalid)
    }

    /// Underlying time value.
    pub fn time(self) -> NaiveTime {
        self.0
    }

    /// A shift ending at or before its start runs past midnight.
    ///
    /// Such ranges are legal and are never reordered.
    pub fn is_overnight(start: Self, end: Self) -> bool {
        end <= start
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0.hour(), self.0.minute())
    }
}

impl FromStr for ClockTime {
    type Err = ShiftCalError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ShiftCalError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}
