//! Single-field edits of a shift type

use std::str::FromStr;

use shiftcal_domain::constants::PaletteEntry;
use shiftcal_domain::{ClockTime, Result, ShiftCalError, ShiftType};

use super::color::palette_entry;

/// One field of one shift type, with its new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShiftTypeUpdate {
    Name(String),
    StartTime(ClockTime),
    EndTime(ClockTime),
    /// Background and text color change together.
    Palette(PaletteEntry),
}

impl ShiftTypeUpdate {
    /// Build an update from a field name (`name`, `startTime`, `endTime`,
    /// `color`) and a raw value, validating times and palette tokens.
    pub fn parse(field: &str, value: &str) -> Result<Self> {
        match field {
            "name" => Ok(Self::Name(value.to_string())),
            "startTime" | "start_time" | "start" => ClockTime::from_str(value).map(Self::StartTime),
            "endTime" | "end_time" | "end" => ClockTime::from_str(value).map(Self::EndTime),
            "color" => palette_entry(value).map(Self::Palette).ok_or_else(|| {
                ShiftCalError::InvalidInput(format!("{value:?} is not a palette color"))
            }),
            other => Err(ShiftCalError::InvalidInput(format!("unknown shift type field: {other}"))),
        }
    }

    pub(crate) fn apply_to(self, shift_type: &mut ShiftType) {
        match self {
            Self::Name(name) => shift_type.name = name,
            Self::StartTime(time) => shift_type.start_time = time,
            Self::EndTime(time) => shift_type.end_time = time,
            Self::Palette(entry) => {
                shift_type.color = entry.color.to_string();
                shift_type.text_color = entry.text_color.to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_fields() {
        assert_eq!(ShiftTypeUpdate::parse("name", "Guardia").unwrap(), ShiftTypeUpdate::Name("Guardia".into()));
        assert!(matches!(ShiftTypeUpdate::parse("startTime", "07:30"), Ok(ShiftTypeUpdate::StartTime(_))));
        assert!(matches!(ShiftTypeUpdate::parse("end", "15:30"), Ok(ShiftTypeUpdate::EndTime(_))));
        assert!(matches!(ShiftTypeUpdate::parse("color", "bg-sky-200"), Ok(ShiftTypeUpdate::Palette(_))));
    }

    #[test]
    fn rejects_bad_values_and_fields() {
        assert!(ShiftTypeUpdate::parse("startTime", "7:30").is_err());
        assert!(ShiftTypeUpdate::parse("color", "bg-black").is_err());
        assert!(ShiftTypeUpdate::parse("id", "x").is_err());
    }
}
