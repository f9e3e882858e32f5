//! Shift types: named, timed, color-tagged categories

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::clock::ClockTime;
use crate::constants::PaletteEntry;

/// Identifier of a shift type (e.g. `manyana`, `turno_0190…`).
pub type ShiftTypeId = String;

/// Mapping of shift-type id → shift type.
pub type ShiftTypeMap = BTreeMap<ShiftTypeId, ShiftType>;

/// Display and timing metadata for one kind of shift.
///
/// `end_time` earlier than `start_time` marks an overnight shift; it is kept
/// as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct ShiftType {
    pub id: ShiftTypeId,
    pub name: String,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub start_time: ClockTime,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub end_time: ClockTime,
    /// Opaque background color token.
    pub color: String,
    /// Opaque foreground color token.
    pub text_color: String,
}

impl ShiftType {
    pub fn new(
        id: impl Into<ShiftTypeId>,
        name: impl Into<String>,
        start_time: ClockTime,
        end_time: ClockTime,
        palette: PaletteEntry,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            start_time,
            end_time,
            color: palette.color.to_string(),
            text_color: palette.text_color.to_string(),
        }
    }

    /// Whether the shift runs past midnight.
    pub fn is_overnight(&self) -> bool {
        ClockTime::is_overnight(self.start_time, self.end_time)
    }

    /// Blank names are dropped when the registry is saved.
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// `HH:MM - HH:MM` label.
    pub fn time_range_label(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }
}
