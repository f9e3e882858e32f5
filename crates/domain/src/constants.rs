//! Application constants
//!
//! Centralized location for the color palette, the default shift types given
//! to new users and the placeholders used for freshly added shift types.

use crate::types::{ClockTime, ShiftType, ShiftTypeMap};

/// Background/foreground color token pair offered for a shift type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaletteEntry {
    pub color: &'static str,
    pub text_color: &'static str,
}

/// Fixed palette, scanned in this order when picking a color for a new type.
pub const COLOR_PALETTE: [PaletteEntry; 8] = [
    PaletteEntry { color: "bg-cyan-200", text_color: "text-cyan-800" },
    PaletteEntry { color: "bg-amber-200", text_color: "text-amber-800" },
    PaletteEntry { color: "bg-indigo-300", text_color: "text-indigo-900" },
    PaletteEntry { color: "bg-emerald-200", text_color: "text-emerald-800" },
    PaletteEntry { color: "bg-rose-200", text_color: "text-rose-800" },
    PaletteEntry { color: "bg-sky-200", text_color: "text-sky-800" },
    PaletteEntry { color: "bg-fuchsia-300", text_color: "text-fuchsia-900" },
    PaletteEntry { color: "bg-slate-300", text_color: "text-slate-800" },
];

// Default shift types
pub const MORNING_SHIFT_ID: &str = "manyana";
pub const AFTERNOON_SHIFT_ID: &str = "tarde";
pub const NIGHT_SHIFT_ID: &str = "noche";

// Placeholders for a newly added shift type
pub const NEW_SHIFT_TYPE_NAME: &str = "Nuevo Turno";
pub const NEW_SHIFT_TYPE_START: (u32, u32) = (8, 0);
pub const NEW_SHIFT_TYPE_END: (u32, u32) = (16, 0);
pub const SHIFT_TYPE_ID_PREFIX: &str = "turno_";

fn hm((hour, minute): (u32, u32)) -> ClockTime {
    ClockTime::from_hm(hour, minute).unwrap_or_default()
}

/// Start time given to a newly added shift type.
pub fn new_shift_type_start() -> ClockTime {
    hm(NEW_SHIFT_TYPE_START)
}

/// End time given to a newly added shift type.
pub fn new_shift_type_end() -> ClockTime {
    hm(NEW_SHIFT_TYPE_END)
}

/// Shift types seeded into the document of a user with no stored data.
pub fn default_shift_types() -> ShiftTypeMap {
    [
        ShiftType::new(MORNING_SHIFT_ID, "Mañana", hm((6, 0)), hm((14, 0)), COLOR_PALETTE[0]),
        ShiftType::new(AFTERNOON_SHIFT_ID, "Tarde", hm((14, 0)), hm((22, 0)), COLOR_PALETTE[1]),
        ShiftType::new(NIGHT_SHIFT_ID, "Noche", hm((22, 0)), hm((6, 0)), COLOR_PALETTE[2]),
    ]
    .into_iter()
    .map(|shift_type| (shift_type.id.clone(), shift_type))
    .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn palette_colors_are_distinct() {
        let colors: HashSet<_> = COLOR_PALETTE.iter().map(|p| p.color).collect();
        assert_eq!(colors.len(), COLOR_PALETTE.len());
    }

    #[test]
    fn defaults_cover_three_shifts_with_overnight_night() {
        let defaults = default_shift_types();
        assert_eq!(defaults.len(), 3);
        assert_eq!(defaults[MORNING_SHIFT_ID].time_range_label(), "06:00 - 14:00");
        assert_eq!(defaults[AFTERNOON_SHIFT_ID].color, "bg-amber-200");
        assert!(defaults[NIGHT_SHIFT_ID].is_overnight());
    }
}
