//! Color assignment for new shift types

use shiftcal_domain::constants::{PaletteEntry, COLOR_PALETTE};
use shiftcal_domain::ShiftTypeMap;

/// Pick the palette entry for a new shift type.
///
/// Scans the palette in order and returns the first entry whose color token
/// no existing type uses. Once every color is taken the palette is reused
/// cyclically by registry size, so the choice stays deterministic; repeats are
/// expected from then on.
pub fn pick_color(existing: &ShiftTypeMap) -> PaletteEntry {
    COLOR_PALETTE
        .iter()
        .copied()
        .find(|entry| !existing.values().any(|shift_type| shift_type.color == entry.color))
        .unwrap_or(COLOR_PALETTE[existing.len() % COLOR_PALETTE.len()])
}

/// Palette entry whose background token is `color`.
pub fn palette_entry(color: &str) -> Option<PaletteEntry> {
    COLOR_PALETTE.iter().copied().find(|entry| entry.color == color)
}

#[cfg(test)]
mod tests {
    use shiftcal_domain::constants::default_shift_types;

    use super::*;

    #[test]
    fn empty_registry_gets_first_color() {
        assert_eq!(pick_color(&ShiftTypeMap::new()), COLOR_PALETTE[0]);
    }

    #[test]
    fn skips_colors_used_by_defaults() {
        // Defaults take cyan, amber and indigo.
        assert_eq!(pick_color(&default_shift_types()), COLOR_PALETTE[3]);
    }

    #[test]
    fn lookup_by_token() {
        assert_eq!(palette_entry("bg-rose-200").map(|p| p.text_color), Some("text-rose-800"));
        assert_eq!(palette_entry("bg-black"), None);
    }
}
