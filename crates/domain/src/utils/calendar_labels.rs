//! Spanish calendar labels (Monday-first)

/// Weekday names, Monday first.
pub const WEEK_DAYS: [&str; 7] =
    ["Lunes", "Martes", "Miércoles", "Jueves", "Viernes", "Sábado", "Domingo"];

/// One-letter weekday headers, Monday first.
pub const SHORT_WEEK_DAYS: [&str; 7] = ["L", "M", "X", "J", "V", "S", "D"];

const MONTH_NAMES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Capitalised month name for a 1-based month, `None` outside 1..=12.
pub fn month_name(month: u32) -> Option<String> {
    let index = usize::try_from(month.checked_sub(1)?).ok()?;
    let name = MONTH_NAMES.get(index)?;

    let mut chars = name.chars();
    chars.next().map(|first| first.to_uppercase().chain(chars).collect())
}
