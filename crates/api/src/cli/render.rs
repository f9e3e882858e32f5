//! Plain-text rendering of command DTOs

use std::fmt::Write as _;

use chrono::Datelike;
use shiftcal_core::CalendarCell;
use shiftcal_domain::ShiftType;

use crate::commands::{CalendarView, SessionInfo, ShiftEntry};

/// Grid of the view followed by one line per assigned day.
///
/// Each cell is the day number, the first letter of its shift type (`?`
/// when the type no longer exists) and `*` for today. Days outside the
/// anchor month are shown as `·`.
pub fn calendar(view: &CalendarView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.title);

    let header: Vec<String> = view.short_week_days.iter().map(|d| format!("{d:>2}   ")).collect();
    let _ = writeln!(out, "{}", header.concat().trim_end());

    for week in &view.weeks {
        let row: Vec<String> = week.iter().map(cell).collect();
        let _ = writeln!(out, "{}", row.concat().trim_end());
    }

    let assigned: Vec<&CalendarCell> = view.cells().filter(|c| c.shift.is_some()).collect();
    if !assigned.is_empty() {
        out.push('\n');
    }
    for day in assigned {
        let _ = writeln!(out, "{}", legend_line(day));
    }

    out.trim_end().to_string()
}

fn cell(cell: &CalendarCell) -> String {
    if !cell.in_anchor_month {
        return format!("{:>2}   ", "·");
    }

    let marker = match (&cell.shift, &cell.shift_type) {
        (_, Some(shift_type)) => shift_type.name.chars().next().map_or(' ', |c| c.to_ascii_uppercase()),
        (Some(_), None) => '?',
        (None, None) => ' ',
    };
    let today = if cell.is_today { '*' } else { ' ' };

    format!("{:>2}{marker}{today} ", cell.date.day())
}

fn legend_line(cell: &CalendarCell) -> String {
    let mut line = match (&cell.shift, &cell.shift_type) {
        (_, Some(shift_type)) => {
            format!("{}  {} ({})", cell.date_key, shift_type.name, shift_type.time_range_label())
        }
        (Some(record), None) => format!("{}  ? (deleted type {})", cell.date_key, record.type_id),
        (None, None) => cell.date_key.to_string(),
    };
    if let Some(notes) = cell.notes() {
        let _ = write!(line, "  {notes}");
    }
    line
}

/// One line per assigned day.
pub fn shift_entries(entries: &[ShiftEntry]) -> String {
    if entries.is_empty() {
        return "No shifts".to_string();
    }

    entries
        .iter()
        .map(|entry| {
            let name = entry.type_name.as_deref().unwrap_or("?");
            let mut line = format!("{}  {:<12} {name}", entry.date, entry.type_id);
            if !entry.notes.is_empty() {
                let _ = write!(line, "  {}", entry.notes);
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per shift type.
pub fn shift_types(types: &[ShiftType]) -> String {
    if types.is_empty() {
        return "No shift types".to_string();
    }

    types
        .iter()
        .map(|t| {
            let overnight = if t.is_overnight() { " (overnight)" } else { "" };
            format!("{:<32} {:<14} {} {}{overnight}", t.id, t.name, t.time_range_label(), t.color)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn session(info: &SessionInfo) -> String {
    match &info.user_id {
        Some(user) => format!(
            "Signed in as {user} ({} shift types, {} shifts)",
            info.shift_type_count, info.shift_count
        ),
        None if info.loading => "Resolving identity".to_string(),
        None => "Signed out".to_string(),
    }
}
