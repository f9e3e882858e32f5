//! Render model: one cell per displayed day

use chrono::NaiveDate;
use serde::Serialize;
use shiftcal_domain::{to_date_key, DateKey, ShiftRecord, ShiftType, ViewMode};

use super::grid::CalendarGrid;
use crate::registry::ShiftTypeRegistry;
use crate::schedule::ShiftSchedule;

/// Everything a view needs to draw one day of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub date_key: DateKey,
    /// Always `true` in week view.
    pub in_anchor_month: bool,
    pub is_today: bool,
    /// Record stored for the day, kept even when its type is gone.
    pub shift: Option<ShiftRecord>,
    /// Resolved type; `None` for empty days and dangling references.
    pub shift_type: Option<ShiftType>,
}

impl CalendarCell {
    /// Notes of the day's record, if it has any.
    pub fn notes(&self) -> Option<&str> {
        self.shift.as_ref().map(|s| s.notes.as_str()).filter(|n| !n.is_empty())
    }
}

/// Build cells for every day of `grid`.
pub fn build_cells(
    grid: &CalendarGrid,
    today: NaiveDate,
    schedule: &ShiftSchedule,
    registry: &ShiftTypeRegistry,
) -> Vec<CalendarCell> {
    grid.days()
        .iter()
        .map(|&date| CalendarCell {
            date,
            date_key: to_date_key(date),
            in_anchor_month: grid.mode() == ViewMode::Week || grid.in_anchor_month(date),
            is_today: date == today,
            shift: schedule.get(date).cloned(),
            shift_type: schedule.shift_type_on(date, registry).cloned(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use shiftcal_domain::constants::default_shift_types;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_cells_flag_adjacent_days_and_today() {
        let grid = CalendarGrid::new(ymd(2024, 2, 1), ViewMode::Month);
        let cells = build_cells(&grid, ymd(2024, 2, 14), &ShiftSchedule::new(), &ShiftTypeRegistry::new());

        assert_eq!(cells.len(), grid.days().len());
        assert!(!cells[0].in_anchor_month);
        assert_eq!(cells[0].date_key.to_string(), "2024-01-29");
        assert_eq!(cells.iter().filter(|c| c.is_today).count(), 1);
        assert_eq!(cells.iter().filter(|c| c.in_anchor_month).count(), 29);
    }

    #[test]
    fn dangling_reference_keeps_record_without_type() {
        let registry = ShiftTypeRegistry::from_map(default_shift_types());
        let schedule = ShiftSchedule::new()
            .assign_range(ymd(2024, 3, 11), None, "tarde", "relevo")
            .unwrap()
            .assign_range(ymd(2024, 3, 12), None, "borrado", "")
            .unwrap();
        let grid = CalendarGrid::new(ymd(2024, 3, 13), ViewMode::Week);

        let cells = build_cells(&grid, ymd(2024, 3, 13), &schedule, &registry);

        assert_eq!(cells[0].shift_type.as_ref().map(|t| t.name.as_str()), Some("Tarde"));
        assert_eq!(cells[0].notes(), Some("relevo"));
        assert!(cells[1].shift.is_some());
        assert!(cells[1].shift_type.is_none());
        assert!(cells.iter().all(|c| c.in_anchor_month));
    }

    #[test]
    fn week_spanning_two_months_is_not_dimmed() {
        let grid = CalendarGrid::new(ymd(2024, 2, 28), ViewMode::Week);
        let cells = build_cells(&grid, ymd(2024, 1, 1), &ShiftSchedule::new(), &ShiftTypeRegistry::new());
        assert_eq!(cells.last().map(|c| c.date), Some(ymd(2024, 3, 3)));
        assert!(cells.iter().all(|c| c.in_anchor_month && !c.is_today));
    }
}
