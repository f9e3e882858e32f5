//! Copy-on-write shift mapping and range assignment

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shiftcal_domain::{to_date_key, DateKey, Result, ShiftMap, ShiftRecord, ShiftType};
use tracing::debug;

use super::range::DateRange;
use crate::registry::ShiftTypeRegistry;

/// The user's shift mapping, keyed by date.
///
/// Every edit returns a new schedule and leaves `self` untouched, so callers
/// can diff the two or persist the new one as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShiftSchedule(ShiftMap);

impl ShiftSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(shifts: ShiftMap) -> Self {
        Self(shifts)
    }

    pub fn as_map(&self) -> &ShiftMap {
        &self.0
    }

    pub fn into_map(self) -> ShiftMap {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, date: NaiveDate) -> Option<&ShiftRecord> {
        self.0.get(&to_date_key(date))
    }

    pub fn get_by_key(&self, key: &DateKey) -> Option<&ShiftRecord> {
        self.0.get(key)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.0.contains_key(&to_date_key(date))
    }

    /// Records between two dates given in either order (inclusive), in date
    /// order.
    pub fn between(&self, first: NaiveDate, last: NaiveDate) -> impl Iterator<Item = &ShiftRecord> {
        let (low, high) = if first <= last { (first, last) } else { (last, first) };
        self.0.range(to_date_key(low)..=to_date_key(high)).map(|(_, record)| record)
    }

    /// Set or clear every day of `[start, end]`.
    ///
    /// A non-empty `type_id` writes `{date, type_id, notes}` at each day,
    /// overwriting what was there. An empty `type_id` removes each day's
    /// record. Keys outside the range are kept as they are. `end = None`
    /// means the single day `start`; `end < start` is rejected.
    pub fn assign_range(
        &self,
        start: NaiveDate,
        end: Option<NaiveDate>,
        type_id: &str,
        notes: &str,
    ) -> Result<Self> {
        let range = DateRange::new(start, end)?;
        Ok(self.assign(range, type_id, notes))
    }

    /// [`ShiftSchedule::assign_range`] over an already validated range.
    pub fn assign(&self, range: DateRange, type_id: &str, notes: &str) -> Self {
        let mut shifts = self.0.clone();

        for day in range.days() {
            let key = to_date_key(day);
            if type_id.is_empty() {
                shifts.remove(&key);
            } else {
                shifts.insert(key, ShiftRecord::new(key, type_id, notes));
            }
        }

        debug!(
            start = %range.start(),
            end = %range.end(),
            days = range.len(),
            cleared = type_id.is_empty(),
            "shift range assigned"
        );

        Self(shifts)
    }

    /// Remove the record on `date`, if any.
    pub fn delete_at(&self, date: NaiveDate) -> Self {
        self.assign(DateRange::single(date), "", "")
    }

    /// The shift type shown on `date`.
    ///
    /// `None` when the day has no record or when the record points at a type
    /// that no longer exists; the record itself is left alone.
    pub fn shift_type_on<'r>(
        &self,
        date: NaiveDate,
        registry: &'r ShiftTypeRegistry,
    ) -> Option<&'r ShiftType> {
        self.get(date).and_then(|record| registry.get(&record.type_id))
    }

    /// Records whose type id is missing from `registry`.
    pub fn dangling<'a>(
        &'a self,
        registry: &'a ShiftTypeRegistry,
    ) -> impl Iterator<Item = &'a ShiftRecord> + 'a {
        self.0.values().filter(move |record| !registry.contains(&record.type_id))
    }
}

impl From<ShiftMap> for ShiftSchedule {
    fn from(value: ShiftMap) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use shiftcal_domain::constants::default_shift_types;
    use shiftcal_domain::ShiftCalError;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn single_day_assignment() {
        let schedule =
            ShiftSchedule::new().assign_range(ymd(2024, 3, 15), None, "manyana", "cover shift").unwrap();

        assert_eq!(schedule.len(), 1);
        let record = schedule.get(ymd(2024, 3, 15)).unwrap();
        assert_eq!(record.date_key.to_string(), "2024-03-15");
        assert_eq!(record.type_id, "manyana");
        assert_eq!(record.notes, "cover shift");
    }

    #[test]
    fn input_schedule_is_not_mutated() {
        let before = ShiftSchedule::new().assign_range(ymd(2024, 3, 1), None, "tarde", "").unwrap();
        let after = before.assign_range(ymd(2024, 3, 2), Some(ymd(2024, 3, 4)), "noche", "").unwrap();

        assert_eq!(before.len(), 1);
        assert_eq!(after.len(), 4);
        assert_eq!(after.get(ymd(2024, 3, 1)), before.get(ymd(2024, 3, 1)));
    }

    #[test]
    fn empty_type_clears_range_only() {
        let filled = ShiftSchedule::new()
            .assign_range(ymd(2024, 3, 10), Some(ymd(2024, 3, 20)), "tarde", "")
            .unwrap();
        let cleared = filled.assign_range(ymd(2024, 3, 12), Some(ymd(2024, 3, 14)), "", "").unwrap();

        assert_eq!(cleared.len(), 8);
        assert!(!cleared.contains(ymd(2024, 3, 13)));
        assert!(cleared.contains(ymd(2024, 3, 11)));
        assert!(cleared.contains(ymd(2024, 3, 15)));
    }

    #[test]
    fn overwrite_replaces_type_and_notes() {
        let first = ShiftSchedule::new().assign_range(ymd(2024, 3, 15), None, "manyana", "a").unwrap();
        let second = first.assign_range(ymd(2024, 3, 15), None, "noche", "b").unwrap();

        let record = second.get(ymd(2024, 3, 15)).unwrap();
        assert_eq!((record.type_id.as_str(), record.notes.as_str()), ("noche", "b"));
    }

    #[test]
    fn inverted_range_fails_without_changes() {
        let schedule = ShiftSchedule::new();
        let err = schedule.assign_range(ymd(2024, 3, 17), Some(ymd(2024, 3, 15)), "tarde", "");
        assert!(matches!(err, Err(ShiftCalError::InvalidRange(_))));
    }

    #[test]
    fn delete_at_missing_key_is_noop() {
        let schedule = ShiftSchedule::new().assign_range(ymd(2024, 3, 15), None, "tarde", "").unwrap();
        assert_eq!(schedule.delete_at(ymd(2024, 3, 16)), schedule);
        assert!(schedule.delete_at(ymd(2024, 3, 15)).is_empty());
    }

    #[test]
    fn dangling_type_resolves_to_none_but_record_stays() {
        let registry = ShiftTypeRegistry::from_map(default_shift_types());
        let schedule = ShiftSchedule::new()
            .assign_range(ymd(2024, 3, 15), None, "manyana", "")
            .unwrap()
            .assign_range(ymd(2024, 3, 16), None, "removed_type", "")
            .unwrap();

        assert_eq!(schedule.shift_type_on(ymd(2024, 3, 15), &registry).map(|t| t.name.as_str()), Some("Mañana"));
        assert!(schedule.shift_type_on(ymd(2024, 3, 16), &registry).is_none());
        assert!(schedule.get(ymd(2024, 3, 16)).is_some());
        assert_eq!(schedule.dangling(&registry).count(), 1);
    }

    #[test]
    fn between_is_inclusive_and_ordered() {
        let schedule = ShiftSchedule::new()
            .assign_range(ymd(2024, 2, 27), Some(ymd(2024, 3, 2)), "tarde", "")
            .unwrap();
        let keys: Vec<String> = schedule
            .between(ymd(2024, 2, 28), ymd(2024, 3, 1))
            .map(|r| r.date_key.to_string())
            .collect();
        assert_eq!(keys, vec!["2024-02-28", "2024-02-29", "2024-03-01"]);
    }
}
