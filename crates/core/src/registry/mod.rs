//! Shift type registry
//!
//! Copy-on-write mapping of shift-type id → shift type with add, single-field
//! update, remove and the save-time blank-name filter.

pub mod color;
pub mod update;

use serde::{Deserialize, Serialize};
use shiftcal_domain::constants::{
    new_shift_type_end, new_shift_type_start, NEW_SHIFT_TYPE_NAME, SHIFT_TYPE_ID_PREFIX,
};
use shiftcal_domain::{Result, ShiftCalError, ShiftType, ShiftTypeId, ShiftTypeMap};
use tracing::debug;
use uuid::Uuid;

pub use color::{palette_entry, pick_color};
pub use update::ShiftTypeUpdate;

/// Fresh shift-type id (`turno_` + simple UUIDv7, sorts by creation time).
pub fn generate_shift_type_id() -> ShiftTypeId {
    format!("{SHIFT_TYPE_ID_PREFIX}{}", Uuid::now_v7().simple())
}

/// The user's shift types, keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShiftTypeRegistry(ShiftTypeMap);

impl ShiftTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(shift_types: ShiftTypeMap) -> Self {
        Self(shift_types)
    }

    pub fn as_map(&self) -> &ShiftTypeMap {
        &self.0
    }

    pub fn into_map(self) -> ShiftTypeMap {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ShiftType> {
        self.0.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    /// Types ordered for display: by start time, then name, then id.
    pub fn ordered(&self) -> Vec<&ShiftType> {
        let mut types: Vec<&ShiftType> = self.0.values().collect();
        types.sort_by(|a, b| {
            a.start_time.cmp(&b.start_time).then_with(|| a.name.cmp(&b.name)).then_with(|| a.id.cmp(&b.id))
        });
        types
    }

    /// Add a placeholder type with a fresh id and the first unused palette
    /// color. Returns the new registry and the id so the caller can focus it.
    pub fn add_type(&self) -> (Self, ShiftTypeId) {
        let mut id = generate_shift_type_id();
        while self.contains(&id) {
            id = generate_shift_type_id();
        }
        self.insert_placeholder(id)
    }

    /// [`ShiftTypeRegistry::add_type`] with a caller-chosen id.
    pub fn add_type_with_id(&self, id: impl Into<ShiftTypeId>) -> Result<(Self, ShiftTypeId)> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ShiftCalError::InvalidInput("shift type id must not be blank".into()));
        }
        if self.contains(&id) {
            return Err(ShiftCalError::InvalidInput(format!("shift type {id} already exists")));
        }
        Ok(self.insert_placeholder(id))
    }

    fn insert_placeholder(&self, id: ShiftTypeId) -> (Self, ShiftTypeId) {
        let palette = pick_color(&self.0);
        let placeholder = ShiftType::new(
            id.clone(),
            NEW_SHIFT_TYPE_NAME,
            new_shift_type_start(),
            new_shift_type_end(),
            palette,
        );

        let mut shift_types = self.0.clone();
        shift_types.insert(id.clone(), placeholder);
        debug!(id = %id, color = palette.color, "shift type added");

        (Self(shift_types), id)
    }

    /// Replace one field of the type `id`.
    pub fn update_field(&self, id: &str, update: ShiftTypeUpdate) -> Result<Self> {
        let mut shift_types = self.0.clone();
        let shift_type = shift_types
            .get_mut(id)
            .ok_or_else(|| ShiftCalError::NotFound(format!("shift type {id}")))?;
        update.apply_to(shift_type);
        Ok(Self(shift_types))
    }

    /// Remove the type `id`. Shift records that reference it are left alone
    /// and render without a type.
    pub fn remove_type(&self, id: &str) -> Self {
        let mut shift_types = self.0.clone();
        if shift_types.remove(id).is_some() {
            debug!(id, "shift type removed");
        }
        Self(shift_types)
    }

    /// Copy without the types whose trimmed name is empty. Applied only when
    /// persisting; the registry being edited keeps its blank entries.
    pub fn sanitize_for_save(&self) -> Self {
        Self(self.0.iter().filter(|(_, t)| t.has_name()).map(|(id, t)| (id.clone(), t.clone())).collect())
    }
}

impl From<ShiftTypeMap> for ShiftTypeRegistry {
    fn from(value: ShiftTypeMap) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use shiftcal_domain::constants::{default_shift_types, COLOR_PALETTE, MORNING_SHIFT_ID};
    use shiftcal_domain::ClockTime;

    use super::*;

    #[test]
    fn add_type_inserts_placeholder_and_returns_id() {
        let (registry, id) = ShiftTypeRegistry::new().add_type();

        assert!(id.starts_with(SHIFT_TYPE_ID_PREFIX));
        let added = registry.get(&id).unwrap();
        assert_eq!(added.name, NEW_SHIFT_TYPE_NAME);
        assert_eq!(added.time_range_label(), "08:00 - 16:00");
        assert_eq!(added.color, COLOR_PALETTE[0].color);
    }

    #[test]
    fn generated_ids_are_unique() {
        let ids: HashSet<_> = (0..200).map(|_| generate_shift_type_id()).collect();
        assert_eq!(ids.len(), 200);
    }

    #[test]
    fn duplicate_explicit_id_is_rejected() {
        let registry = ShiftTypeRegistry::from_map(default_shift_types());
        assert!(registry.add_type_with_id(MORNING_SHIFT_ID).is_err());
        assert!(registry.add_type_with_id(" ").is_err());
    }

    #[test]
    fn update_field_changes_one_field_only() {
        let registry = ShiftTypeRegistry::from_map(default_shift_types());
        let updated = registry
            .update_field(MORNING_SHIFT_ID, ShiftTypeUpdate::StartTime(ClockTime::parse("05:30").unwrap()))
            .unwrap();

        let before = registry.get(MORNING_SHIFT_ID).unwrap();
        let after = updated.get(MORNING_SHIFT_ID).unwrap();
        assert_eq!(after.start_time.to_string(), "05:30");
        assert_eq!(after.end_time, before.end_time);
        assert_eq!(after.name, before.name);
        assert_eq!(registry.get(MORNING_SHIFT_ID).unwrap().start_time.to_string(), "06:00");
    }

    #[test]
    fn palette_update_sets_both_tokens() {
        let registry = ShiftTypeRegistry::from_map(default_shift_types());
        let updated = registry
            .update_field(MORNING_SHIFT_ID, ShiftTypeUpdate::Palette(COLOR_PALETTE[4]))
            .unwrap();
        let morning = updated.get(MORNING_SHIFT_ID).unwrap();
        assert_eq!((morning.color.as_str(), morning.text_color.as_str()), ("bg-rose-200", "text-rose-800"));
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let err = ShiftTypeRegistry::new().update_field("ghost", ShiftTypeUpdate::Name("x".into()));
        assert!(matches!(err, Err(ShiftCalError::NotFound(_))));
    }

    #[test]
    fn remove_type_and_missing_remove() {
        let registry = ShiftTypeRegistry::from_map(default_shift_types());
        let removed = registry.remove_type(MORNING_SHIFT_ID);
        assert_eq!(removed.len(), 2);
        assert_eq!(removed.remove_type("ghost"), removed);
    }

    #[test]
    fn sanitize_drops_blank_names_without_touching_source() {
        let registry = ShiftTypeRegistry::from_map(default_shift_types());
        let (with_blank, id) = registry.add_type();
        let with_blank = with_blank.update_field(&id, ShiftTypeUpdate::Name("  ".into())).unwrap();

        let saved = with_blank.sanitize_for_save();
        assert_eq!(saved.len(), 3);
        assert!(!saved.contains(&id));
        assert_eq!(with_blank.len(), 4);
    }

    #[test]
    fn ordered_by_start_time() {
        let registry = ShiftTypeRegistry::from_map(default_shift_types());
        let names: Vec<&str> = registry.ordered().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Mañana", "Tarde", "Noche"]);
    }
}
