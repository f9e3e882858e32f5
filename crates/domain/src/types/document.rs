//! Per-user stored document: the shift-type mapping and the shift mapping

use serde::{Deserialize, Serialize};

use super::shift::ShiftMap;
use super::shift_type::ShiftTypeMap;

/// Document read from the store for one user.
///
/// Either field may be missing from an older or partially written document;
/// readers fall back to defaults per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_types: Option<ShiftTypeMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shifts: Option<ShiftMap>,
}

impl UserDocument {
    /// Apply a partial write with merge semantics: fields present in the
    /// patch replace the stored field wholesale, absent fields are untouched.
    pub fn merge(&mut self, patch: DocumentPatch) {
        if let Some(shift_types) = patch.shift_types {
            self.shift_types = Some(shift_types);
        }
        if let Some(shifts) = patch.shifts {
            self.shifts = Some(shifts);
        }
    }
}

/// Partial document written with `merge = true`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_types: Option<ShiftTypeMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shifts: Option<ShiftMap>,
}

impl DocumentPatch {
    /// Patch carrying only the shift mapping.
    pub fn shifts(shifts: ShiftMap) -> Self {
        Self { shift_types: None, shifts: Some(shifts) }
    }

    /// Patch carrying only the shift-type mapping.
    pub fn shift_types(shift_types: ShiftTypeMap) -> Self {
        Self { shift_types: Some(shift_types), shifts: None }
    }

    /// Patch carrying both mappings (initial document for a new user).
    pub fn full(shift_types: ShiftTypeMap, shifts: ShiftMap) -> Self {
        Self { shift_types: Some(shift_types), shifts: Some(shifts) }
    }

    pub fn is_empty(&self) -> bool {
        self.shift_types.is_none() && self.shifts.is_none()
    }
}

impl From<DocumentPatch> for UserDocument {
    fn from(patch: DocumentPatch) -> Self {
        Self { shift_types: patch.shift_types, shifts: patch.shifts }
    }
}
