//! Shift records: one shift type plus notes on one calendar day

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::date_key::DateKey;
use super::shift_type::ShiftTypeId;
use crate::errors::{Result, ShiftCalError};

/// Mapping of date key → shift record; at most one shift per day.
pub type ShiftMap = BTreeMap<DateKey, ShiftRecord>;

/// Assignment of a shift type and free-text notes to a single day.
///
/// Persisted as `{ "date": "YYYY-MM-DD", "typeId": "...", "notes": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct ShiftRecord {
    #[serde(rename = "date")]
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub date_key: DateKey,
    pub type_id: ShiftTypeId,
    #[serde(default)]
    pub notes: String,
}

impl ShiftRecord {
    pub fn new(date_key: DateKey, type_id: impl Into<ShiftTypeId>, notes: impl Into<String>) -> Self {
        Self { date_key, type_id: type_id.into(), notes: notes.into() }
    }
}

/// Fails with `InvalidInput` on the first record filed under a key other
/// than its own date.
pub fn check_shift_keys(shifts: &ShiftMap) -> Result<()> {
    match shifts.iter().find(|(key, record)| **key != record.date_key) {
        Some((key, record)) => Err(ShiftCalError::InvalidInput(format!(
            "shift filed under {key} is dated {}",
            record.date_key
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn persisted_shape_matches_stored_documents() {
        let key = DateKey::new(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        let record = ShiftRecord::new(key, "manyana", "cover shift");

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "date": "2024-03-15", "typeId": "manyana", "notes": "cover shift" })
        );
    }

    #[test]
    fn missing_notes_default_to_empty() {
        let record: ShiftRecord =
            serde_json::from_str(r#"{ "date": "2024-03-15", "typeId": "tarde" }"#).unwrap();
        assert_eq!(record.notes, "");
    }

    #[test]
    fn keys_must_match_record_dates() {
        let shifts: ShiftMap = serde_json::from_str(
            r#"{ "2024-03-15": { "date": "2024-03-15", "typeId": "tarde" } }"#,
        )
        .unwrap();
        check_shift_keys(&shifts).unwrap();

        let misfiled: ShiftMap = serde_json::from_str(
            r#"{ "2024-03-15": { "date": "2024-03-16", "typeId": "tarde" } }"#,
        )
        .unwrap();
        let err = check_shift_keys(&misfiled).unwrap_err();
        assert_eq!(
            err,
            ShiftCalError::InvalidInput("shift filed under 2024-03-15 is dated 2024-03-16".into())
        );
    }
}
