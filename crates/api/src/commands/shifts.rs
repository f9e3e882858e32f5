//! Shift assignment commands

use chrono::NaiveDate;
use serde::Serialize;
use shiftcal_domain::{parse_date_key, DateKey, Result, ShiftRecord, ShiftTypeId};

use crate::utils::command_helpers::execute_command;
use crate::AppContext;

/// One assigned day with its type resolved for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftEntry {
    pub date: DateKey,
    pub type_id: ShiftTypeId,
    /// `None` when the type has been deleted since the assignment.
    pub type_name: Option<String>,
    pub notes: String,
}

/// Assign `type_id` to every day from `start` through `end` (inclusive).
///
/// An empty `type_id` clears the range instead. Returns the entries that
/// now fall inside the range.
pub async fn assign_shift(
    ctx: &AppContext,
    start: &str,
    end: Option<&str>,
    type_id: &str,
    notes: &str,
) -> Result<Vec<ShiftEntry>> {
    execute_command("shifts::assign_shift", || async move {
        let start = parse_date_key(start)?;
        let end = end.map(parse_date_key).transpose()?;

        ctx.schedule.assign_shift(start, end, type_id, notes).await?;
        Ok(entries_between(ctx, start, end.unwrap_or(start)))
    })
    .await
}

/// Remove the shift on `date`, if any
pub async fn delete_shift(ctx: &AppContext, date: &str) -> Result<()> {
    execute_command("shifts::delete_shift", || async move {
        let date = parse_date_key(date)?;
        ctx.schedule.delete_shift(date).await?;
        Ok(())
    })
    .await
}

/// Assigned days in `[from, to]`, or every assigned day when unbounded
pub async fn list_shifts(
    ctx: &AppContext,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<Vec<ShiftEntry>> {
    execute_command("shifts::list_shifts", || async move {
        let from = from.map(parse_date_key).transpose()?.unwrap_or(NaiveDate::MIN);
        let to = to.map(parse_date_key).transpose()?.unwrap_or(NaiveDate::MAX);
        Ok(entries_between(ctx, from, to))
    })
    .await
}

fn entries_between(ctx: &AppContext, first: NaiveDate, last: NaiveDate) -> Vec<ShiftEntry> {
    let state = ctx.schedule.snapshot();
    state
        .schedule
        .between(first, last)
        .map(|record| to_entry(record, state.shift_types.get(&record.type_id).map(|t| t.name.clone())))
        .collect()
}

fn to_entry(record: &ShiftRecord, type_name: Option<String>) -> ShiftEntry {
    ShiftEntry {
        date: record.date_key,
        type_id: record.type_id.clone(),
        type_name,
        notes: record.notes.clone(),
    }
}
