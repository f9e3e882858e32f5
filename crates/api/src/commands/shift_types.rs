//! Shift type settings commands
//!
//! Every edit is saved immediately; saving drops types whose name is blank.

use shiftcal_core::ShiftTypeUpdate;
use shiftcal_domain::{Result, ShiftCalError, ShiftType};

use crate::utils::command_helpers::execute_command;
use crate::AppContext;

/// Shift types ordered by start time, then name
pub async fn list_shift_types(ctx: &AppContext) -> Result<Vec<ShiftType>> {
    execute_command("shift_types::list_shift_types", || async move {
        Ok(ctx.schedule.shift_types().ordered().into_iter().cloned().collect())
    })
    .await
}

/// Create a shift type with the stock times and the next free color.
pub async fn add_shift_type(ctx: &AppContext, name: Option<&str>) -> Result<ShiftType> {
    execute_command("shift_types::add_shift_type", || async move {
        let (mut registry, id) = ctx.schedule.shift_types().add_type();
        if let Some(name) = name {
            if name.trim().is_empty() {
                return Err(ShiftCalError::InvalidInput("shift type name must not be blank".into()));
            }
            registry = registry.update_field(&id, ShiftTypeUpdate::Name(name.to_string()))?;
        }

        let saved = ctx.schedule.save_shift_types(&registry).await?;
        saved
            .get(&id)
            .cloned()
            .ok_or_else(|| ShiftCalError::Internal(format!("shift type {id} missing after save")))
    })
    .await
}

/// Change one field of a shift type.
///
/// `field` is `name`, `startTime`, `endTime` or `color`. Returns `None` when
/// the new name is blank and the save removed the type.
pub async fn update_shift_type(
    ctx: &AppContext,
    id: &str,
    field: &str,
    value: &str,
) -> Result<Option<ShiftType>> {
    execute_command("shift_types::update_shift_type", || async move {
        let update = ShiftTypeUpdate::parse(field, value)?;
        let registry = ctx.schedule.shift_types().update_field(id, update)?;

        let saved = ctx.schedule.save_shift_types(&registry).await?;
        Ok(saved.get(id).cloned())
    })
    .await
}

/// Delete a shift type. Days assigned to it keep their records and render
/// without a type.
pub async fn remove_shift_type(ctx: &AppContext, id: &str) -> Result<()> {
    execute_command("shift_types::remove_shift_type", || async move {
        let current = ctx.schedule.shift_types();
        if !current.contains(id) {
            return Err(ShiftCalError::NotFound(format!("shift type {id}")));
        }

        ctx.schedule.save_shift_types(&current.remove_type(id)).await?;
        Ok(())
    })
    .await
}
