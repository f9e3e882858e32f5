//! Command execution helpers
//!
//! Provides utilities to reduce boilerplate when implementing commands with
//! timing and structured logging.

use std::future::Future;
use std::time::Instant;

use shiftcal_domain::Result as DomainResult;
use tracing::warn;

use crate::utils::logging::{error_label, log_command_execution};

/// Execute a command with automatic timing and logging
///
/// # Example
///
/// ```rust,ignore
/// pub async fn my_command(ctx: &AppContext) -> Result<MyResponse> {
///     execute_command("my_module::my_command", || async move {
///         ctx.schedule.do_something().await
///     })
///     .await
/// }
/// ```
pub async fn execute_command<F, Fut, T>(command_name: &str, command_fn: F) -> DomainResult<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = DomainResult<T>>,
{
    let start = Instant::now();

    let result = command_fn().await;

    log_command_execution(command_name, start.elapsed(), result.is_ok());
    if let Err(err) = &result {
        warn!(command = command_name, error_type = error_label(err), error = %err, "command failed");
    }

    result
}

#[cfg(test)]
mod tests {
    use shiftcal_domain::ShiftCalError;

    use super::*;

    #[tokio::test]
    async fn passes_result_through() {
        let ok = execute_command("test::ok", || async move { Ok(7) }).await;
        assert_eq!(ok, Ok(7));

        let err: DomainResult<()> = execute_command("test::err", || async move {
            Err(ShiftCalError::NotFound("shift type ghost".into()))
        })
        .await;
        assert!(matches!(err, Err(ShiftCalError::NotFound(ref what)) if what == "shift type ghost"));
    }
}
