use std::time::Duration;

use shiftcal_domain::{LoggingConfig, ShiftCalError};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when set. Logs go to stderr so
/// command output on stdout stays clean. Calling this twice is harmless; the
/// second install is ignored.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.with_target(false).compact().try_init()
    };

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"shifts::assign_shift"`).
/// * `elapsed` - Duration the command execution took.
/// * `success` - Whether the command completed successfully.
///
/// Callers must avoid forwarding sensitive values in `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Convert a `ShiftCalError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &ShiftCalError) -> &'static str {
    match error {
        ShiftCalError::InvalidInput(_) => "invalid_input",
        ShiftCalError::InvalidRange(_) => "invalid_range",
        ShiftCalError::NotFound(_) => "not_found",
        ShiftCalError::Unauthenticated(_) => "unauthenticated",
        ShiftCalError::Persistence(_) => "persistence",
        ShiftCalError::Database(_) => "database",
        ShiftCalError::Config(_) => "config",
        ShiftCalError::Internal(_) => "internal",
    }
}
