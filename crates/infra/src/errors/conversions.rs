//! Conversions from external infrastructure errors into domain errors.

use r2d2::Error as PoolError;
use rusqlite::Error as SqlError;
use serde_json::Error as JsonError;
use shiftcal_domain::ShiftCalError;
use tokio::task::JoinError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub ShiftCalError);

impl From<InfraError> for ShiftCalError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ShiftCalError> for InfraError {
    fn from(value: ShiftCalError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoShiftCalError {
    fn into_shiftcal(self) -> ShiftCalError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → ShiftCalError */
/* -------------------------------------------------------------------------- */

impl IntoShiftCalError for SqlError {
    fn into_shiftcal(self) -> ShiftCalError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match err.code {
                    ErrorCode::DatabaseBusy => ShiftCalError::Database("database is busy".into()),
                    ErrorCode::DatabaseLocked => {
                        ShiftCalError::Database("database is locked".into())
                    }
                    ErrorCode::NotADatabase => {
                        ShiftCalError::Database("file is not a SQLite database".into())
                    }
                    ErrorCode::ConstraintViolation => {
                        ShiftCalError::Database(format!("constraint violation: {message}"))
                    }
                    _ => ShiftCalError::Database(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => ShiftCalError::NotFound("no rows returned by query".into()),
            RE::FromSqlConversionFailure(_, _, cause) => {
                ShiftCalError::Database(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                ShiftCalError::Database(format!("invalid column type: {ty}"))
            }
            RE::InvalidPath(path) => ShiftCalError::Database(format!(
                "invalid database path: {}",
                path.to_string_lossy()
            )),
            other => ShiftCalError::Database(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_shiftcal())
    }
}

/* -------------------------------------------------------------------------- */
/* r2d2::Error → ShiftCalError */
/* -------------------------------------------------------------------------- */

impl IntoShiftCalError for PoolError {
    fn into_shiftcal(self) -> ShiftCalError {
        ShiftCalError::Database(format!("connection pool: {self}"))
    }
}

impl From<PoolError> for InfraError {
    fn from(value: PoolError) -> Self {
        InfraError(value.into_shiftcal())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → ShiftCalError */
/* -------------------------------------------------------------------------- */

impl IntoShiftCalError for JsonError {
    fn into_shiftcal(self) -> ShiftCalError {
        if self.is_data() || self.is_syntax() || self.is_eof() {
            ShiftCalError::Persistence(format!("stored document is malformed: {self}"))
        } else {
            ShiftCalError::Internal(format!("json serialization failed: {self}"))
        }
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_shiftcal())
    }
}

/* -------------------------------------------------------------------------- */
/* tokio::task::JoinError → ShiftCalError */
/* -------------------------------------------------------------------------- */

impl IntoShiftCalError for JoinError {
    fn into_shiftcal(self) -> ShiftCalError {
        if self.is_cancelled() {
            ShiftCalError::Internal("blocking task cancelled".into())
        } else {
            ShiftCalError::Internal(format!("blocking task failed: {self}"))
        }
    }
}

impl From<JoinError> for InfraError {
    fn from(value: JoinError) -> Self {
        InfraError(value.into_shiftcal())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use rusqlite::ffi::{Error as FfiError, ErrorCode};

    use super::*;

    #[test]
    fn sqlite_busy_maps_to_database_error() {
        let err = SqlError::SqliteFailure(
            FfiError { code: ErrorCode::DatabaseBusy, extended_code: 5 },
            Some("database is locked".into()),
        );

        let mapped: ShiftCalError = InfraError::from(err).into();
        match mapped {
            ShiftCalError::Database(msg) => assert!(msg.contains("busy")),
            other => panic!("expected database error, got {other:?}"),
        }
    }

    #[test]
    fn no_rows_maps_to_not_found() {
        let mapped: ShiftCalError = InfraError::from(SqlError::QueryReturnedNoRows).into();
        assert!(matches!(mapped, ShiftCalError::NotFound(_)));
    }

    #[test]
    fn malformed_json_maps_to_persistence_error() {
        let err = serde_json::from_str::<serde_json::Value>("{ \"shifts\": ").unwrap_err();
        let mapped: ShiftCalError = InfraError::from(err).into();
        assert!(mapped.is_transient(), "got {mapped:?}");
    }

    #[tokio::test]
    async fn panicked_task_maps_to_internal_error() {
        let err = tokio::spawn(async { panic!("boom") }).await.unwrap_err();
        let mapped: ShiftCalError = InfraError::from(err).into();
        assert!(matches!(mapped, ShiftCalError::Internal(msg) if msg.contains("failed")));
    }
}
