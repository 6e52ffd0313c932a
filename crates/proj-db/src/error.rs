//! Error types for proj-db.

use proj_core::errors::CoreError;
use thiserror::Error;

/// Errors from the store and the data-access layer.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The store could not be reached or a connection could not be prepared.
    #[error("Database unavailable: {0}")]
    Unavailable(String),

    /// A SQL statement failed or a column held an unreadable value.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema bootstrap failed.
    #[error("Schema bootstrap failed: {0}")]
    Schema(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (e.g., modifying a project with no id).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}

/// Errors surfaced by [`crate::service::ProjectsService`].
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl ServiceError {
    /// The missing id, when this is a not-found or does-not-exist failure.
    #[must_use]
    pub const fn missing_id(&self) -> Option<i64> {
        match self {
            Self::Core(core) => core.target_id(),
            Self::Database(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_error_displays_core_message_verbatim() {
        let err = ServiceError::from(CoreError::does_not_exist("Project", 42));
        assert_eq!(err.to_string(), "Project with ID=42 does not exist");
        assert_eq!(err.missing_id(), Some(42));
    }

    #[test]
    fn database_failures_carry_no_id() {
        let err = ServiceError::from(DatabaseError::Unavailable("refused".into()));
        assert_eq!(err.to_string(), "Database unavailable: refused");
        assert_eq!(err.missing_id(), None);
    }
}
