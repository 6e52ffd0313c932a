//! Cross-cutting error types.
//!
//! Store-level failures (`DatabaseError`) live in `proj-db`. The variants here
//! are business-level failures raised by the service layer and understood by
//! every caller.

use thiserror::Error;

/// Errors that can be raised by any crate in the workspace.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A lookup by id found nothing.
    #[error("{entity_type} with ID={id} was not found")]
    NotFound { entity_type: String, id: i64 },

    /// An update or delete targeted a row that does not exist.
    #[error("{entity_type} with ID={id} does not exist")]
    DoesNotExist { entity_type: String, id: i64 },

    /// Input failed validation (format, range).
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    #[must_use]
    pub fn not_found(entity_type: &str, id: i64) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id,
        }
    }

    #[must_use]
    pub fn does_not_exist(entity_type: &str, id: i64) -> Self {
        Self::DoesNotExist {
            entity_type: entity_type.to_string(),
            id,
        }
    }

    /// The id carried by a `NotFound` or `DoesNotExist` failure.
    #[must_use]
    pub const fn target_id(&self) -> Option<i64> {
        match self {
            Self::NotFound { id, .. } | Self::DoesNotExist { id, .. } => Some(*id),
            Self::Validation(_) => None,
        }
    }
}
