//! Error types shared by the store and the console workflows.

use std::io;

use rusqlite::ErrorCode;
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure of a single persistence call.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },
    #[error("constraint violated while trying to {action}")]
    Constraint {
        action: &'static str,
        #[source]
        source: rusqlite::Error,
    },
    #[error("failed to {action}")]
    Sqlite {
        action: &'static str,
        #[source]
        source: rusqlite::Error,
    },
}

impl StoreError {
    /// Build a mapper for `map_err` that tags a SQLite failure with the action
    /// being attempted. Constraint violations get their own variant so callers
    /// can tell a dangling reference apart from a broken connection.
    pub(crate) fn sqlite(action: &'static str) -> impl FnOnce(rusqlite::Error) -> StoreError {
        move |source| {
            if matches!(
                source.sqlite_error_code(),
                Some(ErrorCode::ConstraintViolation)
            ) {
                StoreError::Constraint { action, source }
            } else {
                StoreError::Sqlite { action, source }
            }
        }
    }

    /// Message shown to the user. SQLite failures report rusqlite's own text,
    /// which carries the database message when SQLite supplied one.
    pub fn user_message(&self) -> String {
        match self {
            StoreError::NotFound { .. } => self.to_string(),
            StoreError::Constraint { source, .. } | StoreError::Sqlite { source, .. } => {
                source.to_string()
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Outcome of a workflow that did not complete. The dispatcher matches on the
/// variant to decide between reporting and shutting down.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("console I/O failed")]
    Prompt(#[from] io::Error),
    #[error("`{0}` is not a valid id")]
    InvalidId(String),
    #[error("input closed")]
    InputClosed,
}

impl WorkflowError {
    /// Message shown after "An error occurred:" in the console.
    pub fn user_message(&self) -> String {
        match self {
            WorkflowError::Store(err) => err.user_message(),
            WorkflowError::Prompt(err) => err.to_string(),
            WorkflowError::InvalidId(_) | WorkflowError::InputClosed => self.to_string(),
        }
    }
}
