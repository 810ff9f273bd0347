use thiserror::Error;
use crate::database::DatabaseError;

/// Error type for repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Database error (pool checkout, configuration)
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// SQLite error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A write was rejected by a uniqueness or other table constraint
    #[error("Constraint violation: {0}")]
    Conflict(String),

    /// The blocking task running the query failed to complete
    #[error("Storage task failed: {0}")]
    Task(String),
}

impl RepositoryError {
    /// Classify an error raised by an INSERT, separating constraint
    /// violations from other store faults
    pub fn from_write(error: rusqlite::Error) -> Self {
        match error {
            rusqlite::Error::SqliteFailure(ref failure, ref message)
                if failure.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                RepositoryError::Conflict(
                    message.clone().unwrap_or_else(|| failure.to_string()),
                )
            }
            other => RepositoryError::Sqlite(other),
        }
    }

    /// Whether the error is a constraint violation
    pub fn is_conflict(&self) -> bool {
        matches!(self, RepositoryError::Conflict(_))
    }
}
