use thiserror::Error;

// Database modules
pub mod connection;
pub mod migrations;

// Re-export database connection types
pub use connection::*;

/// Database error enum
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A configuration value could not be parsed
    #[error("Invalid value for {name}: {value:?}")]
    InvalidConfig {
        /// Name of the offending environment variable
        name: String,
        /// The raw value that was rejected
        value: String,
    },

    /// The directory holding the database file could not be created
    #[error("Failed to create database directory {path}: {source}")]
    DirectoryCreation {
        /// Directory that could not be created
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// SQLite error
    #[error("SQLite error: {0}")]
    SqliteError(#[from] rusqlite::Error),

    /// SQLite connection pool error
    #[error("SQLite connection pool error: {0}")]
    SqlitePoolError(#[from] r2d2::Error),

    /// Migration error
    #[error("Database migration error: {0}")]
    MigrationError(String),
}
