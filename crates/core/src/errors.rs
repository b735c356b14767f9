//! Core error types for the team tracker.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the tracker.
///
/// The two not-found variants are raised directly by services and carry the
/// id that failed to resolve. Everything the request layer cannot attribute to
/// the caller ends up as `Database`.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Team member with ID {0} does not exist")]
    TeamMemberNotFound(i32),

    #[error("Goal with ID {0} does not exist")]
    GoalNotFound(i32),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),
}

/// Database-agnostic error type for storage operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert storage-specific errors (Diesel, SQLite, etc.) into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g., duplicate key).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// A foreign key constraint was violated.
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// A stored value could not be mapped back to a domain value.
    #[error("Corrupt stored value: {0}")]
    CorruptValue(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid mood value: {0}")]
    InvalidMood(String),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages() {
        assert_eq!(
            Error::TeamMemberNotFound(99999).to_string(),
            "Team member with ID 99999 does not exist"
        );
        assert_eq!(
            Error::GoalNotFound(42).to_string(),
            "Goal with ID 42 does not exist"
        );
    }

    #[test]
    fn test_unparseable_timestamp_is_a_validation_error() {
        let err: Error = chrono::NaiveDateTime::parse_from_str("yesterday", "%Y-%m-%d %H:%M:%S")
            .unwrap_err()
            .into();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::DateTimeParse(_))
        ));
    }
}
