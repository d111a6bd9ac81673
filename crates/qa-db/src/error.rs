//! Database error types for qa-db.

use thiserror::Error;

/// Errors from record store operations.
///
/// Every variant is a storage failure from the caller's point of view;
/// none of them is retried.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or returned data that could not be parsed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// The existing `questions` table has a shape this version cannot use.
    #[error("Unsupported schema: {0}")]
    UnsupportedSchema(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}
