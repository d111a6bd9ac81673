//! # qa-db
//!
//! libSQL record store for qalog.
//!
//! Persists question/answer records in a single `questions` table and exposes
//! create, set-answer, list, get, delete, and stats operations. The schema is
//! created once when the store is opened; individual operations never issue DDL.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;

use error::DatabaseError;
use libsql::Builder;
use tracing::debug;

/// Handle to the question/answer store.
///
/// Holds one connection for its whole lifetime. Each repository method is a
/// single statement, so each runs as its own implicit transaction.
pub struct QaDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl QaDb {
    /// Open a local database at the given path, or `":memory:"` for a throwaway store.
    ///
    /// Creates the schema if absent. An existing table is never truncated.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened, the migration
    /// fails, or the existing table lacks the answer columns.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let qa_db = Self { db, conn };
        qa_db.run_migrations().await?;
        debug!(path, "record store opened");
        Ok(qa_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
