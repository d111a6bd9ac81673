//! Database migration runner.
//!
//! Embeds the SQL migration files at compile time and executes them once when
//! the store is opened. All statements use `IF NOT EXISTS` for idempotent
//! re-running.

use crate::QaDb;
use crate::error::DatabaseError;

/// Initial schema: the `questions` table.
const MIGRATION_001: &str = include_str!("../migrations/001_initial.sql");

/// Columns every supported `questions` table must carry.
const REQUIRED_COLUMNS: [&str; 5] = ["id", "question", "answer", "asked_at", "answered_at"];

impl QaDb {
    /// Run all embedded migrations, then verify the resulting table shape.
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_initial: {e}")))?;
        self.check_schema().await
    }

    /// Reject a pre-existing question-only table instead of altering it.
    async fn check_schema(&self) -> Result<(), DatabaseError> {
        let mut rows = self.conn.query("PRAGMA table_info(questions)", ()).await?;
        let mut columns = Vec::new();
        while let Some(row) = rows.next().await? {
            columns.push(row.get::<String>(1)?);
        }

        let missing = REQUIRED_COLUMNS
            .iter()
            .filter(|required| !columns.iter().any(|have| have.as_str() == **required))
            .copied()
            .collect::<Vec<_>>();

        if missing.is_empty() {
            return Ok(());
        }
        Err(DatabaseError::UnsupportedSchema(format!(
            "table 'questions' is missing column(s) {}; question-only stores are not migrated",
            missing.join(", ")
        )))
    }
}
