//! Question/answer record repository.
//!
//! Every method is a single SQL statement against `questions`. Text is stored
//! exactly as given; blank-input checks belong to the caller.

use qa_core::entities::{MutationOutcome, QaRecord};
use qa_core::timestamp::{format_timestamp, now};
use tracing::{debug, warn};

use crate::QaDb;
use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_optional_datetime};

const SELECT_COLUMNS: &str = "SELECT id, question, answer, asked_at, answered_at FROM questions";

fn row_to_record(row: &libsql::Row) -> Result<QaRecord, DatabaseError> {
    let answered_at = row.get::<Option<String>>(4)?;
    Ok(QaRecord {
        id: row.get::<i64>(0)?,
        question: row.get::<String>(1)?,
        // Read as-is: an empty answer is still an answer.
        answer: row.get::<Option<String>>(2)?,
        asked_at: parse_datetime(&row.get::<String>(3)?)?,
        answered_at: parse_optional_datetime(answered_at.as_deref())?,
    })
}

impl QaDb {
    /// Insert a new unanswered question and return the stored record.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the insert fails.
    pub async fn create_question(&self, question: &str) -> Result<QaRecord, DatabaseError> {
        let asked_at = now();

        self.conn
            .execute(
                "INSERT INTO questions (question, asked_at) VALUES (?1, ?2)",
                libsql::params![question, format_timestamp(asked_at)],
            )
            .await?;
        let id = self.conn.last_insert_rowid();
        debug!(id, "question recorded");

        Ok(QaRecord {
            id,
            question: question.to_string(),
            answer: None,
            asked_at,
            answered_at: None,
        })
    }

    /// Set or overwrite the answer of record `id`, stamping `answered_at` with now.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the update fails. A missing id is not an
    /// error; it yields `MutationOutcome::NotFound`.
    pub async fn set_answer(&self, id: i64, answer: &str) -> Result<MutationOutcome, DatabaseError> {
        let answered_at = now();
        let affected = self
            .conn
            .execute(
                "UPDATE questions SET answer = ?1, answered_at = ?2 WHERE id = ?3",
                libsql::params![answer, format_timestamp(answered_at), id],
            )
            .await?;

        let outcome = MutationOutcome::from_rows_affected(affected);
        if outcome.is_applied() {
            debug!(id, "answer recorded");
        } else {
            warn!(id, "answer not recorded: no such record");
        }
        Ok(outcome)
    }

    /// Snapshot of every record, most recently asked first (ties: higher id first).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row cannot be parsed.
    pub async fn list_all(&self) -> Result<Vec<QaRecord>, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("{SELECT_COLUMNS} ORDER BY asked_at DESC, id DESC"),
                (),
            )
            .await?;

        let mut records = Vec::new();
        while let Some(row) = rows.next().await? {
            records.push(row_to_record(&row)?);
        }
        Ok(records)
    }

    /// Look up a single record.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or the row cannot be parsed.
    pub async fn get_record(&self, id: i64) -> Result<Option<QaRecord>, DatabaseError> {
        let mut rows = self
            .conn
            .query(&format!("{SELECT_COLUMNS} WHERE id = ?1"), libsql::params![id])
            .await?;
        rows.next().await?.as_ref().map(row_to_record).transpose()
    }

    /// Permanently remove record `id`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the delete fails. A missing id yields
    /// `MutationOutcome::NotFound`.
    pub async fn delete_record(&self, id: i64) -> Result<MutationOutcome, DatabaseError> {
        let affected = self
            .conn
            .execute("DELETE FROM questions WHERE id = ?1", libsql::params![id])
            .await?;

        let outcome = MutationOutcome::from_rows_affected(affected);
        if outcome.is_applied() {
            debug!(id, "record deleted");
        } else {
            warn!(id, "delete skipped: no such record");
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::QaDb;
    use qa_core::entities::MutationOutcome;

    async fn test_db() -> QaDb {
        QaDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn create_returns_unanswered_record() {
        let db = test_db().await;
        let record = db.create_question("What is 2+2?").await.unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.question, "What is 2+2?");
        assert!(record.answer.is_none());
        assert!(record.answered_at.is_none());
    }

    #[tokio::test]
    async fn created_record_matches_stored_row() {
        let db = test_db().await;
        let created = db.create_question("Stored as given  ").await.unwrap();
        let stored = db.get_record(created.id).await.unwrap().unwrap();
        assert_eq!(stored, created);
    }

    #[tokio::test]
    async fn store_does_not_validate_text() {
        let db = test_db().await;
        let record = db.create_question("").await.unwrap();
        assert_eq!(record.question, "");
        assert_eq!(
            db.set_answer(record.id, "").await.unwrap(),
            MutationOutcome::Applied
        );

        let stored = db.get_record(record.id).await.unwrap().unwrap();
        assert_eq!(stored.answer.as_deref(), Some(""));
        assert!(stored.is_answered());
        assert!(stored.answered_at.is_some());
    }

    #[tokio::test]
    async fn get_missing_record_is_none() {
        let db = test_db().await;
        assert!(db.get_record(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() {
        let db = test_db().await;
        assert_eq!(
            db.set_answer(7, "nobody asked").await.unwrap(),
            MutationOutcome::NotFound
        );
        assert_eq!(db.delete_record(7).await.unwrap(), MutationOutcome::NotFound);
    }
}
