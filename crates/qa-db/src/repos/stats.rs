//! Summary figures over the record set.

use qa_core::entities::RecordStats;

use crate::QaDb;
use crate::error::DatabaseError;
use crate::helpers::{parse_optional_datetime, to_count};

impl QaDb {
    /// Count records and find the most recent question.
    ///
    /// A record counts as answered when `answer` is present, even if empty.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn stats(&self) -> Result<RecordStats, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                "SELECT COUNT(*), COUNT(answer), MAX(asked_at) FROM questions",
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;

        let total = to_count(row.get::<i64>(0)?, "total")?;
        let answered = to_count(row.get::<i64>(1)?, "answered")?;
        let latest = row.get::<Option<String>>(2)?;

        Ok(RecordStats {
            total,
            answered,
            unanswered: total.saturating_sub(answered),
            latest_asked_at: parse_optional_datetime(latest.as_deref())?,
        })
    }
}
