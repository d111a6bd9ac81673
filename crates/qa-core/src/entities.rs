//! Entity structs for the qalog domain.
//!
//! `QaRecord` maps one-to-one onto a row of the `questions` table.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A submitted question and, once an operator has replied, its answer.
///
/// `answer` and `answered_at` are either both present or both absent.
/// Presence is what counts: `Some(String::new())` is an answered record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QaRecord {
    pub id: i64,
    pub question: String,
    pub answer: Option<String>,
    pub asked_at: DateTime<Utc>,
    pub answered_at: Option<DateTime<Utc>>,
}

impl QaRecord {
    #[must_use]
    pub const fn is_answered(&self) -> bool {
        self.answer.is_some()
    }
}

/// Result of a mutation addressed by id.
///
/// `NotFound` is a no-op, not a failure: the id may have been deleted
/// between listing and acting on it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[must_use]
pub enum MutationOutcome {
    Applied,
    NotFound,
}

impl MutationOutcome {
    /// Map an affected-row count onto an outcome.
    pub const fn from_rows_affected(rows: u64) -> Self {
        if rows == 0 { Self::NotFound } else { Self::Applied }
    }

    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::NotFound => "not_found",
        }
    }
}

/// Summary figures over the full record set.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RecordStats {
    pub total: u64,
    pub answered: u64,
    pub unanswered: u64,
    pub latest_asked_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(answer: Option<&str>) -> QaRecord {
        let now = Utc::now();
        QaRecord {
            id: 1,
            question: "What is 2+2?".into(),
            answer: answer.map(String::from),
            asked_at: now,
            answered_at: answer.map(|_| now),
        }
    }

    #[test]
    fn empty_answer_still_counts_as_answered() {
        assert!(!record(None).is_answered());
        assert!(record(Some("")).is_answered());
        assert!(record(Some("4")).is_answered());
    }

    #[test]
    fn outcome_from_rows_affected() {
        assert_eq!(MutationOutcome::from_rows_affected(0), MutationOutcome::NotFound);
        assert_eq!(MutationOutcome::from_rows_affected(1), MutationOutcome::Applied);
        assert!(MutationOutcome::Applied.is_applied());
        assert!(!MutationOutcome::NotFound.is_applied());
    }

    #[test]
    fn outcome_serializes_snake_case() {
        let json = serde_json::to_string(&MutationOutcome::NotFound).unwrap();
        assert_eq!(json, "\"not_found\"");
        assert_eq!(MutationOutcome::NotFound.as_str(), "not_found");
    }
}
