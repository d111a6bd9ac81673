//! Row-to-entity parsing helpers.

use chrono::{DateTime, Utc};
use qa_core::timestamp::parse_timestamp;

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string is not a recognised timestamp.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    parse_timestamp(s)
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse an optional TEXT column as `Option<DateTime<Utc>>`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string cannot be parsed.
pub fn parse_optional_datetime(s: Option<&str>) -> Result<Option<DateTime<Utc>>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => Ok(Some(parse_datetime(s)?)),
        _ => Ok(None),
    }
}

/// Convert a SQL integer aggregate to a count.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` for a negative value.
pub fn to_count(value: i64, what: &str) -> Result<u64, DatabaseError> {
    u64::try_from(value)
        .map_err(|_| DatabaseError::InvalidState(format!("negative {what}: {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_datetime_treats_empty_as_absent() {
        assert_eq!(parse_optional_datetime(None).unwrap(), None);
        assert_eq!(parse_optional_datetime(Some("")).unwrap(), None);
        assert!(
            parse_optional_datetime(Some("2026-02-09T14:30:00.000000Z"))
                .unwrap()
                .is_some()
        );
    }

    #[test]
    fn bad_datetime_is_a_query_error() {
        assert!(matches!(
            parse_datetime("not a time"),
            Err(DatabaseError::Query(_))
        ));
    }

    #[test]
    fn negative_count_is_invalid() {
        assert_eq!(to_count(3, "total").unwrap(), 3);
        assert!(matches!(
            to_count(-1, "total"),
            Err(DatabaseError::InvalidState(_))
        ));
    }
}
