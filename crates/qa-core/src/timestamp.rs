//! Persisted timestamp format.
//!
//! Timestamps are stored as TEXT in RFC 3339 UTC form with a fixed six-digit
//! fraction (`2026-02-09T14:30:00.000000Z`). Fixed width keeps lexical order
//! equal to chronological order, which `ORDER BY asked_at` relies on.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, SubsecRound, Utc};

use crate::errors::CoreError;

/// Current time at the precision that is persisted.
///
/// Values built from this compare equal to the same values read back
/// from storage.
#[must_use]
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Format a timestamp in the canonical persisted form.
#[must_use]
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a persisted timestamp.
///
/// Accepts RFC 3339 as well as `SQLite`'s `CURRENT_TIMESTAMP` form
/// (`2026-02-09 14:30:00`, optionally with a fraction), which rows written by
/// other tools may carry.
///
/// # Errors
///
/// Returns `CoreError::Validation` if `s` matches none of the formats.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, CoreError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| CoreError::Validation(format!("invalid timestamp '{s}'")))
}
