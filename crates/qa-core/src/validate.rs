//! Caller-side input checks.
//!
//! The record store persists whatever text it is given. Callers run these
//! checks before invoking it.

use crate::errors::CoreError;

/// Reject text that is empty after trimming surrounding whitespace.
///
/// Returns the input unchanged on success; the trimmed form is only used
/// for the emptiness check.
///
/// # Errors
///
/// Returns `CoreError::Validation` naming `field` when `value` is blank.
pub fn require_text<'a>(field: &str, value: &'a str) -> Result<&'a str, CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(value)
}
