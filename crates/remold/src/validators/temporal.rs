//! Temporal leaf validators - date, time and date-time strings
//!
//! External providers ship timestamps as strings; these leaves check the
//! format with `chrono` and pass the original string through unchanged.
//! Parsing into `chrono` types is left to the caller's typed structs.

use chrono::{DateTime, NaiveDate, NaiveTime};
use serde_json::Value;

use crate::foundation::{Raw, Validate, ValidationError};

// ============================================================================
// DATE
// ============================================================================

/// Accepts strings in `YYYY-MM-DD` form that name a real calendar date.
///
/// # Examples
///
/// ```
/// use remold::prelude::*;
/// use serde_json::json;
///
/// assert!(date().check(&json!("2024-02-29")).is_ok());
/// assert_eq!(
///     date().check(&json!("2023-02-29")).unwrap_err().to_string(),
///     "Expected a date string in YYYY-MM-DD format.",
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct IsDate;

impl Validate for IsDate {
    fn validate(&self, raw: Raw<'_>) -> Result<Option<Value>, ValidationError> {
        match raw {
            Some(value @ Value::String(text))
                if NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok() =>
            {
                Ok(Some(value.clone()))
            }
            _ => Err(ValidationError::expected(
                "a date string in YYYY-MM-DD format",
            )),
        }
    }
}

/// Creates a date validator.
pub fn date() -> IsDate {
    IsDate
}

// ============================================================================
// TIME
// ============================================================================

/// Accepts strings in `HH:MM` or `HH:MM:SS` form.
#[derive(Debug, Clone, Copy)]
pub struct IsTime;

fn parses_as_time(text: &str) -> bool {
    NaiveTime::parse_from_str(text, "%H:%M:%S").is_ok()
        || NaiveTime::parse_from_str(text, "%H:%M").is_ok()
}

impl Validate for IsTime {
    fn validate(&self, raw: Raw<'_>) -> Result<Option<Value>, ValidationError> {
        match raw {
            Some(value @ Value::String(text)) if parses_as_time(text) => Ok(Some(value.clone())),
            _ => Err(ValidationError::expected("a time string in HH:MM format")),
        }
    }
}

/// Creates a time validator.
pub fn time() -> IsTime {
    IsTime
}

// ============================================================================
// DATE-TIME
// ============================================================================

/// Accepts RFC 3339 / ISO 8601 date-time strings.
#[derive(Debug, Clone, Copy)]
pub struct IsDateTime;

impl Validate for IsDateTime {
    fn validate(&self, raw: Raw<'_>) -> Result<Option<Value>, ValidationError> {
        match raw {
            Some(value @ Value::String(text))
                if DateTime::parse_from_rfc3339(text).is_ok() =>
            {
                Ok(Some(value.clone()))
            }
            _ => Err(ValidationError::expected("an ISO 8601 date-time string")),
        }
    }
}

/// Creates a date-time validator.
pub fn datetime() -> IsDateTime {
    IsDateTime
}

// ============================================================================
// TESTS
// ============================================================================
