//! Scalar leaf validators - strings, numbers, booleans
//!
//! Leaves pass a matching value through unchanged and reject everything
//! else, including absent input, with their one-line assertion. Key-path
//! context is added by the layers above them.

use serde_json::Value;

use crate::foundation::{Raw, Validate, ValidationError};

// ============================================================================
// STRING
// ============================================================================

/// Accepts any JSON string.
///
/// # Examples
///
/// ```
/// use remold::prelude::*;
/// use serde_json::json;
///
/// assert_eq!(string().check(&json!("hi")).unwrap(), Some(json!("hi")));
/// assert_eq!(
///     string().check(&json!(1)).unwrap_err().to_string(),
///     "Expected a string.",
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct IsString;

impl Validate for IsString {
    fn validate(&self, raw: Raw<'_>) -> Result<Option<Value>, ValidationError> {
        match raw {
            Some(value @ Value::String(_)) => Ok(Some(value.clone())),
            _ => Err(ValidationError::expected("a string")),
        }
    }
}

/// Creates a string validator.
pub fn string() -> IsString {
    IsString
}

// ============================================================================
// NUMBER
// ============================================================================

/// Accepts any JSON number.
#[derive(Debug, Clone, Copy)]
pub struct IsNumber;

impl Validate for IsNumber {
    fn validate(&self, raw: Raw<'_>) -> Result<Option<Value>, ValidationError> {
        match raw {
            Some(value @ Value::Number(_)) => Ok(Some(value.clone())),
            _ => Err(ValidationError::expected("a number")),
        }
    }
}

/// Creates a number validator.
pub fn number() -> IsNumber {
    IsNumber
}

// ============================================================================
// INTEGER
// ============================================================================

/// Accepts JSON numbers with an integral value.
#[derive(Debug, Clone, Copy)]
pub struct IsInteger;

impl Validate for IsInteger {
    fn validate(&self, raw: Raw<'_>) -> Result<Option<Value>, ValidationError> {
        match raw {
            Some(value @ Value::Number(number)) if number.is_i64() || number.is_u64() => {
                Ok(Some(value.clone()))
            }
            _ => Err(ValidationError::expected("an integer")),
        }
    }
}

/// Creates an integer validator.
pub fn integer() -> IsInteger {
    IsInteger
}

// ============================================================================
// BOOLEAN
// ============================================================================

/// Accepts JSON `true` and `false`.
#[derive(Debug, Clone, Copy)]
pub struct IsBoolean;

impl Validate for IsBoolean {
    fn validate(&self, raw: Raw<'_>) -> Result<Option<Value>, ValidationError> {
        match raw {
            Some(value @ Value::Bool(_)) => Ok(Some(value.clone())),
            _ => Err(ValidationError::expected("a boolean")),
        }
    }
}

/// Creates a boolean validator.
pub fn boolean() -> IsBoolean {
    IsBoolean
}

// ============================================================================
// TESTS
// ============================================================================
