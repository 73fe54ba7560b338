//! Enumeration leaf validator - string membership in a fixed value set

use serde_json::Value;

use crate::foundation::{Raw, Validate, ValidationError};

// ============================================================================
// ENUM-OF VALIDATOR
// ============================================================================

/// Accepts strings that are members of a fixed value set.
///
/// Non-string input fails with `"a string"`; a string outside the set
/// fails with `"a value in the enum"`. A member passes through unchanged.
///
/// # Examples
///
/// ```
/// use remold::prelude::*;
/// use serde_json::json;
///
/// let status = enum_of(["open", "closed"]);
///
/// assert_eq!(status.check(&json!("open")).unwrap(), Some(json!("open")));
/// assert_eq!(
///     status.check(&json!("pending")).unwrap_err().to_string(),
///     "Expected a value in the enum.",
/// );
/// assert_eq!(
///     status.check(&json!(1)).unwrap_err().to_string(),
///     "Expected a string.",
/// );
/// ```
#[derive(Debug, Clone)]
pub struct EnumOf {
    values: Vec<String>,
}

impl EnumOf {
    /// Creates a validator over the given value set.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// The accepted values, in declaration order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl Validate for EnumOf {
    fn validate(&self, raw: Raw<'_>) -> Result<Option<Value>, ValidationError> {
        let Some(value @ Value::String(candidate)) = raw else {
            return Err(ValidationError::expected("a string"));
        };
        if self.values.iter().any(|member| member == candidate) {
            Ok(Some(value.clone()))
        } else {
            Err(ValidationError::expected("a value in the enum"))
        }
    }
}

/// Creates an enumeration validator.
pub fn enum_of<I, S>(values: I) -> EnumOf
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    EnumOf::new(values)
}

// ============================================================================
// TESTS
// ============================================================================
