//! ARRAY combinator - validates every element of a JSON array
//!
//! Fail-fast: the first element that fails aborts the whole validation,
//! so multi-error input reports the lowest failing index and nothing else.

use serde_json::Value;

use crate::foundation::{Raw, Validate, ValidationError};

// ============================================================================
// ARRAY-OF COMBINATOR
// ============================================================================

/// Validates a JSON array element-wise.
///
/// Non-array input fails with `"an array"`. Elements are validated in
/// index order, each rejection reading
/// `"an array with value at [i], that is <inner assertion>"`. An element
/// validator producing an absent result contributes JSON `null`, since
/// arrays cannot hold absence.
///
/// # Examples
///
/// ```
/// use remold::prelude::*;
/// use serde_json::json;
///
/// let tags = array_of(string());
///
/// assert_eq!(tags.check(&json!([])).unwrap(), Some(json!([])));
/// assert_eq!(
///     tags.check(&json!(["a", "b"])).unwrap(),
///     Some(json!(["a", "b"])),
/// );
/// assert_eq!(
///     tags.check(&json!(["a", 1])).unwrap_err().to_string(),
///     "Expected an array with value at [1], that is a string.",
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ArrayOf<V> {
    inner: V,
}

impl<V> ArrayOf<V> {
    /// Creates a new ARRAY combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: Validate> Validate for ArrayOf<V> {
    fn validate(&self, raw: Raw<'_>) -> Result<Option<Value>, ValidationError> {
        let Some(Value::Array(items)) = raw else {
            return Err(ValidationError::expected("an array"));
        };

        let mut reshaped = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let value = self.inner.validate(Some(item)).map_err(|error| {
                error.prefix_assertion(&format!("an array with value at [{index}], that is"))
            })?;
            reshaped.push(value.unwrap_or(Value::Null));
        }
        Ok(Some(Value::Array(reshaped)))
    }
}

/// Creates an ARRAY combinator.
pub fn array_of<V: Validate>(inner: V) -> ArrayOf<V> {
    ArrayOf::new(inner)
}

// ============================================================================
// TESTS
// ============================================================================
