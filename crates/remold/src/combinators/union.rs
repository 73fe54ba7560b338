//! UNION combinator - left-biased disjunction of two validators
//!
//! Only an expected shape rejection from the left side triggers the
//! fallback. A defect from either side propagates immediately: a bug in a
//! custom validator must never be reinterpreted as "this branch did not
//! match".

use serde_json::Value;

use crate::foundation::{Raw, Validate, ValidationError};

// ============================================================================
// UNION COMBINATOR
// ============================================================================

/// Tries the left validator, falling back to the right on shape rejection.
///
/// Left-biased: when both sides would accept an input, the result is the
/// left side's output. When both reject, the two assertions combine into
/// `"<left>; or <right>"`, a failing named model contributing
/// `"<name>, that is <assertion>"`.
///
/// # Examples
///
/// ```
/// use remold::prelude::*;
/// use serde_json::json;
///
/// let id = union(number(), string());
///
/// assert_eq!(id.check(&json!(7)).unwrap(), Some(json!(7)));
/// assert_eq!(id.check(&json!("x7")).unwrap(), Some(json!("x7")));
/// assert_eq!(
///     id.check(&json!(true)).unwrap_err().to_string(),
///     "Expected a number; or a string.",
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Union<A, B> {
    left: A,
    right: B,
}

impl<A, B> Union<A, B> {
    /// Creates a new UNION combinator.
    pub fn new(left: A, right: B) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &A {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &B {
        &self.right
    }

    /// Decomposes the combinator into its parts.
    pub fn into_parts(self) -> (A, B) {
        (self.left, self.right)
    }
}

impl<A: Validate, B: Validate> Validate for Union<A, B> {
    fn validate(&self, raw: Raw<'_>) -> Result<Option<Value>, ValidationError> {
        let left_rejection = match self.left.validate(raw) {
            Ok(value) => return Ok(value),
            Err(ValidationError::Invalid(rejection)) => rejection,
            Err(defect) => return Err(defect),
        };

        match self.right.validate(raw) {
            Ok(value) => Ok(value),
            Err(ValidationError::Invalid(right_rejection)) => {
                Err(ValidationError::expected(format!(
                    "{}; or {}",
                    left_rejection.contextual_assertion(),
                    right_rejection.contextual_assertion()
                )))
            }
            Err(defect) => Err(defect),
        }
    }
}

/// Creates a UNION combinator.
pub fn union<A: Validate, B: Validate>(left: A, right: B) -> Union<A, B> {
    Union::new(left, right)
}

// ============================================================================
// TESTS
// ============================================================================
