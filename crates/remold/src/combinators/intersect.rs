//! INTERSECT combinator - conjunction with object merging
//!
//! Both sides always run against the same input. Failures propagate
//! unwrapped, the left side's first; successes shallow-merge.

use serde_json::{Map, Value};

use crate::foundation::{Raw, Validate, ValidationError};

// ============================================================================
// INTERSECT COMBINATOR
// ============================================================================

/// Runs two validators on the same input and merges their object results.
///
/// Both validators always run, even when the left one has already failed;
/// when both fail, the left error is the one reported. On success the two
/// results are shallow-merged into one plain object, the right side
/// winning key collisions. A side producing a non-object (or absent)
/// result contributes nothing to the merge, so intersect cannot preserve
/// a non-object output shape.
///
/// # Examples
///
/// ```
/// use remold::prelude::*;
/// use serde_json::json;
///
/// let identity = Model::anonymous(definition! {
///     "id" => field(number()),
/// });
/// let audit = Model::anonymous(definition! {
///     "createdAt" => field(string()),
/// });
///
/// let combined = intersect(identity, audit);
/// let reshaped = combined
///     .check(&json!({"id": 1, "createdAt": "2024-01-01"}))
///     .unwrap();
/// assert_eq!(
///     reshaped,
///     Some(json!({"id": 1, "createdAt": "2024-01-01"})),
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Intersect<A, B> {
    left: A,
    right: B,
}

impl<A, B> Intersect<A, B> {
    /// Creates a new INTERSECT combinator.
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

impl<A: Validate, B: Validate> Validate for Intersect<A, B> {
    fn validate(&self, raw: Raw<'_>) -> Result<Option<Value>, ValidationError> {
        let left = self.left.validate(raw);
        let right = self.right.validate(raw);

        let mut merged = Map::new();
        if let Some(Value::Object(entries)) = left? {
            merged.extend(entries);
        }
        if let Some(Value::Object(entries)) = right? {
            merged.extend(entries);
        }
        Ok(Some(Value::Object(merged)))
    }
}

/// Creates an INTERSECT combinator.
pub fn intersect<A: Validate, B: Validate>(left: A, right: B) -> Intersect<A, B> {
    Intersect::new(left, right)
}

// ============================================================================
// TESTS
// ============================================================================
