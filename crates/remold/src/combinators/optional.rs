//! OPTIONAL, NULLABLE and BLANKABLE combinators - absence handling
//!
//! External providers distinguish a key that is absent from a key that is
//! explicitly `null`. These three combinators widen a validator's accepted
//! domain across that distinction, each with its own policy.

use serde_json::Value;

use crate::foundation::{Raw, Validate, ValidationError};

// ============================================================================
// OPTIONAL COMBINATOR
// ============================================================================

/// Accepts absent input.
///
/// Absent input produces an absent result without invoking the inner
/// validator; anything else is delegated. A rejected value reads
/// `"undefined or <inner assertion>"`.
///
/// # Examples
///
/// ```
/// use remold::prelude::*;
/// use serde_json::json;
///
/// let age = optional(number());
///
/// assert_eq!(age.validate(None).unwrap(), None);
/// assert_eq!(age.check(&json!(30)).unwrap(), Some(json!(30)));
/// assert_eq!(
///     age.check(&json!("x")).unwrap_err().to_string(),
///     "Expected undefined or a number.",
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Optional<V> {
    inner: V,
}

impl<V> Optional<V> {
    /// Creates a new OPTIONAL combinator.
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

impl<V: Validate> Validate for Optional<V> {
    fn validate(&self, raw: Raw<'_>) -> Result<Option<Value>, ValidationError> {
        match raw {
            None => Ok(None),
            present => self
                .inner
                .validate(present)
                .map_err(|error| error.prefix_assertion("undefined or")),
        }
    }
}

/// Creates an OPTIONAL combinator.
pub fn optional<V: Validate>(inner: V) -> Optional<V> {
    Optional::new(inner)
}

// ============================================================================
// NULLABLE COMBINATOR
// ============================================================================

/// Accepts JSON `null`, passing it through unchanged.
///
/// Explicit `null` survives into the result (a model keeps the key with a
/// `null` value); anything else is delegated. A rejected value reads
/// `"null or <inner assertion>"`.
#[derive(Debug, Clone, Copy)]
pub struct Nullable<V> {
    inner: V,
}

impl<V> Nullable<V> {
    /// Creates a new NULLABLE combinator.
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

impl<V: Validate> Validate for Nullable<V> {
    fn validate(&self, raw: Raw<'_>) -> Result<Option<Value>, ValidationError> {
        match raw {
            Some(Value::Null) => Ok(Some(Value::Null)),
            other => self
                .inner
                .validate(other)
                .map_err(|error| error.prefix_assertion("null or")),
        }
    }
}

/// Creates a NULLABLE combinator.
pub fn nullable<V: Validate>(inner: V) -> Nullable<V> {
    Nullable::new(inner)
}

// ============================================================================
// BLANKABLE COMBINATOR
// ============================================================================

/// Accepts absent input and JSON `null`, collapsing both to absence.
///
/// Models an upstream serializer that conflates "not set" with an explicit
/// `null`: either input produces an absent result, so a model omits the
/// key rather than carrying `null` forward. A rejected value reads
/// `"null, undefined, or <inner assertion>"`.
#[derive(Debug, Clone, Copy)]
pub struct Blankable<V> {
    inner: V,
}

impl<V> Blankable<V> {
    /// Creates a new BLANKABLE combinator.
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

impl<V: Validate> Validate for Blankable<V> {
    fn validate(&self, raw: Raw<'_>) -> Result<Option<Value>, ValidationError> {
        match raw {
            None | Some(Value::Null) => Ok(None),
            present => self
                .inner
                .validate(present)
                .map_err(|error| error.prefix_assertion("null, undefined, or")),
        }
    }
}

/// Creates a BLANKABLE combinator.
pub fn blankable<V: Validate>(inner: V) -> Blankable<V> {
    Blankable::new(inner)
}

// ============================================================================
// TESTS
// ============================================================================
