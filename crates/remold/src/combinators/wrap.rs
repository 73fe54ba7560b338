//! WRAP-ERROR combinator - assertion prefixing
//!
//! The public face of the message-composition primitive
//! ([`ValidationError::prefix_assertion`]) that every other wrapping layer
//! in the crate uses to build sentence paths.

use std::borrow::Cow;

use serde_json::Value;

use crate::foundation::{Raw, Validate, ValidationError};

// ============================================================================
// WRAP-ERROR COMBINATOR
// ============================================================================

/// Prepends a prefix to the assertion of an inner shape rejection.
///
/// Defects pass through untouched, as everywhere else.
///
/// # Examples
///
/// ```
/// use remold::prelude::*;
/// use serde_json::json;
///
/// let validator = wrap_error(number(), "a count, that is");
/// assert_eq!(
///     validator.check(&json!("x")).unwrap_err().to_string(),
///     "Expected a count, that is a number.",
/// );
/// ```
#[derive(Debug, Clone)]
pub struct WrapError<V> {
    inner: V,
    prefix: Cow<'static, str>,
}

impl<V> WrapError<V> {
    /// Creates a new WRAP-ERROR combinator.
    pub fn new(inner: V, prefix: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            prefix: prefix.into(),
        }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Returns the prefix added to rejections.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: Validate> Validate for WrapError<V> {
    fn validate(&self, raw: Raw<'_>) -> Result<Option<Value>, ValidationError> {
        self.inner
            .validate(raw)
            .map_err(|error| error.prefix_assertion(&self.prefix))
    }
}

/// Creates a WRAP-ERROR combinator.
pub fn wrap_error<V: Validate>(inner: V, prefix: impl Into<Cow<'static, str>>) -> WrapError<V> {
    WrapError::new(inner, prefix)
}

// ============================================================================
// TESTS
// ============================================================================
