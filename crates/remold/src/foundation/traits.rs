//! Core traits for the reshaping system
//!
//! A validator is a pure capability: it looks at a raw boundary value and
//! either produces the reshaped value or fails with a
//! [`ValidationError`]. It has no identity beyond that behavior, so
//! anything implementing [`Validate`] plugs in anywhere a validator is
//! expected, including whole models.

use serde_json::Value;

use crate::foundation::ValidationError;

// ============================================================================
// RAW INPUT
// ============================================================================

/// A borrowed raw input value.
///
/// `None` means the source key was absent entirely, which external JSON
/// providers distinguish from an explicit `null` (`Some(Value::Null)`).
/// Both states flow through combinators as first-class inputs.
pub type Raw<'a> = Option<&'a Value>;

// ============================================================================
// CORE VALIDATE TRAIT
// ============================================================================

/// The core capability implemented by every validator.
///
/// `Ok(Some(value))` is the reshaped value. `Ok(None)` means the result is
/// absent: a model omits such a field's key from its result object
/// entirely. Implementations are immutable after construction, so a schema
/// built once can serve concurrent validations without locking.
///
/// # Examples
///
/// ```
/// use remold::foundation::{Raw, Validate, ValidationError};
/// use serde_json::{Value, json};
///
/// struct NonEmptyText;
///
/// impl Validate for NonEmptyText {
///     fn validate(&self, raw: Raw<'_>) -> Result<Option<Value>, ValidationError> {
///         match raw {
///             Some(value @ Value::String(text)) if !text.is_empty() => {
///                 Ok(Some(value.clone()))
///             }
///             _ => Err(ValidationError::expected("a non-empty string")),
///         }
///     }
/// }
///
/// let validator = NonEmptyText;
/// assert_eq!(validator.check(&json!("hi")).unwrap(), Some(json!("hi")));
/// assert!(validator.check(&json!("")).is_err());
/// ```
pub trait Validate: Send + Sync {
    /// Checks `raw` and produces the reshaped value.
    fn validate(&self, raw: Raw<'_>) -> Result<Option<Value>, ValidationError>;

    /// Convenience for validating a value that is known to be present.
    fn check(&self, value: &Value) -> Result<Option<Value>, ValidationError> {
        self.validate(Some(value))
    }
}

// ============================================================================
// FUNCTION ADAPTER
// ============================================================================

/// Adapts a plain function to the [`Validate`] capability.
///
/// Any function satisfying the validator contract can be plugged into a
/// field or combinator this way, which is how out-of-crate leaf validators
/// join a schema.
///
/// # Examples
///
/// ```
/// use remold::foundation::{ValidationError, from_fn};
/// use remold::foundation::Validate;
/// use serde_json::{Value, json};
///
/// let uppercased = from_fn(|raw| match raw {
///     Some(Value::String(text)) => Ok(Some(Value::String(text.to_uppercase()))),
///     _ => Err(ValidationError::expected("a string")),
/// });
///
/// assert_eq!(uppercased.check(&json!("abc")).unwrap(), Some(json!("ABC")));
/// ```
pub struct FromFn<F> {
    run: F,
}

impl<F> Validate for FromFn<F>
where
    F: Fn(Raw<'_>) -> Result<Option<Value>, ValidationError> + Send + Sync,
{
    fn validate(&self, raw: Raw<'_>) -> Result<Option<Value>, ValidationError> {
        (self.run)(raw)
    }
}

impl<F> std::fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn").field("run", &"<function>").finish()
    }
}

/// Wraps a function as a validator.
pub fn from_fn<F>(run: F) -> FromFn<F>
where
    F: Fn(Raw<'_>) -> Result<Option<Value>, ValidationError> + Send + Sync,
{
    FromFn { run }
}

// ============================================================================
// VALIDATE EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every [`Validate`] type, giving schemas a
/// fluent construction API.
///
/// # Examples
///
/// ```
/// use remold::prelude::*;
/// use serde_json::json;
///
/// let age = number().optional();
/// assert_eq!(age.validate(None).unwrap(), None);
/// assert_eq!(age.check(&json!(30)).unwrap(), Some(json!(30)));
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Accepts absent input, returning an absent result without invoking
    /// the inner validator.
    fn optional(self) -> crate::combinators::Optional<Self> {
        crate::combinators::Optional::new(self)
    }

    /// Accepts JSON `null`, passing it through unchanged.
    fn nullable(self) -> crate::combinators::Nullable<Self> {
        crate::combinators::Nullable::new(self)
    }

    /// Accepts absent input and JSON `null`, collapsing both to an absent
    /// result.
    fn blankable(self) -> crate::combinators::Blankable<Self> {
        crate::combinators::Blankable::new(self)
    }

    /// Tries this validator first, falling back to `other` when this one
    /// rejects the shape.
    fn union<V: Validate>(self, other: V) -> crate::combinators::Union<Self, V> {
        crate::combinators::Union::new(self, other)
    }

    /// Runs both validators on the same input and shallow-merges their
    /// object results, `other` winning key collisions.
    fn intersect<V: Validate>(self, other: V) -> crate::combinators::Intersect<Self, V> {
        crate::combinators::Intersect::new(self, other)
    }
}

impl<T: Validate> ValidateExt for T {}

// ============================================================================
// TESTS
// ============================================================================
