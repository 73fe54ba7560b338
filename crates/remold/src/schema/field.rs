//! FIELD - binds a validator to a key-resolution rule
//!
//! A field is the bridge between an object key and a validator: it plucks
//! a raw value out of a source object and delegates, prefixing rejections
//! with the attribute path. Fields are immutable after construction and
//! cheap to clone, so one field can serve many model definitions.

use std::borrow::Cow;
use std::sync::Arc;

use serde_json::Value;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// KEY RESOLUTION
// ============================================================================

/// How a field turns the key requested by a model into the source key.
#[derive(Debug, Clone)]
enum KeyRule {
    /// Use the requested key as-is.
    Requested,
    /// Always read this exact source key, regardless of the requested one.
    Exact(String),
    /// Derive the source key by snake_casing the requested camelCase key.
    SnakeCase,
    /// Ignore keys entirely; hand the whole source object to the validator.
    Flattened,
}

/// Converts a camelCase key to the snake_case spelling external providers
/// commonly use.
fn snake_case(key: &str) -> String {
    let mut derived = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            derived.push('_');
            derived.push(ch.to_ascii_lowercase());
        } else {
            derived.push(ch);
        }
    }
    derived
}

// ============================================================================
// FIELD
// ============================================================================

/// One entry of a model definition: a validator plus a key rule.
///
/// # Examples
///
/// ```
/// use remold::prelude::*;
/// use serde_json::json;
///
/// let schema = Model::anonymous(definition! {
///     // result key "fullName", source key "full_name"
///     "fullName" => snake_case_field(string()),
///     // result key "max", source key "budget_max"
///     "max" => named_field("budget_max", number()),
/// });
///
/// let reshaped = schema
///     .apply(&json!({"full_name": "Al", "budget_max": 5}))
///     .unwrap();
/// assert_eq!(reshaped["fullName"], json!("Al"));
/// assert_eq!(reshaped["max"], json!(5));
/// ```
#[derive(Clone)]
pub struct Field {
    validator: Arc<dyn Validate>,
    key_rule: KeyRule,
}

impl Field {
    /// Creates a field that reads the requested key as-is.
    pub fn new(validator: impl Validate + 'static) -> Self {
        Self {
            validator: Arc::new(validator),
            key_rule: KeyRule::Requested,
        }
    }

    /// Creates a field that always reads `key` from the source object.
    pub fn renamed(key: impl Into<String>, validator: impl Validate + 'static) -> Self {
        Self {
            validator: Arc::new(validator),
            key_rule: KeyRule::Exact(key.into()),
        }
    }

    /// Creates a field that snake_cases the requested key before reading.
    pub fn snake_cased(validator: impl Validate + 'static) -> Self {
        Self {
            validator: Arc::new(validator),
            key_rule: KeyRule::SnakeCase,
        }
    }

    /// Creates a field that hands the entire source object to its
    /// validator, ignoring keys. Used to merge several source keys into
    /// one result key via a nested model.
    pub fn flattened(validator: impl Validate + 'static) -> Self {
        Self {
            validator: Arc::new(validator),
            key_rule: KeyRule::Flattened,
        }
    }

    /// Plucks the value for `requested` out of `source` and validates it.
    ///
    /// `source` must be a JSON object; models guarantee that before
    /// iterating their fields. Absence of the resolved key is not an
    /// error here; it reaches the validator as absent input.
    pub(crate) fn pluck(
        &self,
        requested: &str,
        source: &Value,
    ) -> Result<Option<Value>, ValidationError> {
        let source_key: Cow<'_, str> = match &self.key_rule {
            KeyRule::Flattened => return self.validator.validate(Some(source)),
            KeyRule::Requested => Cow::Borrowed(requested),
            KeyRule::Exact(key) => Cow::Borrowed(key.as_str()),
            KeyRule::SnakeCase => Cow::Owned(snake_case(requested)),
        };

        self.validator
            .validate(source.get(source_key.as_ref()))
            .map_err(|error| {
                error.prefix_assertion(&format!(
                    "an object with attribute '{source_key}', that is"
                ))
            })
    }
}

impl std::fmt::Debug for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("key_rule", &self.key_rule)
            .field("validator", &"<validator>")
            .finish()
    }
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Creates a field that reads the requested key as-is.
pub fn field(validator: impl Validate + 'static) -> Field {
    Field::new(validator)
}

/// Creates a field that always reads `key` from the source object.
pub fn named_field(key: impl Into<String>, validator: impl Validate + 'static) -> Field {
    Field::renamed(key, validator)
}

/// Creates a field that snake_cases the requested key before reading.
pub fn snake_case_field(validator: impl Validate + 'static) -> Field {
    Field::snake_cased(validator)
}

/// Creates a field that hands the whole source object to its validator.
pub fn flattened_field(validator: impl Validate + 'static) -> Field {
    Field::flattened(validator)
}

// ============================================================================
// TESTS
// ============================================================================
