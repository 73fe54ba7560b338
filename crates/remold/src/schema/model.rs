//! MODEL - aggregates fields into a validator over whole objects
//!
//! A model owns an ordered definition mapping result keys to fields. It
//! is itself a validator, so models nest inside other models' fields,
//! which is how recursive schemas are built. Construction happens once at
//! schema-definition time; validation calls share the immutable model
//! freely.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::foundation::{Raw, Validate, ValidationError};
use crate::schema::Field;

// ============================================================================
// DEFINITION
// ============================================================================

/// An ordered mapping from result key to [`Field`].
///
/// Insertion order is evaluation order, which decides whose error is
/// reported first when several fields would fail.
pub type Definition = IndexMap<String, Field>;

// ============================================================================
// MODEL
// ============================================================================

/// A validator over whole objects, built from named fields.
///
/// Named models scope their failures (`"User expected ..."`); anonymous
/// models propagate field failures unchanged, so a nested anonymous
/// model's error is indistinguishable from its parent's own field error.
/// Error scoping is therefore opt-in per model.
///
/// # Examples
///
/// ```
/// use remold::prelude::*;
/// use serde_json::json;
///
/// let user = Model::named("User", definition! {
///     "name" => field(string()),
///     "age" => field(optional(number())),
/// });
///
/// let reshaped = user.apply(&json!({"name": "Al"})).unwrap();
/// assert_eq!(Value::Object(reshaped), json!({"name": "Al"}));
///
/// let error = user.apply(&json!({"age": 30})).unwrap_err();
/// assert_eq!(
///     error.to_string(),
///     "User expected an object with attribute 'name', that is a string.",
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    name: Option<String>,
    definition: Definition,
}

impl Model {
    /// Creates a model whose failures are scoped to `name`.
    pub fn named(name: impl Into<String>, definition: Definition) -> Self {
        Self {
            name: Some(name.into()),
            definition,
        }
    }

    /// Creates a model that propagates field failures unscoped.
    pub fn anonymous(definition: Definition) -> Self {
        Self {
            name: None,
            definition,
        }
    }

    /// The model's name, if it has one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The ordered definition backing this model.
    #[must_use]
    pub fn definition(&self) -> &Definition {
        &self.definition
    }

    /// Builds a new model whose definition is this one's plus
    /// `extension`, the extension winning on key collisions.
    ///
    /// The receiver is unchanged; extension is composition over copied
    /// definitions, not inheritance. `extension` may be a raw
    /// [`Definition`] or another [`Model`] (its definition is taken).
    ///
    /// # Examples
    ///
    /// ```
    /// use remold::prelude::*;
    /// use serde_json::json;
    ///
    /// let base = Model::named("Base", definition! {
    ///     "id" => field(number()),
    /// });
    /// let audited = base.extend("Audited", definition! {
    ///     "createdAt" => field(string()),
    /// });
    ///
    /// assert!(audited.apply(&json!({"id": 1, "createdAt": "now"})).is_ok());
    /// // The base model still validates exactly as before.
    /// assert!(base.apply(&json!({"id": 1})).is_ok());
    /// ```
    #[must_use]
    pub fn extend(&self, name: impl Into<String>, extension: impl Into<Definition>) -> Self {
        let mut definition = self.definition.clone();
        for (key, entry) in extension.into() {
            definition.insert(key, entry);
        }
        Self {
            name: Some(name.into()),
            definition,
        }
    }

    /// Validates `value` and returns the reshaped object.
    ///
    /// The entry point for callers holding a decoded JSON value.
    pub fn apply(&self, value: &Value) -> Result<Map<String, Value>, ValidationError> {
        match self.validate(Some(value))? {
            Some(Value::Object(entries)) => Ok(entries),
            _ => Err(ValidationError::defect(anyhow::anyhow!(
                "model validation produced a non-object result"
            ))),
        }
    }

    /// Validates `value` and deserializes the reshaped object into `T`.
    ///
    /// A deserialization failure after successful validation means the
    /// target type disagrees with the schema, which is a programming
    /// error; it surfaces as a defect, not a validation failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use remold::prelude::*;
    /// use serde::Deserialize;
    /// use serde_json::json;
    ///
    /// #[derive(Deserialize)]
    /// struct Budget {
    ///     min: i64,
    ///     max: i64,
    /// }
    ///
    /// let schema = Model::anonymous(definition! {
    ///     "min" => named_field("budget_min", number()),
    ///     "max" => named_field("budget_max", number()),
    /// });
    ///
    /// let budget: Budget = schema
    ///     .decode(&json!({"budget_min": 1, "budget_max": 5}))
    ///     .unwrap();
    /// assert_eq!(budget.min, 1);
    /// assert_eq!(budget.max, 5);
    /// ```
    pub fn decode<T: DeserializeOwned>(&self, value: &Value) -> Result<T, ValidationError> {
        let reshaped = self.apply(value)?;
        serde_json::from_value(Value::Object(reshaped)).map_err(ValidationError::defect)
    }

    /// Scopes a failure to this model's name, when it has one.
    fn scoped(&self, error: ValidationError) -> ValidationError {
        match &self.name {
            Some(name) => error.with_owner(name),
            None => error,
        }
    }
}

impl Validate for Model {
    fn validate(&self, raw: Raw<'_>) -> Result<Option<Value>, ValidationError> {
        let Some(source @ Value::Object(_)) = raw else {
            return Err(self.scoped(ValidationError::expected("an object")));
        };

        tracing::trace!(
            model = ?self.name,
            fields = self.definition.len(),
            "validating object"
        );

        let mut reshaped = Map::new();
        for (key, entry) in &self.definition {
            match entry.pluck(key, source) {
                Ok(Some(value)) => {
                    reshaped.insert(key.clone(), value);
                }
                // Absent field results are omitted, not set to null.
                Ok(None) => {}
                Err(error) => {
                    let error = self.scoped(error);
                    tracing::debug!(model = ?self.name, %error, "validation failed");
                    return Err(error);
                }
            }
        }
        Ok(Some(Value::Object(reshaped)))
    }
}

impl From<Model> for Definition {
    fn from(model: Model) -> Self {
        model.definition
    }
}

impl From<&Model> for Definition {
    fn from(model: &Model) -> Self {
        model.definition.clone()
    }
}

// ============================================================================
// TESTS
// ============================================================================
