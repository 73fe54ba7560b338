//! LAZY combinator - deferred validator initialization

use std::sync::OnceLock;

use serde_json::Value;

use crate::foundation::{Raw, Validate, ValidationError};

// ============================================================================
// LAZY COMBINATOR
// ============================================================================

/// Defers validator construction until first use.
///
/// Exists to break definition-order cycles: two schemas that reference
/// each other (or a schema that references itself) cannot both be built
/// eagerly, so the cyclic edge is expressed as a factory that resolves on
/// the first validation. The resolved validator is cached, so the factory
/// runs at most once per `Lazy` instance.
///
/// # Examples
///
/// ```
/// use remold::prelude::*;
/// use serde_json::json;
///
/// fn category() -> Model {
///     Model::named("Category", definition! {
///         "name" => field(string()),
///         "children" => field(optional(array_of(lazy(category)))),
///     })
/// }
///
/// let reshaped = category()
///     .apply(&json!({"name": "root", "children": [{"name": "leaf"}]}))
///     .unwrap();
/// assert_eq!(reshaped["children"][0]["name"], json!("leaf"));
/// ```
pub struct Lazy<V, F>
where
    F: Fn() -> V,
{
    init: F,
    resolved: OnceLock<V>,
}

impl<V, F> Lazy<V, F>
where
    F: Fn() -> V,
{
    /// Creates a new LAZY combinator.
    ///
    /// The `init` factory is called once, on first validation.
    pub fn new(init: F) -> Self {
        Self {
            init,
            resolved: OnceLock::new(),
        }
    }

    /// Returns a reference to the resolved validator, if any.
    pub fn get(&self) -> Option<&V> {
        self.resolved.get()
    }

    /// Returns true if the factory has already run.
    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }

    /// Forces resolution and returns a reference to the validator.
    pub fn force(&self) -> &V {
        self.resolved.get_or_init(&self.init)
    }
}

impl<V, F> Validate for Lazy<V, F>
where
    V: Validate,
    F: Fn() -> V + Send + Sync,
{
    fn validate(&self, raw: Raw<'_>) -> Result<Option<Value>, ValidationError> {
        self.resolved.get_or_init(&self.init).validate(raw)
    }
}

// Manual Debug impl since F might not implement Debug
impl<V, F> std::fmt::Debug for Lazy<V, F>
where
    V: std::fmt::Debug,
    F: Fn() -> V,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lazy")
            .field("resolved", &self.resolved.get())
            .finish()
    }
}

/// Creates a LAZY combinator.
pub fn lazy<V, F>(init: F) -> Lazy<V, F>
where
    F: Fn() -> V,
{
    Lazy::new(init)
}

// ============================================================================
// TESTS
// ============================================================================
