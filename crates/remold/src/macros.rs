//! Macros for building schema definitions with minimal boilerplate.

/// Builds an ordered [`Definition`](crate::schema::Definition) from
/// `"result key" => field` pairs.
///
/// Declaration order is preserved and becomes the model's field
/// evaluation order.
///
/// # Examples
///
/// ```
/// use remold::prelude::*;
/// use serde_json::json;
///
/// let schema = Model::anonymous(definition! {
///     "name" => field(string()),
///     "age" => field(optional(number())),
/// });
///
/// assert!(schema.apply(&json!({"name": "Al"})).is_ok());
/// ```
#[macro_export]
macro_rules! definition {
    () => {
        $crate::schema::Definition::new()
    };
    ( $( $key:literal => $field:expr ),+ $(,)? ) => {{
        let mut entries = $crate::schema::Definition::new();
        $( entries.insert(($key).to_string(), $field); )+
        entries
    }};
}
