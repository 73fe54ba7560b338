//! Prelude module for convenient imports.
//!
//! A single `use remold::prelude::*;` brings in the traits, the error
//! types, the schema surface, all built-in leaves and all combinators.
//!
//! # Examples
//!
//! ```
//! use remold::prelude::*;
//! use serde_json::json;
//!
//! let user = Model::named("User", definition! {
//!     "name" => field(string()),
//!     "age" => field(optional(number())),
//! });
//!
//! assert!(user.apply(&json!({"name": "Al"})).is_ok());
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{
    FromFn, Invalid, Raw, Validate, ValidateExt, ValidationError, from_fn,
};

// ============================================================================
// SCHEMA: Fields, models, definitions
// ============================================================================

pub use crate::schema::{
    Definition, Field, Model, field, flattened_field, named_field, snake_case_field,
};

// ============================================================================
// VALIDATORS: Built-in leaves
// ============================================================================

pub use crate::validators::{
    EnumOf, IsBoolean, IsDate, IsDateTime, IsInteger, IsNumber, IsString, IsTime, boolean, date,
    datetime, enum_of, integer, number, string, time,
};

// ============================================================================
// COMBINATORS: Composition types and functions
// ============================================================================

pub use crate::combinators::{
    ArrayOf, Blankable, Intersect, Lazy, Nullable, Optional, Union, WrapError, array_of,
    blankable, intersect, lazy, nullable, optional, union, wrap_error,
};

// ============================================================================
// MACROS
// ============================================================================

pub use crate::definition;

// Re-export the JSON value type the whole crate is built around.
pub use serde_json::Value;
