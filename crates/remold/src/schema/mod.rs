//! Schema layer - fields and models
//!
//! Where the validator algebra meets object keys. A [`Field`] binds one
//! validator to a key-resolution rule; a [`Model`] aggregates an ordered
//! set of fields into a validator over whole objects, with opt-in error
//! scoping and value-semantics extension.
//!
//! # Examples
//!
//! ```
//! use remold::prelude::*;
//! use serde_json::json;
//!
//! let listing = Model::named("Listing", definition! {
//!     "title" => field(string()),
//!     "budget" => flattened_field(Model::anonymous(definition! {
//!         "min" => named_field("budget_min", number()),
//!         "max" => named_field("budget_max", number()),
//!     })),
//! });
//!
//! let reshaped = listing
//!     .apply(&json!({"title": "Job", "budget_min": 1, "budget_max": 5}))
//!     .unwrap();
//! assert_eq!(reshaped["budget"], json!({"min": 1, "max": 5}));
//! ```

mod field;
mod model;

pub use field::{Field, field, flattened_field, named_field, snake_case_field};
pub use model::{Definition, Model};
