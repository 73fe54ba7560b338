//! # remold
//!
//! Reshapes loosely-typed, externally-sourced data (JSON-decoded values)
//! into well-typed, renamed and restructured application objects, failing
//! with a descriptive sentence path when the input does not conform. Lives
//! at the boundary between an external data provider (HTTP API, file,
//! message payload) and internal application code.
//!
//! ## Quick Start
//!
//! ```
//! use remold::prelude::*;
//! use serde_json::json;
//!
//! let user = Model::named("User", definition! {
//!     "fullName" => snake_case_field(string()),
//!     "age" => field(optional(number())),
//! });
//!
//! // Valid input is renamed and reshaped.
//! let reshaped = user.apply(&json!({"full_name": "Al"})).unwrap();
//! assert_eq!(Value::Object(reshaped), json!({"fullName": "Al"}));
//!
//! // Invalid input fails with the full path to the offending value.
//! let error = user.apply(&json!({"age": "x"})).unwrap_err();
//! assert_eq!(
//!     error.to_string(),
//!     "User expected an object with attribute 'full_name', that is a string.",
//! );
//! ```
//!
//! ## Design
//!
//! Everything composes over one contract, [`Validate`](foundation::Validate):
//! raw input is `Option<&serde_json::Value>` (absence is first-class),
//! output is the reshaped `Option<Value>`. Schemas are built from code at
//! definition time, immutable afterwards, and safe to share across
//! threads. Validation is synchronous, all-or-nothing, and allocation
//! only happens on the reshaped output and on error messages.
//!
//! Failures split into expected shape mismatches (report them) and
//! defects escaping custom validators (crash on them); see
//! [`ValidationError`](foundation::ValidationError).
//!
//! Recursion depth equals schema nesting depth, so pathologically deep or
//! mutually-recursive ([`lazy`](combinators::lazy)) schemas are bounded
//! by stack size in practice; the crate does not guard against that.

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod schema;
pub mod validators;
