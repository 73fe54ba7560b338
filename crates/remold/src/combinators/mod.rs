//! Validator combinators for composition
//!
//! Combinators wrap one or two validators and return a new validator with
//! a widened or combined accepted domain. All are pure; composition is
//! the only mechanism in the crate, so complex boundary schemas fall out
//! of stacking these on leaf validators and models.
//!
//! # Overview
//!
//! - **Absence handling**: [`Optional`], [`Nullable`], [`Blankable`]
//! - **Collections**: [`ArrayOf`]
//! - **Alternatives**: [`Union`] (left-biased), [`Intersect`] (merging)
//! - **Deferral**: [`Lazy`] for mutually recursive schemas
//! - **Messages**: [`WrapError`], the assertion-prefixing primitive
//!
//! # Examples
//!
//! ```
//! use remold::prelude::*;
//! use serde_json::json;
//!
//! // Accepts a number, an absent key, or an explicit null.
//! let budget = blankable(number());
//! assert_eq!(budget.validate(None).unwrap(), None);
//!
//! // Accepts either spelling of an identifier.
//! let id = union(number(), string());
//! assert!(id.check(&json!("x7")).is_ok());
//!
//! // Arrays of either.
//! let ids = array_of(union(number(), string()));
//! assert!(ids.check(&json!([1, "two", 3])).is_ok());
//! ```

pub mod array;
pub mod intersect;
pub mod lazy;
pub mod optional;
pub mod union;
pub mod wrap;

pub use array::{ArrayOf, array_of};
pub use intersect::{Intersect, intersect};
pub use lazy::{Lazy, lazy};
pub use optional::{Blankable, Nullable, Optional, blankable, nullable, optional};
pub use union::{Union, union};
pub use wrap::{WrapError, wrap_error};

// ============================================================================
// COMBINATOR LAWS
// ============================================================================
