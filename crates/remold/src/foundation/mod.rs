//! Core reshaping types and traits
//!
//! The fundamental building blocks of the system:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`Invalid`]
//!
//! # Architecture
//!
//! A validator is a function-shaped capability over a raw boundary value.
//! Raw input is `Option<&serde_json::Value>`, where `None` models a source
//! key that was absent entirely; output is `Option<Value>`, where `None`
//! means "omit this result from an enclosing object". Everything else in
//! the crate (combinators, fields, models) is composition over this one
//! contract.
//!
//! Errors split into expected shape mismatches, which every wrapping layer
//! rewrites to build a sentence path to the offending value, and defects,
//! which no layer ever touches. See [`ValidationError`].

mod error;
mod traits;

pub use error::{Invalid, ValidationError};
pub use traits::{FromFn, Raw, Validate, ValidateExt, from_fn};
