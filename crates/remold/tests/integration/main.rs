//! End-to-end tests for schema construction, reshaping and error paths.

mod boundary;
mod combinators;
mod errors;
mod extension;
