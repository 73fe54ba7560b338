//! Built-in leaf validators
//!
//! The terminal checks a schema bottoms out in. Each leaf accepts one
//! JSON shape, passes the value through unchanged, and rejects everything
//! else with a one-line assertion; combinators and fields add the rest of
//! the sentence. Custom leaves plug in through
//! [`from_fn`](crate::foundation::from_fn) or any [`Validate`]
//! implementation.
//!
//! [`Validate`]: crate::foundation::Validate

mod enumeration;
mod scalar;
mod temporal;

pub use enumeration::{EnumOf, enum_of};
pub use scalar::{IsBoolean, IsInteger, IsNumber, IsString, boolean, integer, number, string};
pub use temporal::{IsDate, IsDateTime, IsTime, date, datetime, time};
