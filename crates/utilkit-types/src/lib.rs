//! Foundation types for utilkit.
//!
//! Every other utilkit crate works on the values defined here. A [`Value`] is
//! a tagged variant standing in for a dynamically typed value: the tag, not a
//! runtime prototype check, tells a plain key-value [`Structure`] apart from
//! arrays and opaque scalars.
//!
//! # Key Types
//!
//! - [`Value`] -- Tagged value (undefined, null, scalar, array, object)
//! - [`Structure`] -- String-keyed mapping of values
//! - [`ValueKind`] -- Discriminator of a value, used in error messages
//! - [`TypeError`] -- Conversion failures

pub mod error;
pub mod json;
pub mod kind;
pub mod value;

pub use error::{TypeError, TypeResult};
pub use kind::ValueKind;
pub use value::{Structure, Value};
