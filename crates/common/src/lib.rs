//! Common utilities shared across the usersync crates.
//!
//! Currently this is the field validation framework used by settings
//! validation and by the event dispatcher's email check. It has no
//! dependency on the other workspace crates.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod validation;

pub use validation::{
    EmailValidator, FieldError, FieldValidator, StringValidator, ValidationError,
    ValidationResult, Validator,
};
