//! User source adapters

mod json_source;

pub use json_source::JsonUserSource;
