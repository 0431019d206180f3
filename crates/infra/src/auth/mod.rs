//! Bulk invocation authorization

mod token;

pub use token::StaticTokenAuthorizer;
