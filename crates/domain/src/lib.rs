//! # Usersync Domain
//!
//! Business domain types for the Klaviyo user sync.
//!
//! This crate contains:
//! - User records as supplied by the host user store
//! - Event payload types sent to the Klaviyo events API
//! - Bulk sync cursor and report types
//! - Plugin settings and credentials
//! - Domain error types and Result definitions
//! - Configuration structures and constants
//!
//! ## Architecture
//! - No dependencies on other usersync crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
