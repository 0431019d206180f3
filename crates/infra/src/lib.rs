//! # Usersync Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The Klaviyo events transport over reqwest
//! - File-backed settings store and user source
//! - Bulk invocation token authorizer
//! - Configuration loading from environment or file
//!
//! ## Architecture
//! - Implements traits defined in `usersync-core`
//! - Contains all "impure" code (network and filesystem I/O)

pub mod auth;
pub mod config;
pub mod errors;
pub mod http;
pub mod klaviyo;
pub mod settings;
pub mod users;

// Re-export commonly used items
pub use auth::StaticTokenAuthorizer;
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use klaviyo::{KlaviyoClient, KlaviyoClientConfig};
pub use settings::FileSettingsStore;
pub use users::JsonUserSource;
