//! # Usersync Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces (traits) for the host collaborators
//! - The payload builder and event dispatcher
//! - The bulk sync controller
//! - Settings validation and persistence rules
//!
//! ## Architecture Principles
//! - Only depends on `usersync-common` and `usersync-domain`
//! - No HTTP, filesystem or platform code
//! - All external dependencies via traits

pub mod settings;
pub mod sync;
pub mod user;

pub use settings::ports::SettingsStore;
pub use settings::{SettingsSaveResult, SettingsService};
pub use sync::bulk::BulkSyncController;
pub use sync::dispatcher::EventDispatcher;
pub use sync::ports::{EventTransport, InvocationAuthorizer};
pub use user::ports::UserSource;
