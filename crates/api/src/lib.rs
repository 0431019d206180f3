//! # Usersync App
//!
//! Host-facing layer - invocation commands and the CLI entry point.
//!
//! This crate contains:
//! - Host commands (user hooks, bulk sync, settings)
//! - Application context (dependency injection)
//! - Tracing setup
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
