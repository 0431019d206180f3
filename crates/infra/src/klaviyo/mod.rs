//! Klaviyo events API transport

mod client;

pub use client::{KlaviyoClient, KlaviyoClientConfig};
