//! Host invocation surface
//!
//! Plain async functions over an [`AppContext`](crate::context::AppContext).
//! The host calls the hooks after a user is created or updated, and drives
//! bulk sync one page at a time.

pub mod bulk_sync;
pub mod hooks;
pub mod settings;

pub use bulk_sync::{run_bulk_sync, run_bulk_sync_page};
pub use hooks::{on_user_created, on_user_updated};
pub use settings::{onsite_script, save_settings};
