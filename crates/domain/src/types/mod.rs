//! Domain types and models

pub mod event;
pub mod settings;
pub mod sync;
pub mod user;

pub use event::{
    DispatchOutcome, EventAttributes, EventData, EventEnvelope, EventProperties, Metric,
    ProfileProperties,
};
pub use settings::{Credentials, PluginSettings, Toggle};
pub use sync::{BulkSyncPageReport, BulkSyncRequest, ReportStatus, SyncCursor, SyncStatus};
pub use user::{UserPageQuery, UserRecord};
