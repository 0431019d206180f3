//! Event building, dispatch and bulk paging

pub mod bulk;
pub mod dispatcher;
pub mod payload;
pub mod ports;

pub use bulk::BulkSyncController;
pub use dispatcher::EventDispatcher;
