//! User source boundary

pub mod ports;
