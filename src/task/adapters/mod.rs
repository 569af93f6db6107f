//! Adapter implementations for task persistence and event publishing.

#[cfg(feature = "kafka")]
pub mod kafka;
pub mod memory;
pub mod postgres;
