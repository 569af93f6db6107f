//! Adapter implementations for notification delivery and event intake.

#[cfg(feature = "kafka")]
pub mod kafka;
pub mod memory;
#[cfg(feature = "smtp")]
pub mod smtp;
