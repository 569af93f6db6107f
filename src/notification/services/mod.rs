//! Notification services.

mod consumer;

pub use consumer::{DEFAULT_BODY_TEMPLATE, TaskStatusConsumer};
