//! Domain types for notification delivery.

mod error;
mod notification;

pub use error::{NotificationError, NotificationResult};
pub use notification::{Acknowledgement, Notification};
