//! Port contracts for notification delivery.

pub mod sender;

pub use sender::NotificationSender;

#[cfg(test)]
pub use sender::MockNotificationSender;
