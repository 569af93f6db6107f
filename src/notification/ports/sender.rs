//! Sender port for plain-text notifications.

use crate::notification::domain::NotificationResult;
use async_trait::async_trait;

/// Dispatches one plain-text message through a mail transport.
///
/// There is no retry or queueing: the call returns once the transport has
/// accepted or refused the message.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Sends `body` to `to` with the given subject.
    ///
    /// # Errors
    ///
    /// Returns [`crate::notification::domain::NotificationError::Authentication`]
    /// when the transport rejects the credentials and
    /// [`crate::notification::domain::NotificationError::Send`] for every other
    /// failure.
    async fn send(&self, to: &str, subject: &str, body: &str) -> NotificationResult<()>;
}
