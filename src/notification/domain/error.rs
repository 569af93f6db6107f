//! Error types for notification delivery.

use std::sync::Arc;
use thiserror::Error;

/// Result type for notification delivery.
pub type NotificationResult<T> = Result<T, NotificationError>;

/// Errors returned by notification senders.
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    /// The mail server rejected the configured credentials.
    #[error("mail authentication failed: {0}")]
    Authentication(String),

    /// Any other delivery failure, including unparseable addresses.
    #[error("failed to send notification: {0}")]
    Send(Arc<dyn std::error::Error + Send + Sync>),
}

impl NotificationError {
    /// Wraps a delivery failure.
    pub fn send(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Send(Arc::new(err))
    }

    /// Returns `true` for credential rejections.
    #[must_use]
    pub const fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication(_))
    }
}
