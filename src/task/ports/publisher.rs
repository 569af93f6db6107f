//! Publisher port for task status events.

use crate::task::domain::TaskStatusEvent;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for event publishing.
pub type TaskEventPublishResult<T> = Result<T, TaskEventPublishError>;

/// Fire-and-forget event publishing contract.
///
/// Implementations hand the event to the transport and return without
/// waiting for delivery confirmation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskEventPublisher: Send + Sync {
    /// Publishes the event to the named topic.
    ///
    /// # Errors
    ///
    /// Returns [`TaskEventPublishError`] when the event cannot be encoded or
    /// the transport refuses it.
    async fn publish(&self, topic: &str, event: &TaskStatusEvent) -> TaskEventPublishResult<()>;
}

/// Errors returned by event publisher implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskEventPublishError {
    /// The event could not be serialised.
    #[error("failed to encode task status event: {0}")]
    Encoding(Arc<serde_json::Error>),

    /// The transport rejected the event.
    #[error("event transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskEventPublishError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}

impl From<serde_json::Error> for TaskEventPublishError {
    fn from(err: serde_json::Error) -> Self {
        Self::Encoding(Arc::new(err))
    }
}
