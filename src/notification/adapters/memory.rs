//! In-memory sender that records notifications instead of mailing them.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::notification::{
    domain::{Notification, NotificationError, NotificationResult},
    ports::NotificationSender,
};

#[derive(Debug, Default)]
struct SenderState {
    sent: Vec<Notification>,
    failure: Option<NotificationError>,
}

/// Recording sender with optional failure injection.
///
/// While a failure is set every `send` returns it and nothing is recorded.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotificationSender {
    state: Arc<RwLock<SenderState>>,
}

impl InMemoryNotificationSender {
    /// Creates a sender with nothing recorded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every notification accepted so far, oldest first.
    #[must_use]
    pub fn sent(&self) -> Vec<Notification> {
        self.state
            .read()
            .map(|state| state.sent.clone())
            .unwrap_or_default()
    }

    /// Makes subsequent sends fail with `failure`, or succeed again on `None`.
    pub fn set_failure(&self, failure: Option<NotificationError>) {
        if let Ok(mut state) = self.state.write() {
            state.failure = failure;
        }
    }
}

#[async_trait]
impl NotificationSender for InMemoryNotificationSender {
    async fn send(&self, to: &str, subject: &str, body: &str) -> NotificationResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| NotificationError::send(std::io::Error::other(err.to_string())))?;
        if let Some(failure) = &state.failure {
            return Err(failure.clone());
        }
        state.sent.push(Notification::new(to, subject, body));
        Ok(())
    }
}
