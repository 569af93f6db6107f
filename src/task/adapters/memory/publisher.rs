//! In-memory event publisher that records every published event.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::TaskStatusEvent,
    ports::{TaskEventPublishError, TaskEventPublishResult, TaskEventPublisher},
};

/// Event recorded by [`InMemoryTaskEventPublisher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedEvent {
    /// Topic the event was published to.
    pub topic: String,
    /// Published event.
    pub event: TaskStatusEvent,
}

/// Publisher adapter that keeps events in memory for inspection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskEventPublisher {
    events: Arc<RwLock<Vec<PublishedEvent>>>,
}

impl InMemoryTaskEventPublisher {
    /// Creates a publisher with no recorded events.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every event published so far, oldest first.
    #[must_use]
    pub fn published(&self) -> Vec<PublishedEvent> {
        self.events
            .read()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Returns the events published to one topic.
    #[must_use]
    pub fn published_to(&self, topic: &str) -> Vec<TaskStatusEvent> {
        self.published()
            .into_iter()
            .filter(|published| published.topic == topic)
            .map(|published| published.event)
            .collect()
    }
}

#[async_trait]
impl TaskEventPublisher for InMemoryTaskEventPublisher {
    async fn publish(&self, topic: &str, event: &TaskStatusEvent) -> TaskEventPublishResult<()> {
        let mut events = self.events.write().map_err(|err| {
            TaskEventPublishError::transport(std::io::Error::other(err.to_string()))
        })?;
        events.push(PublishedEvent {
            topic: topic.to_owned(),
            event: event.clone(),
        });
        Ok(())
    }
}
