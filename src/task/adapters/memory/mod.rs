//! In-memory adapters for task persistence and event publishing.

mod publisher;
mod repository;

pub use publisher::{InMemoryTaskEventPublisher, PublishedEvent};
pub use repository::InMemoryTaskRepository;
