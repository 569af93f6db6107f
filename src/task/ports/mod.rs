//! Port contracts for task management.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod publisher;
pub mod repository;

pub use publisher::{TaskEventPublishError, TaskEventPublishResult, TaskEventPublisher};
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};

#[cfg(test)]
pub use publisher::MockTaskEventPublisher;
#[cfg(test)]
pub use repository::MockTaskRepository;
