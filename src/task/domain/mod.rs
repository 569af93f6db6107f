//! Domain model for task management.
//!
//! The task domain holds the persisted record, its status labels and the
//! status-change event, keeping all infrastructure concerns outside of the
//! domain boundary.

mod error;
mod event;
mod ids;
mod status;
mod task;

pub use error::TaskDomainError;
pub use event::TaskStatusEvent;
pub use ids::{TaskId, UserId};
pub use status::TaskStatus;
pub use task::{Task, TaskData};
