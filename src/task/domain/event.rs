//! Status-change event emitted on task updates.

use super::{TaskId, TaskStatus};
use serde::{Deserialize, Serialize};

/// Transient notification that a task changed status.
///
/// Serialised as `{"taskId": .., "status": .., "description": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatusEvent {
    /// Identifier of the changed task.
    pub task_id: TaskId,
    /// New status label.
    pub status: TaskStatus,
    /// Human-readable description of the change.
    pub description: String,
}

impl TaskStatusEvent {
    /// Description attached to events emitted by task updates.
    pub const UPDATED_DESCRIPTION: &'static str = "Task updated with status 'UPDATE'";

    /// Creates the event emitted when a task is updated.
    #[must_use]
    pub fn updated(task_id: TaskId) -> Self {
        Self {
            task_id,
            status: TaskStatus::updated(),
            description: Self::UPDATED_DESCRIPTION.to_owned(),
        }
    }
}
