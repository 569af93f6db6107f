//! Wire shape of a task exchanged at the API boundary.

use crate::task::domain::{TaskId, TaskStatus, UserId};
use serde::{Deserialize, Serialize};

/// External copy of a task record.
///
/// Serialised in camelCase: `{"id", "title", "description", "userId",
/// "status"}`. `title` and `userId` are required on input; `id` and `status`
/// may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    /// Store-assigned identifier.
    #[serde(default)]
    pub id: Option<TaskId>,
    /// Task title.
    pub title: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Owning user.
    pub user_id: UserId,
    /// Status label; unset means `NEW` on creation.
    #[serde(default)]
    pub status: Option<TaskStatus>,
}

impl TaskDto {
    /// Creates a DTO with the required fields only.
    #[must_use]
    pub fn new(title: impl Into<String>, user_id: UserId) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: None,
            user_id,
            status: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the status label.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(TaskStatus::new(status));
        self
    }

    /// Sets the identifier.
    #[must_use]
    pub const fn with_id(mut self, id: TaskId) -> Self {
        self.id = Some(id);
        self
    }
}
