//! Task record and its lifecycle operations.

use super::{TaskDomainError, TaskId, TaskStatus, UserId};

/// Persisted work item.
///
/// A task without an identifier has not been stored yet; the store assigns
/// the identifier on first save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: Option<TaskId>,
    title: String,
    description: Option<String>,
    user_id: UserId,
    status: TaskStatus,
}

/// Parameter object carrying every task field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskData {
    /// Store-assigned identifier, if already persisted.
    pub id: Option<TaskId>,
    /// Task title.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Owning user.
    pub user_id: UserId,
    /// Status label.
    pub status: TaskStatus,
}

impl Task {
    /// Creates an unsaved task with the `NEW` status.
    #[must_use]
    pub fn new(title: impl Into<String>, description: Option<String>, user_id: UserId) -> Self {
        Self {
            id: None,
            title: title.into(),
            description,
            user_id,
            status: TaskStatus::created(),
        }
    }

    /// Rebuilds a task from its field values without validation.
    #[must_use]
    pub fn from_data(data: TaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            user_id: data.user_id,
            status: data.status,
        }
    }

    /// Decomposes the task into its field values.
    #[must_use]
    pub fn into_data(self) -> TaskData {
        TaskData {
            id: self.id,
            title: self.title,
            description: self.description,
            user_id: self.user_id,
            status: self.status,
        }
    }

    /// Returns the identifier, if the task has been stored.
    #[must_use]
    pub const fn id(&self) -> Option<TaskId> {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the status label.
    #[must_use]
    pub const fn status(&self) -> &TaskStatus {
        &self.status
    }

    /// Checks the record invariants.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is blank.
    pub fn validate(&self) -> Result<(), TaskDomainError> {
        if self.title.trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        Ok(())
    }

    /// Returns the task with the store-assigned identifier set.
    #[must_use]
    pub fn with_id(mut self, id: TaskId) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns the task with its identifier cleared.
    #[must_use]
    pub fn without_id(mut self) -> Self {
        self.id = None;
        self
    }

    /// Overwrites the caller-editable fields.
    pub fn revise(&mut self, title: String, description: Option<String>, user_id: UserId) {
        self.title = title;
        self.description = description;
        self.user_id = user_id;
    }

    /// Replaces the status label.
    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }
}
