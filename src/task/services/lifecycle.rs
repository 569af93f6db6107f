//! Service layer for task creation, lookup, update and deletion.

use crate::task::{
    domain::{Task, TaskDomainError, TaskId, TaskStatus, TaskStatusEvent},
    dto::TaskDto,
    ports::{TaskEventPublishError, TaskEventPublisher, TaskRepository, TaskRepositoryError},
};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

/// Service operation that failed, used as the error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOperation {
    /// `create`.
    CreateTask,
    /// `get`.
    GetTask,
    /// `update`.
    UpdateTask,
    /// `delete`.
    DeleteTask,
    /// `list_all`.
    ListTasks,
}

impl fmt::Display for TaskOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::CreateTask => "Failed to create task",
            Self::GetTask => "Failed to retrieve task",
            Self::UpdateTask => "Failed to update task",
            Self::DeleteTask => "Failed to delete task",
            Self::ListTasks => "Failed to retrieve tasks",
        };
        f.write_str(message)
    }
}

/// Infrastructure failure wrapped by [`TaskServiceError::Failed`].
#[derive(Debug, Error)]
pub enum TaskServiceFailure {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// Event publishing failed.
    #[error(transparent)]
    Publish(#[from] TaskEventPublishError),
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// No task exists with the identifier.
    #[error("Task not found with id {0}")]
    NotFound(TaskId),
    /// The task violates a record invariant.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),
    /// An infrastructure failure occurred during the operation.
    #[error("{operation}")]
    Failed {
        /// Operation that failed.
        operation: TaskOperation,
        /// Underlying failure.
        #[source]
        source: TaskServiceFailure,
    },
}

impl TaskServiceError {
    fn failed(operation: TaskOperation, source: impl Into<TaskServiceFailure>) -> Self {
        let source = source.into();
        error!(error = %source, "{operation}");
        Self::Failed { operation, source }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service over a repository and an event publisher.
pub struct TaskService<R, P>
where
    R: TaskRepository,
    P: TaskEventPublisher,
{
    repository: Arc<R>,
    publisher: Arc<P>,
    topic: String,
}

impl<R, P> TaskService<R, P>
where
    R: TaskRepository,
    P: TaskEventPublisher,
{
    /// Creates a service publishing status events to `topic`.
    #[must_use]
    pub fn new(repository: Arc<R>, publisher: Arc<P>, topic: impl Into<String>) -> Self {
        Self {
            repository,
            publisher,
            topic: topic.into(),
        }
    }

    /// Returns the topic status events are published to.
    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Creates a task. Any client-supplied identifier is ignored and an unset
    /// status defaults to `NEW`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] for a blank title and
    /// [`TaskServiceError::Failed`] when persistence fails.
    pub async fn create(&self, dto: &TaskDto) -> TaskServiceResult<TaskDto> {
        info!(title = %dto.title, "creating task");
        let task = Task::from(dto).without_id();
        task.validate()?;

        let created = self
            .repository
            .save(task)
            .await
            .map_err(|err| TaskServiceError::failed(TaskOperation::CreateTask, err))?;
        info!(task_id = ?created.id(), "task created");
        Ok(TaskDto::from(&created))
    }

    /// Retrieves a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist
    /// and [`TaskServiceError::Failed`] when the lookup fails.
    pub async fn get(&self, id: TaskId) -> TaskServiceResult<TaskDto> {
        let task = self.find_existing(id, TaskOperation::GetTask).await?;
        Ok(TaskDto::from(&task))
    }

    /// Overwrites title, description and owner, forces the `UPDATE` status
    /// and publishes one status event once the row is saved.
    ///
    /// The save and the publish are not coupled: when publishing fails the
    /// row stays updated and the failure is returned.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist,
    /// [`TaskServiceError::Validation`] for a blank title, and
    /// [`TaskServiceError::Failed`] when persistence or publishing fails.
    pub async fn update(&self, id: TaskId, dto: &TaskDto) -> TaskServiceResult<TaskDto> {
        let mut task = self.find_existing(id, TaskOperation::UpdateTask).await?;
        task.revise(dto.title.clone(), dto.description.clone(), dto.user_id);
        task.set_status(TaskStatus::updated());
        task.validate()?;

        let updated = self
            .repository
            .save(task)
            .await
            .map_err(|err| match err {
                TaskRepositoryError::NotFound(missing) => TaskServiceError::NotFound(missing),
                other => TaskServiceError::failed(TaskOperation::UpdateTask, other),
            })?;

        let event = TaskStatusEvent::updated(id);
        self.publisher
            .publish(&self.topic, &event)
            .await
            .map_err(|err| TaskServiceError::failed(TaskOperation::UpdateTask, err))?;
        info!(task_id = %id, topic = %self.topic, "task updated and status event published");

        Ok(TaskDto::from(&updated))
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist
    /// and [`TaskServiceError::Failed`] when persistence fails.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        let exists = self
            .repository
            .exists(id)
            .await
            .map_err(|err| TaskServiceError::failed(TaskOperation::DeleteTask, err))?;
        if !exists {
            return Err(TaskServiceError::NotFound(id));
        }

        self.repository
            .delete_by_id(id)
            .await
            .map_err(|err| TaskServiceError::failed(TaskOperation::DeleteTask, err))?;
        info!(task_id = %id, "task deleted");
        Ok(())
    }

    /// Lists every task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Failed`] when persistence fails.
    pub async fn list_all(&self) -> TaskServiceResult<Vec<TaskDto>> {
        let tasks = self
            .repository
            .find_all()
            .await
            .map_err(|err| TaskServiceError::failed(TaskOperation::ListTasks, err))?;
        Ok(tasks.iter().map(TaskDto::from).collect())
    }

    async fn find_existing(&self, id: TaskId, operation: TaskOperation) -> TaskServiceResult<Task> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|err| TaskServiceError::failed(operation, err))?
            .ok_or(TaskServiceError::NotFound(id))
    }
}
