//! Shared world state for task lifecycle BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use taskline::notification::{
    adapters::memory::InMemoryNotificationSender,
    domain::Acknowledgement,
    services::TaskStatusConsumer,
};
use taskline::task::{
    adapters::memory::{InMemoryTaskEventPublisher, InMemoryTaskRepository},
    dto::TaskDto,
    services::{TaskService, TaskServiceError},
};

/// Topic status events are published to.
pub const TOPIC: &str = "task-status";

/// Recipient of notifications.
pub const RECIPIENT: &str = "ops@example.com";

/// Service type used by the BDD world.
pub type TestTaskService = TaskService<InMemoryTaskRepository, InMemoryTaskEventPublisher>;

/// Scenario world for task lifecycle behaviour tests.
pub struct TaskLifecycleWorld {
    pub service: TestTaskService,
    pub publisher: Arc<InMemoryTaskEventPublisher>,
    pub sender: Arc<InMemoryNotificationSender>,
    pub consumer: TaskStatusConsumer<InMemoryNotificationSender>,
    pub last_task: Option<TaskDto>,
    pub last_error: Option<TaskServiceError>,
    pub acknowledgements: Vec<Acknowledgement>,
}

impl TaskLifecycleWorld {
    /// Creates a world backed by fresh in-memory adapters.
    #[must_use]
    pub fn new() -> Self {
        let publisher = Arc::new(InMemoryTaskEventPublisher::new());
        let sender = Arc::new(InMemoryNotificationSender::new());
        let service = TaskService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::clone(&publisher),
            TOPIC,
        );
        let consumer =
            TaskStatusConsumer::new(Arc::clone(&sender), RECIPIENT, "Task Status Update");

        Self {
            service,
            publisher,
            sender,
            consumer,
            last_task: None,
            last_error: None,
            acknowledgements: Vec::new(),
        }
    }
}

impl Default for TaskLifecycleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskLifecycleWorld {
    TaskLifecycleWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
