//! Application services for task orchestration.

mod lifecycle;

pub use lifecycle::{
    TaskOperation, TaskService, TaskServiceError, TaskServiceFailure, TaskServiceResult,
};
