//! Router assembly.

use axum::Router;
use axum::middleware;
use axum::routing::get;
use std::sync::Arc;

use super::handlers::{create_task, delete_task, get_task, health, list_tasks, update_task};
use super::middleware::log_requests;
use crate::task::{
    ports::{TaskEventPublisher, TaskRepository},
    services::TaskService,
};

/// Builds the task API router around `service`.
#[must_use]
pub fn router<R, P>(service: Arc<TaskService<R, P>>) -> Router
where
    R: TaskRepository + 'static,
    P: TaskEventPublisher + 'static,
{
    Router::new()
        .route(
            "/tasks",
            get(list_tasks::<R, P>).post(create_task::<R, P>),
        )
        .route(
            "/tasks/{id}",
            get(get_task::<R, P>)
                .put(update_task::<R, P>)
                .delete(delete_task::<R, P>),
        )
        .route("/health", get(health))
        .layer(middleware::from_fn(log_requests))
        .with_state(service)
}
