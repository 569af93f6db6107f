//! Task request handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::{Value, json};
use std::sync::Arc;

use super::ApiError;
use crate::task::{
    domain::TaskId,
    dto::TaskDto,
    ports::{TaskEventPublisher, TaskRepository},
    services::TaskService,
};

/// Shared handler state.
pub(super) type AppState<R, P> = Arc<TaskService<R, P>>;

pub(super) async fn create_task<R, P>(
    State(service): State<AppState<R, P>>,
    payload: Result<Json<TaskDto>, JsonRejection>,
) -> Result<(StatusCode, Json<TaskDto>), ApiError>
where
    R: TaskRepository,
    P: TaskEventPublisher,
{
    let Json(dto) = payload?;
    let created = service.create(&dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub(super) async fn get_task<R, P>(
    State(service): State<AppState<R, P>>,
    Path(id): Path<TaskId>,
) -> Result<Json<TaskDto>, ApiError>
where
    R: TaskRepository,
    P: TaskEventPublisher,
{
    Ok(Json(service.get(id).await?))
}

pub(super) async fn update_task<R, P>(
    State(service): State<AppState<R, P>>,
    Path(id): Path<TaskId>,
    payload: Result<Json<TaskDto>, JsonRejection>,
) -> Result<Json<TaskDto>, ApiError>
where
    R: TaskRepository,
    P: TaskEventPublisher,
{
    let Json(dto) = payload?;
    Ok(Json(service.update(id, &dto).await?))
}

pub(super) async fn delete_task<R, P>(
    State(service): State<AppState<R, P>>,
    Path(id): Path<TaskId>,
) -> Result<StatusCode, ApiError>
where
    R: TaskRepository,
    P: TaskEventPublisher,
{
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub(super) async fn list_tasks<R, P>(
    State(service): State<AppState<R, P>>,
) -> Result<Json<Vec<TaskDto>>, ApiError>
where
    R: TaskRepository,
    P: TaskEventPublisher,
{
    Ok(Json(service.list_all().await?))
}

pub(super) async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
