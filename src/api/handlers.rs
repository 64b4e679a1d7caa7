//! Request handlers for the task endpoints.

use super::{
    dto::{CreateTaskRequest, DeleteTaskResponse, TaskResponse, UpdateTaskRequest},
    error::ApiError,
    routes::AppState,
    session::CurrentUser,
};
use crate::task::{
    domain::{TaskId, TaskPatch},
    ports::{TaskRepository, UserRepository},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use mockable::Clock;

/// Liveness probe.
pub async fn health() -> &'static str {
    "OK"
}

/// `GET /api/tasks`: the caller's full collection, newest first.
pub async fn list_tasks<R, U, C>(
    State(state): State<AppState<R, U, C>>,
    CurrentUser(caller): CurrentUser,
) -> Result<Json<Vec<TaskResponse>>, ApiError>
where
    R: TaskRepository + 'static,
    U: UserRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let records = state.gateway().list_tasks(caller).await?;
    Ok(Json(records.into_iter().map(TaskResponse::from).collect()))
}

/// `POST /api/tasks`: creates a task assigned to the caller.
pub async fn create_task<R, U, C>(
    State(state): State<AppState<R, U, C>>,
    CurrentUser(caller): CurrentUser,
    Json(request): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError>
where
    R: TaskRepository + 'static,
    U: UserRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let record = state.gateway().create_task(caller, request.into()).await?;
    Ok((StatusCode::CREATED, Json(record.into())))
}

/// `PATCH /api/tasks/{id}`: partial update of an owned task.
pub async fn update_task<R, U, C>(
    State(state): State<AppState<R, U, C>>,
    CurrentUser(caller): CurrentUser,
    Path(id): Path<uuid::Uuid>,
    Json(request): Json<UpdateTaskRequest>,
) -> Result<Json<TaskResponse>, ApiError>
where
    R: TaskRepository + 'static,
    U: UserRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let patch = TaskPatch::from(request);
    let record = state
        .gateway()
        .update_task(caller, TaskId::from_uuid(id), &patch)
        .await?;
    Ok(Json(record.into()))
}

/// `DELETE /api/tasks/{id}`: permanent deletion of an owned task.
pub async fn delete_task<R, U, C>(
    State(state): State<AppState<R, U, C>>,
    CurrentUser(caller): CurrentUser,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<DeleteTaskResponse>, ApiError>
where
    R: TaskRepository + 'static,
    U: UserRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    state
        .gateway()
        .delete_task(caller, TaskId::from_uuid(id))
        .await?;
    Ok(Json(DeleteTaskResponse { success: true }))
}
