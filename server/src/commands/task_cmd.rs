//! HTTP Handlers for Task CRUD
//!
//! Exposes Task operations to the UI over JSON. Each handler performs exactly
//! one repository call.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::{NewTask, Task, TaskPatch};
use crate::error::ApiError;
use crate::AppState;

/// Body of `POST /todos`. `title` is optional here so a missing field is
/// reported as "Title is required" rather than a deserialization error.
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,
}

/// Body of `DELETE /todos/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// List all tasks
pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = state.tasks.list().await?;
    Ok(Json(tasks))
}

/// Create a new task
pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<Json<Task>, ApiError> {
    let Json(request) = payload?;
    let draft = NewTask::parse(request.title)?;

    let task = state.tasks.create(&draft).await?;
    tracing::info!(id = task.id, "created task");
    Ok(Json(task))
}

/// Update completion and/or title of a task
pub async fn update_task(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<TaskPatch>, JsonRejection>,
) -> Result<Json<Task>, ApiError> {
    let Path(id) = id?;
    let Json(patch) = payload?;

    let task = state.tasks.update(id, &patch).await?;
    tracing::info!(id, completed = ?patch.completed, retitled = patch.title.is_some(), "updated task");
    Ok(Json(task))
}

/// Delete a task
pub async fn delete_task(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let Path(id) = id?;
    state.tasks.delete(id).await?;
    tracing::info!(id, "deleted task");
    Ok(Json(DeleteResponse { success: true }))
}
