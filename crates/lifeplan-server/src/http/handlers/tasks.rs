//! Task CRUD handlers.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use lifeplan_core::{NewTask, TaskId, TaskPatch};

use crate::http::error::ApiError;
use crate::http::responses::{MessageResponse, TaskListResponse, TaskResponse};
use crate::service::TaskService;
use crate::state::AppState;

/// List all tasks.
///
/// GET /tasks
pub async fn list_tasks(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let tasks = TaskService::new(state).list().await?;

    Ok(Json(TaskListResponse {
        success: true,
        total: tasks.len(),
        tasks,
    }))
}

/// Create a task from a partial description.
///
/// POST /tasks
pub async fn create_task(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body?;
    let input = NewTask::from_json(&body)?;
    let task = TaskService::new(state).create(input).await?;

    Ok(Json(TaskResponse {
        success: true,
        task,
        message: "Task created".to_string(),
    }))
}

/// Update fields of a task.
///
/// PATCH /tasks/:id
pub async fn update_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body?;
    let patch = TaskPatch::from_json(&body)?;
    let task = TaskService::new(state)
        .update(&TaskId::new(id), patch)
        .await?;

    Ok(Json(TaskResponse {
        success: true,
        task,
        message: "Task updated".to_string(),
    }))
}

/// Delete a task.
///
/// DELETE /tasks/:id
pub async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let task = TaskService::new(state).delete(&TaskId::new(id)).await?;

    Ok(Json(MessageResponse {
        success: true,
        message: format!("Task '{}' deleted", task.title),
    }))
}
