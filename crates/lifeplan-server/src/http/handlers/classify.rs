//! Free-text task entry.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};

use lifeplan_core::classifier;

use crate::http::error::ApiError;
use crate::http::responses::{ClassifyRequest, ClassifyResponse};
use crate::service::TaskService;
use crate::state::AppState;

/// Turn newline-separated text into categorized tasks.
///
/// POST /tasks/ai-process
pub async fn ai_process(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = body?;
    let tasks = TaskService::new(state).classify(&req.input).await?;
    let count = tasks.len();

    Ok(Json(ClassifyResponse {
        success: true,
        message: format!("✨ Processed {count} tasks"),
        tasks,
        insights: classifier::insights(count),
        ai_analysis: true,
    }))
}
