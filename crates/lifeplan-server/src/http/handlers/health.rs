//! Service info, health and fallback handlers.

use std::any::Any;
use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use tracing::error;

use crate::http::error::ApiError;
use crate::http::responses::{ErrorResponse, HealthResponse, RootResponse};
use crate::state::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Service banner and endpoint map.
pub async fn root() -> impl IntoResponse {
    let endpoints = BTreeMap::from([
        ("tasks", "GET,POST /tasks"),
        ("task_ops", "PATCH,DELETE /tasks/{id}"),
        ("analytics", "GET /analytics/daily"),
        ("ai_process", "POST /tasks/ai-process"),
        ("ontology", "POST /ontology/update"),
        ("health", "GET /health"),
    ]);

    Json(RootResponse {
        success: true,
        message: format!("🎉 Lifeplan API v{VERSION} running"),
        status: "healthy",
        version: VERSION,
        timestamp: Utc::now().to_rfc3339(),
        cors: "enabled",
        endpoints,
    })
}

/// Health check endpoint.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let tasks_count = state.task_count().await?;
    let now = Utc::now();

    Ok(Json(HealthResponse {
        success: true,
        status: "ok",
        version: VERSION,
        time: now.to_rfc3339(),
        uptime_secs: now.signed_duration_since(state.started_at).num_seconds(),
        tasks_count,
    }))
}

/// Fallback for unknown routes.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("API endpoint not found")),
    )
}

/// Known path, unsupported method.
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::new("Method not allowed")),
    )
}

/// Turn a handler panic into the generic 500 envelope.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(panic = %detail, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("Internal server error")),
    )
        .into_response()
}
