//! HTTP server for the task API.
//!
//! Provides endpoints for:
//! - Service banner (`/`) and health check (`/health`)
//! - Task CRUD (`/tasks`, `/tasks/:id`)
//! - Free-text task entry (`/tasks/ai-process`)
//! - Daily analytics (`/analytics/daily`)
//! - Ontology refresh stub (`/ontology/update`)

use std::sync::Arc;

use axum::{
    http::Method,
    routing::{get, patch, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub mod error;
mod handlers;
pub mod responses;

pub use error::ApiError;

/// Create the HTTP router.
pub fn create_router(state: Arc<AppState>) -> Router {
    // Any origin, no credentials
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    Router::new()
        // Service info
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        // Task routes
        .route("/tasks", get(handlers::list_tasks).post(handlers::create_task))
        .route("/tasks/ai-process", post(handlers::ai_process))
        .route(
            "/tasks/:id",
            patch(handlers::update_task).delete(handlers::delete_task),
        )
        // Analytics routes
        .route("/analytics/daily", get(handlers::daily_analytics))
        .route("/ontology/update", post(handlers::update_ontology))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(CatchPanicLayer::custom(handlers::handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
