//! HTTP request and response types.
//!
//! Every response body carries a `success` flag.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use lifeplan_core::{DailyReport, Task};

// ============================================================================
// Service info types
// ============================================================================

/// Response for `GET /`.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub success: bool,
    pub message: String,
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    pub cors: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

/// Response for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub status: &'static str,
    pub version: &'static str,
    pub time: String,
    pub uptime_secs: i64,
    pub tasks_count: usize,
}

// ============================================================================
// Task types
// ============================================================================

/// Response for `GET /tasks`.
#[derive(Debug, Serialize)]
pub struct TaskListResponse {
    pub success: bool,
    pub tasks: Vec<Task>,
    pub total: usize,
}

/// Response carrying a single task.
#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub success: bool,
    pub task: Task,
    pub message: String,
}

/// Response carrying only a confirmation message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

// ============================================================================
// Classifier types
// ============================================================================

/// Request body for `POST /tasks/ai-process`.
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    /// Newline-separated task lines.
    #[serde(default)]
    pub input: String,
}

/// Response for `POST /tasks/ai-process`.
#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub success: bool,
    pub message: String,
    pub tasks: Vec<Task>,
    pub insights: Vec<String>,
    pub ai_analysis: bool,
}

// ============================================================================
// Analytics types
// ============================================================================

/// Query string for `GET /analytics/daily`.
#[derive(Debug, Deserialize)]
pub struct AnalyticsQuery {
    /// Report date (`YYYY-MM-DD`), echoed back only.
    pub date: Option<String>,
}

/// Response for `GET /analytics/daily`.
#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub success: bool,
    pub date: String,
    #[serde(flatten)]
    pub report: DailyReport,
}

/// Response for `POST /ontology/update`.
#[derive(Debug, Serialize)]
pub struct OntologyResponse {
    pub success: bool,
    pub updates: Vec<&'static str>,
    pub insights: Vec<&'static str>,
    pub recommendations: Vec<&'static str>,
    pub message: &'static str,
}

// ============================================================================
// Error types
// ============================================================================

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
