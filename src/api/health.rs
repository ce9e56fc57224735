use crate::observability::MetricsRecorder;
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub timestamp: String,
}

/// GET /api/health - Service liveness
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "pitchZY Backend Server is running".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// GET /metrics - Prometheus metrics
pub async fn metrics() -> Result<String, StatusCode> {
    MetricsRecorder::export().map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}
