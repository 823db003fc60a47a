//! Host Routes
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (UI bundle present)
//! - GET /health - Full health status
//! - GET /data.json - The loaded site document

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use super::error::{ServerError, ServerResult};
use super::state::AppState;

/// Full health status body
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// healthy or degraded
    pub status: String,
    /// Whether `index.html` exists in the dist directory
    pub bundle: bool,
    pub trainers: usize,
    pub uptime_seconds: u64,
    pub version: String,
}

/// GET /health/live
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// 200 once the UI bundle is in place; the document is already loaded by
/// the time the listener binds.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if state.has_bundle() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let bundle = state.has_bundle();

    Json(HealthResponse {
        status: if bundle { "healthy" } else { "degraded" }.to_string(),
        bundle,
        trainers: state.document.trainers.len(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /data.json
///
/// Serves the document the host was started with, for the content editor
/// preview.
pub async fn site_document(State(state): State<Arc<AppState>>) -> ServerResult<Response> {
    let body = serde_json::to_string(state.document.as_ref())
        .map_err(|e| ServerError::Internal(format!("Failed to serialize site document: {}", e)))?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        body,
    )
        .into_response())
}
