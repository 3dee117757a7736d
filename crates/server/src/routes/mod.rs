//! API route handlers
//!
//! Routes are organized by functionality:
//!
//! - `health`: liveness, readiness and Prometheus metrics
//! - `report`: PDF report generation
//! - `charts`: the chart alone, as SVG
//! - `stats`: top word metrics from the store

pub mod charts;
pub mod health;
pub mod report;
pub mod stats;

use crate::error::{ServerError, ServerResult};
use crate::state::{ServerMetadata, ServerState};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use std::sync::Arc;

/// Endpoints listed by the info route.
pub const ENDPOINTS: [&str; 6] = [
    "/api/generate-pdf",
    "/api/charts",
    "/api/metrics",
    "/health",
    "/ready",
    "/metrics",
];

/// API version and base info
///
/// # Response
///
/// ```json
/// {
///   "name": "lexreport",
///   "version": "0.1.0",
///   "uptime_seconds": 12,
///   "endpoints": ["..."]
/// }
/// ```
pub async fn api_info(State(state): State<Arc<ServerState>>) -> ServerResult<impl IntoResponse> {
    Ok(Json(ServerMetadata {
        name: "lexreport".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        endpoints: ENDPOINTS.to_vec(),
    }))
}

/// 404 Not Found handler
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
