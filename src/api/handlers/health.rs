//! Handler for health check endpoint.

use axum::Json;
use serde::Serialize;

/// Liveness response body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Returns service liveness.
///
/// # Endpoint
///
/// `GET /health`
///
/// The service holds no stateful components (no database, no cache), so
/// liveness is the only check: a response means the server loop is up.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}
