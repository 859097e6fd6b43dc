//! Health check handler for the flowgate REST API.

use axum::Json;

use crate::types::HealthResponse;

/// Liveness probe.
///
/// Always returns `200 OK` with the server version while the process can
/// serve requests. Suitable for container orchestration health checks.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
