//! Shared handler helpers for the flowgate REST API.
//!
//! Provides common patterns used across handlers to reduce duplication
//! and ensure consistent error responses.

use axum::{http::StatusCode, Json};
use flowgate_core::LimitsConfig;

use crate::types::{ErrorResponse, ParsePipelineRequest};

/// Reject requests whose node or edge lists exceed the configured budget.
///
/// Body size alone does not bound work: a few megabytes of tiny edge
/// objects can describe millions of graph elements. Element counts are
/// checked before any graph structure is built.
///
/// # Errors
///
/// Returns `(413, ErrorResponse)` naming the exceeded limit.
pub fn check_element_budget(
    request: &ParsePipelineRequest,
    limits: &LimitsConfig,
) -> Result<(), (StatusCode, Json<ErrorResponse>)> {
    if request.nodes.len() > limits.max_nodes {
        return Err((
            StatusCode::PAYLOAD_TOO_LARGE,
            Json(ErrorResponse {
                error: format!(
                    "Pipeline has {} nodes, exceeding the limit of {} (limits.max_nodes)",
                    request.nodes.len(),
                    limits.max_nodes
                ),
            }),
        ));
    }
    if request.edges.len() > limits.max_edges {
        return Err((
            StatusCode::PAYLOAD_TOO_LARGE,
            Json(ErrorResponse {
                error: format!(
                    "Pipeline has {} edges, exceeding the limit of {} (limits.max_edges)",
                    request.edges.len(),
                    limits.max_edges
                ),
            }),
        ));
    }
    Ok(())
}

/// Build an internal server error response without leaking implementation details.
///
/// Logs the full error server-side via `tracing::error!` and returns a generic
/// message to the client. This prevents exposing panic backtraces, task join
/// errors, or internal state to API consumers.
pub fn internal_error(
    context: &str,
    err: &dyn std::fmt::Display,
) -> (StatusCode, Json<ErrorResponse>) {
    tracing::error!(%context, error = %err, "Internal server error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: format!("{context}: internal error"),
        }),
    )
}
