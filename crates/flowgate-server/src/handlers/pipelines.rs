//! Pipeline validation handler.
//!
//! The single POST endpoint behind the pipeline editor's save button:
//! it receives the canvas state and reports whether the drawn graph is
//! executable, i.e. free of directed cycles.

use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

use flowgate_core::{validate, Edge};

use crate::types::{ErrorResponse, ParsePipelineRequest, ParsePipelineResponse};
use crate::AppState;

use super::helpers::{check_element_budget, internal_error};

/// Validate a pipeline graph for acyclicity.
///
/// Counts the submitted nodes and edges and runs a Kahn topological
/// peel over them. Editor metadata (positions, payloads, port handles)
/// is accepted and ignored; edges referencing unknown nodes count
/// toward `num_edges` but never affect the verdict.
#[utoipa::path(
    post,
    path = "/pipelines/parse",
    tag = "pipelines",
    request_body = ParsePipelineRequest,
    responses(
        (status = 200, description = "Validation report", body = ParsePipelineResponse),
        (status = 413, description = "Pipeline exceeds configured size limits", body = ErrorResponse),
        (status = 422, description = "Malformed request body")
    )
)]
pub async fn parse_pipeline(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ParsePipelineRequest>,
) -> impl IntoResponse {
    if let Err(e) = check_element_budget(&req, &state.config.limits) {
        return e.into_response();
    }

    // Strip editor metadata before handing off to the graph core.
    let node_ids: Vec<String> = req.nodes.into_iter().map(|node| node.id).collect();
    let edges: Vec<Edge> = req
        .edges
        .iter()
        .map(|edge| Edge::new(&edge.source, &edge.target))
        .collect();

    // Validation is CPU-bound and allocation-heavy at the configured
    // limits, so it runs off the async runtime.
    let result = tokio::task::spawn_blocking(move || validate(&node_ids, &edges)).await;

    match result {
        Ok(report) => {
            state.record_validation();
            tracing::debug!(
                num_nodes = report.num_nodes,
                num_edges = report.num_edges,
                is_dag = report.is_dag,
                "Pipeline validated"
            );
            Json(ParsePipelineResponse::from(report)).into_response()
        }
        Err(e) => internal_error("Parse pipeline", &e).into_response(),
    }
}
