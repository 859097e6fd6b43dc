//! Request and response types for the flowgate REST API.
//!
//! The request shapes mirror what pipeline editors emit for their canvas
//! state: nodes carry positions and arbitrary payloads, edges carry port
//! handles. Validation needs none of that, so the handlers strip requests
//! down to identifiers before touching `flowgate-core`.

use std::collections::HashMap;

use flowgate_core::ValidationReport;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A node as drawn on the pipeline canvas.
///
/// Only `id` participates in validation. The remaining fields are editor
/// state, accepted so a frontend can POST its canvas verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NodeDescriptor {
    /// Unique node identifier.
    pub id: String,
    /// Editor node kind, e.g. `"customInput"`.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    /// Canvas coordinates, e.g. `{"x": 250.0, "y": 50.0}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<HashMap<String, f64>>,
    /// Arbitrary editor payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// A directed connection between two canvas nodes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EdgeDescriptor {
    /// Editor-assigned edge identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Source node identifier.
    pub source: String,
    /// Target node identifier.
    pub target: String,
    /// Source port on multi-output nodes.
    #[serde(default, rename = "sourceHandle", skip_serializing_if = "Option::is_none")]
    pub source_handle: Option<String>,
    /// Target port on multi-input nodes.
    #[serde(default, rename = "targetHandle", skip_serializing_if = "Option::is_none")]
    pub target_handle: Option<String>,
}

/// Body of `POST /pipelines/parse`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ParsePipelineRequest {
    /// Nodes on the canvas.
    pub nodes: Vec<NodeDescriptor>,
    /// Directed connections between nodes.
    pub edges: Vec<EdgeDescriptor>,
}

/// Result of parsing one pipeline graph.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ParsePipelineResponse {
    /// Node entries received.
    pub num_nodes: usize,
    /// Edge entries received.
    pub num_edges: usize,
    /// True when the submitted graph contains no directed cycle.
    pub is_dag: bool,
}

impl From<ValidationReport> for ParsePipelineResponse {
    fn from(report: ValidationReport) -> Self {
        Self {
            num_nodes: report.num_nodes,
            num_edges: report.num_edges,
            is_dag: report.is_dag,
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"ok"` when the service can respond.
    pub status: String,
    /// Server crate version.
    pub version: String,
}

/// Error payload carried by every non-2xx JSON response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable description of what went wrong.
    pub error: String,
}
