//! Graph types for pipeline validation.
//!
//! The core works on the minimal shape a validation needs: node identifiers
//! and directed identifier pairs. Everything else a pipeline editor attaches
//! to nodes and edges (positions, payloads, handles) is transport metadata
//! and never reaches this layer.

use serde::{Deserialize, Serialize};

/// A directed edge between two pipeline nodes, identified by name.
///
/// Identifiers are opaque: the core never parses or normalizes them, it only
/// compares them for equality. Self-loops (`source == target`) are legal
/// input and simply make the graph cyclic.
///
/// # Example
///
/// ```rust
/// use flowgate_core::graph::Edge;
///
/// let edge = Edge::new("extract", "transform");
/// assert_eq!(edge.source(), "extract");
/// assert_eq!(edge.target(), "transform");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Edge {
    source: String,
    target: String,
}

impl Edge {
    /// Creates a directed edge from `source` to `target`.
    #[must_use]
    pub fn new(source: &str, target: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
        }
    }

    /// Returns the source node identifier.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the target node identifier.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns true when this edge starts and ends on the same node.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}
