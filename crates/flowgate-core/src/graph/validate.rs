//! Acyclicity validation via Kahn's algorithm.
//!
//! A FIFO worklist repeatedly removes nodes whose in-degree has dropped to
//! zero; the graph is a DAG exactly when every distinct node gets removed.
//! Runs in O(V + E) with no recursion, so deep chains and adversarial
//! shapes cannot exhaust the stack.

use std::collections::{HashMap, VecDeque};

use serde::{Deserialize, Serialize};

use super::adjacency::AdjacencyIndex;
use super::types::Edge;

/// Outcome of validating one pipeline graph.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationReport {
    /// Node entries in the request, duplicates included.
    pub num_nodes: usize,
    /// Edge entries in the request, dangling edges included.
    pub num_edges: usize,
    /// True when the graph contains no directed cycle.
    pub is_dag: bool,
}

/// Validates a pipeline graph, reporting element counts and the verdict.
///
/// The counts echo the input lists verbatim so callers can confirm what was
/// received. The verdict is computed over the distinct node set, with edges
/// referencing unknown endpoints silently excluded rather than rejected: a
/// pipeline editor may hold half-wired edges while the user drags, and those
/// must not block validation of the rest of the canvas.
///
/// The empty graph is a DAG.
///
/// # Example
///
/// ```rust
/// use flowgate_core::graph::{validate, Edge};
///
/// let nodes = vec!["a".to_string(), "b".to_string()];
/// let report = validate(&nodes, &[Edge::new("a", "b"), Edge::new("b", "a")]);
///
/// assert_eq!(report.num_nodes, 2);
/// assert_eq!(report.num_edges, 2);
/// assert!(!report.is_dag);
/// ```
#[must_use]
pub fn validate(node_ids: &[String], edges: &[Edge]) -> ValidationReport {
    let index = AdjacencyIndex::from_graph(node_ids, edges);
    ValidationReport {
        num_nodes: node_ids.len(),
        num_edges: edges.len(),
        is_dag: kahn_order(&index).len() == index.node_count(),
    }
}

/// Returns true when the graph contains no directed cycle.
///
/// Same tolerances as [`validate`]: duplicate identifiers collapse, dangling
/// edges are ignored, the empty graph is acyclic.
#[must_use]
pub fn is_acyclic(node_ids: &[String], edges: &[Edge]) -> bool {
    validate(node_ids, edges).is_dag
}

/// Returns one topological order over the distinct nodes, or `None` when the
/// graph contains a cycle.
///
/// Ties between simultaneously ready nodes break in unspecified order; only
/// the relative order of edge-connected nodes is guaranteed.
#[must_use]
pub fn topological_order<'a>(node_ids: &'a [String], edges: &'a [Edge]) -> Option<Vec<&'a str>> {
    let index = AdjacencyIndex::from_graph(node_ids, edges);
    let order = kahn_order(&index);
    (order.len() == index.node_count()).then_some(order)
}

/// Kahn worklist: peels in-degree-zero nodes until none remain.
///
/// Nodes on or downstream of a cycle never reach in-degree zero and are
/// left out of the returned order.
fn kahn_order<'a>(index: &AdjacencyIndex<'a>) -> Vec<&'a str> {
    let mut remaining: HashMap<&'a str, usize> =
        index.nodes().map(|node| (node, index.in_degree(node))).collect();
    let mut ready: VecDeque<&'a str> = index
        .nodes()
        .filter(|node| index.in_degree(node) == 0)
        .collect();
    let mut order = Vec::with_capacity(index.node_count());

    while let Some(node) = ready.pop_front() {
        order.push(node);
        for &successor in index.successors(node) {
            if let Some(degree) = remaining.get_mut(successor) {
                *degree -= 1;
                if *degree == 0 {
                    ready.push_back(successor);
                }
            }
        }
    }

    order
}
