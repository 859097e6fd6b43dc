//! Request-scoped adjacency index for acyclicity validation.
//!
//! Builds successor lists and an in-degree table in a single pass over the
//! edge list. The index borrows the caller's identifiers and lives only for
//! the duration of one validation, so repeated requests never share state.

use std::collections::{HashMap, HashSet};

use super::types::Edge;

/// Successor lists and in-degree table for one node/edge list.
///
/// Construction collapses duplicate node identifiers and drops edges whose
/// endpoints are not both in the node set. Parallel edges and self-loops are
/// kept: each retained edge contributes one successor entry and one unit of
/// in-degree.
#[derive(Debug)]
pub struct AdjacencyIndex<'a> {
    /// Successors: source -> targets, one entry per retained edge.
    successors: HashMap<&'a str, Vec<&'a str>>,
    /// In-degree per distinct node, seeded to zero for edgeless nodes.
    in_degree: HashMap<&'a str, usize>,
    /// Edges dropped because an endpoint was outside the node set.
    skipped_edges: usize,
}

impl<'a> AdjacencyIndex<'a> {
    /// Builds the index from a node list and an edge list.
    #[must_use]
    pub fn from_graph(node_ids: &'a [String], edges: &'a [Edge]) -> Self {
        let nodes: HashSet<&str> = node_ids.iter().map(String::as_str).collect();

        let mut successors: HashMap<&'a str, Vec<&'a str>> = HashMap::with_capacity(nodes.len());
        let mut in_degree: HashMap<&'a str, usize> =
            nodes.iter().map(|&node| (node, 0)).collect();
        let mut skipped_edges = 0;

        for edge in edges {
            let (source, target) = (edge.source(), edge.target());
            if !nodes.contains(source) || !nodes.contains(target) {
                skipped_edges += 1;
                continue;
            }
            successors.entry(source).or_default().push(target);
            if let Some(degree) = in_degree.get_mut(target) {
                *degree += 1;
            }
        }

        Self {
            successors,
            in_degree,
            skipped_edges,
        }
    }

    /// Returns the number of distinct nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.in_degree.len()
    }

    /// Returns true when the identifier appeared in the node list.
    #[must_use]
    pub fn contains(&self, node: &str) -> bool {
        self.in_degree.contains_key(node)
    }

    /// Iterates over the distinct node identifiers in unspecified order.
    pub fn nodes(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.in_degree.keys().copied()
    }

    /// Returns the successors of a node, one entry per retained edge.
    ///
    /// Unknown identifiers have no successors.
    #[must_use]
    pub fn successors(&self, node: &str) -> &[&'a str] {
        self.successors.get(node).map_or(&[], Vec::as_slice)
    }

    /// Returns the in-degree of a node, counting self-loops and every
    /// parallel edge. Unknown identifiers report zero.
    #[must_use]
    pub fn in_degree(&self, node: &str) -> usize {
        self.in_degree.get(node).copied().unwrap_or(0)
    }

    /// Returns how many edges were excluded because an endpoint was missing
    /// from the node set.
    #[must_use]
    pub fn skipped_edges(&self) -> usize {
        self.skipped_edges
    }
}
