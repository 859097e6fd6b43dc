//! Fuzz target for pipeline graph validation.
//!
//! This target feeds arbitrary node and edge lists to `validate` to find:
//! - Panics on hostile identifiers (empty strings, NUL bytes, long runs)
//! - Verdict instability across repeated runs on the same input
//! - Count mismatches between input and report
//!
//! # Running
//!
//! ```bash
//! cd fuzz
//! cargo +nightly fuzz run fuzz_validate
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use flowgate_core::{topological_order, validate, Edge};

/// Fuzzing input describing one submitted graph.
#[derive(Arbitrary, Debug)]
struct GraphInput {
    /// Node identifiers, duplicates and empties included
    nodes: Vec<String>,
    /// Edge endpoint pairs, free to reference unknown nodes
    edges: Vec<(String, String)>,
}

fuzz_target!(|input: GraphInput| {
    // Limit element counts to prevent OOM
    let max_elements = 4096;
    let nodes: Vec<String> = input.nodes.into_iter().take(max_elements).collect();
    let edges: Vec<Edge> = input
        .edges
        .iter()
        .take(max_elements)
        .map(|(source, target)| Edge::new(source, target))
        .collect();

    let report = validate(&nodes, &edges);

    // Counts echo the input lists no matter what they contain.
    assert_eq!(report.num_nodes, nodes.len());
    assert_eq!(report.num_edges, edges.len());

    // Same input, same verdict.
    let again = validate(&nodes, &edges);
    assert_eq!(report, again);

    // A full ordering exists exactly when the verdict says acyclic.
    assert_eq!(topological_order(&nodes, &edges).is_some(), report.is_dag);
});
