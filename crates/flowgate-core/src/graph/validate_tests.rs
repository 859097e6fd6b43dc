//! Tests for acyclicity validation and topological ordering.

use super::types::Edge;
use super::validate::{is_acyclic, topological_order, validate};

/// Owned identifiers for validation calls.
fn ids(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

/// Edges from (source, target) pairs.
fn edges(pairs: &[(&str, &str)]) -> Vec<Edge> {
    pairs
        .iter()
        .map(|(source, target)| Edge::new(source, target))
        .collect()
}

// ── Verdicts ───────────────────────────────────────────────────────

#[test]
fn test_empty_graph_is_dag() {
    let report = validate(&[], &[]);
    assert_eq!(report.num_nodes, 0);
    assert_eq!(report.num_edges, 0);
    assert!(report.is_dag);
}

#[test]
fn test_single_node_no_edges() {
    assert!(is_acyclic(&ids(&["only"]), &[]));
}

#[test]
fn test_linear_chain_is_dag() {
    let nodes = ids(&["a", "b", "c", "d"]);
    let chain = edges(&[("a", "b"), ("b", "c"), ("c", "d")]);
    assert!(is_acyclic(&nodes, &chain));
}

#[test]
fn test_two_cycle_is_not_dag() {
    let nodes = ids(&["a", "b"]);
    let cycle = edges(&[("a", "b"), ("b", "a")]);
    assert!(!is_acyclic(&nodes, &cycle));
}

#[test]
fn test_three_cycle_with_branch_is_not_dag() {
    // a → b → c → a, plus an acyclic branch b → d.
    let nodes = ids(&["a", "b", "c", "d"]);
    let graph = edges(&[("a", "b"), ("b", "c"), ("c", "a"), ("b", "d")]);
    assert!(!is_acyclic(&nodes, &graph));
}

#[test]
fn test_self_loop_is_not_dag() {
    let nodes = ids(&["a", "b"]);
    let graph = edges(&[("a", "b"), ("b", "b")]);
    assert!(!is_acyclic(&nodes, &graph));
}

#[test]
fn test_diamond_is_dag() {
    // Two converging paths are reconvergence, not a cycle.
    let nodes = ids(&["a", "b", "c", "d"]);
    let diamond = edges(&[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")]);
    assert!(is_acyclic(&nodes, &diamond));
}

#[test]
fn test_parallel_edges_do_not_create_cycle() {
    let nodes = ids(&["a", "b"]);
    let parallel = edges(&[("a", "b"), ("a", "b"), ("a", "b")]);
    assert!(is_acyclic(&nodes, &parallel));
}

#[test]
fn test_disconnected_components() {
    let nodes = ids(&["a", "b", "x", "y"]);

    // Two independent chains: acyclic.
    let two_chains = edges(&[("a", "b"), ("x", "y")]);
    assert!(is_acyclic(&nodes, &two_chains));

    // A cycle in one component poisons the verdict for the whole graph.
    let with_cycle = edges(&[("a", "b"), ("x", "y"), ("y", "x")]);
    assert!(!is_acyclic(&nodes, &with_cycle));
}

// ── Input tolerances ───────────────────────────────────────────────

#[test]
fn test_dangling_edges_do_not_affect_verdict() {
    let nodes = ids(&["a", "b"]);
    // "ghost" is not a node: the a → ghost → a round trip is not a cycle
    // because neither dangling edge participates.
    let graph = edges(&[("a", "b"), ("a", "ghost"), ("ghost", "a")]);

    let report = validate(&nodes, &graph);
    assert!(report.is_dag);
    assert_eq!(report.num_edges, 3);
}

#[test]
fn test_duplicate_node_ids_collapse_but_count() {
    let nodes = ids(&["a", "a", "b"]);
    let report = validate(&nodes, &edges(&[("a", "b")]));

    // Counts echo the request; the verdict uses the distinct set.
    assert_eq!(report.num_nodes, 3);
    assert!(report.is_dag);
}

#[test]
fn test_edges_without_nodes() {
    // Every edge dangles, so the node-free graph stays acyclic.
    let report = validate(&[], &edges(&[("a", "b")]));
    assert_eq!(report.num_nodes, 0);
    assert_eq!(report.num_edges, 1);
    assert!(report.is_dag);
}

#[test]
fn test_validate_is_idempotent() {
    let nodes = ids(&["a", "b", "c"]);
    let graph = edges(&[("a", "b"), ("b", "c"), ("c", "a")]);

    let first = validate(&nodes, &graph);
    let second = validate(&nodes, &graph);
    assert_eq!(first, second);
}

// ── Topological order ──────────────────────────────────────────────

#[test]
fn test_topological_order_of_chain() {
    let nodes = ids(&["c", "a", "b"]);
    let chain = edges(&[("a", "b"), ("b", "c")]);

    // One ready node at every step, so the order is fully determined.
    let order = topological_order(&nodes, &chain).unwrap();
    assert_eq!(order, ["a", "b", "c"]);
}

#[test]
fn test_topological_order_respects_edges() {
    let nodes = ids(&["a", "b", "c", "d"]);
    let diamond = edges(&[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")]);

    let order = topological_order(&nodes, &diamond).unwrap();
    assert_eq!(order.len(), 4);

    let position = |node: &str| order.iter().position(|&n| n == node).unwrap();
    for edge in &diamond {
        assert!(
            position(edge.source()) < position(edge.target()),
            "{} must precede {}",
            edge.source(),
            edge.target()
        );
    }
}

#[test]
fn test_topological_order_none_on_cycle() {
    let nodes = ids(&["a", "b"]);
    let cycle = edges(&[("a", "b"), ("b", "a")]);
    assert!(topological_order(&nodes, &cycle).is_none());
}

#[test]
fn test_topological_order_covers_duplicates_once() {
    let nodes = ids(&["a", "a", "b"]);
    let graph = edges(&[("a", "b")]);
    let order = topological_order(&nodes, &graph).unwrap();
    assert_eq!(order, ["a", "b"]);
}

// ── Scale ──────────────────────────────────────────────────────────

#[test]
fn test_deep_chain_does_not_overflow_stack() {
    let count = 50_000;
    let nodes: Vec<String> = (0..count).map(|i| format!("n{i}")).collect();
    let chain: Vec<Edge> = (0..count - 1)
        .map(|i| Edge::new(&format!("n{i}"), &format!("n{}", i + 1)))
        .collect();

    let report = validate(&nodes, &chain);
    assert!(report.is_dag);
    assert_eq!(report.num_nodes, count);

    // Closing the chain into a ring flips the verdict.
    let mut ring = chain;
    ring.push(Edge::new(&format!("n{}", count - 1), "n0"));
    assert!(!is_acyclic(&nodes, &ring));
}
