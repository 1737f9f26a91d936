//! Cycle detection tests — soundness, DAG completeness, universe scoping.

use strata_analysis::cycles::{find_cycles, find_cycles_cancellable};
use strata_analysis::graph::GraphBuilder;
use strata_core::traits::{Cancellable, CancellationToken};
use strata_core::types::collections::FxHashSet;
use strata_core::types::{DependencyNode, Edge, ImportKind};

fn edge(source: &str, target: &str) -> Edge {
    Edge::new(source, target, ImportKind::Static)
}

/// Build sorted nodes and the full universe from an edge list.
fn nodes_and_universe(edges: &[Edge]) -> (Vec<DependencyNode>, FxHashSet<String>) {
    let graph = GraphBuilder::build(edges);
    let mut nodes: Vec<DependencyNode> = graph.nodes().cloned().collect();
    nodes.sort_by(|a, b| a.file_path.cmp(&b.file_path));
    let universe = graph.paths().cloned().collect();
    (nodes, universe)
}

#[test]
fn triangle_reports_one_cycle_in_edge_order() {
    let (nodes, universe) =
        nodes_and_universe(&[edge("a", "b"), edge("b", "c"), edge("c", "a")]);
    let cycles = find_cycles(&nodes, &universe);

    assert_eq!(cycles.len(), 1);
    let cycle = &cycles[0];
    // Closed walk: starts and ends at the same node, three edges.
    assert_eq!(cycle.first(), cycle.last());
    assert_eq!(cycle.len(), 4);
    assert_eq!(cycle, &vec!["a", "b", "c", "a"]);
}

#[test]
fn dag_has_no_cycles() {
    let (nodes, universe) = nodes_and_universe(&[
        edge("a", "b"),
        edge("a", "c"),
        edge("b", "d"),
        edge("c", "d"),
        edge("d", "e"),
    ]);
    assert!(find_cycles(&nodes, &universe).is_empty());
}

#[test]
fn cycle_through_excluded_node_is_not_reported() {
    let (nodes, _) = nodes_and_universe(&[edge("a", "b"), edge("b", "c"), edge("c", "a")]);
    let universe: FxHashSet<String> = ["a".to_string(), "b".to_string()].into_iter().collect();
    assert!(find_cycles(&nodes, &universe).is_empty());
}

#[test]
fn disjoint_cycles_are_both_found() {
    let (nodes, universe) = nodes_and_universe(&[
        edge("a", "b"),
        edge("b", "a"),
        edge("x", "y"),
        edge("y", "x"),
    ]);
    let cycles = find_cycles(&nodes, &universe);
    assert_eq!(cycles.len(), 2);
}

#[test]
fn overlapping_cycles_sharing_a_node() {
    // Figure eight through a: a→b→a and a→c→a.
    let (nodes, universe) = nodes_and_universe(&[
        edge("a", "b"),
        edge("b", "a"),
        edge("a", "c"),
        edge("c", "a"),
    ]);
    let cycles = find_cycles(&nodes, &universe);
    assert_eq!(cycles.len(), 2);
    for cycle in &cycles {
        assert_eq!(cycle.first(), cycle.last());
    }
}

#[test]
fn self_loop_node_reports_minimal_walk() {
    // The builder drops self-edges; feed the detector a hand-built node.
    let node = DependencyNode {
        file_path: "x".to_string(),
        imports: vec!["x".to_string()],
        imported_by: vec!["x".to_string()],
    };
    let universe: FxHashSet<String> = ["x".to_string()].into_iter().collect();
    let cycles = find_cycles(&[node], &universe);
    assert_eq!(cycles, vec![vec!["x".to_string(), "x".to_string()]]);
}

#[test]
fn larger_cycle_preserves_edge_order() {
    let (nodes, universe) = nodes_and_universe(&[
        edge("m1", "m2"),
        edge("m2", "m3"),
        edge("m3", "m4"),
        edge("m4", "m1"),
    ]);
    let cycles = find_cycles(&nodes, &universe);
    assert_eq!(cycles.len(), 1);
    assert_eq!(cycles[0], vec!["m1", "m2", "m3", "m4", "m1"]);
}

#[test]
fn cancelled_token_returns_partial_result() {
    let (nodes, universe) =
        nodes_and_universe(&[edge("a", "b"), edge("b", "c"), edge("c", "a")]);
    let token = CancellationToken::new();
    token.cancel();
    let cycles = find_cycles_cancellable(&nodes, &universe, Some(&token));
    assert!(cycles.is_empty());
    assert!(token.is_cancelled());
}
