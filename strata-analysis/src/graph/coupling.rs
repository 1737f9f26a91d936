//! Fan-in/fan-out coupling metrics and aggregate graph statistics.

use strata_core::types::{CouplingMetrics, DependencyGraph, DependencyNode, DependencyStats};

/// Compute coupling metrics for one node.
///
/// Derived on demand and never cached beyond one query; `total_nodes` is
/// the size of the graph the node belongs to.
pub fn coupling_metrics(node: &DependencyNode, total_nodes: usize) -> CouplingMetrics {
    let fan_in = node.fan_in();
    let fan_out = node.fan_out();
    let coupling_score = if total_nodes == 0 {
        0.0
    } else {
        ((fan_in + fan_out) as f64 / total_nodes as f64).min(1.0)
    };
    CouplingMetrics {
        fan_in,
        fan_out,
        coupling_score,
    }
}

/// Mean per-node coupling score across the graph; 0 for an empty graph.
pub fn average_coupling(graph: &DependencyGraph) -> f64 {
    let total = graph.node_count();
    if total == 0 {
        return 0.0;
    }
    let sum: f64 = graph
        .nodes()
        .map(|n| coupling_metrics(n, total).coupling_score)
        .sum();
    sum / total as f64
}

/// Assemble the aggregate stats carried in a snapshot.
///
/// Violation and cycle counts come from the checker/detector stages; the
/// rest is derived from the graph.
pub fn dependency_stats(
    graph: &DependencyGraph,
    violation_count: usize,
    cycle_count: usize,
) -> DependencyStats {
    DependencyStats {
        node_count: graph.node_count() as u64,
        edge_count: graph.edge_count() as u64,
        violation_count: violation_count as u64,
        cycle_count: cycle_count as u64,
        avg_coupling: average_coupling(graph),
    }
}
