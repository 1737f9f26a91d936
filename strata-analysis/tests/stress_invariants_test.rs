//! Randomized invariants: graph symmetry, self-loop exclusion, DAG
//! acyclicity, and drift score bounds.

use proptest::prelude::*;
use strata_analysis::cycles::find_cycles;
use strata_analysis::drift::{detect_drift, CurrentAnalysis};
use strata_analysis::graph::GraphBuilder;
use strata_core::types::collections::FxHashSet;
use strata_core::types::{
    ArchDecision, ArchSnapshot, DecisionStatus, DependencyNode, DependencyStats, Edge, ImportKind,
};

fn path(index: usize) -> String {
    format!("src/m{index}.ts")
}

fn arb_edges() -> impl Strategy<Value = Vec<Edge>> {
    prop::collection::vec((0usize..25, 0usize..25), 0..150).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(s, t)| Edge::new(path(s), path(t), ImportKind::Static))
            .collect()
    })
}

fn arb_decisions() -> impl Strategy<Value = Vec<ArchDecision>> {
    prop::collection::vec((0usize..40, 0.0f64..=1.0), 0..20).prop_map(|raw| {
        raw.into_iter()
            .map(|(id, confidence)| {
                ArchDecision::new(format!("dec-{id}"), confidence, DecisionStatus::Accepted)
            })
            .collect()
    })
}

fn arb_stats() -> impl Strategy<Value = DependencyStats> {
    (0u64..500, 0u64..2000, 0.0f64..=1.0).prop_map(|(nodes, edges, avg_coupling)| {
        DependencyStats {
            node_count: nodes,
            edge_count: edges,
            violation_count: 0,
            cycle_count: 0,
            avg_coupling,
        }
    })
}

proptest! {
    // For every node A and every B in A.imports, B.imported_by contains A,
    // and vice versa.
    #[test]
    fn built_graphs_are_symmetric(edges in arb_edges()) {
        let graph = GraphBuilder::build(&edges);
        for node in graph.nodes() {
            for target in &node.imports {
                let other = graph.get(target).expect("import target must be a node");
                prop_assert!(other.imported_by.contains(&node.file_path));
            }
            for source in &node.imported_by {
                let other = graph.get(source).expect("import source must be a node");
                prop_assert!(other.imports.contains(&node.file_path));
            }
        }
    }

    #[test]
    fn built_graphs_have_no_self_loops(edges in arb_edges()) {
        let graph = GraphBuilder::build(&edges);
        for node in graph.nodes() {
            prop_assert!(!node.imports.contains(&node.file_path));
            prop_assert!(!node.imported_by.contains(&node.file_path));
        }
    }

    #[test]
    fn adjacency_lists_are_deduplicated(edges in arb_edges()) {
        let graph = GraphBuilder::build(&edges);
        for node in graph.nodes() {
            let unique: FxHashSet<&String> = node.imports.iter().collect();
            prop_assert_eq!(unique.len(), node.imports.len());
            let unique: FxHashSet<&String> = node.imported_by.iter().collect();
            prop_assert_eq!(unique.len(), node.imported_by.len());
        }
    }

    // Forward-only edges form a DAG by construction.
    #[test]
    fn dags_have_no_cycles(pairs in prop::collection::vec((0usize..25, 0usize..25), 0..150)) {
        let edges: Vec<Edge> = pairs
            .into_iter()
            .filter(|(s, t)| s < t)
            .map(|(s, t)| Edge::new(path(s), path(t), ImportKind::Static))
            .collect();
        let graph = GraphBuilder::build(&edges);
        let mut nodes: Vec<DependencyNode> = graph.nodes().cloned().collect();
        nodes.sort_by(|a, b| a.file_path.cmp(&b.file_path));
        let universe: FxHashSet<String> = graph.paths().cloned().collect();
        prop_assert!(find_cycles(&nodes, &universe).is_empty());
    }

    #[test]
    fn drift_score_stays_in_bounds(
        current_decisions in arb_decisions(),
        previous_decisions in arb_decisions(),
        current_stats in arb_stats(),
        previous_stats in arb_stats(),
    ) {
        let previous = ArchSnapshot {
            commit_sha: "prev".to_string(),
            drift_score: 0.0,
            decision_count: previous_decisions.len() as u64,
            dependency_stats: previous_stats,
            created_at: 0,
            decisions: Some(previous_decisions),
            violations: Some(vec![]),
        };
        let analysis = CurrentAnalysis {
            decisions: &current_decisions,
            violations: &[],
            stats: &current_stats,
        };
        let result = detect_drift(&analysis, Some(&previous));
        prop_assert!(result.drift_score >= 0.0);
        prop_assert!(result.drift_score <= 1.0);
    }
}
