//! Graph construction from resolved import edges.

use strata_core::types::collections::{FxHashMap, FxHashSet};
use strata_core::types::{DependencyGraph, DependencyNode, Edge};
use tracing::debug;

/// Builds a [`DependencyGraph`] from an unordered, possibly duplicated
/// edge list.
pub struct GraphBuilder;

impl GraphBuilder {
    /// Build the bidirectional adjacency from an edge list.
    ///
    /// Every path appearing as either endpoint becomes a node, even when
    /// one side of its adjacency stays empty. Duplicate edges collapse to
    /// one; self-edges are dropped silently (they carry no architectural
    /// meaning) although their endpoint still gets a node. An empty edge
    /// list yields an empty graph — never an error, since partial or noisy
    /// input from the scanner is expected.
    pub fn build(edges: &[Edge]) -> DependencyGraph {
        let mut nodes: FxHashMap<String, DependencyNode> = FxHashMap::default();
        let mut seen: FxHashSet<(String, String)> = FxHashSet::default();

        for edge in edges {
            ensure_node(&mut nodes, &edge.source_file);
            ensure_node(&mut nodes, &edge.target_file);

            if edge.source_file == edge.target_file {
                continue;
            }
            if !seen.insert((edge.source_file.clone(), edge.target_file.clone())) {
                continue;
            }

            if let Some(source) = nodes.get_mut(&edge.source_file) {
                source.imports.push(edge.target_file.clone());
            }
            if let Some(target) = nodes.get_mut(&edge.target_file) {
                target.imported_by.push(edge.source_file.clone());
            }
        }

        let graph = DependencyGraph::from_nodes(nodes);
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "dependency graph built"
        );
        graph
    }
}

fn ensure_node(nodes: &mut FxHashMap<String, DependencyNode>, path: &str) {
    if !nodes.contains_key(path) {
        nodes.insert(path.to_string(), DependencyNode::new(path));
    }
}
