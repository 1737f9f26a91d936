//! Dependency graph types — nodes, edges, coupling metrics.

use serde::{Deserialize, Serialize};

use super::collections::FxHashMap;

/// A resolved import edge produced by the external parsing/resolution step.
///
/// Both endpoints are canonical file paths; no module-loader semantics
/// (bundler resolution, path aliases) are interpreted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source_file: String,
    pub target_file: String,
    pub kind: ImportKind,
}

impl Edge {
    /// Create an edge with the given import kind.
    pub fn new(
        source_file: impl Into<String>,
        target_file: impl Into<String>,
        kind: ImportKind,
    ) -> Self {
        Self {
            source_file: source_file.into(),
            target_file: target_file.into(),
            kind,
        }
    }
}

/// How an import edge was declared in source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportKind {
    /// Top-level static import.
    Static,
    /// Runtime dynamic import.
    Dynamic,
    /// CommonJS-style require.
    Require,
    /// Type-only import (erased at runtime).
    TypeOnly,
}

/// A single file in the dependency graph with adjacency in both directions.
///
/// `imports` and `imported_by` are deduplicated, contain no self-edges, and
/// are symmetric across the whole graph: for every node A with B in
/// `A.imports`, B's `imported_by` contains A.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyNode {
    /// Canonical file path; unique key within the graph.
    pub file_path: String,
    /// Outgoing edges (files this file imports).
    pub imports: Vec<String>,
    /// Incoming edges (files that import this file).
    pub imported_by: Vec<String>,
}

impl DependencyNode {
    /// Create a node with no edges.
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            imports: Vec::new(),
            imported_by: Vec::new(),
        }
    }

    /// Count of incoming edges.
    pub fn fan_in(&self) -> usize {
        self.imported_by.len()
    }

    /// Count of outgoing edges.
    pub fn fan_out(&self) -> usize {
        self.imports.len()
    }
}

/// A directed module dependency graph, keyed by file path.
///
/// Built once per analysis run and immutable afterwards. Each run owns its
/// graph; there is no shared state across runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DependencyGraph {
    nodes: FxHashMap<String, DependencyNode>,
}

impl DependencyGraph {
    /// Wrap a finished node map. The builder guarantees symmetry and the
    /// absence of self-edges before calling this.
    pub fn from_nodes(nodes: FxHashMap<String, DependencyNode>) -> Self {
        Self { nodes }
    }

    /// Look up a node by exact file path.
    pub fn get(&self, file_path: &str) -> Option<&DependencyNode> {
        self.nodes.get(file_path)
    }

    /// Whether a file path exists in the graph.
    pub fn contains(&self, file_path: &str) -> bool {
        self.nodes.contains_key(file_path)
    }

    /// Iterate over all nodes.
    pub fn nodes(&self) -> impl Iterator<Item = &DependencyNode> {
        self.nodes.values()
    }

    /// Iterate over all file paths.
    pub fn paths(&self) -> impl Iterator<Item = &String> {
        self.nodes.keys()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total directed edge count (sum of `imports` lengths).
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|n| n.imports.len()).sum()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Per-node coupling metrics, derived on demand and never cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CouplingMetrics {
    pub fan_in: usize,
    pub fan_out: usize,
    /// `min((fan_in + fan_out) / total_nodes, 1)`.
    pub coupling_score: f64,
}
