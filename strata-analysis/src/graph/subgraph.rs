//! Depth-bounded bidirectional subgraph extraction with fuzzy target
//! resolution.

use std::collections::VecDeque;

use serde::Serialize;
use strata_core::types::collections::FxHashSet;
use strata_core::types::{DependencyGraph, DependencyNode};

/// Outcome of a subgraph query.
///
/// `NoMatch` is distinct from a matched-but-small result so callers can
/// offer suggestions instead of rendering an empty graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubgraphResult {
    /// No node resolved from the requested target.
    NoMatch,
    /// The resolved root and every node within the depth bound.
    Matched {
        root: String,
        nodes: Vec<DependencyNode>,
    },
}

impl SubgraphResult {
    /// The extracted nodes; empty for `NoMatch`.
    pub fn nodes(&self) -> &[DependencyNode] {
        match self {
            SubgraphResult::NoMatch => &[],
            SubgraphResult::Matched { nodes, .. } => nodes,
        }
    }

    pub fn is_no_match(&self) -> bool {
        matches!(self, SubgraphResult::NoMatch)
    }
}

/// Extract the nodes within `depth` hops of `target`, following both
/// `imports` and `imported_by` edges.
///
/// Target resolution: exact path key first, then case-insensitive
/// equality, then case-insensitive substring match scored by
/// `target length / candidate length` with ties broken by shortest path.
/// Depth 0 returns just the root node; each node is visited at most once.
pub fn get_subgraph(graph: &DependencyGraph, target: &str, depth: usize) -> SubgraphResult {
    let Some(root) = resolve_target(graph, target) else {
        return SubgraphResult::NoMatch;
    };

    let mut visited: FxHashSet<&str> = FxHashSet::default();
    let mut queue: VecDeque<(&str, usize)> = VecDeque::new();
    let mut nodes: Vec<DependencyNode> = Vec::new();

    visited.insert(root);
    queue.push_back((root, 0));

    while let Some((path, hops)) = queue.pop_front() {
        let Some(node) = graph.get(path) else {
            continue;
        };
        nodes.push(node.clone());

        if hops >= depth {
            continue;
        }
        for neighbor in node.imports.iter().chain(node.imported_by.iter()) {
            if visited.insert(neighbor.as_str()) {
                queue.push_back((neighbor.as_str(), hops + 1));
            }
        }
    }

    SubgraphResult::Matched {
        root: root.to_string(),
        nodes,
    }
}

/// Resolve a query string to a graph key: exact, then case-insensitive,
/// then best-scoring substring match.
fn resolve_target<'a>(graph: &'a DependencyGraph, target: &str) -> Option<&'a str> {
    if let Some(node) = graph.get(target) {
        return Some(node.file_path.as_str());
    }

    let needle = target.to_lowercase();

    let mut exact_ci: Option<&str> = None;
    for path in graph.paths() {
        if path.to_lowercase() == needle && better_tie(exact_ci, path) {
            exact_ci = Some(path.as_str());
        }
    }
    if exact_ci.is_some() {
        return exact_ci;
    }

    let mut best: Option<(&str, f64)> = None;
    for path in graph.paths() {
        if !path.to_lowercase().contains(&needle) {
            continue;
        }
        let score = needle.len() as f64 / path.len() as f64;
        let replace = match best {
            None => true,
            Some((current, current_score)) => {
                score > current_score
                    || (score == current_score && better_tie(Some(current), path))
            }
        };
        if replace {
            best = Some((path.as_str(), score));
        }
    }
    best.map(|(path, _)| path)
}

/// Tie-break: prefer the shortest path, then lexicographic order for
/// stable results across runs.
fn better_tie(current: Option<&str>, candidate: &str) -> bool {
    match current {
        None => true,
        Some(current) => {
            candidate.len() < current.len()
                || (candidate.len() == current.len() && candidate < current)
        }
    }
}
