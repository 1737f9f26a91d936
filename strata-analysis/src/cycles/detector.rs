//! Three-color DFS cycle detection with parent-pointer reconstruction.

use strata_core::traits::Cancellable;
use strata_core::types::collections::{FxHashMap, FxHashSet};
use strata_core::types::DependencyNode;

/// DFS node state. Every discovered node transitions white→gray→black
/// exactly once; black nodes are never re-visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

/// Find every elementary cycle among `nodes` whose edges stay inside
/// `universe`, so detection can be scoped to a subgraph.
///
/// Cycles are closed walks `[a, b, ..., a]` with the start repeated at the
/// end. Every elementary cycle fully contained in the universe is reported
/// at least once. Cycles are deliberately not deduplicated across DFS
/// roots; the same cycle may appear rotated or repeated, and downstream
/// consumers rely on that multiplicity.
pub fn find_cycles(nodes: &[DependencyNode], universe: &FxHashSet<String>) -> Vec<Vec<String>> {
    find_cycles_cancellable(nodes, universe, None)
}

/// [`find_cycles`] with cooperative cancellation checked at node-visit
/// boundaries. On cancellation the cycles found so far are returned as a
/// partial, best-effort result.
pub fn find_cycles_cancellable(
    nodes: &[DependencyNode],
    universe: &FxHashSet<String>,
    cancel: Option<&dyn Cancellable>,
) -> Vec<Vec<String>> {
    let index: FxHashMap<&str, &DependencyNode> = nodes
        .iter()
        .map(|n| (n.file_path.as_str(), n))
        .collect();
    let mut color: FxHashMap<&str, Color> = FxHashMap::default();
    let mut parent: FxHashMap<&str, &str> = FxHashMap::default();
    let mut cycles: Vec<Vec<String>> = Vec::new();

    for root in nodes {
        let root_path = root.file_path.as_str();
        if !universe.contains(root_path) {
            continue;
        }
        if color.get(root_path).copied().unwrap_or(Color::White) != Color::White {
            continue;
        }
        if cancel.is_some_and(|c| c.is_cancelled()) {
            return cycles;
        }

        color.insert(root_path, Color::Gray);
        // Explicit stack of (node, next-import-index) frames; recursion
        // depth equals the longest import chain and can exceed the call
        // stack on large graphs.
        let mut stack: Vec<(&str, usize)> = vec![(root_path, 0)];

        while !stack.is_empty() {
            let (current, next) = {
                let Some(frame) = stack.last_mut() else { break };
                let node = index.get(frame.0).copied();
                let mut next: Option<&str> = None;
                if let Some(node) = node {
                    while frame.1 < node.imports.len() {
                        let candidate = node.imports[frame.1].as_str();
                        frame.1 += 1;
                        if universe.contains(candidate) {
                            next = Some(candidate);
                            break;
                        }
                    }
                }
                (frame.0, next)
            };

            match next {
                None => {
                    color.insert(current, Color::Black);
                    stack.pop();
                }
                Some(target) => match color.get(target).copied().unwrap_or(Color::White) {
                    Color::White => {
                        if cancel.is_some_and(|c| c.is_cancelled()) {
                            return cycles;
                        }
                        parent.insert(target, current);
                        color.insert(target, Color::Gray);
                        stack.push((target, 0));
                    }
                    // A forward edge into a gray node closes a cycle.
                    Color::Gray => cycles.push(reconstruct(current, target, &parent)),
                    Color::Black => {}
                },
            }
        }
    }

    cycles
}

/// Walk parent pointers from `current` back to the gray `target`, then
/// reverse into a closed walk starting and ending at `target`.
fn reconstruct(current: &str, target: &str, parent: &FxHashMap<&str, &str>) -> Vec<String> {
    let mut path: Vec<&str> = vec![current];
    let mut cursor = current;
    while cursor != target {
        match parent.get(cursor) {
            Some(&p) => {
                cursor = p;
                path.push(p);
            }
            None => break,
        }
    }
    path.reverse();
    let mut cycle: Vec<String> = path.into_iter().map(String::from).collect();
    cycle.push(target.to_string());
    cycle
}
