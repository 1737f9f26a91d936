//! The strict sequential analysis pipeline: edges → graph → {cycles,
//! violations} → drift → snapshot.

use serde::Serialize;
use strata_core::traits::Cancellable;
use strata_core::types::collections::FxHashSet;
use strata_core::types::{
    ArchDecision, ArchSnapshot, DependencyGraph, DependencyNode, DependencyStats, DriftResult,
    Edge, LayerRule, LayerViolation,
};
use tracing::debug;

use crate::cycles;
use crate::drift::{self, CurrentAnalysis};
use crate::graph::{coupling, GraphBuilder};
use crate::layers;

/// Inputs for one analysis run, all supplied by external collaborators.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisInput<'a> {
    pub commit_sha: &'a str,
    /// Resolved import edges from the static-parsing step.
    pub edges: &'a [Edge],
    /// Ordered layer rules from configuration.
    pub layers: &'a [LayerRule],
    /// Decisions from the external extraction step.
    pub decisions: &'a [ArchDecision],
    /// The most recent stored snapshot, if any.
    pub previous: Option<&'a ArchSnapshot>,
    /// Unix timestamp (seconds) recorded on the produced snapshot.
    pub created_at: i64,
}

/// Everything one run produces for downstream collaborators.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub graph: DependencyGraph,
    pub cycles: Vec<Vec<String>>,
    pub violations: Vec<LayerViolation>,
    pub stats: DependencyStats,
    pub drift: DriftResult,
    pub snapshot: ArchSnapshot,
}

/// Run the full pipeline for one codebase state.
///
/// Purely CPU-bound and single-threaded; concurrent runs for different
/// repositories are safe because each run owns its graph. Returns `None`
/// only when the caller's cancellation token fires mid-run.
pub fn analyze(
    input: &AnalysisInput<'_>,
    cancel: Option<&dyn Cancellable>,
) -> Option<AnalysisReport> {
    let cancelled = || cancel.is_some_and(|c| c.is_cancelled());

    if cancelled() {
        return None;
    }
    let graph = GraphBuilder::build(input.edges);

    if cancelled() {
        return None;
    }
    // Root order is sorted for stable cycle output across runs.
    let mut nodes: Vec<DependencyNode> = graph.nodes().cloned().collect();
    nodes.sort_by(|a, b| a.file_path.cmp(&b.file_path));
    let universe: FxHashSet<String> = graph.paths().cloned().collect();
    let found_cycles = cycles::find_cycles_cancellable(&nodes, &universe, cancel);

    if cancelled() {
        return None;
    }
    let violations = layers::check_violations(&graph, input.layers);
    let stats = coupling::dependency_stats(&graph, violations.len(), found_cycles.len());
    debug!(
        violations = violations.len(),
        cycles = found_cycles.len(),
        "structure checks complete"
    );

    if cancelled() {
        return None;
    }
    let current = CurrentAnalysis {
        decisions: input.decisions,
        violations: &violations,
        stats: &stats,
    };
    let drift = drift::detect_drift(&current, input.previous);
    let snapshot = drift::build_snapshot(
        input.commit_sha,
        &drift,
        input.decisions,
        &violations,
        stats,
        input.created_at,
    );

    Some(AnalysisReport {
        graph,
        cycles: found_cycles,
        violations,
        stats,
        drift,
        snapshot,
    })
}
