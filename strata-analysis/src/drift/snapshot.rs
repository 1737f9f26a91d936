//! Snapshot assembly for the storage collaborator.

use strata_core::types::{ArchDecision, ArchSnapshot, DependencyStats, DriftResult, LayerViolation};

/// Assemble the immutable per-run snapshot.
///
/// Carries everything the next run needs to reproduce an identical drift
/// comparison: decision records for ID-level diffing and the full
/// violation set alongside the aggregate stats. The serialization format
/// is the storage collaborator's concern; this field set round-trips
/// losslessly through serde.
pub fn build_snapshot(
    commit_sha: &str,
    drift: &DriftResult,
    decisions: &[ArchDecision],
    violations: &[LayerViolation],
    stats: DependencyStats,
    created_at: i64,
) -> ArchSnapshot {
    ArchSnapshot {
        commit_sha: commit_sha.to_string(),
        drift_score: drift.drift_score,
        decision_count: decisions.len() as u64,
        dependency_stats: stats,
        created_at,
        decisions: Some(decisions.to_vec()),
        violations: Some(violations.to_vec()),
    }
}
