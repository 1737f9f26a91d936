//! Snapshot types — the per-run record compared against the previous run.

use serde::{Deserialize, Serialize};

use super::layers::LayerViolation;

/// Aggregate dependency statistics for one analysis run.
///
/// Deliberately a closed struct with named numeric fields, not an open
/// key→number map: unknown keys in stored data are a deserialization
/// error rather than silently carried along.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DependencyStats {
    pub node_count: u64,
    pub edge_count: u64,
    pub violation_count: u64,
    pub cycle_count: u64,
    /// Mean per-node coupling score across the graph.
    pub avg_coupling: f64,
}

/// Lifecycle status of an architectural decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStatus {
    Proposed,
    Accepted,
    Deprecated,
    Superseded,
}

/// An architectural decision produced by the external extraction step.
///
/// Consumed only for decision-drift comparison; discovery and narrative
/// generation live outside this engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchDecision {
    pub id: String,
    /// Extraction confidence in [0, 1].
    pub confidence: f64,
    pub status: DecisionStatus,
}

impl ArchDecision {
    pub fn new(id: impl Into<String>, confidence: f64, status: DecisionStatus) -> Self {
        Self {
            id: id.into(),
            confidence,
            status,
        }
    }
}

/// One immutable snapshot of the architectural model per analysis run.
///
/// Persisted by an external storage collaborator and fed back as the
/// `previous` snapshot of the next run; storing then reloading a snapshot
/// must reproduce identical drift comparisons. `decisions` and
/// `violations` default to `None` for stored snapshots that predate those
/// fields — the comparator degrades to skipping the pieces it cannot
/// compare.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchSnapshot {
    pub commit_sha: String,
    /// Normalized drift score in [0, 1] at the time this snapshot was taken.
    pub drift_score: f64,
    pub decision_count: u64,
    pub dependency_stats: DependencyStats,
    /// Unix timestamp (seconds).
    pub created_at: i64,
    /// Decision records for ID-level drift diffing.
    #[serde(default)]
    pub decisions: Option<Vec<ArchDecision>>,
    /// Violation set for introduced/resolved diffing.
    #[serde(default)]
    pub violations: Option<Vec<LayerViolation>>,
}
