//! Drift event types — the output of snapshot-to-snapshot comparison.

use serde::{Deserialize, Serialize};

/// Kind of architectural drift detected between two snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriftEventType {
    DecisionAdded,
    DecisionRemoved,
    DecisionChanged,
    ViolationIntroduced,
    ViolationResolved,
    CouplingRegression,
}

/// Event severity, ordered high > medium > low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    High,
    Medium,
    Low,
}

/// A single typed drift event for reporting/alerting collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftEvent {
    pub event_type: DriftEventType,
    pub severity: Severity,
    pub description: String,
    /// Set for decision-scoped events.
    #[serde(default)]
    pub decision_id: Option<String>,
}

/// Result of comparing the current analysis against the previous snapshot.
///
/// With no previous snapshot the result is always `{0.0, []}` — the
/// expected first-run state, not an error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DriftResult {
    /// Normalized drift score in [0, 1].
    pub drift_score: f64,
    pub events: Vec<DriftEvent>,
}
