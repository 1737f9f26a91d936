//! Drift detection between the current analysis and the previous snapshot.

use strata_core::types::collections::{FxHashMap, FxHashSet};
use strata_core::types::{
    ArchDecision, ArchSnapshot, DependencyStats, DriftEvent, DriftEventType, DriftResult,
    LayerViolation, Severity,
};

// Fixed business rules, not configuration. Weights: high=1.0, medium=0.5,
// low=0.2; the score denominator is the current decision count (min 1).
const WEIGHT_HIGH: f64 = 1.0;
const WEIGHT_MEDIUM: f64 = 0.5;
const WEIGHT_LOW: f64 = 0.2;

/// Decisions extracted at or above this confidence are routine; their
/// appearance is low-severity.
const HIGH_CONFIDENCE: f64 = 0.8;

/// Confidence shift for a surviving decision that counts as a change.
const CONFIDENCE_DRIFT_DELTA: f64 = 0.2;

/// Relative increase in edge count or average coupling that counts as a
/// regression.
const COUPLING_REGRESSION_THRESHOLD: f64 = 0.15;

/// The pieces of the current run the comparator consumes.
#[derive(Debug, Clone, Copy)]
pub struct CurrentAnalysis<'a> {
    pub decisions: &'a [ArchDecision],
    pub violations: &'a [LayerViolation],
    pub stats: &'a DependencyStats,
}

/// Compare the current analysis against the previous snapshot.
///
/// With no previous snapshot this returns `{0.0, []}` — the expected
/// first-run state. Missing pieces of a stored snapshot (absent decision
/// records, absent violation set, zeroed stats) degrade additively: events
/// are produced only for the pieces both sides can compare. Never fails.
pub fn detect_drift(current: &CurrentAnalysis, previous: Option<&ArchSnapshot>) -> DriftResult {
    let Some(previous) = previous else {
        return DriftResult::default();
    };

    let mut events = Vec::new();
    diff_decisions(current.decisions, previous, &mut events);
    diff_violations(current.violations, previous, &mut events);
    diff_coupling(current.stats, &previous.dependency_stats, &mut events);

    let weighted: f64 = events.iter().map(|e| severity_weight(e.severity)).sum();
    let denominator = current.decisions.len().max(1) as f64;
    DriftResult {
        drift_score: (weighted / denominator).clamp(0.0, 1.0),
        events,
    }
}

fn severity_weight(severity: Severity) -> f64 {
    match severity {
        Severity::High => WEIGHT_HIGH,
        Severity::Medium => WEIGHT_MEDIUM,
        Severity::Low => WEIGHT_LOW,
    }
}

fn diff_decisions(
    current: &[ArchDecision],
    previous: &ArchSnapshot,
    events: &mut Vec<DriftEvent>,
) {
    // Without stored decision records there is nothing to diff against.
    let Some(previous_decisions) = previous.decisions.as_deref() else {
        return;
    };

    let prev_by_id: FxHashMap<&str, &ArchDecision> = previous_decisions
        .iter()
        .map(|d| (d.id.as_str(), d))
        .collect();
    let current_ids: FxHashSet<&str> = current.iter().map(|d| d.id.as_str()).collect();

    for decision in current {
        match prev_by_id.get(decision.id.as_str()) {
            None => {
                // Confident extractions are routine appearances.
                let severity = if decision.confidence >= HIGH_CONFIDENCE {
                    Severity::Low
                } else {
                    Severity::Medium
                };
                events.push(DriftEvent {
                    event_type: DriftEventType::DecisionAdded,
                    severity,
                    description: format!("New architectural decision: {}", decision.id),
                    decision_id: Some(decision.id.clone()),
                });
            }
            Some(prior) => {
                let status_changed = prior.status != decision.status;
                let confidence_shifted =
                    (prior.confidence - decision.confidence).abs() >= CONFIDENCE_DRIFT_DELTA;
                if status_changed || confidence_shifted {
                    events.push(DriftEvent {
                        event_type: DriftEventType::DecisionChanged,
                        severity: Severity::Medium,
                        description: format!("Architectural decision changed: {}", decision.id),
                        decision_id: Some(decision.id.clone()),
                    });
                }
            }
        }
    }

    // A decision that vanished means an architectural constraint silently
    // disappeared.
    let mut removed: Vec<&str> = previous_decisions
        .iter()
        .map(|d| d.id.as_str())
        .filter(|id| !current_ids.contains(id))
        .collect();
    removed.sort_unstable();
    for id in removed {
        events.push(DriftEvent {
            event_type: DriftEventType::DecisionRemoved,
            severity: Severity::High,
            description: format!("Architectural decision removed: {id}"),
            decision_id: Some(id.to_string()),
        });
    }
}

fn diff_violations(
    current: &[LayerViolation],
    previous: &ArchSnapshot,
    events: &mut Vec<DriftEvent>,
) {
    let Some(previous_violations) = previous.violations.as_deref() else {
        return;
    };

    let prev_set: FxHashSet<&LayerViolation> = previous_violations.iter().collect();
    let current_set: FxHashSet<&LayerViolation> = current.iter().collect();

    for violation in current {
        if !prev_set.contains(violation) {
            events.push(DriftEvent {
                event_type: DriftEventType::ViolationIntroduced,
                severity: Severity::High,
                description: format!(
                    "New layer violation: {} ({}) -> {} ({})",
                    violation.source_file,
                    violation.source_layer,
                    violation.target_file,
                    violation.target_layer
                ),
                decision_id: None,
            });
        }
    }
    for violation in previous_violations {
        if !current_set.contains(violation) {
            events.push(DriftEvent {
                event_type: DriftEventType::ViolationResolved,
                severity: Severity::Low,
                description: format!(
                    "Layer violation resolved: {} ({}) -> {} ({})",
                    violation.source_file,
                    violation.source_layer,
                    violation.target_file,
                    violation.target_layer
                ),
                decision_id: None,
            });
        }
    }
}

fn diff_coupling(
    current: &DependencyStats,
    previous: &DependencyStats,
    events: &mut Vec<DriftEvent>,
) {
    let edge_growth = relative_increase(previous.edge_count as f64, current.edge_count as f64);
    let coupling_growth = relative_increase(previous.avg_coupling, current.avg_coupling);

    let worst = edge_growth.max(coupling_growth);
    if worst > COUPLING_REGRESSION_THRESHOLD {
        events.push(DriftEvent {
            event_type: DriftEventType::CouplingRegression,
            severity: Severity::Medium,
            description: format!(
                "Coupling regression: edges {} -> {}, avg coupling {:.3} -> {:.3}",
                previous.edge_count, current.edge_count, previous.avg_coupling, current.avg_coupling
            ),
            decision_id: None,
        });
    }
}

/// Relative growth from `previous` to `current`. A zero or missing prior
/// value means there is no baseline to regress from.
fn relative_increase(previous: f64, current: f64) -> f64 {
    if previous <= 0.0 {
        return 0.0;
    }
    (current - previous) / previous
}
