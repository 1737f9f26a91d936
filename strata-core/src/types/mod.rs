//! Shared domain types for the drift engine.

pub mod collections;
pub mod drift;
pub mod graph;
pub mod layers;
pub mod snapshot;

pub use drift::{DriftEvent, DriftEventType, DriftResult, Severity};
pub use graph::{CouplingMetrics, DependencyGraph, DependencyNode, Edge, ImportKind};
pub use layers::{LayerRule, LayerViolation};
pub use snapshot::{ArchDecision, ArchSnapshot, DecisionStatus, DependencyStats};
