//! Snapshot-to-snapshot drift comparison and snapshot assembly.

pub mod comparator;
pub mod snapshot;

pub use comparator::{detect_drift, CurrentAnalysis};
pub use snapshot::build_snapshot;
