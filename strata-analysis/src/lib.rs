//! Dependency graph & drift engine: graph construction from import edges,
//! elementary cycle detection, bounded subgraph extraction, layer violation
//! checking, and snapshot-to-snapshot drift comparison.
//!
//! The engine is synchronous and single-threaded per analysis run; each run
//! owns its [`strata_core::types::DependencyGraph`] and there is no shared
//! state between runs.

pub mod cycles;
pub mod drift;
pub mod graph;
pub mod layers;
pub mod pipeline;
