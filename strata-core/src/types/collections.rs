//! Hash collections used throughout the engine.
//!
//! FxHash is deterministic (no per-process seed), so iteration order is
//! stable for identical insertion sequences across runs.

pub use rustc_hash::{FxHashMap, FxHashSet};
