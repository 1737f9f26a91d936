//! Elementary cycle detection over the dependency graph.

pub mod detector;

pub use detector::{find_cycles, find_cycles_cancellable};
