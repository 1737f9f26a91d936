//! Cooperative cancellation for long-running graph traversals.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative cancellation check.
///
/// All engine operations are bounded, pure-CPU traversals, so cancellation
/// is a host-level provision: the pipeline polls the token at stage and
/// node-visit boundaries and stops early for very large graphs. Stopping
/// early yields a partial, best-effort result, never a failure.
pub trait Cancellable {
    /// Whether the enclosing request asked to stop.
    fn is_cancelled(&self) -> bool;
}

/// Clonable cancellation flag shared between the host and the engine.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Safe to call from any thread.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }
}

impl Cancellable for CancellationToken {
    fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
