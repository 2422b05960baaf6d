//! Cooperative cancellation for bulk matching runs.
//!
//! The engine only ever observes cancellation, so the seam exposes just
//! that; requesting cancellation is done on the concrete token held by
//! the caller. Checks happen between sample units — no partial state is
//! retained mid-sample, so there is nothing to unwind.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Observation side of cooperative cancellation.
pub trait Cancellable {
    fn is_cancelled(&self) -> bool;
}

/// Shared cancellation flag. Clones observe the same flag, so the
/// caller keeps one clone and hands another to the run.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    /// A fresh, not-yet-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }
}

impl Cancellable for CancellationToken {
    fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
