//! Cooperative cancellation for long-running searches.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A shared stop flag polled by the solver at its checkpoints.
///
/// Cloning hands out another handle to the same flag, so one side (a UI
/// thread, a timeout watchdog) can request a stop while the solver runs.
/// The flag is only ever polled between whole mark/unmark pairs; a cancelled
/// search never leaves a half-applied move behind.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Takes effect at the solver's next checkpoint.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
