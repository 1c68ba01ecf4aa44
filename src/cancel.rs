//! Cooperative cancellation flag shared between the controller and a sort run.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cloneable handle to one shared cancellation flag.
///
/// Clones observe the same flag. The controller sets it; the sort engine
/// polls it at its checkpoints and returns early once it is set.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    /// Clears the flag so the next run starts clean.
    pub fn reset(&self) {
        self.flag.store(false, Ordering::Release);
    }
}
