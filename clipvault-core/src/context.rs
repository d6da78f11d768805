//! State shared between the poller thread and the UI thread.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::queue::ChangeQueue;

/// Cooperative shutdown flag checked by the poller and the UI loop.
#[derive(Debug, Clone)]
pub struct RunningFlag(Arc<AtomicBool>);

impl RunningFlag {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Clear the flag. Returns `true` if this call performed the transition.
    pub fn stop(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }
}

impl Default for RunningFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// Handed to the poller and the UI controller at construction.
#[derive(Debug, Clone, Default)]
pub struct WatchContext {
    pub queue: Arc<ChangeQueue>,
    pub running: RunningFlag,
}

impl WatchContext {
    pub fn new() -> Self {
        Self::default()
    }
}
