//! Handoff queue between the clipboard poller and the UI thread.

use crossbeam::channel::{self, Receiver, Sender};
use tracing::trace;

use crate::entry::ClipboardSnapshot;

/// Unbounded FIFO of clipboard changes awaiting the UI thread.
///
/// The only state shared between the poller thread and the UI thread.
#[derive(Debug)]
pub struct ChangeQueue {
    tx: Sender<ClipboardSnapshot>,
    rx: Receiver<ClipboardSnapshot>,
}

impl ChangeQueue {
    pub fn new() -> Self {
        let (tx, rx) = channel::unbounded();
        Self { tx, rx }
    }

    /// Never blocks and never fails: the queue owns its receiver, so the
    /// channel cannot be disconnected while `self` is alive.
    pub fn push(&self, snapshot: ClipboardSnapshot) {
        trace!(len = snapshot.text.len(), "Queueing clipboard change");
        let _ = self.tx.send(snapshot);
    }

    /// Remove and return everything queued right now, oldest first.
    pub fn drain_all(&self) -> Vec<ClipboardSnapshot> {
        self.rx.try_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.rx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}

impl Default for ChangeQueue {
    fn default() -> Self {
        Self::new()
    }
}
