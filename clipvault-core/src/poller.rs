//! Background clipboard poller.
//!
//! Reads the clipboard at a fixed interval on its own thread and forwards
//! distinct, non-blank values to the [`ChangeQueue`](crate::queue::ChangeQueue).

use std::io;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::PollerConfig;
use crate::context::WatchContext;
use crate::entry::ClipboardSnapshot;
use crate::source::ClipboardSource;

/// What a single poll iteration did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// A new value was pushed onto the queue.
    Enqueued,
    /// Same value as the last one forwarded.
    Unchanged,
    /// Empty or whitespace-only clipboard; ignored.
    Blank,
    /// The clipboard could not be read this tick; treated as no change.
    ReadFailed,
}

pub struct ClipboardPoller<S> {
    source: S,
    ctx: WatchContext,
    interval: Duration,
    last_seen: String,
    enqueued: u64,
    read_failures: u64,
}

impl<S: ClipboardSource> ClipboardPoller<S> {
    pub fn new(source: S, ctx: WatchContext, config: &PollerConfig) -> Self {
        Self {
            source,
            ctx,
            interval: config.effective_interval(),
            last_seen: String::new(),
            enqueued: 0,
            read_failures: 0,
        }
    }

    /// One poll iteration without sleeping.
    pub fn tick(&mut self) -> PollOutcome {
        let current = match self.source.read_text() {
            Ok(text) => text,
            // Skip policy: read errors never reach the user.
            Err(e) if e.is_transient() => {
                self.read_failures += 1;
                debug!(error = %e, failures = self.read_failures, "Clipboard read skipped");
                return PollOutcome::ReadFailed;
            }
            Err(e) => {
                self.read_failures += 1;
                warn!(error = %e, "Unexpected clipboard source error");
                return PollOutcome::ReadFailed;
            }
        };

        if current == self.last_seen {
            return PollOutcome::Unchanged;
        }

        let snapshot = ClipboardSnapshot::new(current);
        if snapshot.is_blank() {
            return PollOutcome::Blank;
        }

        self.last_seen.clone_from(&snapshot.text);
        self.ctx.queue.push(snapshot);
        self.enqueued += 1;
        debug!(
            len = self.last_seen.len(),
            pending = self.ctx.queue.len(),
            "Clipboard change detected"
        );
        PollOutcome::Enqueued
    }

    /// Poll until the running flag clears. The flag is checked once per
    /// iteration, so shutdown completes after the current sleep.
    pub fn run(mut self) {
        info!(
            interval_ms = self.interval.as_millis() as u64,
            "Clipboard poller started"
        );

        while self.ctx.running.is_running() {
            self.tick();
            thread::sleep(self.interval);
        }

        info!(
            enqueued = self.enqueued,
            read_failures = self.read_failures,
            "Clipboard poller stopped"
        );
    }

    pub fn enqueued(&self) -> u64 {
        self.enqueued
    }
}

/// Start the poller on a dedicated thread.
///
/// The source is built on the poller thread, so backends whose handles are
/// not `Send` can still be used.
pub fn spawn_poller<S, F>(
    ctx: WatchContext,
    config: PollerConfig,
    make_source: F,
) -> io::Result<JoinHandle<()>>
where
    S: ClipboardSource,
    F: FnOnce() -> S + Send + 'static,
{
    thread::Builder::new()
        .name("clipboard-poller".into())
        .spawn(move || ClipboardPoller::new(make_source(), ctx, &config).run())
}
