//! # clipvault-core - Clipboard Watching and History
//!
//! The non-UI half of clipvault: a background poller that watches the OS
//! clipboard, a queue that hands changes to the UI thread, and the
//! deduplicated, insertion-ordered history the UI renders.
//!
//! ## Key Features
//! - Fixed-interval clipboard polling on a dedicated thread
//! - Non-blocking FIFO handoff between the poller and the UI thread
//! - Exact-match deduplication with stable entry identities
//! - Typed errors with an explicit skip policy for transient read failures

pub mod config;
pub mod context;
pub mod entry;
pub mod error;
pub mod poller;
pub mod queue;
pub mod source;
pub mod store;

// Re-export main types for easy use
pub use config::PollerConfig;
pub use context::{RunningFlag, WatchContext};
pub use entry::{ClipboardSnapshot, EntryId, HistoryEntry};
pub use error::{ClipError, ClipResult};
pub use poller::{ClipboardPoller, PollOutcome, spawn_poller};
pub use queue::ChangeQueue;
pub use source::{ArboardSource, ClipboardSource};
pub use store::{HistoryStats, HistoryStore};
