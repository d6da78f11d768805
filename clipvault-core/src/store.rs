use std::time::Instant;

use tracing::{debug, trace};

use crate::entry::{EntryId, HistoryEntry};
use crate::error::{ClipError, ClipResult};

/// Insertion-ordered, deduplicated clipboard history.
///
/// Owned by the UI thread; no internal locking. Histories stay small (tens to
/// low hundreds of entries), so lookups are linear scans.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
    next_id: u64,
    appended: u64,
    duplicates: u64,
    created_at: Instant,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
            appended: 0,
            duplicates: 0,
            created_at: Instant::now(),
        }
    }

    /// Append `value` unless an equal entry exists anywhere in the history.
    ///
    /// Returns `true` when the value was added.
    pub fn append_if_absent(&mut self, value: impl Into<String>) -> bool {
        let value: String = value.into();

        if self.contains(&value) {
            self.duplicates += 1;
            trace!(len = value.len(), "Skipping duplicate history value");
            return false;
        }

        let id = EntryId::new(self.next_id);
        self.next_id += 1;
        self.appended += 1;
        self.entries.push(HistoryEntry::new(id, value));

        debug!(%id, total = self.entries.len(), "Appended history entry");
        true
    }

    /// Remove the entry equal to `value`.
    pub fn remove(&mut self, value: &str) -> ClipResult<HistoryEntry> {
        let pos = self
            .entries
            .iter()
            .position(|entry| entry.text == value)
            .ok_or(ClipError::ValueNotFound)?;

        Ok(self.entries.remove(pos))
    }

    /// Remove the entry with the given identity.
    pub fn remove_by_id(&mut self, id: EntryId) -> ClipResult<HistoryEntry> {
        let pos = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(ClipError::EntryNotFound(id))?;

        let removed = self.entries.remove(pos);
        debug!(%id, total = self.entries.len(), "Removed history entry");
        Ok(removed)
    }

    pub fn clear(&mut self) {
        debug!(dropped = self.entries.len(), "Clearing history");
        self.entries.clear();
    }

    /// Most recently appended entry still in the history.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.entries.iter().any(|entry| entry.text == value)
    }

    /// Entries in insertion order (oldest first).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry> + ExactSizeIterator {
        self.entries.iter()
    }

    /// Entries in display order (newest first).
    pub fn newest_first(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> HistoryStats {
        HistoryStats {
            total_entries: self.entries.len(),
            total_bytes: self.entries.iter().map(HistoryEntry::byte_len).sum(),
            appended: self.appended,
            duplicates: self.duplicates,
            created_at: self.created_at,
        }
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct HistoryStats {
    pub total_entries: usize,
    pub total_bytes: usize,
    /// Values appended since start, including ones later removed.
    pub appended: u64,
    /// Values dropped because an equal entry already existed.
    pub duplicates: u64,
    pub created_at: Instant,
}
