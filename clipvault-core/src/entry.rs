use std::fmt;
use std::time::Instant;

/// Stable identity of a history entry, assigned by the store.
///
/// Ids only identify entries; ordering comes from the store's insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl EntryId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single clipboard value observed by the poller.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipboardSnapshot {
    pub text: String,
    pub captured_at: Instant,
}

impl ClipboardSnapshot {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            captured_at: Instant::now(),
        }
    }

    /// Empty and whitespace-only values never enter the history.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: EntryId,
    pub text: String,
}

impl HistoryEntry {
    pub(crate) fn new(id: EntryId, text: String) -> Self {
        Self { id, text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn byte_len(&self) -> usize {
        self.text.len()
    }

    /// First `max_lines` lines of the entry, and whether anything was cut.
    pub fn preview_lines(&self, max_lines: usize) -> (Vec<&str>, bool) {
        let max_lines = max_lines.max(1);
        let mut lines = self.text.lines();
        let head: Vec<&str> = lines.by_ref().take(max_lines).collect();
        let truncated = lines.next().is_some();
        (head, truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_snapshots() {
        assert!(ClipboardSnapshot::new("").is_blank());
        assert!(ClipboardSnapshot::new(" \n\t ").is_blank());
        assert!(!ClipboardSnapshot::new("  x ").is_blank());
    }

    #[test]
    fn preview_cuts_long_entries() {
        let entry = HistoryEntry::new(EntryId::new(1), "one\ntwo\nthree\nfour".into());

        let (lines, truncated) = entry.preview_lines(2);
        assert_eq!(lines, vec!["one", "two"]);
        assert!(truncated);

        let (lines, truncated) = entry.preview_lines(4);
        assert_eq!(lines.len(), 4);
        assert!(!truncated);
    }

    #[test]
    fn preview_always_shows_one_line() {
        let entry = HistoryEntry::new(EntryId::new(1), "single".into());
        let (lines, truncated) = entry.preview_lines(0);
        assert_eq!(lines, vec!["single"]);
        assert!(!truncated);
    }
}
