//! Error types shared by the poller and the history store

use compact_str::CompactString;
use thiserror::Error;

use crate::entry::EntryId;

pub type ClipResult<T> = Result<T, ClipError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipError {
    /// Transient OS-level failure reading the clipboard (lock contention,
    /// non-text content, display server hiccup).
    #[error("Clipboard read failed: {0}")]
    ClipboardRead(CompactString),

    #[error("No text selected.")]
    NothingSelected,

    #[error("History entry not found: #{0}")]
    EntryNotFound(EntryId),

    #[error("Value not found in history")]
    ValueNotFound,
}

impl ClipError {
    /// Errors the poller swallows and retries on the next tick.
    #[inline(always)]
    pub fn is_transient(&self) -> bool {
        matches!(self, ClipError::ClipboardRead(_))
    }

    /// Errors caused by a user selection that should be shown to the user.
    #[inline(always)]
    pub fn is_selection_error(&self) -> bool {
        matches!(
            self,
            ClipError::NothingSelected | ClipError::EntryNotFound(_) | ClipError::ValueNotFound
        )
    }

    #[inline]
    pub fn clipboard_read(message: impl Into<CompactString>) -> Self {
        Self::ClipboardRead(message.into())
    }
}

impl From<arboard::Error> for ClipError {
    fn from(err: arboard::Error) -> Self {
        ClipError::ClipboardRead(CompactString::from(err.to_string()))
    }
}
