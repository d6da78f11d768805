//! Clipboard backends the poller reads from.

use arboard::Clipboard;
use tracing::debug;

use crate::error::{ClipError, ClipResult};

/// Something that can report the clipboard's current text.
pub trait ClipboardSource {
    /// Read the current clipboard text. Failures are transient from the
    /// poller's point of view.
    fn read_text(&mut self) -> ClipResult<String>;
}

/// System clipboard through `arboard`.
///
/// The handle is opened lazily on the thread that reads and is dropped after
/// a connection-level failure, so the next read reconnects.
#[derive(Default)]
pub struct ArboardSource {
    clipboard: Option<Clipboard>,
}

impl ArboardSource {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> ClipResult<&mut Clipboard> {
        if self.clipboard.is_none() {
            debug!("Opening system clipboard");
            self.clipboard = Some(Clipboard::new()?);
        }
        self.clipboard
            .as_mut()
            .ok_or_else(|| ClipError::clipboard_read("clipboard handle unavailable"))
    }
}

impl ClipboardSource for ArboardSource {
    fn read_text(&mut self) -> ClipResult<String> {
        let clipboard = self.handle()?;
        match clipboard.get_text() {
            Ok(text) => Ok(text),
            // Empty clipboard or non-text content; the connection is fine.
            Err(arboard::Error::ContentNotAvailable) => {
                Err(ClipError::clipboard_read("no text on clipboard"))
            }
            Err(err) => {
                self.clipboard = None;
                Err(err.into())
            }
        }
    }
}

impl<S: ClipboardSource + ?Sized> ClipboardSource for Box<S> {
    fn read_text(&mut self) -> ClipResult<String> {
        (**self).read_text()
    }
}
