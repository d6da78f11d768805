//! src/controller/actions.rs
//! ============================================================================
//! # Actions: Centralized Application Commands
//!
//! Every user input and timer event the history view responds to, already
//! translated from raw terminal events.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Recurring UI timer: drain the change queue.
    Tick,

    /// Stop polling and exit.
    Quit,

    MoveSelectionUp,

    MoveSelectionDown,

    PageUp,

    PageDown,

    SelectFirst,

    SelectLast,

    /// Close the help overlay, or clear the selection.
    CloseOverlay,

    /// Show the most recent history entry in a dialog.
    ShowLatest,

    /// Delete the entry behind the selected row.
    DeleteSelected,

    /// Remove every history entry.
    ClearHistory,

    ToggleHelp,

    /// Close the open dialog.
    DismissDialog,

    /// Terminal resized; redraw.
    Resize(u16, u16),
}
