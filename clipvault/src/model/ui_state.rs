//! UI state for the history view: display rows, selection, overlays and the
//! modal dialog. Lives on the UI thread only.

use std::time::{Duration, Instant};

use clipvault_core::{EntryId, HistoryStats, HistoryStore};
use compact_str::CompactString;

/// Rows moved by PageUp / PageDown.
pub const PAGE_SIZE: usize = 10;

/// Overlays drawn above the history list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UIOverlay {
    #[default]
    None,
    Help,
}

/// Dialog levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

/// Modal dialog with a title and message.
#[derive(Debug, Clone)]
pub struct Notification {
    pub title: CompactString,
    pub message: String,
    pub level: NotificationLevel,
    pub timestamp: Instant,
    pub auto_dismiss_ms: Option<u32>,
}

/// One rendered history line, tied to its entry by id rather than by text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    /// 1-based position in newest-first order.
    pub index: usize,
    pub entry_id: EntryId,
    pub lines: Vec<String>,
    pub truncated: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusInfo {
    pub entries: usize,
    pub bytes: usize,
    pub duplicates: u64,
    pub poll_interval: Duration,
}

#[derive(Debug, Clone)]
pub struct UIState {
    pub rows: Vec<HistoryRow>,
    /// Position in `rows`, `None` when nothing is selected.
    pub selected: Option<usize>,
    pub overlay: UIOverlay,
    pub notification: Option<Notification>,
    pub status: StatusInfo,
    pub max_preview_lines: usize,
    redraw: bool,
}

impl Default for UIState {
    fn default() -> Self {
        Self::new(3)
    }
}

impl UIState {
    pub fn new(max_preview_lines: usize) -> Self {
        Self {
            rows: Vec::new(),
            selected: None,
            overlay: UIOverlay::None,
            notification: None,
            status: StatusInfo::default(),
            max_preview_lines: max_preview_lines.max(1),
            redraw: true,
        }
    }

    /// Rebuild every row from the store (newest first).
    ///
    /// The selection stays on the same entry when it still exists; otherwise
    /// it clamps to the nearest remaining row.
    pub fn rebuild_rows(&mut self, store: &HistoryStore) {
        let selected_id = self.selected_entry_id();
        let previous_pos = self.selected;

        self.rows = store
            .newest_first()
            .enumerate()
            .map(|(i, entry)| {
                let (lines, truncated) = entry.preview_lines(self.max_preview_lines);
                HistoryRow {
                    index: i + 1,
                    entry_id: entry.id,
                    lines: lines.into_iter().map(str::to_string).collect(),
                    truncated,
                }
            })
            .collect();

        self.selected = match (selected_id, previous_pos) {
            _ if self.rows.is_empty() => None,
            (Some(id), Some(pos)) => self
                .rows
                .iter()
                .position(|row| row.entry_id == id)
                .or(Some(pos.min(self.rows.len() - 1))),
            _ => None,
        };

        self.update_status(&store.stats());
        self.request_redraw();
    }

    /// Copy the store counters into the status bar, requesting a redraw if
    /// any of them moved.
    pub fn update_status(&mut self, stats: &HistoryStats) {
        let changed = self.status.entries != stats.total_entries
            || self.status.bytes != stats.total_bytes
            || self.status.duplicates != stats.duplicates;

        self.status.entries = stats.total_entries;
        self.status.bytes = stats.total_bytes;
        self.status.duplicates = stats.duplicates;

        if changed {
            self.request_redraw();
        }
    }

    pub fn selected_entry_id(&self) -> Option<EntryId> {
        self.selected
            .and_then(|pos| self.rows.get(pos))
            .map(|row| row.entry_id)
    }

    pub fn select_next(&mut self) {
        self.move_selection(1);
    }

    pub fn select_previous(&mut self) {
        self.move_selection(-1);
    }

    pub fn page_down(&mut self) {
        self.move_selection(PAGE_SIZE as isize);
    }

    pub fn page_up(&mut self) {
        self.move_selection(-(PAGE_SIZE as isize));
    }

    pub fn select_first(&mut self) {
        if !self.rows.is_empty() {
            self.set_selected(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.rows.is_empty() {
            self.set_selected(Some(self.rows.len() - 1));
        }
    }

    pub fn clear_selection(&mut self) {
        self.set_selected(None);
    }

    fn move_selection(&mut self, delta: isize) {
        if self.rows.is_empty() {
            return;
        }
        let last = self.rows.len() - 1;
        let next = match self.selected {
            // First movement starts at the top of the list.
            None => 0,
            Some(pos) => pos.saturating_add_signed(delta).min(last),
        };
        self.set_selected(Some(next));
    }

    fn set_selected(&mut self, selected: Option<usize>) {
        if self.selected != selected {
            self.selected = selected;
            self.request_redraw();
        }
    }

    pub fn toggle_help(&mut self) {
        self.overlay = match self.overlay {
            UIOverlay::Help => UIOverlay::None,
            UIOverlay::None => UIOverlay::Help,
        };
        self.request_redraw();
    }

    /// Close the help overlay, or drop the selection if no overlay is open.
    pub fn close_overlay(&mut self) {
        if self.overlay != UIOverlay::None {
            self.overlay = UIOverlay::None;
            self.request_redraw();
        } else {
            self.clear_selection();
        }
    }

    // Dialogs

    pub fn show_notification(
        &mut self,
        title: impl Into<CompactString>,
        message: impl Into<String>,
        level: NotificationLevel,
        auto_dismiss_ms: Option<u32>,
    ) {
        self.notification = Some(Notification {
            title: title.into(),
            message: message.into(),
            level,
            timestamp: Instant::now(),
            auto_dismiss_ms,
        });
        self.request_redraw();
    }

    #[inline]
    pub fn show_info(&mut self, title: impl Into<CompactString>, message: impl Into<String>) {
        self.show_notification(title, message, NotificationLevel::Info, None);
    }

    #[inline]
    pub fn show_success(&mut self, title: impl Into<CompactString>, message: impl Into<String>) {
        self.show_notification(title, message, NotificationLevel::Success, Some(2000));
    }

    #[inline]
    pub fn show_error(&mut self, title: impl Into<CompactString>, message: impl Into<String>) {
        self.show_notification(title, message, NotificationLevel::Error, None);
    }

    pub fn dialog_open(&self) -> bool {
        self.notification.is_some()
    }

    pub fn dismiss_notification(&mut self) {
        if self.notification.take().is_some() {
            self.request_redraw();
        }
    }

    /// Drop an expired auto-dismissing dialog. Returns `true` if one closed.
    pub fn update_notification(&mut self) -> bool {
        if let Some(notification) = &self.notification
            && let Some(auto_dismiss_ms) = notification.auto_dismiss_ms
            && notification.timestamp.elapsed().as_millis() > auto_dismiss_ms as u128
        {
            self.notification = None;
            self.request_redraw();
            return true;
        }
        false
    }

    // Redraw tracking

    #[inline]
    pub fn request_redraw(&mut self) {
        self.redraw = true;
    }

    #[inline]
    pub fn needs_redraw(&self) -> bool {
        self.redraw
    }

    #[inline]
    pub fn clear_redraw(&mut self) {
        self.redraw = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(values: &[&str]) -> HistoryStore {
        let mut store = HistoryStore::new();
        for v in values {
            store.append_if_absent(*v);
        }
        store
    }

    fn first_lines(ui: &UIState) -> Vec<&str> {
        ui.rows.iter().map(|r| r.lines[0].as_str()).collect()
    }

    #[test]
    fn rows_are_newest_first_with_one_based_index() {
        let mut ui = UIState::new(3);
        ui.rebuild_rows(&store_with(&["a", "b", "c"]));

        assert_eq!(first_lines(&ui), vec!["c", "b", "a"]);
        let indexes: Vec<usize> = ui.rows.iter().map(|r| r.index).collect();
        assert_eq!(indexes, vec![1, 2, 3]);
        assert_eq!(ui.status.entries, 3);
    }

    #[test]
    fn long_entries_are_cut() {
        let mut ui = UIState::new(2);
        ui.rebuild_rows(&store_with(&["l1\nl2\nl3"]));
        assert_eq!(ui.rows[0].lines, vec!["l1", "l2"]);
        assert!(ui.rows[0].truncated);
    }

    #[test]
    fn selection_follows_entry_across_rebuilds() {
        let mut store = store_with(&["a", "b"]);
        let mut ui = UIState::new(3);
        ui.rebuild_rows(&store);

        ui.select_last(); // "a"
        let id = ui.selected_entry_id().unwrap();

        store.append_if_absent("c");
        ui.rebuild_rows(&store);

        assert_eq!(ui.selected_entry_id(), Some(id));
        assert_eq!(ui.selected, Some(2));
    }

    #[test]
    fn selection_clamps_when_entry_disappears() {
        let mut store = store_with(&["a", "b", "c"]);
        let mut ui = UIState::new(3);
        ui.rebuild_rows(&store);
        ui.select_last(); // "a" at row 2

        store.remove("a").unwrap();
        ui.rebuild_rows(&store);
        assert_eq!(ui.selected, Some(1));

        store.clear();
        ui.rebuild_rows(&store);
        assert_eq!(ui.selected, None);
    }

    #[test]
    fn movement_starts_at_top_and_stays_in_bounds() {
        let mut ui = UIState::new(3);
        ui.select_next();
        assert_eq!(ui.selected, None, "no rows, nothing to select");

        ui.rebuild_rows(&store_with(&["a", "b", "c"]));
        ui.select_next();
        assert_eq!(ui.selected, Some(0));
        ui.select_previous();
        assert_eq!(ui.selected, Some(0));
        ui.page_down();
        assert_eq!(ui.selected, Some(2));
        ui.page_up();
        assert_eq!(ui.selected, Some(0));
    }

    #[test]
    fn escape_closes_help_before_clearing_selection() {
        let mut ui = UIState::new(3);
        ui.rebuild_rows(&store_with(&["a"]));
        ui.select_first();
        ui.toggle_help();

        ui.close_overlay();
        assert_eq!(ui.overlay, UIOverlay::None);
        assert_eq!(ui.selected, Some(0));

        ui.close_overlay();
        assert_eq!(ui.selected, None);
    }

    #[test]
    fn success_dialog_auto_dismisses() {
        let mut ui = UIState::new(3);
        ui.show_notification("Done", "ok", NotificationLevel::Success, Some(0));
        std::thread::sleep(Duration::from_millis(5));
        assert!(ui.update_notification());
        assert!(!ui.dialog_open());

        ui.show_error("Error", "bad");
        assert!(!ui.update_notification());
        assert!(ui.dialog_open());
    }

    #[test]
    fn status_change_requests_redraw() {
        let mut store = store_with(&["a"]);
        let mut ui = UIState::new(3);
        ui.rebuild_rows(&store);
        ui.clear_redraw();

        ui.update_status(&store.stats());
        assert!(!ui.needs_redraw(), "same counters, nothing to draw");

        store.append_if_absent("a");
        ui.update_status(&store.stats());
        assert!(ui.needs_redraw());
        assert_eq!(ui.status.duplicates, 1);
        assert_eq!(ui.status.bytes, 1);
    }

    #[test]
    fn redraw_flag_round_trip() {
        let mut ui = UIState::new(3);
        assert!(ui.needs_redraw());
        ui.clear_redraw();
        assert!(!ui.needs_redraw());
        ui.select_next(); // no rows: no change
        assert!(!ui.needs_redraw());
        ui.toggle_help();
        assert!(ui.needs_redraw());
    }
}
