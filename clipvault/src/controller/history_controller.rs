//! Bridges the change queue and the history store to the display.
//!
//! Owns the [`HistoryStore`] and [`UIState`]; everything here runs on the UI
//! thread. The poller only ever touches the shared queue.

use std::thread::JoinHandle;
use std::time::Duration;

use clipvault_core::{ClipError, ClipResult, HistoryEntry, HistoryStore, WatchContext};
use tracing::{debug, info, warn};

use crate::config::UiConfig;
use crate::controller::actions::Action;
use crate::model::ui_state::UIState;

pub const LATEST_TITLE: &str = "Latest Clipboard";
pub const EMPTY_HISTORY_MESSAGE: &str = "Clipboard history is empty.";
pub const DELETED_MESSAGE: &str = "Selected clipboard item deleted.";
pub const NOT_FOUND_MESSAGE: &str = "Selected item not found in history.";
pub const NOTHING_SELECTED_MESSAGE: &str = "No text selected.";
pub const CLEARED_MESSAGE: &str = "Clipboard history cleared.";

pub struct HistoryController {
    ctx: WatchContext,
    store: HistoryStore,
    ui: UIState,
    poller: Option<JoinHandle<()>>,
}

impl HistoryController {
    pub fn new(ctx: WatchContext, config: &UiConfig, poll_interval: Duration) -> Self {
        let mut ui = UIState::new(config.max_preview_lines);
        ui.status.poll_interval = poll_interval;

        Self {
            ctx,
            store: HistoryStore::new(),
            ui,
            poller: None,
        }
    }

    /// Hand over the poller thread so shutdown can join it.
    pub fn attach_poller(&mut self, handle: JoinHandle<()>) {
        self.poller = Some(handle);
    }

    pub fn ui(&self) -> &UIState {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut UIState {
        &mut self.ui
    }

    pub fn store(&self) -> &HistoryStore {
        &self.store
    }

    pub fn is_running(&self) -> bool {
        self.ctx.running.is_running()
    }

    /// Apply one action. Returns `false` when the app should exit.
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Tick => {
                self.on_tick();
                self.ui.update_notification();
            }
            Action::Quit => {
                info!("Quit requested");
                self.ctx.running.stop();
                return false;
            }
            Action::MoveSelectionUp => self.ui.select_previous(),
            Action::MoveSelectionDown => self.ui.select_next(),
            Action::PageUp => self.ui.page_up(),
            Action::PageDown => self.ui.page_down(),
            Action::SelectFirst => self.ui.select_first(),
            Action::SelectLast => self.ui.select_last(),
            Action::CloseOverlay => self.ui.close_overlay(),
            Action::ShowLatest => self.show_latest(),
            Action::DeleteSelected => {
                if let Err(e) = self.delete_selected() {
                    debug!(error = %e, "Delete reported in dialog");
                }
            }
            Action::ClearHistory => self.clear_history(),
            Action::ToggleHelp => self.ui.toggle_help(),
            Action::DismissDialog => self.ui.dismiss_notification(),
            Action::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                self.ui.request_redraw();
            }
        }
        true
    }

    /// Drain the change queue into the store. Rebuilds the display only if
    /// something new was added; returns how many entries were added.
    pub fn on_tick(&mut self) -> usize {
        let drained = self.ctx.queue.drain_all();
        if drained.is_empty() {
            return 0;
        }

        let received = drained.len();
        let added = drained
            .into_iter()
            .filter(|snap| self.store.append_if_absent(snap.text.as_str()))
            .count();

        debug!(received, added, total = self.store.len(), "Drained clipboard changes");

        if added > 0 {
            self.ui.rebuild_rows(&self.store);
        } else {
            // Rows are unchanged; only the duplicate counter moved.
            self.ui.update_status(&self.store.stats());
        }
        added
    }

    pub fn show_latest(&mut self) {
        let message = match self.store.latest() {
            Some(entry) => entry.text.clone(),
            None => EMPTY_HISTORY_MESSAGE.to_string(),
        };
        self.ui.show_info(LATEST_TITLE, message);
    }

    /// Delete the entry behind the selected row and report the result in a
    /// dialog.
    pub fn delete_selected(&mut self) -> ClipResult<HistoryEntry> {
        let result = self
            .ui
            .selected_entry_id()
            .ok_or(ClipError::NothingSelected)
            .and_then(|id| self.store.remove_by_id(id));

        match &result {
            Ok(entry) => {
                info!(id = %entry.id, "Deleted history entry");
                self.ui.rebuild_rows(&self.store);
                self.ui.show_success("Deleted", DELETED_MESSAGE);
            }
            Err(ClipError::NothingSelected) => {
                self.ui.show_error("Error", NOTHING_SELECTED_MESSAGE);
            }
            Err(e) if e.is_selection_error() => {
                warn!(error = %e, "Selected row no longer in history");
                self.ui.rebuild_rows(&self.store);
                self.ui.show_error("Error", NOT_FOUND_MESSAGE);
            }
            Err(e) => {
                warn!(error = %e, "Delete failed");
                self.ui.show_error("Error", e.to_string());
            }
        }
        result
    }

    pub fn clear_history(&mut self) {
        self.store.clear();
        self.ui.rebuild_rows(&self.store);
        self.ui.show_success("Cleared", CLEARED_MESSAGE);
        info!("History cleared");
    }

    /// Stop the poller and wait for its thread to finish. Must complete
    /// before the display is torn down so nothing enqueues into a queue that
    /// is no longer drained.
    pub async fn shutdown(&mut self) {
        self.ctx.running.stop();

        let stats = self.store.stats();
        info!(
            entries = stats.total_entries,
            appended = stats.appended,
            duplicates = stats.duplicates,
            uptime_s = stats.created_at.elapsed().as_secs(),
            "History summary"
        );

        let Some(handle) = self.poller.take() else {
            return;
        };

        match tokio::task::spawn_blocking(move || handle.join()).await {
            Ok(Ok(())) => info!("Clipboard poller joined"),
            Ok(Err(_)) => warn!("Clipboard poller panicked"),
            Err(e) => warn!("Failed to join clipboard poller: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clipvault_core::{
        ClipboardSnapshot, ClipboardSource, PollerConfig, spawn_poller,
    };
    use crate::model::ui_state::NotificationLevel;

    fn controller() -> (HistoryController, WatchContext) {
        let ctx = WatchContext::new();
        let c = HistoryController::new(ctx.clone(), &UiConfig::default(), Duration::from_millis(500));
        (c, ctx)
    }

    fn observe(ctx: &WatchContext, values: &[&str]) {
        for v in values {
            ctx.queue.push(ClipboardSnapshot::new(*v));
        }
    }

    fn history(c: &HistoryController) -> Vec<&str> {
        c.store().iter().map(HistoryEntry::as_str).collect()
    }

    fn displayed(c: &HistoryController) -> Vec<&str> {
        c.ui().rows.iter().map(|r| r.lines[0].as_str()).collect()
    }

    fn dialog(c: &HistoryController) -> (&str, &str, NotificationLevel) {
        let n = c.ui().notification.as_ref().expect("dialog open");
        (n.title.as_str(), n.message.as_str(), n.level)
    }

    #[test]
    fn tick_drains_queue_into_history() {
        let (mut c, ctx) = controller();
        observe(&ctx, &["a", "b", "a"]);

        assert_eq!(c.on_tick(), 2);
        assert_eq!(history(&c), vec!["a", "b"]);
        assert_eq!(displayed(&c), vec!["b", "a"]);
        assert!(ctx.queue.is_empty());
    }

    #[test]
    fn duplicate_only_tick_refreshes_status_without_rebuilding() {
        let (mut c, ctx) = controller();
        observe(&ctx, &["a"]);
        c.on_tick();
        c.ui_mut().clear_redraw();
        let rows_before = c.ui().rows.clone();

        observe(&ctx, &["a"]);
        assert_eq!(c.on_tick(), 0);
        assert_eq!(c.ui().rows, rows_before);
        assert_eq!(c.ui().status.duplicates, 1);
        assert!(c.ui().needs_redraw(), "duplicate counter must reach the screen");

        c.ui_mut().clear_redraw();
        assert_eq!(c.on_tick(), 0);
        assert!(!c.ui().needs_redraw());
    }

    #[test]
    fn delete_selected_removes_entry_and_rerenders() {
        let (mut c, ctx) = controller();
        observe(&ctx, &["a", "b", "c"]);
        c.on_tick();

        // newest first: c, b, a
        c.dispatch(Action::MoveSelectionDown);
        c.dispatch(Action::MoveSelectionDown);
        assert_eq!(c.ui().rows[c.ui().selected.unwrap()].lines[0], "b");

        let removed = c.delete_selected().unwrap();
        assert_eq!(removed.text, "b");
        assert_eq!(history(&c), vec!["a", "c"]);
        assert_eq!(displayed(&c), vec!["c", "a"]);
        assert_eq!(dialog(&c), ("Deleted", DELETED_MESSAGE, NotificationLevel::Success));
    }

    #[test]
    fn delete_is_by_identity_not_display_text() {
        let (mut c, ctx) = controller();
        // Multi-line entry whose rendered row differs from its stored text.
        observe(&ctx, &["line one\nline two\nline three\nline four"]);
        c.on_tick();
        c.dispatch(Action::SelectFirst);

        assert!(c.delete_selected().is_ok());
        assert!(c.store().is_empty());
    }

    #[test]
    fn delete_without_selection_reports_nothing_selected() {
        let (mut c, ctx) = controller();
        observe(&ctx, &["a"]);
        c.on_tick();

        assert_eq!(c.delete_selected(), Err(ClipError::NothingSelected));
        assert_eq!(history(&c), vec!["a"]);
        assert_eq!(dialog(&c), ("Error", NOTHING_SELECTED_MESSAGE, NotificationLevel::Error));
    }

    #[test]
    fn delete_of_vanished_entry_reports_not_found() {
        let (mut c, ctx) = controller();
        observe(&ctx, &["a"]);
        c.on_tick();
        c.dispatch(Action::SelectFirst);
        let id = c.ui().selected_entry_id().unwrap();

        // Entry disappears behind the display's back.
        c.store.remove_by_id(id).unwrap();

        assert_eq!(c.delete_selected(), Err(ClipError::EntryNotFound(id)));
        assert_eq!(dialog(&c), ("Error", NOT_FOUND_MESSAGE, NotificationLevel::Error));
        assert!(c.ui().rows.is_empty());
    }

    #[test]
    fn show_latest_on_empty_history() {
        let (mut c, _ctx) = controller();
        c.dispatch(Action::ShowLatest);
        assert_eq!(dialog(&c), (LATEST_TITLE, EMPTY_HISTORY_MESSAGE, NotificationLevel::Info));
    }

    #[test]
    fn show_latest_shows_newest_entry() {
        let (mut c, ctx) = controller();
        observe(&ctx, &["old", "new"]);
        c.on_tick();
        c.dispatch(Action::ShowLatest);
        assert_eq!(dialog(&c).1, "new");

        c.dispatch(Action::DismissDialog);
        assert!(!c.ui().dialog_open());
    }

    #[test]
    fn clear_history_empties_store_and_display() {
        let (mut c, ctx) = controller();
        observe(&ctx, &["a", "b"]);
        c.on_tick();
        c.dispatch(Action::SelectFirst);

        c.dispatch(Action::ClearHistory);
        assert!(c.store().is_empty());
        assert!(c.ui().rows.is_empty());
        assert_eq!(c.ui().selected, None);
        assert_eq!(c.ui().status.entries, 0);
        assert_eq!(dialog(&c).1, CLEARED_MESSAGE);
    }

    #[test]
    fn quit_clears_running_flag() {
        let (mut c, ctx) = controller();
        assert!(c.is_running());
        assert!(!c.dispatch(Action::Quit));
        assert!(!ctx.running.is_running());
        assert!(!c.is_running());
    }

    #[test]
    fn dispatch_delete_without_selection_keeps_running() {
        let (mut c, ctx) = controller();
        observe(&ctx, &["a"]);
        c.on_tick();

        assert!(c.dispatch(Action::DeleteSelected));
        assert_eq!(dialog(&c).1, NOTHING_SELECTED_MESSAGE);
        assert_eq!(history(&c), vec!["a"]);
    }

    struct Fixed(&'static str);

    impl ClipboardSource for Fixed {
        fn read_text(&mut self) -> ClipResult<String> {
            Ok(self.0.to_string())
        }
    }

    #[tokio::test]
    async fn shutdown_joins_poller() {
        let (mut c, ctx) = controller();
        let config = PollerConfig {
            interval: Duration::from_millis(5),
        };
        let handle = spawn_poller(ctx.clone(), config, || Fixed("copied")).unwrap();
        c.attach_poller(handle);

        c.shutdown().await;
        assert!(!ctx.running.is_running());
        assert!(c.poller.is_none());

        // Anything enqueued before the join is still drainable.
        c.on_tick();
        assert!(history(&c).len() <= 1);
    }
}
