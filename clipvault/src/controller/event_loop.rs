//! ``src/controller/event_loop.rs``
//! ============================================================================
//! # Event Loop: terminal input and the UI tick
//!
//! Merges crossterm's event stream with a fixed-period timer into a single
//! stream of [`Action`]s for the UI thread.

use std::time::Duration;

use crossterm::event::{Event as TermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use tokio::time::{self, Interval, MissedTickBehavior};
use tracing::{debug, info, trace, warn};

use crate::controller::actions::Action;

/// Shortest UI tick; tokio intervals reject a zero period.
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(10);

pub struct EventLoop {
    /// Opened on the first wait so the loop can be built without a tty.
    event_stream: Option<EventStream>,
    tick: Interval,
}

impl EventLoop {
    pub fn new(tick_interval: Duration) -> Self {
        if tick_interval < MIN_TICK_INTERVAL {
            warn!(
                requested_ms = tick_interval.as_millis() as u64,
                "Tick interval too short, using {}ms",
                MIN_TICK_INTERVAL.as_millis()
            );
        }
        let tick_interval = tick_interval.max(MIN_TICK_INTERVAL);

        info!(
            tick_ms = tick_interval.as_millis() as u64,
            "Initializing event loop"
        );

        let mut tick = time::interval(tick_interval);
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        Self {
            event_stream: None,
            tick,
        }
    }

    /// Wait for the next action. Ticks fire on schedule even while the user
    /// is idle; unmapped terminal events are skipped.
    pub async fn next_action(&mut self, dialog_open: bool) -> Action {
        let events = self.event_stream.get_or_insert_with(EventStream::new);
        loop {
            tokio::select! {
                _ = self.tick.tick() => return Action::Tick,

                maybe_event = events.next() => match maybe_event {
                    Some(Ok(event)) => {
                        trace!("Terminal event received: {:?}", event);
                        if let Some(action) = map_event(event, dialog_open) {
                            debug!("Terminal event mapped to action: {:?}", action);
                            return action;
                        }
                    }
                    Some(Err(e)) => warn!("Terminal event error: {}", e),
                    None => {
                        warn!("Terminal event stream closed");
                        return Action::Quit;
                    }
                },
            }
        }
    }
}

pub fn map_event(event: TermEvent, dialog_open: bool) -> Option<Action> {
    match event {
        TermEvent::Key(key) => map_key(key, dialog_open),
        TermEvent::Resize(width, height) => Some(Action::Resize(width, height)),
        _ => None,
    }
}

/// Key bindings. While a dialog is open every key except Ctrl+C dismisses it.
pub fn map_key(key: KeyEvent, dialog_open: bool) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    if dialog_open {
        return Some(Action::DismissDialog);
    }

    let action = match key.code {
        KeyCode::Char('q') => Action::Quit,

        // Navigation
        KeyCode::Up | KeyCode::Char('k') => Action::MoveSelectionUp,
        KeyCode::Down | KeyCode::Char('j') => Action::MoveSelectionDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::Home | KeyCode::Char('g') => Action::SelectFirst,
        KeyCode::End | KeyCode::Char('G') => Action::SelectLast,
        KeyCode::Esc => Action::CloseOverlay,

        // History commands
        KeyCode::Char('l') | KeyCode::Enter => Action::ShowLatest,
        KeyCode::Char('d') | KeyCode::Delete => Action::DeleteSelected,
        KeyCode::Char('c') => Action::ClearHistory,
        KeyCode::Char('?') => Action::ToggleHelp,

        _ => return None,
    };
    Some(action)
}
