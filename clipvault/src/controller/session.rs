//! The render / dispatch loop of one UI session.

use ratatui::{Frame, Terminal, backend::Backend};
use tokio::sync::Notify;
use tracing::{error, info};

use crate::controller::{event_loop::EventLoop, history_controller::HistoryController};
use crate::error::AppError;
use crate::view::ui::UIRenderer;

/// Run until quit, shutdown signal or a failed draw.
///
/// The poller is stopped and joined on every exit path, so the caller can
/// restore the terminal as soon as this returns.
pub async fn run_session<B: Backend>(
    terminal: &mut Terminal<B>,
    renderer: &mut UIRenderer,
    controller: &mut HistoryController,
    events: &mut EventLoop,
    shutdown: &Notify,
) -> Result<(), AppError> {
    let result = drive(terminal, renderer, controller, events, shutdown).await;
    if let Err(e) = &result {
        error!("UI loop failed: {}", e);
    }

    controller.shutdown().await;
    result
}

async fn drive<B: Backend>(
    terminal: &mut Terminal<B>,
    renderer: &mut UIRenderer,
    controller: &mut HistoryController,
    events: &mut EventLoop,
    shutdown: &Notify,
) -> Result<(), AppError> {
    while controller.is_running() {
        render(terminal, renderer, controller)?;

        let dialog_open = controller.ui().dialog_open();
        tokio::select! {
            _ = shutdown.notified() => {
                info!("Shutdown signal received");
                break;
            }

            action = events.next_action(dialog_open) => {
                if !controller.dispatch(action) {
                    break;
                }
            }
        }
    }
    Ok(())
}

/// Draw a frame if the UI state asked for one.
pub fn render<B: Backend>(
    terminal: &mut Terminal<B>,
    renderer: &mut UIRenderer,
    controller: &mut HistoryController,
) -> Result<(), AppError> {
    if !controller.ui().needs_redraw() {
        return Ok(());
    }

    let ui = controller.ui();
    terminal
        .draw(|frame: &mut Frame<'_>| renderer.render(frame, ui))
        .map_err(AppError::Terminal)?;

    controller.ui_mut().clear_redraw();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    use clipvault_core::{
        ClipError, ClipResult, ClipboardSource, PollerConfig, WatchContext, spawn_poller,
    };
    use ratatui::backend::{TestBackend, WindowSize};
    use ratatui::buffer::Cell;
    use ratatui::layout::{Position, Size};

    use crate::config::UiConfig;

    /// Accepts everything except frame output.
    struct BrokenBackend(TestBackend);

    impl Backend for BrokenBackend {
        fn draw<'a, I>(&mut self, _content: I) -> io::Result<()>
        where
            I: Iterator<Item = (u16, u16, &'a Cell)>,
        {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal gone"))
        }

        fn hide_cursor(&mut self) -> io::Result<()> {
            self.0.hide_cursor()
        }

        fn show_cursor(&mut self) -> io::Result<()> {
            self.0.show_cursor()
        }

        fn get_cursor_position(&mut self) -> io::Result<Position> {
            self.0.get_cursor_position()
        }

        fn set_cursor_position<P: Into<Position>>(&mut self, position: P) -> io::Result<()> {
            self.0.set_cursor_position(position)
        }

        fn clear(&mut self) -> io::Result<()> {
            self.0.clear()
        }

        fn size(&self) -> io::Result<Size> {
            self.0.size()
        }

        fn window_size(&mut self) -> io::Result<WindowSize> {
            self.0.window_size()
        }

        fn flush(&mut self) -> io::Result<()> {
            self.0.flush()
        }
    }

    /// Empty clipboard that records when the poller thread lets go of it.
    struct Tracked(Arc<AtomicBool>);

    impl ClipboardSource for Tracked {
        fn read_text(&mut self) -> ClipResult<String> {
            Err(ClipError::clipboard_read("empty"))
        }
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.0.store(true, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn failed_draw_still_joins_poller() {
        let ctx = WatchContext::new();
        let mut controller =
            HistoryController::new(ctx.clone(), &UiConfig::default(), Duration::from_millis(5));

        let released = Arc::new(AtomicBool::new(false));
        let flag = released.clone();
        let config = PollerConfig {
            interval: Duration::from_millis(10),
        };
        let handle = spawn_poller(ctx.clone(), config, move || Tracked(flag)).unwrap();
        controller.attach_poller(handle);

        let mut terminal = Terminal::new(BrokenBackend(TestBackend::new(40, 10))).unwrap();
        let mut renderer = UIRenderer::new(None);
        let mut events = EventLoop::new(Duration::from_millis(10));
        let shutdown = Notify::new();

        let result = run_session(
            &mut terminal,
            &mut renderer,
            &mut controller,
            &mut events,
            &shutdown,
        )
        .await;

        assert!(matches!(result, Err(AppError::Terminal(_))));
        assert!(!ctx.running.is_running());
        assert!(released.load(Ordering::SeqCst), "poller thread has exited");
    }

    #[test]
    fn render_skips_clean_frames() {
        let ctx = WatchContext::new();
        let mut controller =
            HistoryController::new(ctx, &UiConfig::default(), Duration::from_millis(5));
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        let mut renderer = UIRenderer::new(None);

        render(&mut terminal, &mut renderer, &mut controller).unwrap();
        assert!(!controller.ui().needs_redraw());
        render(&mut terminal, &mut renderer, &mut controller).unwrap();
        assert_eq!(renderer.stats().frames, 1);
    }
}
