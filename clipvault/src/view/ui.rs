//! src/view/ui.rs
//! ============================================================
//! Frame renderer: banner, history list and status bar, with the
//! help overlay and modal dialog drawn on top.

use std::time::{Duration, Instant};

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};
use tracing::{instrument, warn};

use crate::{
    model::ui_state::{UIOverlay, UIState},
    view::components::{
        banner::Banner, dialog_overlay::DialogOverlay, help_overlay::HelpOverlay,
        history_list::HistoryList, status_bar::StatusBar,
    },
};

/// Frames slower than this are counted and logged.
const SLOW_FRAME: Duration = Duration::from_millis(16);

pub struct UIRenderer {
    banner: Option<Banner>,
    stats: RenderStats,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RenderStats {
    pub frames: u64,
    pub slow: u64,
    pub total: Duration,
}

impl RenderStats {
    pub fn average(&self) -> Duration {
        if self.frames == 0 {
            Duration::ZERO
        } else {
            self.total / self.frames as u32
        }
    }
}

impl UIRenderer {
    pub fn new(banner: Option<Banner>) -> Self {
        Self {
            banner,
            stats: RenderStats::default(),
        }
    }

    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    #[instrument(level = "trace", skip_all)]
    pub fn render(&mut self, frame: &mut Frame<'_>, ui: &UIState) {
        let start = Instant::now();
        let screen = frame.area();

        let banner_height = self.banner.as_ref().map_or(0, Banner::height);
        let [banner_area, list_area, status_area] = Layout::vertical([
            Constraint::Length(banner_height),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(screen);

        if let Some(banner) = &self.banner {
            banner.render(frame, banner_area);
        }
        HistoryList::render(frame, ui, list_area);
        StatusBar::render(frame, ui, status_area);

        if ui.overlay == UIOverlay::Help {
            let area = centered(screen, 60, HelpOverlay::height());
            HelpOverlay::render(frame, area);
        }

        // The dialog is modal, so it sits above everything else.
        if let Some(notification) = &ui.notification {
            let width = (screen.width * 3 / 5).max(30);
            let height = DialogOverlay::preferred_height(notification, width);
            DialogOverlay::render(frame, notification, centered(screen, width, height));
        }

        let elapsed = start.elapsed();
        self.stats.frames += 1;
        self.stats.total += elapsed;
        if elapsed > SLOW_FRAME {
            self.stats.slow += 1;
            warn!("Slow render: {}ms", elapsed.as_millis());
        }
    }
}

/// A `width` x `height` rect centred in `r`, clipped to it.
fn centered(r: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}
