use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::ui_state::UIState;
use crate::view::theme;

/// Key hints standing in for the window's buttons.
const KEY_HINTS: [(&str, &str); 5] = [
    ("l", "Show Latest"),
    ("d", "Delete Selected"),
    ("c", "Clear History"),
    ("?", "Help"),
    ("q", "Quit"),
];

pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame<'_>, ui: &UIState, area: Rect) {
        let summary = Self::summary(ui);
        let [left, right] = Layout::horizontal([
            Constraint::Length(summary.chars().count() as u16 + 1),
            Constraint::Fill(1),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(summary).style(theme::status_bar_style()),
            left,
        );

        let mut spans: Vec<Span<'_>> = Vec::with_capacity(KEY_HINTS.len() * 2);
        for (key, label) in KEY_HINTS {
            spans.push(Span::styled(format!(" [{key}]"), theme::key_hint_style()));
            spans.push(Span::styled(format!(" {label}"), theme::status_bar_style()));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans))
                .style(theme::status_bar_style())
                .right_aligned(),
            right,
        );
    }

    pub fn summary(ui: &UIState) -> String {
        let plural = if ui.status.entries == 1 { "entry" } else { "entries" };
        format!(
            " {} {} ({} bytes) · {} duplicates skipped · polling every {}ms",
            ui.status.entries,
            plural,
            ui.status.bytes,
            ui.status.duplicates,
            ui.status.poll_interval.as_millis()
        )
    }
}
