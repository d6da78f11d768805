//! src/view/components/dialog_overlay.rs
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};
use tracing::trace;

use crate::model::ui_state::{Notification, NotificationLevel};
use crate::view::theme;

pub struct DialogOverlay;

impl DialogOverlay {
    pub fn render(frame: &mut Frame<'_>, notification: &Notification, area: Rect) {
        trace!(
            level = ?notification.level,
            message_len = notification.message.len(),
            "Rendering dialog"
        );

        frame.render_widget(Clear, area);

        let (border_style, icon) = match notification.level {
            NotificationLevel::Info => (Style::default().fg(theme::CYAN), "ℹ"),
            NotificationLevel::Error => (Style::default().fg(theme::RED), "✕"),
            NotificationLevel::Success => (Style::default().fg(theme::GREEN), "✓"),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {icon} {} ", notification.title))
            .title_style(border_style.bold())
            .border_style(border_style)
            .style(Style::default().bg(theme::BACKGROUND));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [message_area, dismiss_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(inner);

        let message = Paragraph::new(notification.message.as_str())
            .style(Style::default().fg(theme::FOREGROUND))
            .wrap(Wrap { trim: false })
            .alignment(Alignment::Left);
        frame.render_widget(message, message_area);

        let dismiss_text = if notification.auto_dismiss_ms.is_some() {
            "Auto-dismissing... Press any key to dismiss"
        } else {
            "Press any key to dismiss"
        };
        let dismiss = Paragraph::new(dismiss_text)
            .style(
                Style::default()
                    .fg(theme::COMMENT)
                    .add_modifier(Modifier::ITALIC),
            )
            .alignment(Alignment::Center);
        frame.render_widget(dismiss, dismiss_area);
    }

    /// Height needed to show `message` at `width`, including borders and the
    /// dismiss line.
    pub fn preferred_height(notification: &Notification, width: u16) -> u16 {
        let text_width = width.saturating_sub(2).max(1) as usize;
        let wrapped: usize = notification
            .message
            .lines()
            .map(|line| line.chars().count().div_ceil(text_width).max(1))
            .sum::<usize>()
            .max(1);
        u16::try_from(wrapped)
            .unwrap_or(u16::MAX)
            .saturating_add(3)
    }
}
