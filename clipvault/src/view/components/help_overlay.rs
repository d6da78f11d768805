use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    widgets::{Block, BorderType, Borders, Cell, Clear, Row, Table},
};

use crate::view::theme;

const BINDINGS: [(&str, &str); 10] = [
    ("↑/k  ↓/j", "Move selection"),
    ("PgUp PgDn", "Move selection by a page"),
    ("Home/g  End/G", "Jump to newest / oldest"),
    ("l / Enter", "Show latest entry"),
    ("d / Delete", "Delete selected entry"),
    ("c", "Clear history"),
    ("Esc", "Close help / clear selection"),
    ("?", "Toggle this help"),
    ("any key", "Dismiss dialog"),
    ("q / Ctrl+C", "Quit"),
];

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame<'_>, area: Rect) {
        frame.render_widget(Clear, area);

        let rows = BINDINGS.iter().map(|(keys, what)| {
            Row::new(vec![
                Cell::from(*keys).style(theme::history_index_style()),
                Cell::from(*what),
            ])
        });

        let table = Table::new(rows, [Constraint::Length(16), Constraint::Fill(1)])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" Keys ")
                    .title_alignment(Alignment::Center)
                    .border_style(theme::help_border_style()),
            )
            .style(theme::help_style());

        frame.render_widget(table, area);
    }

    pub fn height() -> u16 {
        BINDINGS.len() as u16 + 2
    }
}
