//! Scrollable history list, newest entry first.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::model::ui_state::{HistoryRow, UIState};
use crate::view::theme;

pub struct HistoryList;

impl HistoryList {
    pub fn render(frame: &mut Frame<'_>, ui: &UIState, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" Clipboard History ({}) ", ui.rows.len()))
            .title_alignment(Alignment::Left)
            .style(theme::history_list_style())
            .border_style(theme::history_list_border_style());

        if ui.rows.is_empty() {
            let empty = Paragraph::new("Clipboard history is empty. Copy some text to get started.")
                .block(block)
                .style(theme::history_empty_message_style())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem<'_>> = ui.rows.iter().map(Self::row_item).collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(theme::history_highlight_style())
            .highlight_symbol("▶ ");

        let mut state = ListState::default();
        state.select(ui.selected);
        frame.render_stateful_widget(list, area, &mut state);
    }

    /// `"{n}. first line"` followed by continuation lines aligned under the
    /// text, an ellipsis if cut, and a blank separator.
    fn row_item(row: &HistoryRow) -> ListItem<'_> {
        let prefix = format!("{}. ", row.index);
        let indent = " ".repeat(prefix.chars().count());

        let mut lines: Vec<Line<'_>> = Vec::with_capacity(row.lines.len() + 2);
        let mut row_lines = row.lines.iter();

        let first = row_lines.next().map(String::as_str).unwrap_or_default();
        lines.push(Line::from(vec![
            Span::styled(prefix, theme::history_index_style()),
            Span::raw(first),
        ]));
        for line in row_lines {
            lines.push(Line::from(vec![Span::raw(indent.clone()), Span::raw(line.as_str())]));
        }
        if row.truncated {
            lines.push(Line::from(vec![
                Span::raw(indent),
                Span::styled("…", theme::history_empty_message_style()),
            ]));
        }
        lines.push(Line::default());

        ListItem::new(Text::from(lines))
    }
}
