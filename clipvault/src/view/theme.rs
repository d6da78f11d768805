//! src/view/theme.rs
//! ============================================================================
//! # Catppuccin Mocha Theme Color Palette
//!
//! Colors are from the Catppuccin palette:
//! https://github.com/catppuccin/catppuccin

use ratatui::style::{Color, Modifier, Style};

pub const BACKGROUND: Color = Color::Rgb(30, 30, 46); // Base
pub const CURRENT_LINE: Color = Color::Rgb(69, 71, 90); // Surface1
pub const FOREGROUND: Color = Color::Rgb(205, 214, 244); // Text
pub const COMMENT: Color = Color::Rgb(127, 132, 156); // Overlay1
pub const CYAN: Color = Color::Rgb(137, 220, 235); // Sky
pub const GREEN: Color = Color::Rgb(166, 227, 161); // Green
pub const ORANGE: Color = Color::Rgb(250, 179, 135); // Peach
pub const PURPLE: Color = Color::Rgb(203, 166, 247); // Mauve
pub const RED: Color = Color::Rgb(243, 139, 168); // Red
pub const YELLOW: Color = Color::Rgb(249, 226, 175); // Yellow

pub fn history_list_style() -> Style {
    Style::default().bg(BACKGROUND).fg(FOREGROUND)
}

pub fn history_list_border_style() -> Style {
    Style::default().fg(PURPLE)
}

pub fn history_index_style() -> Style {
    Style::default().fg(ORANGE).add_modifier(Modifier::BOLD)
}

pub fn history_highlight_style() -> Style {
    Style::default()
        .bg(CURRENT_LINE)
        .fg(FOREGROUND)
        .add_modifier(Modifier::BOLD)
}

pub fn history_empty_message_style() -> Style {
    Style::default().bg(BACKGROUND).fg(COMMENT)
}

pub fn banner_style() -> Style {
    Style::default().bg(BACKGROUND).fg(CYAN)
}

pub fn status_bar_style() -> Style {
    Style::default().bg(CURRENT_LINE).fg(FOREGROUND)
}

pub fn key_hint_style() -> Style {
    Style::default()
        .bg(CURRENT_LINE)
        .fg(YELLOW)
        .add_modifier(Modifier::BOLD)
}

pub fn help_style() -> Style {
    Style::default().bg(BACKGROUND).fg(FOREGROUND)
}

pub fn help_border_style() -> Style {
    Style::default().fg(PURPLE)
}
