//! Optional decorative banner drawn above the history.

use std::path::Path;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::Paragraph,
};
use tracing::{debug, warn};

use crate::error::AppError;
use crate::view::theme;

/// Taller banners are cut so the history keeps most of the screen.
const MAX_BANNER_LINES: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    lines: Vec<String>,
}

impl Banner {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let text =
            std::fs::read_to_string(path).map_err(|e| AppError::asset_load(path, e))?;
        Ok(Self::from_text(&text))
    }

    /// Best-effort load: a missing or unreadable banner is logged and skipped.
    pub fn load_optional(path: Option<&Path>) -> Option<Self> {
        let path = path?;
        match Self::load(path) {
            Ok(banner) if banner.is_empty() => {
                debug!("Banner file {} is empty", path.display());
                None
            }
            Ok(banner) => Some(banner),
            Err(e) => {
                warn!("Banner not loaded: {}", e);
                None
            }
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text
                .trim_end()
                .lines()
                .take(MAX_BANNER_LINES)
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn height(&self) -> u16 {
        self.lines.len() as u16
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let text = self.lines.join("\n");
        frame.render_widget(
            Paragraph::new(text)
                .style(theme::banner_style())
                .alignment(Alignment::Center),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_banner_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");

        assert!(matches!(Banner::load(&path), Err(AppError::AssetLoad { .. })));
        assert_eq!(Banner::load_optional(Some(&path)), None);
        assert_eq!(Banner::load_optional(None), None);
    }

    #[test]
    fn loads_and_caps_height() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("banner.txt");
        let text: String = (0..20).map(|i| format!("row {i}\n")).collect();
        std::fs::write(&path, text).unwrap();

        let banner = Banner::load_optional(Some(&path)).unwrap();
        assert_eq!(banner.height() as usize, MAX_BANNER_LINES);
    }

    #[test]
    fn blank_file_gives_no_banner() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("banner.txt");
        std::fs::write(&path, "\n\n").unwrap();
        assert_eq!(Banner::load_optional(Some(&path)), None);
    }
}
