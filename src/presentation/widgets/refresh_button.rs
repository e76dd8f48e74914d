//! Refresh button widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

/// Button caption.
pub const REFRESH_LABEL: &str = "Refresh Training Data";

/// Button that reloads the whole view.
#[derive(Debug, Clone)]
pub struct RefreshButton {
    text: String,
    style: Style,
}

impl RefreshButton {
    #[must_use]
    pub fn new(accent: Color) -> Self {
        Self {
            text: format!("[ {REFRESH_LABEL} ]"),
            style: Style::default()
                .fg(Color::Black)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Area the button occupies when centered in `area`. Clicks are
    /// hit-tested against this.
    #[must_use]
    pub fn area_within(&self, area: Rect) -> Rect {
        let width = u16::try_from(self.text.width())
            .unwrap_or(u16::MAX)
            .min(area.width);
        let x = area.x + (area.width - width) / 2;
        Rect::new(x, area.y, width, area.height.min(1))
    }
}

impl Widget for &RefreshButton {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let button = self.area_within(area);
        Span::styled(self.text.as_str(), self.style).render(button, buf);
    }
}
