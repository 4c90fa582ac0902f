//! Search bar widget for query input

use crate::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search box with the typed text and a marker while the debouncer waits
pub struct SearchBar<'a> {
    input: &'a str,
    /// Typed text differs from the text last queried
    pending: bool,
    scope_label: &'a str,
    theme: &'a Theme,
}

impl<'a> SearchBar<'a> {
    #[must_use]
    pub const fn new(input: &'a str, scope_label: &'a str, theme: &'a Theme) -> Self {
        Self {
            input,
            pending: false,
            scope_label,
            theme,
        }
    }

    #[must_use]
    pub const fn pending(mut self, pending: bool) -> Self {
        self.pending = pending;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.accent)
            .title(format!(" Search {} ", self.scope_label));

        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = vec![
            Span::styled(">", self.theme.muted),
            Span::raw(" "),
            Span::raw(self.input),
            Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ];
        if self.pending {
            spans.push(Span::styled(" …", self.theme.pending));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
