//! Page window footer

use crate::pagination::{PageEntry, Paginator};
use crate::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Page numbers around the current page plus the item summary
///
/// The window is hidden when everything fits on one page.
pub struct PageFooter<'a> {
    paginator: Paginator,
    theme: &'a Theme,
}

impl<'a> PageFooter<'a> {
    #[must_use]
    pub const fn new(paginator: Paginator, theme: &'a Theme) -> Self {
        Self { paginator, theme }
    }
}

impl Widget for PageFooter<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        if self.paginator.is_visible() {
            let current = self.paginator.current_page();
            for entry in self.paginator.window() {
                let span = match entry {
                    PageEntry::Page(p) if p == current => {
                        Span::styled(format!("[{p}]"), self.theme.selected)
                    }
                    PageEntry::Page(p) => Span::raw(p.to_string()),
                    PageEntry::Gap => Span::styled(entry.to_string(), self.theme.muted),
                };
                spans.push(span);
                spans.push(Span::raw(" "));
            }
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(self.paginator.summary(), self.theme.muted));

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::buffer_text;

    fn render(paginator: Paginator) -> String {
        let theme = Theme::default();
        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 1));
        PageFooter::new(paginator, &theme).render(buf.area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_window_with_gaps() {
        let text = render(Paginator::new(10, 10, 100));
        assert!(text.starts_with("1 … 6 7 8 9 [10]  100 items, 10 pages"));
    }

    #[test]
    fn test_single_page_shows_summary_only() {
        let text = render(Paginator::new(1, 20, 5));
        assert!(text.starts_with("5 items, 1 pages"));
    }
}
