//! Item list widget for the current listing page

use crate::query::CatalogItem;
use crate::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};

/// Rows of the current page, with loading and error state
pub struct ItemList<'a> {
    items: &'a [CatalogItem],
    loading: bool,
    error: Option<&'a str>,
    title: String,
    theme: &'a Theme,
}

impl<'a> ItemList<'a> {
    #[must_use]
    pub fn new(items: &'a [CatalogItem], theme: &'a Theme) -> Self {
        Self {
            items,
            loading: false,
            error: None,
            title: format!(" Items ({}) ", items.len()),
            theme,
        }
    }

    /// Set custom title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub const fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    #[must_use]
    pub const fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    fn render_item(&self, item: &'a CatalogItem) -> ListItem<'a> {
        let line = Line::from(vec![
            Span::styled(item.title(), self.theme.title),
            Span::raw("  "),
            Span::styled(item.path(), self.theme.muted),
            Span::styled(
                format!("  ♥ {}  ↓ {}", item.likes(), item.downloads()),
                self.theme.muted,
            ),
        ]);
        ListItem::new(line)
    }
}

impl Widget for ItemList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.frame)
            .title(self.title.as_str());
        if self.loading {
            block = block.title(Line::styled(" loading… ", self.theme.pending).right_aligned());
        }

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let mut rows: Vec<ListItem> = Vec::new();
        if let Some(error) = self.error {
            rows.push(ListItem::new(Line::styled(
                format!("✗ {error}"),
                self.theme.error,
            )));
        }
        if self.items.is_empty() && !self.loading && self.error.is_none() {
            rows.push(ListItem::new(Line::styled(
                "No results",
                self.theme.muted,
            )));
        }
        rows.extend(self.items.iter().map(|item| self.render_item(item)));

        List::new(rows).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{dataset, model};
    use crate::tui::widgets::buffer_text;

    fn render(list: ItemList<'_>) -> String {
        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 6));
        list.render(buf.area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_rows_show_title_and_path() {
        let theme = Theme::default();
        let items = vec![
            CatalogItem::from(model(1, "bert")),
            CatalogItem::from(dataset(2, "squad")),
        ];
        let text = render(ItemList::new(&items, &theme));
        assert!(text.contains("Items (2)"));
        assert!(text.contains("bert  test/bert"));
        assert!(text.contains("squad  test/squad"));
    }

    #[test]
    fn test_empty_listing() {
        let theme = Theme::default();
        assert!(render(ItemList::new(&[], &theme)).contains("No results"));
        assert!(!render(ItemList::new(&[], &theme).loading(true)).contains("No results"));
    }

    #[test]
    fn test_error_kept_above_previous_rows() {
        let theme = Theme::default();
        let items = vec![CatalogItem::from(model(1, "bert"))];
        let text = render(ItemList::new(&items, &theme).error(Some("Request failed with status 500")));
        assert!(text.contains("✗ Request failed with status 500"));
        assert!(text.contains("bert"));
    }
}
