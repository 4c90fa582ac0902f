//! Tag sidebar widget: categories with the expanded one's tags

use crate::tags::{ALL_TAGS, TagSelector};
use crate::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct TagSidebar<'a> {
    selector: &'a TagSelector,
    error: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> TagSidebar<'a> {
    #[must_use]
    pub const fn new(selector: &'a TagSelector, theme: &'a Theme) -> Self {
        Self {
            selector,
            error: None,
            theme,
        }
    }

    #[must_use]
    pub const fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    fn tag_line(&self, name: &'a str, label: &'a str) -> Line<'a> {
        let style = if self.selector.selected_tag() == name {
            self.theme.selected
        } else {
            self.theme.tag
        };
        Line::from(vec![Span::raw("    "), Span::styled(label, style)])
    }
}

impl Widget for TagSidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.frame)
            .title(" Tags ");

        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::new();
        if let Some(error) = self.error {
            lines.push(Line::styled(format!("✗ {error}"), self.theme.error));
        }

        let selected = self.selector.selected_category();
        for group in self.selector.groups().groups() {
            let expanded = selected == Some(group.category.as_str());
            let (marker, style) = if expanded {
                ("▾ ", self.theme.accent)
            } else {
                ("▸ ", self.theme.muted)
            };
            lines.push(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(group.label(), style),
            ]));

            if expanded {
                lines.push(self.tag_line(ALL_TAGS, ALL_TAGS));
                for tag in &group.tags {
                    lines.push(self.tag_line(&tag.name, tag.display_name()));
                }
            }
        }

        if lines.is_empty() {
            lines.push(Line::styled("No tags", self.theme.muted));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::group_tags;
    use crate::testing::tag;
    use crate::tui::widgets::buffer_text;

    fn render(sidebar: TagSidebar<'_>) -> String {
        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 8));
        sidebar.render(buf.area, &mut buf);
        buffer_text(&buf)
    }

    fn selector() -> TagSelector {
        let raw = vec![
            tag(1, "mit", "license", "model"),
            tag(2, "text_generation", "task", "model"),
        ];
        TagSelector::new(group_tags(&raw, "model"))
    }

    #[test]
    fn test_first_category_expanded() {
        let theme = Theme::default();
        let selector = selector();
        let text = render(TagSidebar::new(&selector, &theme));

        assert!(text.contains("▾ license"));
        assert!(text.contains("    all"));
        assert!(text.contains("    mit"));
        assert!(text.contains("▸ task"));
        assert!(!text.contains("text_generation"));
    }

    #[test]
    fn test_collapsed_sidebar_lists_categories_only() {
        let theme = Theme::default();
        let mut selector = selector();
        selector.select_category("license");
        let text = render(TagSidebar::new(&selector, &theme));

        assert!(text.contains("▸ license"));
        assert!(!text.contains("mit"));
    }

    #[test]
    fn test_empty_and_error() {
        let theme = Theme::default();
        let selector = TagSelector::default();
        assert!(render(TagSidebar::new(&selector, &theme)).contains("No tags"));
        assert!(
            render(TagSidebar::new(&selector, &theme).error(Some("offline")))
                .contains("✗ offline")
        );
    }
}
