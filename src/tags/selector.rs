//! Category and tag selection state
//!
//! ```text
//!              select(c)                   select(c)
//!  NoCategory ──────────► Selected(c) ◄──────────────┐
//!      ▲                     │  │                    │
//!      └──── select(c) ──────┘  └── select(d) ──► Selected(d)
//! ```
//!
//! Tag selection is independent of the category and only advisory: it is
//! shown in the sidebar but never narrows a listing or reaches the server.

use super::GroupedTags;
use crate::api::Tag;

/// Sentinel tag name meaning "no tag filter"
pub const ALL_TAGS: &str = "all";

/// Which category's tags are expanded
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategorySelection {
    #[default]
    NoCategorySelected,
    CategorySelected(String),
}

/// Sidebar selection over a set of grouped tags
#[derive(Debug, Clone)]
pub struct TagSelector {
    groups: GroupedTags,
    category: CategorySelection,
    selected_tag: String,
}

impl Default for TagSelector {
    fn default() -> Self {
        Self::new(GroupedTags::default())
    }
}

impl TagSelector {
    /// Selector over `groups`, with the first category expanded
    #[must_use]
    pub fn new(groups: GroupedTags) -> Self {
        let mut selector = Self {
            groups,
            category: CategorySelection::NoCategorySelected,
            selected_tag: ALL_TAGS.to_string(),
        };
        selector.select_initial();
        selector
    }

    #[must_use]
    pub const fn groups(&self) -> &GroupedTags {
        &self.groups
    }

    #[must_use]
    pub const fn category(&self) -> &CategorySelection {
        &self.category
    }

    #[must_use]
    pub fn selected_category(&self) -> Option<&str> {
        match &self.category {
            CategorySelection::CategorySelected(c) => Some(c),
            CategorySelection::NoCategorySelected => None,
        }
    }

    #[must_use]
    pub fn selected_tag(&self) -> &str {
        &self.selected_tag
    }

    /// Whether a specific tag (not the "all" sentinel) is selected
    #[must_use]
    pub fn has_tag_filter(&self) -> bool {
        self.selected_tag != ALL_TAGS
    }

    /// Tags of the expanded category, empty when none is expanded
    #[must_use]
    pub fn visible_tags(&self) -> &[Tag] {
        self.selected_category()
            .and_then(|c| self.groups.get(c))
            .unwrap_or_default()
    }

    /// Replace the tag set (e.g. after a fetch or scope switch)
    ///
    /// The current category survives if it still exists; otherwise, or when
    /// nothing was expanded, the first category is expanded.
    pub fn set_groups(&mut self, groups: GroupedTags) {
        self.groups = groups;
        let keep = self
            .selected_category()
            .is_some_and(|c| self.groups.contains(c));
        if !keep {
            self.category = CategorySelection::NoCategorySelected;
            self.select_initial();
        }
    }

    /// Expand `category`, or collapse it if it is already expanded
    pub fn select_category(&mut self, category: &str) {
        self.category = if self.selected_category() == Some(category) {
            CategorySelection::NoCategorySelected
        } else {
            CategorySelection::CategorySelected(category.to_string())
        };
    }

    /// Expand the category after (or before) the current one, wrapping
    pub fn cycle_category(&mut self, forward: bool) {
        let categories: Vec<&str> = self.groups.categories().collect();
        if categories.is_empty() {
            return;
        }

        let len = categories.len();
        let next = match self
            .selected_category()
            .and_then(|c| categories.iter().position(|x| *x == c))
        {
            Some(idx) if forward => (idx + 1) % len,
            Some(idx) => (idx + len - 1) % len,
            None if forward => 0,
            None => len - 1,
        };
        self.category = CategorySelection::CategorySelected(categories[next].to_string());
    }

    /// Select a tag by name; [`ALL_TAGS`] clears the selection
    pub fn select_tag(&mut self, name: &str) {
        self.selected_tag = name.to_string();
    }

    /// Select the next visible tag, wrapping through "all"
    pub fn cycle_tag(&mut self) {
        let tags = self.visible_tags();
        let next = match tags.iter().position(|t| t.name == self.selected_tag) {
            Some(idx) if idx + 1 < tags.len() => tags[idx + 1].name.clone(),
            Some(_) => ALL_TAGS.to_string(),
            None => tags
                .first()
                .map_or_else(|| ALL_TAGS.to_string(), |t| t.name.clone()),
        };
        self.selected_tag = next;
    }

    /// Back to "all" tags
    pub fn clear_tag(&mut self) {
        self.select_tag(ALL_TAGS);
    }

    fn select_initial(&mut self) {
        if let Some(first) = self.groups.first_category() {
            self.category = CategorySelection::CategorySelected(first.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::group_tags;
    use crate::testing::tag;

    fn grouped(scope: &str) -> GroupedTags {
        group_tags(
            &[
                tag(1, "text-generation", "task", "model"),
                tag(2, "mit", "license", "model"),
                tag(3, "apache-2.0", "license", "model"),
                tag(4, "qa", "task", "dataset"),
            ],
            scope,
        )
    }

    #[test]
    fn test_initial_selects_first_category() {
        let selector = TagSelector::new(grouped("model"));
        assert_eq!(selector.selected_category(), Some("task"));
        assert_eq!(selector.selected_tag(), ALL_TAGS);
        assert!(!selector.has_tag_filter());
    }

    #[test]
    fn test_initial_with_no_tags() {
        let selector = TagSelector::default();
        assert_eq!(selector.category(), &CategorySelection::NoCategorySelected);
        assert!(selector.visible_tags().is_empty());
    }

    #[test]
    fn test_selecting_active_category_toggles_off() {
        let mut selector = TagSelector::new(grouped("model"));
        selector.select_category("task");
        assert_eq!(selector.selected_category(), None);

        selector.select_category("task");
        assert_eq!(selector.selected_category(), Some("task"));
    }

    #[test]
    fn test_selecting_other_category_moves() {
        let mut selector = TagSelector::new(grouped("model"));
        selector.select_category("license");
        assert_eq!(selector.selected_category(), Some("license"));
        assert_eq!(selector.visible_tags().len(), 2);
    }

    #[test]
    fn test_tag_selection_independent_of_category() {
        let mut selector = TagSelector::new(grouped("model"));
        selector.select_tag("mit");
        selector.select_category("task");

        assert_eq!(selector.selected_tag(), "mit");
        assert!(selector.has_tag_filter());

        selector.clear_tag();
        assert_eq!(selector.selected_tag(), ALL_TAGS);
    }

    #[test]
    fn test_new_groups_reselect_when_none_selected() {
        let mut selector = TagSelector::default();
        selector.set_groups(grouped("model"));
        assert_eq!(selector.selected_category(), Some("task"));

        selector.select_category("task");
        selector.set_groups(grouped("dataset"));
        assert_eq!(selector.selected_category(), Some("task"));
    }

    #[test]
    fn test_new_groups_keep_existing_category() {
        let mut selector = TagSelector::new(grouped("model"));
        selector.select_category("license");
        selector.set_groups(grouped("model"));
        assert_eq!(selector.selected_category(), Some("license"));
    }

    #[test]
    fn test_vanished_category_falls_back_to_first() {
        let mut selector = TagSelector::new(grouped("model"));
        selector.select_category("license");
        selector.set_groups(grouped("dataset"));
        assert_eq!(selector.selected_category(), Some("task"));
    }

    #[test]
    fn test_cycle_category_wraps() {
        let mut selector = TagSelector::new(grouped("model"));
        selector.cycle_category(true);
        assert_eq!(selector.selected_category(), Some("license"));
        selector.cycle_category(true);
        assert_eq!(selector.selected_category(), Some("task"));
        selector.cycle_category(false);
        assert_eq!(selector.selected_category(), Some("license"));
    }

    #[test]
    fn test_cycle_tag_wraps_through_all() {
        let mut selector = TagSelector::new(grouped("model"));
        selector.select_category("license");

        selector.cycle_tag();
        assert_eq!(selector.selected_tag(), "mit");
        selector.cycle_tag();
        assert_eq!(selector.selected_tag(), "apache-2.0");
        selector.cycle_tag();
        assert_eq!(selector.selected_tag(), ALL_TAGS);
    }
}
