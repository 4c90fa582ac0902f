//! Tag grouping for the filter sidebar
//!
//! The server returns every tag for every scope in one flat list. The sidebar
//! needs only the active scope's tags, bucketed by category in the order the
//! categories first appear.

pub mod selector;

pub use selector::{ALL_TAGS, CategorySelection, TagSelector};

use crate::api::Tag;

/// Tags of one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagGroup {
    pub category: String,
    pub tags: Vec<Tag>,
}

impl TagGroup {
    /// Category with underscores shown as spaces
    #[must_use]
    pub fn label(&self) -> String {
        category_label(&self.category)
    }
}

/// Tags of one scope, grouped by category in first-seen order
///
/// Every tag has `scope == self.scope()` and sits in the group named by its
/// `category`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedTags {
    scope: String,
    groups: Vec<TagGroup>,
}

impl GroupedTags {
    #[must_use]
    pub fn scope(&self) -> &str {
        &self.scope
    }

    #[must_use]
    pub fn groups(&self) -> &[TagGroup] {
        &self.groups
    }

    /// Category names in first-seen order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.category.as_str())
    }

    #[must_use]
    pub fn get(&self, category: &str) -> Option<&[Tag]> {
        self.groups
            .iter()
            .find(|g| g.category == category)
            .map(|g| g.tags.as_slice())
    }

    #[must_use]
    pub fn contains(&self, category: &str) -> bool {
        self.get(category).is_some()
    }

    #[must_use]
    pub fn first_category(&self) -> Option<&str> {
        self.groups.first().map(|g| g.category.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of tags across all categories
    #[must_use]
    pub fn tag_count(&self) -> usize {
        self.groups.iter().map(|g| g.tags.len()).sum()
    }
}

/// Keep the tags of `scope` and bucket them by category
///
/// `scope` is compared exactly against `Tag::scope`; pass the normalised
/// singular form ("model", "dataset").
#[must_use]
pub fn group_tags(tags: &[Tag], scope: &str) -> GroupedTags {
    let mut groups: Vec<TagGroup> = Vec::new();

    for tag in tags.iter().filter(|t| t.scope == scope) {
        if let Some(group) = groups.iter_mut().find(|g| g.category == tag.category) {
            group.tags.push(tag.clone());
        } else {
            groups.push(TagGroup {
                category: tag.category.clone(),
                tags: vec![tag.clone()],
            });
        }
    }

    GroupedTags {
        scope: scope.to_string(),
        groups,
    }
}

/// Display form of a category key
#[must_use]
pub fn category_label(category: &str) -> String {
    category.replace('_', " ")
}
