//! Query parameters, dedup keys, and result pages

use serde::{Deserialize, Serialize};
use std::fmt;

/// Parameters for one page of a list endpoint
///
/// Values are immutable per request: mutate a copy and hand the new value to
/// the controller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryParams {
    /// 1-indexed page number
    pub page: u32,
    /// Rows per page, fixed per view
    pub page_size: u32,
    /// Free-text search. `None` and `Some("")` are distinct for dedup but
    /// identical on the wire.
    pub search: Option<String>,
    /// Refresh nonce. Part of the dedup key, never sent to the server.
    #[serde(default)]
    pub revision: u64,
}

impl QueryParams {
    /// First page with no search
    #[must_use]
    pub const fn new(page: u32, page_size: u32) -> Self {
        Self {
            page,
            page_size,
            search: None,
            revision: 0,
        }
    }

    /// Set the search text
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Move to another page, keeping page size and search
    #[must_use]
    pub fn at_page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    /// Same query with a bumped revision, forcing the controller to refetch
    #[must_use]
    pub fn refreshed(&self) -> Self {
        Self {
            revision: self.revision.wrapping_add(1),
            ..self.clone()
        }
    }

    /// Search text as sent to the server: `None` when absent or empty
    #[must_use]
    pub fn effective_search(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }

    /// Canonical key used to suppress redundant fetches
    ///
    /// Every field is included. The search text is rendered quoted so an
    /// absent search and an empty one never collide.
    #[must_use]
    pub fn dedup_key(&self) -> DedupKey {
        let search = self
            .search
            .as_ref()
            .map_or_else(|| "-".to_string(), |s| format!("{s:?}"));
        DedupKey(format!(
            "page={};page_size={};revision={};search={}",
            self.page, self.page_size, self.revision, search
        ))
    }

    /// Query-string pairs for the list endpoints
    #[must_use]
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("page", self.page.to_string()),
            ("page_size", self.page_size.to_string()),
        ];
        if let Some(search) = self.effective_search() {
            query.push(("search", search.to_string()));
        }
        query
    }
}

/// Canonical identity of a request
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DedupKey(String);

impl DedupKey {
    /// Key from an already-canonical string (e.g. a tag scope)
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DedupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One page of results plus the server-side match count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePage<T> {
    pub items: Vec<T>,
    /// All matching rows, independent of page size
    pub total: u64,
}

impl<T> ResourcePage<T> {
    #[must_use]
    pub const fn new(items: Vec<T>, total: u64) -> Self {
        Self { items, total }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Map the items, keeping `total`
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> ResourcePage<U> {
        ResourcePage {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
        }
    }
}

impl<T> Default for ResourcePage<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_params_share_key() {
        let a = QueryParams::new(2, 20).with_search("bert");
        let b = QueryParams::new(2, 20).with_search("bert");
        assert_eq!(a.dedup_key(), b.dedup_key());
    }

    #[test]
    fn test_search_variants_have_distinct_keys() {
        let absent = QueryParams::new(1, 20);
        let empty = QueryParams::new(1, 20).with_search("");
        let text = QueryParams::new(1, 20).with_search("x");

        assert_ne!(absent.dedup_key(), empty.dedup_key());
        assert_ne!(empty.dedup_key(), text.dedup_key());
        assert_ne!(absent.dedup_key(), text.dedup_key());
    }

    #[test]
    fn test_search_dash_does_not_collide_with_absent() {
        let absent = QueryParams::new(1, 20);
        let dash = QueryParams::new(1, 20).with_search("-");
        assert_ne!(absent.dedup_key(), dash.dedup_key());
    }

    #[test]
    fn test_every_field_affects_key() {
        let base = QueryParams::new(1, 20);
        assert_ne!(base.dedup_key(), base.at_page(2).dedup_key());
        assert_ne!(base.dedup_key(), QueryParams::new(1, 10).dedup_key());
        assert_ne!(base.dedup_key(), base.refreshed().dedup_key());
    }

    #[test]
    fn test_query_omits_empty_search() {
        let empty = QueryParams::new(3, 20).with_search("");
        assert_eq!(
            empty.to_query(),
            vec![("page", "3".to_string()), ("page_size", "20".to_string())]
        );

        let text = QueryParams::new(1, 20).with_search("llama");
        assert!(text.to_query().contains(&("search", "llama".to_string())));
    }

    #[test]
    fn test_revision_not_sent() {
        let params = QueryParams::new(1, 20).refreshed().refreshed();
        assert_eq!(params.revision, 2);
        assert!(params.to_query().iter().all(|(k, _)| *k != "revision"));
    }

    #[test]
    fn test_at_page_keeps_search_and_size() {
        let params = QueryParams::new(1, 50).with_search("gpt");
        let moved = params.at_page(4);
        assert_eq!(moved.page, 4);
        assert_eq!(moved.page_size, 50);
        assert_eq!(moved.search.as_deref(), Some("gpt"));
    }

    #[test]
    fn test_resource_page_map_keeps_total() {
        let page = ResourcePage::new(vec![1, 2, 3], 42).map(|n| n * 10);
        assert_eq!(page.items, vec![10, 20, 30]);
        assert_eq!(page.total, 42);
    }
}
