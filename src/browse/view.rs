//! Query state of the listing view
//!
//! Holds what the user has typed and clicked and composes it into
//! [`QueryParams`]. It never talks to the network.

use crate::api::Tag;
use crate::pagination::Paginator;
use crate::query::{QueryParams, scope_from_route};
use crate::tags::{TagSelector, group_tags};

/// Page, search, scope and tag selection for one listing
#[derive(Debug, Clone)]
pub struct CatalogView {
    scope: String,
    page: u32,
    page_size: u32,
    /// Text as typed, updated on every keystroke
    search_input: String,
    /// Text after the debouncer settled; this is what gets queried
    search: String,
    revision: u64,
    tags: TagSelector,
}

impl CatalogView {
    /// View for `route` (e.g. `/datasets`), starting on page 1
    #[must_use]
    pub fn new(route: &str, page_size: u32) -> Self {
        Self {
            scope: scope_from_route(route),
            page: 1,
            page_size: page_size.max(1),
            search_input: String::new(),
            search: String::new(),
            revision: 0,
            tags: TagSelector::default(),
        }
    }

    #[must_use]
    pub fn scope(&self) -> &str {
        &self.scope
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    #[must_use]
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Typed text not yet committed by the debouncer
    #[must_use]
    pub fn search_pending(&self) -> bool {
        self.search_input != self.search
    }

    #[must_use]
    pub const fn tags(&self) -> &TagSelector {
        &self.tags
    }

    pub const fn tags_mut(&mut self) -> &mut TagSelector {
        &mut self.tags
    }

    /// Move to another route, resetting page, search and tag
    ///
    /// Returns `true` if the scope changed.
    pub fn navigate(&mut self, route: &str) -> bool {
        let scope = scope_from_route(route);
        let changed = scope != self.scope;
        self.scope = scope;
        self.page = 1;
        self.search_input.clear();
        self.search.clear();
        self.tags.clear_tag();
        changed
    }

    /// Record typed search text; jumps back to page 1
    pub fn set_search_input(&mut self, text: impl Into<String>) {
        self.search_input = text.into();
        self.page = 1;
    }

    /// Commit the debounced search text
    pub fn commit_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Paginator for the current page against `total` rows
    #[must_use]
    pub const fn paginator(&self, total: u64) -> Paginator {
        Paginator::new(self.page, self.page_size, total)
    }

    /// Step forward if `total` allows it
    pub fn next_page(&mut self, total: u64) -> bool {
        self.navigate_with(total, Paginator::next)
    }

    /// Step back unless on page 1
    pub fn prev_page(&mut self, total: u64) -> bool {
        self.navigate_with(total, Paginator::prev)
    }

    /// Jump to `page` if it exists for `total`
    pub fn jump_to(&mut self, page: u32, total: u64) -> bool {
        self.navigate_with(total, |p| p.jump(page))
    }

    /// Force the next sync to refetch the same query
    pub fn refresh(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Regroup the raw tag list for the current scope
    pub fn apply_tags(&mut self, raw: &[Tag]) {
        self.tags.set_groups(group_tags(raw, &self.scope));
    }

    /// Query for the current state
    ///
    /// The committed search is always present (possibly empty) so clearing
    /// the search box is a distinct query from never having searched.
    #[must_use]
    pub fn params(&self) -> QueryParams {
        QueryParams {
            page: self.page,
            page_size: self.page_size,
            search: Some(self.search.clone()),
            revision: self.revision,
        }
    }

    fn navigate_with(&mut self, total: u64, step: impl FnOnce(&mut Paginator) -> bool) -> bool {
        let mut paginator = self.paginator(total);
        let moved = step(&mut paginator);
        self.page = paginator.current_page();
        moved
    }
}
