//! Page-number window and navigation
//!
//! Computes the bounded run of page numbers shown under a listing, with gap
//! markers where pages are elided. The window is centred on the current page
//! where possible and always keeps the first and last page reachable.

use std::fmt;

/// Pages shown in the window, excluding the pinned first/last page
pub const WINDOW_SIZE: u32 = 5;

/// One slot of a page window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEntry {
    Page(u32),
    /// Elided pages
    Gap,
}

impl fmt::Display for PageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(n) => write!(f, "{n}"),
            Self::Gap => f.write_str("…"),
        }
    }
}

/// Number of pages needed for `total` rows
///
/// A zero page size yields zero pages.
#[must_use]
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = total.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Page window for `current` out of `total_pages`
///
/// A `current` past the last page (the total shrank under it) is drawn as
/// the last page.
#[must_use]
pub fn page_window(current: u32, total_pages: u32) -> Vec<PageEntry> {
    if total_pages <= WINDOW_SIZE {
        return (1..=total_pages).map(PageEntry::Page).collect();
    }

    let current = current.clamp(1, total_pages);
    let mut start = current.saturating_sub(2).max(1);
    let end = start.saturating_add(WINDOW_SIZE - 1).min(total_pages);
    if end - start < WINDOW_SIZE - 1 {
        start = (end + 1).saturating_sub(WINDOW_SIZE).max(1);
    }

    let mut window = Vec::with_capacity(WINDOW_SIZE as usize + 4);
    if start > 1 {
        window.push(PageEntry::Page(1));
        if start > 2 {
            window.push(PageEntry::Gap);
        }
    }
    window.extend((start..=end).map(PageEntry::Page));
    if end < total_pages {
        if end < total_pages - 1 {
            window.push(PageEntry::Gap);
        }
        window.push(PageEntry::Page(total_pages));
    }
    window
}

/// Current page plus the numbers needed to navigate from it
///
/// Navigation only touches `current_page`; page size and total are inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    current_page: u32,
    page_size: u32,
    total: u64,
}

impl Paginator {
    #[must_use]
    pub const fn new(current_page: u32, page_size: u32, total: u64) -> Self {
        Self {
            current_page,
            page_size,
            total,
        }
    }

    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    #[must_use]
    pub fn total_pages(&self) -> u32 {
        total_pages(self.total, self.page_size)
    }

    #[must_use]
    pub fn window(&self) -> Vec<PageEntry> {
        page_window(self.current_page, self.total_pages())
    }

    /// Navigation is only worth showing when results span several pages
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.total > u64::from(self.page_size)
    }

    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Step back one page; no-op on the first page
    pub fn prev(&mut self) -> bool {
        if self.has_prev() {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Step forward one page; no-op on the last page
    pub fn next(&mut self) -> bool {
        if self.has_next() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Jump to `page` if it exists
    pub fn jump(&mut self, page: u32) -> bool {
        if (1..=self.total_pages()).contains(&page) {
            self.current_page = page;
            true
        } else {
            false
        }
    }

    /// Update the row count after a fetch, keeping the current page
    pub fn set_total(&mut self, total: u64) {
        self.total = total;
    }

    /// "N items, M pages" summary
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} items, {} pages", self.total, self.total_pages())
    }
}
