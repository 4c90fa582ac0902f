//! Ratatui widgets for the browse TUI
//!
//! Each widget renders from plain data so it can be drawn into a test buffer
//! without a live session.

mod help_bar;
mod item_list;
mod page_footer;
mod search_bar;
mod tag_sidebar;

pub use help_bar::{HelpBar, KeyHint};
pub use item_list::ItemList;
pub use page_footer::PageFooter;
pub use search_bar::SearchBar;
pub use tag_sidebar::TagSidebar;

/// Buffer contents as text, one line per row
#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
