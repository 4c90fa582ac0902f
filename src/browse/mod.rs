//! Browse module - listing state and live sessions
//!
//! UI-agnostic logic behind the listing screen, usable from the TUI or any
//! other frontend.
//!
//! # Architecture
//!
//! - `view`: [`CatalogView`], pure query state (scope, page, search, tags)
//! - `session`: [`BrowseSession`], the view wired to debouncer, controllers
//!   and background fetches

pub mod session;
pub mod view;

pub use session::{BrowseSession, ItemsState, SessionConfig, SessionEvent};
pub use view::CatalogView;
