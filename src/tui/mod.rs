//! Ratatui-based browse screen
//!
//! Draws a [`BrowseSession`](crate::browse::BrowseSession) and feeds it key
//! presses. All query logic lives in the session; this module only renders
//! and maps keys.
//!
//! # Architecture
//!
//! ```text
//!  crossterm thread ──► mpsc ──┐
//!                              ├─► select! ──► apply(action) / redraw
//!  session.next_event() ───────┘
//! ```
//!
//! # Layout
//!
//! - search bar (debounced; `…` while a query is pending)
//! - result list and tag sidebar
//! - page window footer
//! - key hints

mod app;
mod error;
mod events;
mod theme;
pub mod widgets;

pub use app::run;
pub use error::{Result, UiError};
pub use events::{Action, map_key};
pub use theme::Theme;
