//! Browsing session controller.
//!
//! Owns the movie result set the user is currently looking at: the active
//! mode (browse / trending / search / favorites), the pagination cursor,
//! the filter set and the favorites collection. All catalog queries are
//! mediated here and reconciled into a single snapshot the presentation
//! layer renders from.

mod controller;
mod types;

pub use controller::Browser;
pub use types::{BrowseMode, BrowserSnapshot};
