//! Browsing session state types.

use serde::{Deserialize, Serialize};

use crate::catalog::{DiscoverFilters, Movie};

/// The controller's current top-level view. Modes are mutually exclusive.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BrowseMode {
    #[default]
    Browse,
    Trending,
    Search,
    Favorites,
}

/// A copy of the browsing state taken at one instant, for rendering.
/// Not kept in sync with the controller after it is returned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrowserSnapshot {
    /// Active mode.
    pub mode: BrowseMode,
    /// Current ordered result set.
    pub results: Vec<Movie>,
    /// Next page number to request (1-based).
    pub page_cursor: u32,
    /// Active discover filters.
    pub filters: DiscoverFilters,
    /// Current free-text query. Non-empty only in search mode.
    pub search_query: String,
    /// True while exactly one catalog request is in flight.
    pub is_loading: bool,
    /// True while the last fetched page was non-empty.
    pub has_more: bool,
    /// IDs of the movies currently marked as favorites.
    pub favorite_ids: Vec<u64>,
}

/// Mutable state behind the controller's lock.
#[derive(Debug, Default)]
pub(super) struct BrowseState {
    pub mode: BrowseMode,
    pub results: Vec<Movie>,
    pub page_cursor: u32,
    pub filters: DiscoverFilters,
    pub search_query: String,
    pub is_loading: bool,
    pub has_more: bool,
    /// Insertion-ordered, id-unique favorites collection.
    pub favorites: Vec<Movie>,
    /// Bumped by every state-changing operation; catalog responses carry
    /// the generation they were issued under and are discarded on mismatch.
    pub generation: u64,
}

impl BrowseState {
    pub fn new() -> Self {
        Self {
            page_cursor: 1,
            has_more: true,
            ..Default::default()
        }
    }

    pub fn snapshot(&self) -> BrowserSnapshot {
        BrowserSnapshot {
            mode: self.mode,
            results: self.results.clone(),
            page_cursor: self.page_cursor,
            filters: self.filters.clone(),
            search_query: self.search_query.clone(),
            is_loading: self.is_loading,
            has_more: self.has_more,
            favorite_ids: self.favorites.iter().map(|m| m.id).collect(),
        }
    }
}
