//! The browsing controller.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::warn;

use crate::catalog::{CatalogError, DiscoverFilters, Movie, MovieCatalog, TrendingWindow};

use super::types::{BrowseMode, BrowseState, BrowserSnapshot};

/// Mediates all catalog queries and owns the user-visible browsing state.
///
/// All state lives behind a single lock and is mutated only by the
/// controller's own operations; there are no timers and no background
/// work. Each fetch captures a generation token before the request goes
/// out and applies the response only if the controller has not moved on
/// since, so a stale response can never overwrite current state.
///
/// `is_loading` acts as an advisory single-flight gate for [`load_more`]
/// only; mode-switching fetches are allowed to race and the generation
/// token arbitrates between them.
///
/// [`load_more`]: Browser::load_more
pub struct Browser {
    catalog: Arc<dyn MovieCatalog>,
    trending_window: TrendingWindow,
    state: RwLock<BrowseState>,
}

impl Browser {
    /// Create a controller with an empty result set and no favorites.
    pub fn new(catalog: Arc<dyn MovieCatalog>, trending_window: TrendingWindow) -> Self {
        Self {
            catalog,
            trending_window,
            state: RwLock::new(BrowseState::new()),
        }
    }

    /// Copy of the current state for rendering.
    pub async fn snapshot(&self) -> BrowserSnapshot {
        self.state.read().await.snapshot()
    }

    /// Switch to browse mode and fetch page 1 with the current filters.
    ///
    /// On success the result set is replaced and the cursor points at
    /// page 2. On failure the previous result set and `has_more` are
    /// retained and the error is returned.
    pub async fn discover_all(&self) -> Result<BrowserSnapshot, CatalogError> {
        let (token, filters) = {
            let mut state = self.state.write().await;
            state.mode = BrowseMode::Browse;
            state.is_loading = true;
            state.generation += 1;
            (state.generation, state.filters.clone())
        };

        let fetched = self.catalog.discover(&filters, 1).await;
        self.apply_first_page(token, fetched).await
    }

    /// Switch to trending mode and fetch the current trending window.
    /// Filters are ignored here by design.
    pub async fn show_trending(&self) -> Result<BrowserSnapshot, CatalogError> {
        let token = {
            let mut state = self.state.write().await;
            state.mode = BrowseMode::Trending;
            state.is_loading = true;
            state.generation += 1;
            state.generation
        };

        let fetched = self.catalog.trending(self.trending_window, 1).await;
        self.apply_first_page(token, fetched).await
    }

    /// Switch to search mode and fetch page 1 of text-search results.
    /// An empty or whitespace-only query is a no-op.
    pub async fn search(&self, query: &str) -> Result<BrowserSnapshot, CatalogError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(self.snapshot().await);
        }

        let token = {
            let mut state = self.state.write().await;
            state.mode = BrowseMode::Search;
            state.search_query = query.to_string();
            state.is_loading = true;
            state.generation += 1;
            state.generation
        };

        let fetched = self.catalog.search(query, 1).await;
        self.apply_first_page(token, fetched).await
    }

    /// Fetch the next page under the current mode and append it.
    ///
    /// No-op while a request is outstanding or when the last page was
    /// empty. Favorites are never paginated.
    pub async fn load_more(&self) -> Result<BrowserSnapshot, CatalogError> {
        let (token, mode, filters, query, page) = {
            let mut state = self.state.write().await;
            if state.is_loading || !state.has_more {
                return Ok(state.snapshot());
            }
            state.is_loading = true;
            state.generation += 1;
            (
                state.generation,
                state.mode,
                state.filters.clone(),
                state.search_query.clone(),
                state.page_cursor,
            )
        };

        let fetched = match mode {
            BrowseMode::Browse => self.catalog.discover(&filters, page).await,
            BrowseMode::Trending => self.catalog.trending(self.trending_window, page).await,
            BrowseMode::Search => self.catalog.search(&query, page).await,
            // Unreachable in practice: favorites mode always has
            // has_more = false.
            BrowseMode::Favorites => {
                let mut state = self.state.write().await;
                state.is_loading = false;
                return Ok(state.snapshot());
            }
        };

        let mut state = self.state.write().await;
        if state.generation != token {
            warn!("Discarding stale load-more response");
            return Ok(state.snapshot());
        }
        state.is_loading = false;
        match fetched {
            Ok(movies) => {
                state.has_more = !movies.is_empty();
                state.page_cursor += 1;
                state.results.extend(movies);
                Ok(state.snapshot())
            }
            Err(e) => Err(e),
        }
    }

    /// Switch to favorites mode. The result set becomes a snapshot of the
    /// favorites collection; no catalog call is made and pagination is off.
    pub async fn show_favorites(&self) -> BrowserSnapshot {
        let mut state = self.state.write().await;
        state.mode = BrowseMode::Favorites;
        // Invalidate any in-flight fetch so it cannot overwrite this view.
        state.generation += 1;
        state.is_loading = false;
        state.results = state.favorites.clone();
        state.has_more = false;
        state.snapshot()
    }

    /// Clear the stored search query. Does not change the result set or
    /// the mode; callers switch mode themselves to see new results.
    pub async fn clear_search(&self) -> BrowserSnapshot {
        let mut state = self.state.write().await;
        state.search_query.clear();
        state.snapshot()
    }

    /// Replace the filter set and synchronously re-run [`discover_all`].
    /// Filter changes only ever affect browse-mode queries.
    ///
    /// [`discover_all`]: Browser::discover_all
    pub async fn apply_filters(
        &self,
        filters: DiscoverFilters,
    ) -> Result<BrowserSnapshot, CatalogError> {
        {
            let mut state = self.state.write().await;
            state.filters = filters;
        }
        self.discover_all().await
    }

    /// Set the genre filter and refetch.
    pub async fn set_genre(&self, genre: Option<u32>) -> Result<BrowserSnapshot, CatalogError> {
        {
            let mut state = self.state.write().await;
            state.filters.genre = genre;
        }
        self.discover_all().await
    }

    /// Set the release-year filter and refetch.
    pub async fn set_year(&self, year: Option<u32>) -> Result<BrowserSnapshot, CatalogError> {
        {
            let mut state = self.state.write().await;
            state.filters.year = year;
        }
        self.discover_all().await
    }

    /// Set the minimum-rating filter and refetch.
    pub async fn set_min_rating(
        &self,
        min_rating: Option<f32>,
    ) -> Result<BrowserSnapshot, CatalogError> {
        {
            let mut state = self.state.write().await;
            state.filters.min_rating = min_rating;
        }
        self.discover_all().await
    }

    /// Add the movie to the favorites if absent, remove it if present.
    ///
    /// Purely in-memory; never rewrites the currently displayed result
    /// set, even when it is a favorites snapshot.
    pub async fn toggle_favorite(&self, movie: Movie) -> BrowserSnapshot {
        let mut state = self.state.write().await;
        if let Some(pos) = state.favorites.iter().position(|m| m.id == movie.id) {
            state.favorites.remove(pos);
        } else {
            state.favorites.push(movie);
        }
        state.snapshot()
    }

    /// Membership test by ID.
    pub async fn is_favorite(&self, id: u64) -> bool {
        self.state
            .read()
            .await
            .favorites
            .iter()
            .any(|m| m.id == id)
    }

    /// Copy of the favorites collection in insertion order.
    pub async fn favorites(&self) -> Vec<Movie> {
        self.state.read().await.favorites.clone()
    }

    /// Apply a page-1 response for a mode-switching fetch, unless the
    /// controller has moved on since the request was issued.
    async fn apply_first_page(
        &self,
        token: u64,
        fetched: Result<Vec<Movie>, CatalogError>,
    ) -> Result<BrowserSnapshot, CatalogError> {
        let mut state = self.state.write().await;
        if state.generation != token {
            warn!("Discarding stale catalog response");
            return Ok(state.snapshot());
        }
        state.is_loading = false;
        match fetched {
            Ok(movies) => {
                state.has_more = !movies.is_empty();
                state.results = movies;
                state.page_cursor = 2;
                Ok(state.snapshot())
            }
            Err(e) => Err(e),
        }
    }
}
