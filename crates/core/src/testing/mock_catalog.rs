//! Mock movie catalog for testing.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::catalog::{
    CastMember, CatalogError, DiscoverFilters, Movie, MovieCatalog, MovieDetails, TrendingWindow,
    Video,
};

/// A recorded catalog query for test assertions.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedQuery {
    Discover { filters: DiscoverFilters, page: u32 },
    Trending { window: TrendingWindow, page: u32 },
    Search { query: String, page: u32 },
    Details { id: u64 },
    Credits { id: u64 },
    Videos { id: u64 },
}

/// Mock implementation of the MovieCatalog trait.
///
/// Provides controllable behavior for testing:
/// - Explicit page lists per list endpoint (page N serves index N-1;
///   out-of-range pages serve an empty list)
/// - ID-keyed details/credits/videos
/// - Query recording for assertions
/// - One-shot error injection
/// - One-shot response delay, for exercising stale-response handling
#[derive(Debug)]
pub struct MockMovieCatalog {
    discover_pages: Arc<RwLock<Vec<Vec<Movie>>>>,
    trending_pages: Arc<RwLock<Vec<Vec<Movie>>>>,
    search_pages: Arc<RwLock<Vec<Vec<Movie>>>>,
    details: Arc<RwLock<HashMap<u64, MovieDetails>>>,
    credits: Arc<RwLock<HashMap<u64, Vec<CastMember>>>>,
    videos: Arc<RwLock<HashMap<u64, Vec<Video>>>>,
    /// Recorded queries.
    queries: Arc<RwLock<Vec<RecordedQuery>>>,
    /// If set, the next operation will fail with this error.
    next_error: Arc<RwLock<Option<CatalogError>>>,
    /// If set, the next operation sleeps this long before responding.
    next_delay: Arc<RwLock<Option<Duration>>>,
}

impl Default for MockMovieCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MockMovieCatalog {
    /// Create a new empty mock catalog.
    pub fn new() -> Self {
        Self {
            discover_pages: Arc::new(RwLock::new(Vec::new())),
            trending_pages: Arc::new(RwLock::new(Vec::new())),
            search_pages: Arc::new(RwLock::new(Vec::new())),
            details: Arc::new(RwLock::new(HashMap::new())),
            credits: Arc::new(RwLock::new(HashMap::new())),
            videos: Arc::new(RwLock::new(HashMap::new())),
            queries: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
            next_delay: Arc::new(RwLock::new(None)),
        }
    }

    // =========================================================================
    // Response Configuration
    // =========================================================================

    /// Set the pages served by the discover endpoint.
    pub async fn set_discover_pages(&self, pages: Vec<Vec<Movie>>) {
        *self.discover_pages.write().await = pages;
    }

    /// Set the pages served by the trending endpoint.
    pub async fn set_trending_pages(&self, pages: Vec<Vec<Movie>>) {
        *self.trending_pages.write().await = pages;
    }

    /// Set the pages served by the search endpoint.
    pub async fn set_search_pages(&self, pages: Vec<Vec<Movie>>) {
        *self.search_pages.write().await = pages;
    }

    /// Add a details record.
    pub async fn add_details(&self, details: MovieDetails) {
        self.details.write().await.insert(details.id, details);
    }

    /// Set the cast list for a movie.
    pub async fn set_credits(&self, id: u64, cast: Vec<CastMember>) {
        self.credits.write().await.insert(id, cast);
    }

    /// Set the video list for a movie.
    pub async fn set_videos(&self, id: u64, videos: Vec<Video>) {
        self.videos.write().await.insert(id, videos);
    }

    // =========================================================================
    // Query Recording
    // =========================================================================

    /// Get all recorded queries.
    pub async fn recorded_queries(&self) -> Vec<RecordedQuery> {
        self.queries.read().await.clone()
    }

    /// Clear recorded queries.
    pub async fn clear_recorded(&self) {
        self.queries.write().await.clear();
    }

    /// Get the number of queries performed.
    pub async fn query_count(&self) -> usize {
        self.queries.read().await.len()
    }

    // =========================================================================
    // Error / Delay Injection
    // =========================================================================

    /// Configure the next operation to fail with the given error.
    pub async fn set_next_error(&self, error: CatalogError) {
        *self.next_error.write().await = Some(error);
    }

    /// Configure the next operation to sleep before responding.
    pub async fn set_next_delay(&self, delay: Duration) {
        *self.next_delay.write().await = Some(delay);
    }

    async fn take_error(&self) -> Option<CatalogError> {
        self.next_error.write().await.take()
    }

    async fn pause_if_configured(&self) {
        let delay = self.next_delay.write().await.take();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    async fn record(&self, query: RecordedQuery) {
        self.queries.write().await.push(query);
    }

    /// Serve page `page` (1-based) from a configured page list.
    async fn serve_page(pages: &RwLock<Vec<Vec<Movie>>>, page: u32) -> Vec<Movie> {
        pages
            .read()
            .await
            .get(page.saturating_sub(1) as usize)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl MovieCatalog for MockMovieCatalog {
    async fn discover(
        &self,
        filters: &DiscoverFilters,
        page: u32,
    ) -> Result<Vec<Movie>, CatalogError> {
        self.record(RecordedQuery::Discover {
            filters: filters.clone(),
            page,
        })
        .await;
        self.pause_if_configured().await;

        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        Ok(Self::serve_page(&self.discover_pages, page).await)
    }

    async fn trending(
        &self,
        window: TrendingWindow,
        page: u32,
    ) -> Result<Vec<Movie>, CatalogError> {
        self.record(RecordedQuery::Trending { window, page }).await;
        self.pause_if_configured().await;

        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        Ok(Self::serve_page(&self.trending_pages, page).await)
    }

    async fn search(&self, query: &str, page: u32) -> Result<Vec<Movie>, CatalogError> {
        self.record(RecordedQuery::Search {
            query: query.to_string(),
            page,
        })
        .await;
        self.pause_if_configured().await;

        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        Ok(Self::serve_page(&self.search_pages, page).await)
    }

    async fn movie_details(&self, id: u64) -> Result<MovieDetails, CatalogError> {
        self.record(RecordedQuery::Details { id }).await;
        self.pause_if_configured().await;

        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.details
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(format!("Movie ID {}", id)))
    }

    async fn movie_credits(&self, id: u64) -> Result<Vec<CastMember>, CatalogError> {
        self.record(RecordedQuery::Credits { id }).await;
        self.pause_if_configured().await;

        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.credits
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(format!("Credits for movie {}", id)))
    }

    async fn movie_videos(&self, id: u64) -> Result<Vec<Video>, CatalogError> {
        self.record(RecordedQuery::Videos { id }).await;
        self.pause_if_configured().await;

        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.videos
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(format!("Videos for movie {}", id)))
    }
}
