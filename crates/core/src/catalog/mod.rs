//! Movie catalog integration.
//!
//! This module provides the client for querying the external movie
//! catalog service: filtered discovery, trending, text search and
//! per-movie detail/credits/videos lookups.

mod tmdb;
mod types;

pub use tmdb::{TmdbCatalog, TmdbConfig};
pub use types::*;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when querying the movie catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Rate limit exceeded.
    #[error("Rate limit exceeded, please wait before retrying")]
    RateLimitExceeded,

    /// Resource not found (404).
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Client not configured (missing API token, etc.).
    #[error("Client not configured: {0}")]
    NotConfigured(String),
}

/// Trait for movie catalog clients.
///
/// All operations are read-only queries against the remote catalog.
/// The browsing controller and the details loader depend on this seam,
/// which is what the mock in `testing` implements.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Discover movies with server-side filters applied, sorted by
    /// popularity. Pages are 1-based.
    async fn discover(
        &self,
        filters: &DiscoverFilters,
        page: u32,
    ) -> Result<Vec<Movie>, CatalogError>;

    /// Get the current trending window. Filters never apply here.
    async fn trending(
        &self,
        window: TrendingWindow,
        page: u32,
    ) -> Result<Vec<Movie>, CatalogError>;

    /// Free-text movie search.
    async fn search(&self, query: &str, page: u32) -> Result<Vec<Movie>, CatalogError>;

    /// Get full details for a movie by ID.
    async fn movie_details(&self, id: u64) -> Result<MovieDetails, CatalogError>;

    /// Get the cast list for a movie, in catalog-provided order.
    async fn movie_credits(&self, id: u64) -> Result<Vec<CastMember>, CatalogError>;

    /// Get the video list for a movie, in catalog-provided order.
    async fn movie_videos(&self, id: u64) -> Result<Vec<Video>, CatalogError>;
}
