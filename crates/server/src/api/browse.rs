//! Browsing API handlers.
//!
//! Each handler maps a user intent onto one browsing controller operation
//! and returns the resulting state snapshot for rendering.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use explorer_core::{BrowserSnapshot, DiscoverFilters, Movie};

use super::{catalog_error, ErrorResponse};
use crate::state::SharedState;

type BrowseResult = Result<Json<BrowserSnapshot>, (StatusCode, Json<ErrorResponse>)>;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

/// GET /api/v1/browse
///
/// Snapshot of the current browsing state.
pub async fn get_browse(State(state): State<SharedState>) -> Json<BrowserSnapshot> {
    Json(state.browser().snapshot().await)
}

/// POST /api/v1/browse/discover
///
/// Switch to browse mode and fetch page 1 with the active filters.
pub async fn discover(State(state): State<SharedState>) -> BrowseResult {
    state
        .browser()
        .discover_all()
        .await
        .map(Json)
        .map_err(catalog_error)
}

/// POST /api/v1/browse/trending
pub async fn trending(State(state): State<SharedState>) -> BrowseResult {
    state
        .browser()
        .show_trending()
        .await
        .map(Json)
        .map_err(catalog_error)
}

/// POST /api/v1/browse/search
///
/// An empty query leaves the state untouched.
pub async fn search(
    State(state): State<SharedState>,
    Json(request): Json<SearchRequest>,
) -> BrowseResult {
    state
        .browser()
        .search(&request.query)
        .await
        .map(Json)
        .map_err(catalog_error)
}

/// POST /api/v1/browse/more
///
/// Fetch the next page; a no-op while a request is in flight or when the
/// catalog is exhausted.
pub async fn load_more(State(state): State<SharedState>) -> BrowseResult {
    state
        .browser()
        .load_more()
        .await
        .map(Json)
        .map_err(catalog_error)
}

/// POST /api/v1/browse/favorites
///
/// Switch to the favorites view (a snapshot, no catalog call).
pub async fn show_favorites(State(state): State<SharedState>) -> Json<BrowserSnapshot> {
    Json(state.browser().show_favorites().await)
}

/// DELETE /api/v1/browse/search
///
/// Clear the stored query without changing results or mode.
pub async fn clear_search(State(state): State<SharedState>) -> Json<BrowserSnapshot> {
    Json(state.browser().clear_search().await)
}

/// PUT /api/v1/browse/filters
///
/// Replace the filter set; triggers a browse-mode refetch.
pub async fn put_filters(
    State(state): State<SharedState>,
    Json(filters): Json<DiscoverFilters>,
) -> BrowseResult {
    state
        .browser()
        .apply_filters(filters)
        .await
        .map(Json)
        .map_err(catalog_error)
}

/// GET /api/v1/favorites
pub async fn get_favorites(State(state): State<SharedState>) -> Json<Vec<Movie>> {
    Json(state.browser().favorites().await)
}

/// POST /api/v1/favorites
///
/// Toggle the movie in the favorites set: added if absent, removed if
/// present.
pub async fn toggle_favorite(
    State(state): State<SharedState>,
    Json(movie): Json<Movie>,
) -> Json<BrowserSnapshot> {
    Json(state.browser().toggle_favorite(movie).await)
}
