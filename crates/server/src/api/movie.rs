//! Per-movie detail view handler.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use explorer_core::{CatalogError, MovieView};

use super::{catalog_error, ErrorResponse};
use crate::state::SharedState;

/// GET /api/v1/movies/{id}
///
/// Assembled detail view: full record, first cast entries, trailer.
/// Renders an explicit not-found when the catalog has no such movie;
/// failed credits or videos fetches leave those sections empty instead
/// of failing the view.
pub async fn get_movie(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
) -> Result<Json<MovieView>, (StatusCode, Json<ErrorResponse>)> {
    match state.details().load(id).await {
        Ok(view) => Ok(Json(view)),
        Err(CatalogError::NotFound(_)) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Movie not found: {}", id),
            }),
        )),
        Err(e) => Err(catalog_error(e)),
    }
}
