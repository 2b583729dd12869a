pub mod browse;
pub mod handlers;
pub mod movie;
pub mod routes;
pub mod session;

pub use routes::create_router;

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use explorer_core::CatalogError;

/// JSON error envelope shared by all handlers.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Map a catalog error onto an HTTP response. Failures never crash the
/// service; the browsing state keeps whatever it held before the fetch.
pub(crate) fn catalog_error(e: CatalogError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &e {
        CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
        CatalogError::NotConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
        CatalogError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
        CatalogError::Http(_) | CatalogError::ApiError { .. } | CatalogError::ParseError(_) => {
            StatusCode::BAD_GATEWAY
        }
    };
    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}
