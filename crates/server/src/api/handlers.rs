//! Health and config handlers.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /api/v1/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /api/v1/config
///
/// Current configuration with the API token redacted.
pub async fn get_config(State(state): State<SharedState>) -> Json<explorer_core::SanitizedConfig> {
    Json(state.sanitized_config())
}
