//! Session API handlers: the local login gate.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use explorer_core::{Identity, SessionError, GUEST_NAME};

use super::ErrorResponse;
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SessionStatus {
    pub logged_in: bool,
    /// Display name, falling back to the guest placeholder.
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<Identity>,
}

/// POST /api/v1/session
///
/// Local-only login: validates that both fields are present and persists
/// the identity. No credential verification happens.
pub async fn login(
    State(state): State<SharedState>,
    Json(request): Json<LoginRequest>,
) -> Result<(StatusCode, Json<Identity>), impl IntoResponse> {
    match state.session().login(&request.username, &request.password) {
        Ok(identity) => Ok((StatusCode::CREATED, Json(identity))),
        Err(e @ SessionError::Validation(_)) => Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )),
    }
}

/// GET /api/v1/session
pub async fn get_session(
    State(state): State<SharedState>,
) -> Result<Json<SessionStatus>, (StatusCode, Json<ErrorResponse>)> {
    match state.session().current_identity() {
        Ok(identity) => Ok(Json(SessionStatus {
            logged_in: identity.is_some(),
            display_name: identity
                .as_ref()
                .map(|i| i.display_name.clone())
                .unwrap_or_else(|| GUEST_NAME.to_string()),
            identity,
        })),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )),
    }
}

/// DELETE /api/v1/session
pub async fn logout(
    State(state): State<SharedState>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    match state.session().logout() {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )),
    }
}
