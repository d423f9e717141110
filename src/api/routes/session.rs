//! Session Routes
//!
//! - POST /api/v1/session/login - attempt an admin login
//! - POST /api/v1/session/logout - clear the session
//! - GET  /api/v1/session - current session status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::{LoginRequest, SessionResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// POST /api/v1/session/login
///
/// Verifies the credentials through the configured provider; on success
/// the session flag is set and persisted.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<SessionResponse>> {
    if state.sessions.login(&req.username, &req.password).await {
        Ok(Json(SessionResponse {
            authenticated: true,
        }))
    } else {
        Err(ApiError::Unauthorized)
    }
}

/// POST /api/v1/session/logout
pub async fn logout(State(state): State<Arc<AppState>>) -> StatusCode {
    state.sessions.logout().await;
    StatusCode::NO_CONTENT
}

/// GET /api/v1/session
pub async fn session_status(State(state): State<Arc<AppState>>) -> Json<SessionResponse> {
    Json(SessionResponse {
        authenticated: state.sessions.is_authenticated().await,
    })
}
