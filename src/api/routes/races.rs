//! Admin race routes
//!
//! CRUD over the race calendar; every handler requires the admin session.
//!
//! - POST   /api/v1/admin/races - add a race
//! - PUT    /api/v1/admin/races - wholesale replace the list
//! - PUT    /api/v1/admin/races/:id - patch a race
//! - DELETE /api/v1/admin/races/:id - remove a race

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::dto::CreatedResponse;
use crate::api::error::{ApiError, ApiResult};
use crate::api::routes::require_admin;
use crate::api::state::AppState;
use crate::store::types::{NewRace, Race, RacePatch};
use crate::validate::{validate_new_race, validate_race_patch};

/// POST /api/v1/admin/races
pub async fn create_race(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewRace>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    require_admin(&state).await?;
    validate_new_race(&req)?;

    let id = state.store.add_race(req).await;
    tracing::info!(race_id = id, "Created race");

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// PUT /api/v1/admin/races
pub async fn replace_races(
    State(state): State<Arc<AppState>>,
    Json(races): Json<Vec<Race>>,
) -> ApiResult<StatusCode> {
    require_admin(&state).await?;

    let total = races.len();
    state.store.replace_races(races).await;
    tracing::info!(total, "Replaced race list");

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/admin/races/:id
pub async fn update_race(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Json(patch): Json<RacePatch>,
) -> ApiResult<Json<Race>> {
    require_admin(&state).await?;
    validate_race_patch(&patch)?;

    if !state.store.update_race(id, patch).await {
        return Err(ApiError::NotFound(format!("Race with id {} not found", id)));
    }

    let race = state
        .store
        .races()
        .await
        .into_iter()
        .find(|r| r.id == id)
        .ok_or_else(|| ApiError::Internal("Updated race vanished".to_string()))?;

    Ok(Json(race))
}

/// DELETE /api/v1/admin/races/:id
pub async fn delete_race(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> ApiResult<StatusCode> {
    require_admin(&state).await?;

    if !state.store.delete_race(id).await {
        return Err(ApiError::NotFound(format!("Race with id {} not found", id)));
    }

    tracing::info!(race_id = id, "Deleted race");
    Ok(StatusCode::NO_CONTENT)
}
