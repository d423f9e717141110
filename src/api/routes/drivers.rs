//! Admin driver routes
//!
//! CRUD over the driver list; every handler requires the admin session.
//! Validation runs before any mutation, so a rejected form never touches
//! the store.
//!
//! - POST   /api/v1/admin/drivers - add a driver
//! - PUT    /api/v1/admin/drivers - wholesale replace the list
//! - POST   /api/v1/admin/drivers/recalculate - recompute positions
//! - PUT    /api/v1/admin/drivers/:id - patch a driver
//! - DELETE /api/v1/admin/drivers/:id - remove a driver

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
use crate::store::types::{Driver, DriverPatch, NewDriver};
use crate::validate::{validate_driver_patch, validate_new_driver};

/// POST /api/v1/admin/drivers
pub async fn create_driver(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewDriver>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    require_admin(&state).await?;
    validate_new_driver(&req)?;

    let id = state.store.add_driver(req).await;
    tracing::info!(driver_id = id, "Created driver");

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// PUT /api/v1/admin/drivers
///
/// Wholesale replace, used by bulk edits in the dashboard.
pub async fn replace_drivers(
    State(state): State<Arc<AppState>>,
    Json(drivers): Json<Vec<Driver>>,
) -> ApiResult<StatusCode> {
    require_admin(&state).await?;

    let total = drivers.len();
    state.store.replace_drivers(drivers).await;
    tracing::info!(total, "Replaced driver list");

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/admin/drivers/:id
pub async fn update_driver(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Json(patch): Json<DriverPatch>,
) -> ApiResult<Json<Driver>> {
    require_admin(&state).await?;
    validate_driver_patch(&patch)?;

    if !state.store.update_driver(id, patch).await {
        return Err(ApiError::NotFound(format!("Driver with id {} not found", id)));
    }

    let driver = state
        .store
        .drivers()
        .await
        .into_iter()
        .find(|d| d.id == id)
        .ok_or_else(|| ApiError::Internal("Updated driver vanished".to_string()))?;

    Ok(Json(driver))
}

/// DELETE /api/v1/admin/drivers/:id
pub async fn delete_driver(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> ApiResult<StatusCode> {
    require_admin(&state).await?;

    if !state.store.delete_driver(id).await {
        return Err(ApiError::NotFound(format!("Driver with id {} not found", id)));
    }

    tracing::info!(driver_id = id, "Deleted driver");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/admin/drivers/recalculate
///
/// Re-sorts by points descending and reassigns 1-based positions;
/// returns the ranked list.
pub async fn recalculate_positions(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Driver>>> {
    require_admin(&state).await?;

    state.store.recalculate_positions().await;
    Ok(Json(state.store.drivers().await))
}
