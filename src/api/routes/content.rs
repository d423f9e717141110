//! Admin site-content route
//!
//! - PUT /api/v1/admin/content - shallow-merge fields into the site copy

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::routes::require_admin;
use crate::api::state::AppState;
use crate::store::types::{ContentPatch, SiteContent};

/// PUT /api/v1/admin/content
///
/// Shallow-merges the given fields and returns the merged record. Note
/// that the derived-content rule may overwrite the last-race and
/// next-race fields again on the next drivers/races change.
pub async fn update_content(
    State(state): State<Arc<AppState>>,
    Json(patch): Json<ContentPatch>,
) -> ApiResult<Json<SiteContent>> {
    require_admin(&state).await?;

    state.store.update_content(patch).await;
    Ok(Json(state.store.content().await))
}
