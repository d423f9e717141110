//! API route handlers

pub mod content;
pub mod drivers;
pub mod health;
pub mod pages;
pub mod races;
pub mod session;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// Reject the request unless the admin session flag is set
pub async fn require_admin(state: &AppState) -> ApiResult<()> {
    if state.sessions.is_authenticated().await {
        Ok(())
    } else {
        Err(ApiError::Unauthorized)
    }
}
