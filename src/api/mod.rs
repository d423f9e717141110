//! Paddock view and mutation API
//!
//! HTTP layer for the tournament site, built with Axum.
//!
//! # Public views
//! - `GET /` - home page view model (hero copy, last race, countdown)
//! - `GET /leaderboard` - ranked drivers, phone numbers stripped
//! - `GET /calendar` - race list with status tallies
//! - anything else - the not-found view
//!
//! # Session
//! - `POST /api/v1/session/login` - admin login
//! - `POST /api/v1/session/logout` - clear session
//! - `GET  /api/v1/session` - session status
//!
//! # Admin (requires session)
//! - `GET    /api/v1/admin/overview` - dashboard view
//! - `POST   /api/v1/admin/drivers` / `PUT /api/v1/admin/drivers`
//! - `PUT    /api/v1/admin/drivers/:id` / `DELETE /api/v1/admin/drivers/:id`
//! - `POST   /api/v1/admin/drivers/recalculate`
//! - `POST   /api/v1/admin/races` / `PUT /api/v1/admin/races`
//! - `PUT    /api/v1/admin/races/:id` / `DELETE /api/v1/admin/races/:id`
//! - `PUT    /api/v1/admin/content`
//!
//! # Health
//! - `GET /health/live`, `GET /health/ready`, `GET /health`

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Session routes
        .route("/session", get(routes::session::session_status))
        .route("/session/login", post(routes::session::login))
        .route("/session/logout", post(routes::session::logout))
        // Admin dashboard view
        .route("/admin/overview", get(routes::pages::admin_overview))
        // Driver routes
        .route("/admin/drivers", post(routes::drivers::create_driver))
        .route("/admin/drivers", put(routes::drivers::replace_drivers))
        .route(
            "/admin/drivers/recalculate",
            post(routes::drivers::recalculate_positions),
        )
        .route("/admin/drivers/:id", put(routes::drivers::update_driver))
        .route("/admin/drivers/:id", delete(routes::drivers::delete_driver))
        // Race routes
        .route("/admin/races", post(routes::races::create_race))
        .route("/admin/races", put(routes::races::replace_races))
        .route("/admin/races/:id", put(routes::races::update_race))
        .route("/admin/races/:id", delete(routes::races::delete_race))
        // Site content
        .route("/admin/content", put(routes::content::update_content));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        // Public page views
        .route("/", get(routes::pages::home))
        .route("/leaderboard", get(routes::pages::leaderboard))
        .route("/calendar", get(routes::pages::calendar))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .fallback(routes::pages::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the HTTP server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Paddock listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Paddock shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
