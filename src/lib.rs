//! # Paddock
//!
//! Backend for a simulated racing-tournament site: a persistent tournament
//! store (drivers, races, site copy), derived site content, a placeholder
//! admin session gate, and an HTTP view/mutation layer.
//!
//! ## Modules
//!
//! - [`store`]: the tournament data store, its keystore persistence, and
//!   the derived-content rule
//! - [`auth`]: the admin session gate behind an `AuthProvider` seam
//! - [`validate`]: admin form validation
//! - [`api`]: view routes and admin mutation routes with Axum
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use paddock::auth::{SessionGate, StaticAuthProvider};
//! use paddock::store::{Keystore, TournamentStore};
//! use paddock::api::{serve, AppState};
//! use paddock::config::Config;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!
//!     let keystore = Keystore::open(&config.storage.data_dir)?;
//!     let store = Arc::new(TournamentStore::open(keystore.clone()));
//!     let sessions = Arc::new(SessionGate::open(
//!         keystore,
//!         Box::new(StaticAuthProvider::default()),
//!     ));
//!
//!     serve(AppState::new(store, sessions), &config.server).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod store;
pub mod validate;

// Re-export top-level types for convenience
pub use store::{
    ContentPatch, Driver, DriverPatch, Keystore, NewDriver, NewRace, Race, RacePatch, RaceStatus,
    SiteContent, StoreEvent, TournamentStore,
};

pub use auth::{AuthProvider, SessionGate, StaticAuthProvider};

pub use api::{build_router, serve, ApiError, ApiResult, AppState};

pub use config::{Config, ConfigError};

pub use validate::{validate_lap_time, ValidationError};
