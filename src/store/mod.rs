//! Tournament data store
//!
//! Holds the three persisted collections (drivers, races, site content)
//! behind an explicit mutation API, hydrated from and flushed to a
//! string-keyed JSON keystore on disk.
//!
//! - [`types`]: the data model and built-in seed data
//! - [`keystore`]: one-JSON-file-per-key persistence
//! - [`engine`]: the [`TournamentStore`] mutation API and pub/sub events
//! - [`derived`]: the derived-content rule projecting race results into
//!   the site content record

pub mod derived;
pub mod engine;
pub mod error;
pub mod keystore;
pub mod types;

pub use derived::apply_derived_content;
pub use engine::{StoreEvent, TournamentStore};
pub use error::{StoreError, StoreResult};
pub use keystore::{Keystore, KEY_CONTENT, KEY_DRIVERS, KEY_RACES, KEY_SESSION};
pub use types::{
    default_drivers, default_races, ContentPatch, Driver, DriverPatch, NewDriver, NewRace, Race,
    RacePatch, RaceStatus, SiteContent,
};
