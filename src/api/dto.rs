//! Data Transfer Objects
//!
//! Request and response types for the view and mutation endpoints.
//! Field names serialize camelCase, matching the persisted entity format.
//!
//! Mutation request bodies reuse the store's `New*`/`*Patch` types
//! directly; this module holds the read-side view models and the small
//! wrappers around them.

use crate::store::types::{Driver, Race, SiteContent};
use serde::{Deserialize, Serialize};

// ============================================
// PUBLIC VIEW MODELS
// ============================================

/// Home page view model
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub tournament_dates: String,
    pub tournament_description: String,
    pub show_winner_animation: bool,
    pub last_race: LastRaceSummary,
    pub next_race: NextRaceSummary,
}

/// Last completed race, as shown on the home page
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LastRaceSummary {
    pub winner: String,
    pub time: String,
    pub circuit: String,
}

/// Next race teaser with its countdown
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextRaceSummary {
    pub date: String,
    pub name: String,
    pub circuit: String,
    pub countdown: Countdown,
}

/// Time remaining until the next race; all zeros once it has started
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    pub fn zero() -> Self {
        Self {
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
        }
    }
}

/// A driver as shown on public pages: no phone number
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicDriver {
    pub id: u64,
    pub name: String,
    pub age: u32,
    pub time: String,
    pub points: u32,
    pub position: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_new_record: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

impl From<&Driver> for PublicDriver {
    fn from(driver: &Driver) -> Self {
        Self {
            id: driver.id,
            name: driver.name.clone(),
            age: driver.age,
            time: driver.time.clone(),
            points: driver.points,
            position: driver.position,
            is_new_record: driver.is_new_record,
            profile_image: driver.profile_image.clone(),
        }
    }
}

/// Leaderboard page view model
#[derive(Debug, Serialize)]
pub struct LeaderboardView {
    pub total: usize,
    pub drivers: Vec<PublicDriver>,
}

/// Calendar page view model
#[derive(Debug, Serialize)]
pub struct CalendarView {
    pub total: usize,
    pub completed: usize,
    pub upcoming: usize,
    pub races: Vec<Race>,
}

// ============================================
// ADMIN DTOs
// ============================================

/// Admin dashboard view model: everything, including private fields
#[derive(Debug, Serialize)]
pub struct AdminOverview {
    pub drivers: Vec<Driver>,
    pub races: Vec<Race>,
    pub content: SiteContent,
}

/// Response for entity creation
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: u64,
}

// ============================================
// SESSION DTOs
// ============================================

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Session status response
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub authenticated: bool,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub store: String,
    pub uptime_seconds: u64,
    pub version: String,
}
