//! Public page views
//!
//! Each view is a pure read-and-render over the store:
//!
//! - GET / - home: hero copy, last race, next race with countdown
//! - GET /leaderboard - drivers ordered by position, phone stripped
//! - GET /calendar - the race list with status tallies
//! - fallback - the not-found view for unknown paths
//!
//! The admin dashboard view lives here too; it is the same shape of
//! read-and-render, just gated and unfiltered.

use axum::{extract::State, Json};
use chrono::NaiveDateTime;
use std::sync::Arc;

use crate::api::dto::{
    AdminOverview, CalendarView, Countdown, HomeView, LastRaceSummary, LeaderboardView,
    NextRaceSummary, PublicDriver,
};
use crate::api::error::{ApiError, ApiResult};
use crate::api::routes::require_admin;
use crate::api::state::AppState;
use crate::store::types::RaceStatus;

/// GET /
///
/// Home page view model.
pub async fn home(State(state): State<Arc<AppState>>) -> Json<HomeView> {
    let content = state.store.content().await;

    let countdown = countdown_until(
        &content.next_race_date,
        chrono::Local::now().naive_local(),
    );

    Json(HomeView {
        hero_title: content.hero_title,
        hero_subtitle: content.hero_subtitle,
        tournament_dates: content.tournament_dates,
        tournament_description: content.tournament_description,
        show_winner_animation: content.show_winner_animation,
        last_race: LastRaceSummary {
            winner: content.last_race_winner,
            time: content.last_race_time,
            circuit: content.last_race_circuit,
        },
        next_race: NextRaceSummary {
            date: content.next_race_date,
            name: content.next_race_name,
            circuit: content.next_race_circuit,
            countdown,
        },
    })
}

/// GET /leaderboard
///
/// Drivers ordered by position. Phone numbers never leave the admin view.
pub async fn leaderboard(State(state): State<Arc<AppState>>) -> Json<LeaderboardView> {
    let mut drivers = state.store.drivers().await;
    drivers.sort_by_key(|d| d.position);

    let drivers: Vec<PublicDriver> = drivers.iter().map(PublicDriver::from).collect();

    Json(LeaderboardView {
        total: drivers.len(),
        drivers,
    })
}

/// GET /calendar
///
/// Races in list order plus completed/upcoming tallies.
pub async fn calendar(State(state): State<Arc<AppState>>) -> Json<CalendarView> {
    let races = state.store.races().await;

    let completed = races
        .iter()
        .filter(|r| r.status == RaceStatus::Completed)
        .count();
    let upcoming = races.len() - completed;

    Json(CalendarView {
        total: races.len(),
        completed,
        upcoming,
        races,
    })
}

/// GET /api/v1/admin/overview
///
/// The admin dashboard view: full collections including private fields.
pub async fn admin_overview(State(state): State<Arc<AppState>>) -> ApiResult<Json<AdminOverview>> {
    require_admin(&state).await?;

    Ok(Json(AdminOverview {
        drivers: state.store.drivers().await,
        races: state.store.races().await,
        content: state.store.content().await,
    }))
}

/// Fallback handler: the not-found view
pub async fn not_found() -> ApiError {
    ApiError::NotFound("No such page".to_string())
}

/// Time remaining from `now` until a next-race date string
///
/// The date is an ISO 8601 local datetime as entered by the admin; an
/// unparseable or past date counts down to zero rather than erroring.
pub fn countdown_until(target: &str, now: NaiveDateTime) -> Countdown {
    let Some(target) = parse_race_date(target) else {
        return Countdown::zero();
    };

    let remaining = target - now;
    if remaining <= chrono::Duration::zero() {
        return Countdown::zero();
    }

    Countdown {
        days: remaining.num_days(),
        hours: remaining.num_hours() % 24,
        minutes: remaining.num_minutes() % 60,
        seconds: remaining.num_seconds() % 60,
    }
}

fn parse_race_date(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    #[test]
    fn test_countdown_future() {
        let countdown = countdown_until("2024-09-04T14:00:00", at("2024-09-01T12:30:15"));
        assert_eq!(
            countdown,
            Countdown {
                days: 3,
                hours: 1,
                minutes: 29,
                seconds: 45
            }
        );
    }

    #[test]
    fn test_countdown_past_is_zero() {
        let countdown = countdown_until("2024-09-04T14:00:00", at("2024-09-05T00:00:00"));
        assert_eq!(countdown, Countdown::zero());
    }

    #[test]
    fn test_countdown_exact_start_is_zero() {
        let countdown = countdown_until("2024-09-04T14:00:00", at("2024-09-04T14:00:00"));
        assert_eq!(countdown, Countdown::zero());
    }

    #[test]
    fn test_countdown_unparseable_is_zero() {
        let countdown = countdown_until("4 de septiembre", at("2024-09-01T00:00:00"));
        assert_eq!(countdown, Countdown::zero());
    }

    #[test]
    fn test_countdown_accepts_space_separator() {
        let countdown = countdown_until("2024-09-04 14:00:00", at("2024-09-04T13:59:00"));
        assert_eq!(
            countdown,
            Countdown {
                days: 0,
                hours: 0,
                minutes: 1,
                seconds: 0
            }
        );
    }
}
