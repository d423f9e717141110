//! Core data types for the tournament store
//!
//! This module defines the three persisted structures:
//! - `Driver`: a tournament participant with a ranked result
//! - `Race`: a scheduled or completed event in the calendar
//! - `SiteContent`: freeform display copy and flags for the public pages
//!
//! Field names serialize in camelCase so the persisted JSON blobs match the
//! format the site has always used.

use serde::{Deserialize, Serialize};

/// A tournament participant with a ranked result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    /// Unique identifier
    pub id: u64,
    /// Display name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Best lap time, formatted `M:SS.mmm`
    pub time: String,
    /// Championship points
    pub points: u32,
    /// 1-based rank in the leaderboard
    pub position: u32,
    /// Set when the best lap is a new track record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_new_record: Option<bool>,
    /// Contact phone, only exposed on admin views
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Profile image URL or data URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

/// Lifecycle state of a race in the calendar
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RaceStatus {
    /// Already run; may carry a winner and fastest lap
    Completed,
    /// Scheduled for later in the tournament
    Upcoming,
    /// The one race currently on deck
    Next,
}

impl std::fmt::Display for RaceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RaceStatus::Completed => write!(f, "completed"),
            RaceStatus::Upcoming => write!(f, "upcoming"),
            RaceStatus::Next => write!(f, "next"),
        }
    }
}

/// A scheduled or completed event in the tournament calendar
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    /// Unique identifier
    pub id: u64,
    /// Display date (freeform, e.g. "4 de septiembre")
    pub date: String,
    /// Display start time (e.g. "14:00")
    pub time: String,
    /// Race name
    pub name: String,
    /// Circuit name
    pub circuit: String,
    /// Host country
    pub country: String,
    /// Lifecycle state
    pub status: RaceStatus,
    /// Winner name, once completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
    /// Fastest lap of the race, formatted `M:SS.mmm`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fastest_lap: Option<String>,
    /// Promo image URL or data URI
    pub image: String,
}

/// Display copy and flags for the public pages
///
/// Acts as a fallback/override layer: the derived-content rule keeps the
/// last-race and next-race fields in sync with the race list, and the
/// previous values survive when no race is authoritative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub tournament_dates: String,
    pub tournament_description: String,
    pub last_race_winner: String,
    pub last_race_time: String,
    pub last_race_circuit: String,
    pub show_winner_animation: bool,
    /// Next race start, ISO 8601 local datetime, drives the countdown
    pub next_race_date: String,
    pub next_race_name: String,
    pub next_race_circuit: String,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            hero_title: "TORNEO F1".to_string(),
            hero_subtitle: "PS5 CHAMPIONSHIP".to_string(),
            tournament_dates: "4 al 7 de septiembre".to_string(),
            tournament_description: "4 carreras épicas".to_string(),
            last_race_winner: "Carlos Sainz".to_string(),
            last_race_time: "1:24.582".to_string(),
            last_race_circuit: "Monaco".to_string(),
            show_winner_animation: true,
            next_race_date: "2024-09-04T14:00:00".to_string(),
            next_race_name: "Carrera 1".to_string(),
            next_race_circuit: "Silverstone".to_string(),
        }
    }
}

impl Driver {
    /// Create a driver with the required fields; optionals via builders
    pub fn new(
        id: u64,
        name: impl Into<String>,
        age: u32,
        time: impl Into<String>,
        points: u32,
        position: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            time: time.into(),
            points,
            position,
            is_new_record: None,
            phone: None,
            profile_image: None,
        }
    }

    /// Builder method: mark the best lap as a new record
    pub fn new_record(mut self) -> Self {
        self.is_new_record = Some(true);
        self
    }

    /// Builder method: set the admin-only phone number
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

impl Race {
    /// Create a race with the required fields
    pub fn new(
        id: u64,
        date: impl Into<String>,
        time: impl Into<String>,
        name: impl Into<String>,
        circuit: impl Into<String>,
        country: impl Into<String>,
        status: RaceStatus,
    ) -> Self {
        Self {
            id,
            date: date.into(),
            time: time.into(),
            name: name.into(),
            circuit: circuit.into(),
            country: country.into(),
            status,
            winner: None,
            fastest_lap: None,
            image: "/placeholder.svg".to_string(),
        }
    }

    /// Builder method: record the result of a completed race
    pub fn result(mut self, winner: impl Into<String>, fastest_lap: impl Into<String>) -> Self {
        self.winner = Some(winner.into());
        self.fastest_lap = Some(fastest_lap.into());
        self
    }
}

/// Fields for creating a driver; the store assigns the id
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDriver {
    pub name: String,
    pub age: u32,
    pub time: String,
    pub points: u32,
    #[serde(default)]
    pub position: u32,
    #[serde(default)]
    pub is_new_record: Option<bool>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

impl NewDriver {
    /// Materialize a driver with a store-assigned id
    pub fn into_driver(self, id: u64) -> Driver {
        Driver {
            id,
            name: self.name,
            age: self.age,
            time: self.time,
            points: self.points,
            position: self.position,
            is_new_record: self.is_new_record,
            phone: self.phone,
            profile_image: self.profile_image,
        }
    }
}

/// Fields for creating a race; the store assigns the id
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRace {
    pub date: String,
    pub time: String,
    pub name: String,
    pub circuit: String,
    pub country: String,
    pub status: RaceStatus,
    #[serde(default)]
    pub winner: Option<String>,
    #[serde(default)]
    pub fastest_lap: Option<String>,
    #[serde(default = "default_race_image")]
    pub image: String,
}

fn default_race_image() -> String {
    "/placeholder.svg".to_string()
}

impl NewRace {
    /// Materialize a race with a store-assigned id
    pub fn into_race(self, id: u64) -> Race {
        Race {
            id,
            date: self.date,
            time: self.time,
            name: self.name,
            circuit: self.circuit,
            country: self.country,
            status: self.status,
            winner: self.winner,
            fastest_lap: self.fastest_lap,
            image: self.image,
        }
    }
}

/// Shallow-merge patch for a driver: present fields overwrite
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverPatch {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub time: Option<String>,
    pub points: Option<u32>,
    pub position: Option<u32>,
    pub is_new_record: Option<bool>,
    pub phone: Option<String>,
    pub profile_image: Option<String>,
}

impl DriverPatch {
    /// Apply the patch to a driver in place
    pub fn apply(&self, driver: &mut Driver) {
        if let Some(name) = &self.name {
            driver.name = name.clone();
        }
        if let Some(age) = self.age {
            driver.age = age;
        }
        if let Some(time) = &self.time {
            driver.time = time.clone();
        }
        if let Some(points) = self.points {
            driver.points = points;
        }
        if let Some(position) = self.position {
            driver.position = position;
        }
        if self.is_new_record.is_some() {
            driver.is_new_record = self.is_new_record;
        }
        if self.phone.is_some() {
            driver.phone = self.phone.clone();
        }
        if self.profile_image.is_some() {
            driver.profile_image = self.profile_image.clone();
        }
    }
}

/// Shallow-merge patch for a race: present fields overwrite
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RacePatch {
    pub date: Option<String>,
    pub time: Option<String>,
    pub name: Option<String>,
    pub circuit: Option<String>,
    pub country: Option<String>,
    pub status: Option<RaceStatus>,
    pub winner: Option<String>,
    pub fastest_lap: Option<String>,
    pub image: Option<String>,
}

impl RacePatch {
    /// Apply the patch to a race in place
    pub fn apply(&self, race: &mut Race) {
        if let Some(date) = &self.date {
            race.date = date.clone();
        }
        if let Some(time) = &self.time {
            race.time = time.clone();
        }
        if let Some(name) = &self.name {
            race.name = name.clone();
        }
        if let Some(circuit) = &self.circuit {
            race.circuit = circuit.clone();
        }
        if let Some(country) = &self.country {
            race.country = country.clone();
        }
        if let Some(status) = self.status {
            race.status = status;
        }
        if self.winner.is_some() {
            race.winner = self.winner.clone();
        }
        if self.fastest_lap.is_some() {
            race.fastest_lap = self.fastest_lap.clone();
        }
        if let Some(image) = &self.image {
            race.image = image.clone();
        }
    }
}

/// Shallow-merge patch for the site content record
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPatch {
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub tournament_dates: Option<String>,
    pub tournament_description: Option<String>,
    pub last_race_winner: Option<String>,
    pub last_race_time: Option<String>,
    pub last_race_circuit: Option<String>,
    pub show_winner_animation: Option<bool>,
    pub next_race_date: Option<String>,
    pub next_race_name: Option<String>,
    pub next_race_circuit: Option<String>,
}

impl ContentPatch {
    /// Apply the patch to the content record in place
    pub fn apply(&self, content: &mut SiteContent) {
        if let Some(v) = &self.hero_title {
            content.hero_title = v.clone();
        }
        if let Some(v) = &self.hero_subtitle {
            content.hero_subtitle = v.clone();
        }
        if let Some(v) = &self.tournament_dates {
            content.tournament_dates = v.clone();
        }
        if let Some(v) = &self.tournament_description {
            content.tournament_description = v.clone();
        }
        if let Some(v) = &self.last_race_winner {
            content.last_race_winner = v.clone();
        }
        if let Some(v) = &self.last_race_time {
            content.last_race_time = v.clone();
        }
        if let Some(v) = &self.last_race_circuit {
            content.last_race_circuit = v.clone();
        }
        if let Some(v) = self.show_winner_animation {
            content.show_winner_animation = v;
        }
        if let Some(v) = &self.next_race_date {
            content.next_race_date = v.clone();
        }
        if let Some(v) = &self.next_race_name {
            content.next_race_name = v.clone();
        }
        if let Some(v) = &self.next_race_circuit {
            content.next_race_circuit = v.clone();
        }
    }
}

/// Built-in driver seed data, used when no persisted drivers exist
pub fn default_drivers() -> Vec<Driver> {
    vec![
        Driver::new(1, "Carlos Sainz", 29, "1:24.582", 95, 1)
            .new_record()
            .phone("+34 600 123 456"),
        Driver::new(2, "Max Verstappen", 26, "1:24.891", 88, 2).phone("+31 612 345 678"),
        Driver::new(3, "Lewis Hamilton", 39, "1:25.234", 82, 3).phone("+44 7700 900 123"),
        Driver::new(4, "Charles Leclerc", 26, "1:25.567", 75, 4).phone("+377 06 12 34 56"),
        Driver::new(5, "Lando Norris", 24, "1:25.789", 68, 5).phone("+44 7911 123 456"),
        Driver::new(6, "George Russell", 26, "1:26.123", 61, 6).phone("+44 7700 900 789"),
    ]
}

/// Built-in race seed data, used when no persisted races exist
pub fn default_races() -> Vec<Race> {
    vec![
        Race::new(
            1,
            "4 de septiembre",
            "14:00",
            "Carrera 1",
            "Silverstone",
            "Reino Unido",
            RaceStatus::Completed,
        )
        .result("Carlos Sainz", "1:24.582"),
        Race::new(
            2,
            "5 de septiembre",
            "14:00",
            "Carrera 2",
            "Monaco",
            "Mónaco",
            RaceStatus::Next,
        ),
        Race::new(
            3,
            "6 de septiembre",
            "14:00",
            "Carrera 3",
            "Spa-Francorchamps",
            "Bélgica",
            RaceStatus::Upcoming,
        ),
        Race::new(
            4,
            "7 de septiembre",
            "18:00",
            "Carrera Final",
            "Monza",
            "Italia",
            RaceStatus::Upcoming,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_roundtrip() {
        for driver in default_drivers() {
            let json = serde_json::to_string(&driver).unwrap();
            let back: Driver = serde_json::from_str(&json).unwrap();
            assert_eq!(driver, back);
        }
    }

    #[test]
    fn test_race_roundtrip() {
        for race in default_races() {
            let json = serde_json::to_string(&race).unwrap();
            let back: Race = serde_json::from_str(&json).unwrap();
            assert_eq!(race, back);
        }
    }

    #[test]
    fn test_content_roundtrip() {
        let content = SiteContent::default();
        let json = serde_json::to_string(&content).unwrap();
        let back: SiteContent = serde_json::from_str(&json).unwrap();
        assert_eq!(content, back);
    }

    #[test]
    fn test_camel_case_field_names() {
        let json = serde_json::to_value(SiteContent::default()).unwrap();
        assert!(json.get("heroTitle").is_some());
        assert!(json.get("lastRaceWinner").is_some());
        assert!(json.get("nextRaceCircuit").is_some());

        let race = serde_json::to_value(&default_races()[0]).unwrap();
        assert_eq!(race["status"], "completed");
        assert_eq!(race["fastestLap"], "1:24.582");
    }

    #[test]
    fn test_optional_fields_omitted() {
        let driver = Driver::new(7, "Test", 30, "1:30.000", 0, 7);
        let json = serde_json::to_value(&driver).unwrap();
        assert!(json.get("phone").is_none());
        assert!(json.get("isNewRecord").is_none());
        assert!(json.get("profileImage").is_none());
    }

    #[test]
    fn test_driver_patch_is_shallow_merge() {
        let mut driver = Driver::new(1, "Old", 30, "1:30.000", 10, 3).phone("+1 555");
        let patch = DriverPatch {
            name: Some("New".to_string()),
            points: Some(20),
            ..Default::default()
        };
        patch.apply(&mut driver);

        assert_eq!(driver.name, "New");
        assert_eq!(driver.points, 20);
        // Untouched fields survive, including optionals
        assert_eq!(driver.age, 30);
        assert_eq!(driver.position, 3);
        assert_eq!(driver.phone.as_deref(), Some("+1 555"));
    }

    #[test]
    fn test_race_patch_sets_status() {
        let mut race = default_races()[2].clone();
        assert_eq!(race.status, RaceStatus::Upcoming);

        let patch = RacePatch {
            status: Some(RaceStatus::Next),
            ..Default::default()
        };
        patch.apply(&mut race);
        assert_eq!(race.status, RaceStatus::Next);
        assert_eq!(race.circuit, "Spa-Francorchamps");
    }

    #[test]
    fn test_content_patch_partial_deserializes() {
        let patch: ContentPatch =
            serde_json::from_str(r#"{"heroTitle": "NEW TITLE", "showWinnerAnimation": false}"#)
                .unwrap();

        let mut content = SiteContent::default();
        patch.apply(&mut content);

        assert_eq!(content.hero_title, "NEW TITLE");
        assert!(!content.show_winner_animation);
        assert_eq!(content.hero_subtitle, "PS5 CHAMPIONSHIP");
    }

    #[test]
    fn test_seed_positions_match_points_order() {
        let drivers = default_drivers();
        for pair in drivers.windows(2) {
            assert!(pair[0].points >= pair[1].points);
            assert_eq!(pair[0].position + 1, pair[1].position);
        }
    }

    #[test]
    fn test_seed_has_single_next_race() {
        let next = default_races()
            .iter()
            .filter(|r| r.status == RaceStatus::Next)
            .count();
        assert_eq!(next, 1);
    }
}
