//! Admin form validation
//!
//! Synchronous checks run at the API boundary before any store mutation is
//! issued. A violation blocks the save and surfaces a message; nothing is
//! partially applied, so no rollback logic exists anywhere.

use crate::store::types::{DriverPatch, NewDriver, NewRace, RacePatch};
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// A rejected admin form field
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("age must be between {MIN_AGE} and {MAX_AGE}, got {0}")]
    AgeOutOfRange(u32),

    #[error("lap time must match M:SS.mmm, got '{0}'")]
    LapTimeFormat(String),
}

/// Result type alias for validation checks
pub type ValidationResult = Result<(), ValidationError>;

/// Minimum admitted driver age
pub const MIN_AGE: u32 = 18;
/// Maximum admitted driver age
pub const MAX_AGE: u32 = 65;

fn lap_time_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // M:SS.mmm or MM:SS.mmm, seconds capped at 59
    RE.get_or_init(|| Regex::new(r"^\d{1,2}:[0-5]\d\.\d{3}$").expect("lap-time pattern is valid"))
}

/// Check a lap time against the fixed `M:SS.mmm` pattern
pub fn validate_lap_time(value: &str) -> ValidationResult {
    if lap_time_re().is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::LapTimeFormat(value.to_string()))
    }
}

fn require(field: &'static str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(())
    }
}

fn validate_age(age: u32) -> ValidationResult {
    if (MIN_AGE..=MAX_AGE).contains(&age) {
        Ok(())
    } else {
        Err(ValidationError::AgeOutOfRange(age))
    }
}

/// Validate a driver creation form
pub fn validate_new_driver(driver: &NewDriver) -> ValidationResult {
    require("name", &driver.name)?;
    validate_age(driver.age)?;
    validate_lap_time(&driver.time)
}

/// Validate a driver edit form; only present fields are checked
pub fn validate_driver_patch(patch: &DriverPatch) -> ValidationResult {
    if let Some(name) = &patch.name {
        require("name", name)?;
    }
    if let Some(age) = patch.age {
        validate_age(age)?;
    }
    if let Some(time) = &patch.time {
        validate_lap_time(time)?;
    }
    Ok(())
}

/// Validate a race creation form
pub fn validate_new_race(race: &NewRace) -> ValidationResult {
    require("name", &race.name)?;
    require("circuit", &race.circuit)?;
    require("country", &race.country)?;
    require("date", &race.date)?;
    if let Some(lap) = &race.fastest_lap {
        validate_lap_time(lap)?;
    }
    Ok(())
}

/// Validate a race edit form; only present fields are checked
pub fn validate_race_patch(patch: &RacePatch) -> ValidationResult {
    if let Some(name) = &patch.name {
        require("name", name)?;
    }
    if let Some(circuit) = &patch.circuit {
        require("circuit", circuit)?;
    }
    if let Some(country) = &patch.country {
        require("country", country)?;
    }
    if let Some(date) = &patch.date {
        require("date", date)?;
    }
    if let Some(lap) = &patch.fastest_lap {
        validate_lap_time(lap)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lap_time_accepts_valid_formats() {
        assert!(validate_lap_time("1:24.582").is_ok());
        assert!(validate_lap_time("12:03.001").is_ok());
    }

    #[test]
    fn test_lap_time_rejects_invalid_formats() {
        assert!(validate_lap_time("1:24.58").is_err());
        assert!(validate_lap_time("84.582").is_err());
        assert!(validate_lap_time("abc").is_err());
        assert!(validate_lap_time("1:64.582").is_err());
        assert!(validate_lap_time("").is_err());
    }

    fn sample_driver() -> NewDriver {
        NewDriver {
            name: "Test Driver".to_string(),
            age: 30,
            time: "1:30.000".to_string(),
            points: 0,
            position: 0,
            is_new_record: None,
            phone: None,
            profile_image: None,
        }
    }

    #[test]
    fn test_new_driver_checks() {
        assert!(validate_new_driver(&sample_driver()).is_ok());

        let mut no_name = sample_driver();
        no_name.name = "  ".to_string();
        assert_eq!(
            validate_new_driver(&no_name),
            Err(ValidationError::Required("name"))
        );

        let mut too_young = sample_driver();
        too_young.age = 17;
        assert_eq!(
            validate_new_driver(&too_young),
            Err(ValidationError::AgeOutOfRange(17))
        );

        let mut too_old = sample_driver();
        too_old.age = 66;
        assert!(validate_new_driver(&too_old).is_err());

        let mut bad_lap = sample_driver();
        bad_lap.time = "84.582".to_string();
        assert!(matches!(
            validate_new_driver(&bad_lap),
            Err(ValidationError::LapTimeFormat(_))
        ));
    }

    #[test]
    fn test_age_bounds_inclusive() {
        let mut driver = sample_driver();
        driver.age = 18;
        assert!(validate_new_driver(&driver).is_ok());
        driver.age = 65;
        assert!(validate_new_driver(&driver).is_ok());
    }

    #[test]
    fn test_patch_checks_only_present_fields() {
        // An empty patch is always fine
        assert!(validate_driver_patch(&DriverPatch::default()).is_ok());

        let bad_age = DriverPatch {
            age: Some(90),
            ..Default::default()
        };
        assert!(validate_driver_patch(&bad_age).is_err());

        let good = DriverPatch {
            time: Some("1:19.999".to_string()),
            ..Default::default()
        };
        assert!(validate_driver_patch(&good).is_ok());
    }

    #[test]
    fn test_new_race_checks() {
        let race = NewRace {
            date: "8 de septiembre".to_string(),
            time: "14:00".to_string(),
            name: "Carrera 5".to_string(),
            circuit: "Suzuka".to_string(),
            country: "Japón".to_string(),
            status: crate::store::types::RaceStatus::Upcoming,
            winner: None,
            fastest_lap: None,
            image: "/placeholder.svg".to_string(),
        };
        assert!(validate_new_race(&race).is_ok());

        let mut no_circuit = race.clone();
        no_circuit.circuit = String::new();
        assert_eq!(
            validate_new_race(&no_circuit),
            Err(ValidationError::Required("circuit"))
        );

        let mut bad_lap = race;
        bad_lap.fastest_lap = Some("fast".to_string());
        assert!(validate_new_race(&bad_lap).is_err());
    }

    #[test]
    fn test_race_patch_checks() {
        let ok = RacePatch {
            winner: Some("Someone".to_string()),
            fastest_lap: Some("1:21.000".to_string()),
            ..Default::default()
        };
        assert!(validate_race_patch(&ok).is_ok());

        let bad = RacePatch {
            fastest_lap: Some("1:21.0".to_string()),
            ..Default::default()
        };
        assert!(validate_race_patch(&bad).is_err());
    }
}
