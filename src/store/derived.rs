//! Derived site content
//!
//! Recomputes the last-race and next-race summary fields of `SiteContent`
//! from the race list. Runs synchronously after every drivers/races change
//! so the public pages always have a fresh fallback projection to read when
//! no live race matches their direct query.

use crate::store::types::{Race, RaceStatus, SiteContent};

/// Project race results into the site content record
///
/// - The last race in list order with status `completed` overwrites the
///   last-race winner/time/circuit fields, but only when it carries both a
///   winner and a fastest lap.
/// - The first race with status `next` overwrites the next-race
///   name/circuit fields.
///
/// When neither query matches, the previous content values are left
/// untouched rather than cleared. Returns whether anything changed so the
/// caller can skip persisting unchanged content.
pub fn apply_derived_content(races: &[Race], content: &mut SiteContent) -> bool {
    let mut changed = false;

    if let Some(last) = races
        .iter()
        .filter(|r| r.status == RaceStatus::Completed)
        .last()
    {
        if let (Some(winner), Some(fastest_lap)) = (&last.winner, &last.fastest_lap) {
            if content.last_race_winner != *winner
                || content.last_race_time != *fastest_lap
                || content.last_race_circuit != last.circuit
            {
                content.last_race_winner = winner.clone();
                content.last_race_time = fastest_lap.clone();
                content.last_race_circuit = last.circuit.clone();
                changed = true;
            }
        }
    }

    if let Some(next) = races.iter().find(|r| r.status == RaceStatus::Next) {
        if content.next_race_name != next.name || content.next_race_circuit != next.circuit {
            content.next_race_name = next.name.clone();
            content.next_race_circuit = next.circuit.clone();
            changed = true;
        }
    }

    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed(id: u64, circuit: &str, winner: &str, lap: &str) -> Race {
        Race::new(id, "d", "t", "race", circuit, "country", RaceStatus::Completed)
            .result(winner, lap)
    }

    #[test]
    fn test_projects_last_completed_and_next() {
        let races = vec![
            completed(1, "C1", "A", "1:20.000"),
            Race::new(2, "d", "t", "R2", "C2", "country", RaceStatus::Next),
        ];

        let mut content = SiteContent::default();
        let changed = apply_derived_content(&races, &mut content);

        assert!(changed);
        assert_eq!(content.last_race_winner, "A");
        assert_eq!(content.last_race_time, "1:20.000");
        assert_eq!(content.last_race_circuit, "C1");
        assert_eq!(content.next_race_name, "R2");
        assert_eq!(content.next_race_circuit, "C2");
    }

    #[test]
    fn test_last_completed_in_list_order_wins() {
        let races = vec![
            completed(1, "C1", "A", "1:20.000"),
            completed(2, "C2", "B", "1:21.000"),
            Race::new(3, "d", "t", "R3", "C3", "country", RaceStatus::Upcoming),
        ];

        let mut content = SiteContent::default();
        apply_derived_content(&races, &mut content);

        assert_eq!(content.last_race_winner, "B");
        assert_eq!(content.last_race_circuit, "C2");
    }

    #[test]
    fn test_completed_without_result_leaves_previous_values() {
        // The last completed race has no winner/fastest lap: the previous
        // content stays, even though an earlier completed race has both.
        let races = vec![
            completed(1, "C1", "A", "1:20.000"),
            Race::new(2, "d", "t", "R2", "C2", "country", RaceStatus::Completed),
        ];

        let mut content = SiteContent::default();
        let before = content.clone();
        let changed = apply_derived_content(&races, &mut content);

        assert!(!changed);
        assert_eq!(content.last_race_winner, before.last_race_winner);
        assert_eq!(content.last_race_circuit, before.last_race_circuit);
    }

    #[test]
    fn test_no_matching_races_is_untouched() {
        let races = vec![Race::new(
            1,
            "d",
            "t",
            "R1",
            "C1",
            "country",
            RaceStatus::Upcoming,
        )];

        let mut content = SiteContent::default();
        let before = content.clone();
        let changed = apply_derived_content(&races, &mut content);

        assert!(!changed);
        assert_eq!(content, before);
    }

    #[test]
    fn test_idempotent() {
        let races = vec![
            completed(1, "C1", "A", "1:20.000"),
            Race::new(2, "d", "t", "R2", "C2", "country", RaceStatus::Next),
        ];

        let mut content = SiteContent::default();
        assert!(apply_derived_content(&races, &mut content));
        assert!(!apply_derived_content(&races, &mut content));
    }

    #[test]
    fn test_next_race_date_not_overwritten() {
        // Only name and circuit are projected for the next race; the
        // countdown date stays admin-controlled.
        let races = vec![Race::new(
            1, "d", "t", "R1", "C1", "country", RaceStatus::Next,
        )];

        let mut content = SiteContent::default();
        let date_before = content.next_race_date.clone();
        apply_derived_content(&races, &mut content);

        assert_eq!(content.next_race_date, date_before);
    }
}
