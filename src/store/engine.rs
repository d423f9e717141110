//! The tournament store
//!
//! One shared mutable document holding the three collections (drivers,
//! races, site content) behind an async RwLock, with an explicit mutation
//! API instead of ambient globals. Every mutation:
//!
//! 1. applies the change in memory,
//! 2. re-serializes the affected collection to the keystore (best-effort),
//! 3. re-runs the derived-content rule and persists content when it moved,
//! 4. broadcasts a [`StoreEvent`] to subscribers.
//!
//! Mutations are atomic from the caller's perspective: the write lock is
//! held for the whole sequence, so no interleaving is observable.

use crate::store::derived::apply_derived_content;
use crate::store::keystore::{Keystore, KEY_CONTENT, KEY_DRIVERS, KEY_RACES};
use crate::store::types::{
    default_drivers, default_races, ContentPatch, Driver, DriverPatch, NewDriver, NewRace, Race,
    RacePatch, RaceStatus, SiteContent,
};
use chrono::Utc;
use tokio::sync::{broadcast, RwLock};
use uuid::Uuid;

/// Notification that part of the store changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    DriversChanged,
    RacesChanged,
    ContentChanged,
}

/// Capacity of the store's broadcast channel
const EVENT_CAPACITY: usize = 64;

/// In-memory image of the three collections
struct StoreState {
    drivers: Vec<Driver>,
    races: Vec<Race>,
    content: SiteContent,
}

/// The shared tournament data store
pub struct TournamentStore {
    keystore: Keystore,
    state: RwLock<StoreState>,
    events_tx: broadcast::Sender<StoreEvent>,
}

impl TournamentStore {
    /// Open the store, hydrating each collection from the keystore
    ///
    /// Each key hydrates independently: a missing or corrupt blob falls
    /// back to that collection's built-in seed data without blocking the
    /// others. The derived-content rule runs once after hydration.
    pub fn open(keystore: Keystore) -> Self {
        let drivers: Vec<Driver> = keystore.load(KEY_DRIVERS).unwrap_or_else(default_drivers);
        let races: Vec<Race> = keystore.load(KEY_RACES).unwrap_or_else(default_races);
        let mut content: SiteContent = keystore.load(KEY_CONTENT).unwrap_or_default();

        if apply_derived_content(&races, &mut content) {
            keystore.save(KEY_CONTENT, &content);
        }

        tracing::info!(
            drivers = drivers.len(),
            races = races.len(),
            "Tournament store hydrated"
        );

        let (events_tx, _) = broadcast::channel(EVENT_CAPACITY);

        Self {
            keystore,
            state: RwLock::new(StoreState {
                drivers,
                races,
                content,
            }),
            events_tx,
        }
    }

    /// Subscribe to store change notifications
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events_tx.subscribe()
    }

    // ---- read accessors ----

    /// Snapshot of the driver list
    pub async fn drivers(&self) -> Vec<Driver> {
        self.state.read().await.drivers.clone()
    }

    /// Snapshot of the race list
    pub async fn races(&self) -> Vec<Race> {
        self.state.read().await.races.clone()
    }

    /// Snapshot of the site content record
    pub async fn content(&self) -> SiteContent {
        self.state.read().await.content.clone()
    }

    // ---- driver mutations ----

    /// Wholesale replace the driver list
    pub async fn replace_drivers(&self, drivers: Vec<Driver>) {
        let mut state = self.state.write().await;
        state.drivers = drivers;
        self.after_drivers_change(&mut state);
    }

    /// Append a driver with a newly assigned id, returning the id
    pub async fn add_driver(&self, driver: NewDriver) -> u64 {
        let id = next_entity_id();
        let mut state = self.state.write().await;
        state.drivers.push(driver.into_driver(id));
        self.after_drivers_change(&mut state);
        id
    }

    /// Shallow-merge a patch into the driver with this id
    ///
    /// Returns whether the id was found; an unknown id is a no-op.
    pub async fn update_driver(&self, id: u64, patch: DriverPatch) -> bool {
        let mut state = self.state.write().await;
        let Some(driver) = state.drivers.iter_mut().find(|d| d.id == id) else {
            return false;
        };
        patch.apply(driver);
        self.after_drivers_change(&mut state);
        true
    }

    /// Remove the driver with this id; unknown id is a no-op
    pub async fn delete_driver(&self, id: u64) -> bool {
        let mut state = self.state.write().await;
        let before = state.drivers.len();
        state.drivers.retain(|d| d.id != id);
        if state.drivers.len() == before {
            return false;
        }
        self.after_drivers_change(&mut state);
        true
    }

    /// Re-sort drivers by points descending and reassign 1-based positions
    ///
    /// The sort is stable, so ties keep their pre-sort relative order, and
    /// the whole operation is idempotent.
    pub async fn recalculate_positions(&self) {
        let mut state = self.state.write().await;
        state.drivers.sort_by(|a, b| b.points.cmp(&a.points));
        for (index, driver) in state.drivers.iter_mut().enumerate() {
            driver.position = index as u32 + 1;
        }
        self.after_drivers_change(&mut state);
    }

    // ---- race mutations ----

    /// Wholesale replace the race list
    ///
    /// When the list carries several `next` races, the first in list order
    /// keeps the status and the rest are demoted to `upcoming`.
    pub async fn replace_races(&self, races: Vec<Race>) {
        let mut state = self.state.write().await;
        state.races = races;
        let keep = state
            .races
            .iter()
            .find(|r| r.status == RaceStatus::Next)
            .map(|r| r.id);
        enforce_single_next(&mut state.races, keep);
        self.after_races_change(&mut state);
    }

    /// Append a race with a newly assigned id, returning the id
    pub async fn add_race(&self, race: NewRace) -> u64 {
        let id = next_entity_id();
        let mut state = self.state.write().await;
        let race = race.into_race(id);
        let added_next = race.status == RaceStatus::Next;
        state.races.push(race);
        if added_next {
            enforce_single_next(&mut state.races, Some(id));
        }
        self.after_races_change(&mut state);
        id
    }

    /// Shallow-merge a patch into the race with this id
    ///
    /// A race written as `next` demotes every other `next` race to
    /// `upcoming`, keeping the calendar's single on-deck slot. Returns
    /// whether the id was found; an unknown id is a no-op.
    pub async fn update_race(&self, id: u64, patch: RacePatch) -> bool {
        let mut state = self.state.write().await;
        let Some(race) = state.races.iter_mut().find(|r| r.id == id) else {
            return false;
        };
        patch.apply(race);
        if race.status == RaceStatus::Next {
            enforce_single_next(&mut state.races, Some(id));
        }
        self.after_races_change(&mut state);
        true
    }

    /// Remove the race with this id; unknown id is a no-op
    pub async fn delete_race(&self, id: u64) -> bool {
        let mut state = self.state.write().await;
        let before = state.races.len();
        state.races.retain(|r| r.id != id);
        if state.races.len() == before {
            return false;
        }
        self.after_races_change(&mut state);
        true
    }

    // ---- content mutations ----

    /// Shallow-merge the given fields into the site content record
    pub async fn update_content(&self, patch: ContentPatch) {
        let mut state = self.state.write().await;
        patch.apply(&mut state.content);
        self.keystore.save(KEY_CONTENT, &state.content);
        self.broadcast(StoreEvent::ContentChanged);
    }

    // ---- internals ----

    /// Persist drivers, refresh derived content, notify
    fn after_drivers_change(&self, state: &mut StoreState) {
        self.keystore.save(KEY_DRIVERS, &state.drivers);
        self.refresh_derived(state);
        self.broadcast(StoreEvent::DriversChanged);
    }

    /// Persist races, refresh derived content, notify
    fn after_races_change(&self, state: &mut StoreState) {
        self.keystore.save(KEY_RACES, &state.races);
        self.refresh_derived(state);
        self.broadcast(StoreEvent::RacesChanged);
    }

    fn refresh_derived(&self, state: &mut StoreState) {
        if apply_derived_content(&state.races, &mut state.content) {
            self.keystore.save(KEY_CONTENT, &state.content);
            self.broadcast(StoreEvent::ContentChanged);
        }
    }

    fn broadcast(&self, event: StoreEvent) {
        // Send only fails when nobody is subscribed
        let _ = self.events_tx.send(event);
    }
}

/// Demote every `next` race except `keep` to `upcoming`
fn enforce_single_next(races: &mut [Race], keep: Option<u64>) {
    for race in races.iter_mut() {
        if race.status == RaceStatus::Next && Some(race.id) != keep {
            race.status = RaceStatus::Upcoming;
        }
    }
}

/// Assign a new entity id: epoch millis plus a random suffix
///
/// Collisions are treated as negligible at this tool's scale (a handful of
/// admin-entered rows).
fn next_entity_id() -> u64 {
    let millis = Utc::now().timestamp_millis() as u64;
    let salt = (Uuid::new_v4().as_u128() % 1_000_000) as u64;
    millis * 1_000_000 + salt
}
