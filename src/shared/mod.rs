//! Shared resources, events, states, and data types for Seascore.
//!
//! This is the type contract. Every domain plugin imports from here.
//! No domain imports from any other domain directly.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

// ═══════════════════════════════════════════════════════════════════════
// SESSION PHASE — top-level state machine
// ═══════════════════════════════════════════════════════════════════════

/// Lifecycle of a fishing outing.
///
/// `Loading` populates the species catalog once at startup. A session only
/// enters `Active` from `Idle` via a `SessionStartEvent`, which guarantees a
/// fresh log and zeroed session scores. `Closing` is the window in which
/// report collaborators read the freshly-appended `SessionRecord`s; the core
/// returns to `Idle` on the next update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, States, Default)]
pub enum SessionPhase {
    #[default]
    Loading,
    Idle,
    Active,
    Closing,
}

// ═══════════════════════════════════════════════════════════════════════
// SPECIES CATALOG
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpeciesCategory {
    Shark,
    Ray,
    Flatfish,
    Eel,
    Roundfish,
    GurnardsAndOddities,
    Wrasse,
    Bream,
}

/// Renown band names, declared in ascending length order so that the derived
/// `Ord` matches band rank (Juvenile < Bronze < … < Legendary).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum TierName {
    Juvenile,
    Bronze,
    Silver,
    Gold,
    Diamond,
    Legendary,
}

impl TierName {
    pub const ALL: [TierName; 6] = [
        TierName::Juvenile,
        TierName::Bronze,
        TierName::Silver,
        TierName::Gold,
        TierName::Diamond,
        TierName::Legendary,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TierName::Juvenile => "Juvenile",
            TierName::Bronze => "Bronze",
            TierName::Silver => "Silver",
            TierName::Gold => "Gold",
            TierName::Diamond => "Diamond",
            TierName::Legendary => "Legendary",
        }
    }
}

/// One renown band in a species tier table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenownTier {
    pub name: TierName,
    /// Lower length bound of the band, in cm. First band of every table is 0.
    pub min_length_cm: f64,
    pub bonus_xp: u32,
    pub bonus_score_mult: f64,
}

/// Static per-species scoring coefficients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesDef {
    pub name: String,
    /// Weight estimate per cm of length, in lbs.
    pub weight_per_cm: f64,
    pub score_mult: f64,
    pub category: SpeciesCategory,
}

/// Immutable species catalog, populated once during `SessionPhase::Loading`.
///
/// Keyed by display name (unique), matching the catch-entry flow where the
/// UI offers species by name. `renown` tables are sorted ascending by
/// `min_length_cm` with the first band at 0 — `data::renown` constructs them
/// that way and the data tests enforce it.
#[derive(Resource, Debug, Clone, Default)]
pub struct SpeciesCatalog {
    pub species: HashMap<String, SpeciesDef>,
    pub renown: HashMap<String, Vec<RenownTier>>,
    pub legendary_names: HashMap<String, Vec<String>>,
}

impl SpeciesCatalog {
    pub fn lookup(&self, species: &str) -> Option<&SpeciesDef> {
        self.species.get(species)
    }

    pub fn tiers_for(&self, species: &str) -> Option<&[RenownTier]> {
        self.renown.get(species).map(|v| v.as_slice())
    }

    pub fn name_pool(&self, species: &str) -> Option<&[String]> {
        self.legendary_names.get(species).map(|v| v.as_slice())
    }
}

// ═══════════════════════════════════════════════════════════════════════
// CATCH INPUT & RESULT
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CatchMethod {
    Ledger,
    Float,
    Feathers,
    Lure,
}

impl CatchMethod {
    pub fn label(self) -> &'static str {
        match self {
            CatchMethod::Ledger => "Ledger",
            CatchMethod::Float => "Float",
            CatchMethod::Feathers => "Feathers",
            CatchMethod::Lure => "Lure",
        }
    }
}

/// Weather snapshot attached to a catch by the (external) weather
/// collaborator. Defaults are the explicit "unknown" sentinels used when the
/// lookup fails or times out. Scoring never depends on any of this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub temp_c: Option<f64>,
    pub description: String,
    pub wind_knots: Option<u32>,
    pub wind_dir: String,
}

impl Default for WeatherReport {
    fn default() -> Self {
        Self {
            temp_c: None,
            description: String::from("unknown"),
            wind_knots: None,
            wind_dir: String::new(),
        }
    }
}

/// Tide snapshot, same contract as [`WeatherReport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TideReport {
    pub height_m: Option<f64>,
    pub state: String,
    pub next_high: Option<String>,
    pub next_low: Option<String>,
}

impl Default for TideReport {
    fn default() -> Self {
        Self {
            height_m: None,
            state: String::from("N/A"),
            next_high: None,
            next_low: None,
        }
    }
}

/// Opaque geo/weather/tide bundle carried on each stored catch for display
/// and reports. Pass-through only: absence never affects score or XP.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatchConditions {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub weather: WeatherReport,
    pub tide: TideReport,
}

pub type AnglerId = u32;

/// A catch as submitted by the UI flow (angler, species, length, method).
///
/// Length and species are validated again by the scoring engine; timestamps
/// are caller-formatted display strings, opaque to the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatchEvent {
    pub angler_id: AnglerId,
    pub species: String,
    pub length_cm: f64,
    pub method: CatchMethod,
    pub notes: String,
    pub timestamp: String,
    pub conditions: CatchConditions,
}

/// Everything the scoring engine derives from one catch. Immutable once
/// produced; for fixed inputs and a fixed name draw the result is
/// deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchResult {
    /// length_cm × weight_per_cm, rounded to 2 decimals.
    pub weight_lbs: f64,
    /// weight_lbs × score_mult, pre-bonus.
    pub raw_points: f64,
    pub tier: RenownTier,
    pub xp_gain: u32,
    pub final_score: u32,
    /// Drawn from the species name pool when the Legendary band is reached.
    pub legendary_name: Option<String>,
}

// ═══════════════════════════════════════════════════════════════════════
// ANGLER PROFILES
// ═══════════════════════════════════════════════════════════════════════

/// Permanent record of a legendary catch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendaryEntry {
    pub species: String,
    pub length_cm: f64,
    pub name: String,
    pub timestamp: String,
}

/// One stored catch, as kept in the session log and in session history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchSnapshot {
    pub species: String,
    pub length_cm: f64,
    pub weight_lbs: f64,
    pub tier: TierName,
    pub legendary_name: Option<String>,
    pub method: CatchMethod,
    pub notes: String,
    pub timestamp: String,
    pub score: u32,
    pub conditions: CatchConditions,
}

/// Immutable once appended to `AnglerProfile::history`; one per angler per
/// closed session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub date: String,
    pub score: u32,
    pub duration_secs: u64,
    pub catches: Vec<CatchSnapshot>,
}

/// A registered angler. Persisted across sessions by the save layer.
///
/// `xp` is monotonically non-decreasing for the lifetime of the profile,
/// since undo reverts session score only, never XP or level. `session_score`
/// is `Some` only while a session is Active; closeout takes it into the
/// `SessionRecord` and leaves `None`.
///
/// The serde defaults make loading tolerant of rosters written before a
/// field existed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnglerProfile {
    pub id: AnglerId,
    pub name: String,
    pub age: u8,
    pub avatar: String,
    pub xp: u64,
    pub level: u32,
    pub badges: Vec<String>,
    pub legendary_log: Vec<LegendaryEntry>,
    pub history: Vec<SessionRecord>,
    pub total_fishing_time_secs: u64,
    pub session_score: Option<u32>,
}

/// Manual impl so a default profile sits at level 1, never 0.
impl Default for AnglerProfile {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            age: 0,
            avatar: String::new(),
            xp: 0,
            level: 1,
            badges: Vec::new(),
            legendary_log: Vec::new(),
            history: Vec::new(),
            total_fishing_time_secs: 0,
            session_score: None,
        }
    }
}

impl AnglerProfile {
    pub fn new(id: AnglerId, name: impl Into<String>, age: u8, avatar: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            avatar: avatar.into(),
            ..Default::default()
        }
    }

    /// Adds a badge unless already present (badges are a set).
    pub fn add_badge(&mut self, badge: impl Into<String>) {
        let badge = badge.into();
        if !self.badges.contains(&badge) {
            self.badges.push(badge);
        }
    }
}

/// All registered anglers. Loaded/saved by the save layer; mutated by catch
/// confirmation and session closeout only.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnglerRoster {
    pub anglers: Vec<AnglerProfile>,
}

impl AnglerRoster {
    pub fn get(&self, id: AnglerId) -> Option<&AnglerProfile> {
        self.anglers.iter().find(|p| p.id == id)
    }

    pub fn get_mut(&mut self, id: AnglerId) -> Option<&mut AnglerProfile> {
        self.anglers.iter_mut().find(|p| p.id == id)
    }

    /// Registers a new profile with the next free id and returns the id.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        age: u8,
        avatar: impl Into<String>,
    ) -> AnglerId {
        let id = self.anglers.iter().map(|p| p.id + 1).max().unwrap_or(0);
        self.anglers.push(AnglerProfile::new(id, name, age, avatar));
        id
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SESSION LOG
// ═══════════════════════════════════════════════════════════════════════

/// Leaderboard scoring mode, chosen per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RankingMode {
    #[default]
    HeaviestHaul,
    BiggestFish,
    MostFish,
    SharksOnly,
}

/// A confirmed catch in the session log.
///
/// `undone` marks conceptual removal: the entry stays in the log for audit
/// display but is excluded from rankings, summaries, and closeout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchRecord {
    /// Monotonically increasing within a session; used to attach
    /// late-arriving conditions to the right entry.
    pub seq: u64,
    pub angler_id: AnglerId,
    pub snapshot: CatchSnapshot,
    pub undone: bool,
}

/// Zero-score audit marker inserted by an undo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UndoRecord {
    /// Sequence number of the catch this marker reverts.
    pub seq: u64,
    pub angler_id: AnglerId,
    pub species: String,
    pub timestamp: String,
}

/// The session log is prepend-only during a session: an undo flags the
/// original entry and inserts a marker, it never physically deletes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LogEntry {
    Catch(CatchRecord),
    UndoMarker(UndoRecord),
}

/// Transient shared log of the current session, most-recent-first.
/// Exists only between session start and session end.
#[derive(Resource, Debug, Clone, Default)]
pub struct SessionLog {
    pub entries: Vec<LogEntry>,
    pub participants: Vec<AnglerId>,
    pub mode: RankingMode,
    next_seq: u64,
}

impl SessionLog {
    /// Prepends a confirmed catch and returns its sequence number.
    pub fn push_catch(&mut self, angler_id: AnglerId, snapshot: CatchSnapshot) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.insert(
            0,
            LogEntry::Catch(CatchRecord {
                seq,
                angler_id,
                snapshot,
                undone: false,
            }),
        );
        seq
    }

    /// Non-undone catches for one angler, in chronological (catch) order.
    pub fn catches_for(&self, angler_id: AnglerId) -> impl Iterator<Item = &CatchRecord> {
        self.entries.iter().rev().filter_map(move |e| match e {
            LogEntry::Catch(c) if c.angler_id == angler_id && !c.undone => Some(c),
            _ => None,
        })
    }

    /// All non-undone catches, in chronological order.
    pub fn active_catches(&self) -> impl Iterator<Item = &CatchRecord> {
        self.entries.iter().rev().filter_map(|e| match e {
            LogEntry::Catch(c) if !c.undone => Some(c),
            _ => None,
        })
    }

    /// Resets the log for a fresh session.
    pub fn reset(&mut self, participants: Vec<AnglerId>, mode: RankingMode) {
        self.entries.clear();
        self.participants = participants;
        self.mode = mode;
        self.next_seq = 0;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.participants.clear();
        self.next_seq = 0;
    }
}

/// Elapsed time of the current session, ticked while Active. Display only;
/// the closeout duration comes from the `SessionEndEvent`, whose clock the
/// host owns.
#[derive(Resource, Debug, Clone, Default)]
pub struct SessionClock {
    pub elapsed: std::time::Duration,
}

// ═══════════════════════════════════════════════════════════════════════
// ERRORS
// ═══════════════════════════════════════════════════════════════════════

/// Why a catch could not be scored.
///
/// `UnknownSpecies`/`InvalidLength` are input validation failures: the UI
/// prompts for correction and nothing is mutated. `MissingTierTable` and
/// `EmptyNamePool` are catalog integrity failures that must be surfaced to
/// the operator, never silently defaulted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    #[error("species \"{0}\" is not in the catalog")]
    UnknownSpecies(String),
    #[error("length {0} cm is not a positive finite number")]
    InvalidLength(f64),
    #[error("species \"{0}\" has no renown tier table")]
    MissingTierTable(String),
    #[error("species \"{0}\" has an empty legendary name pool")]
    EmptyNamePool(String),
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS — cross-domain communication
// ═══════════════════════════════════════════════════════════════════════

/// Sent by the UI to begin a session with the selected anglers and mode.
#[derive(Event, Debug, Clone)]
pub struct SessionStartEvent {
    pub participants: Vec<AnglerId>,
    pub mode: RankingMode,
}

/// Sent by the UI when the angler confirms the catch summary.
#[derive(Event, Debug, Clone)]
pub struct CatchConfirmedEvent {
    pub details: CatchEvent,
}

/// Sent back when a confirmed catch fails validation or hits a catalog
/// integrity error. No state was mutated.
#[derive(Event, Debug, Clone)]
pub struct CatchRejectedEvent {
    pub details: CatchEvent,
    pub reason: ScoreError,
}

/// Sent after a catch was scored and applied; carries the result for
/// immediate display.
#[derive(Event, Debug, Clone)]
pub struct CatchScoredEvent {
    pub angler_id: AnglerId,
    pub seq: u64,
    pub result: CatchResult,
}

/// Sent by the UI to undo the most recent catch.
#[derive(Event, Debug, Clone)]
pub struct UndoRequestEvent {
    pub timestamp: String,
}

/// Sent by the UI to close the session. `duration_secs` is the outing length
/// as measured by the host; `date` is the display stamp for the records.
#[derive(Event, Debug, Clone)]
pub struct SessionEndEvent {
    pub duration_secs: u64,
    pub date: String,
}

/// One per level crossed (a single catch can cross several).
#[derive(Event, Debug, Clone)]
pub struct LevelUpEvent {
    pub angler_id: AnglerId,
    pub new_level: u32,
}

/// A legendary-band catch with its drawn flavor name.
#[derive(Event, Debug, Clone)]
pub struct LegendaryCatchEvent {
    pub angler_id: AnglerId,
    pub species: String,
    pub name: String,
}

/// Toast notification for player feedback.
#[derive(Event, Debug, Clone)]
pub struct ToastEvent {
    pub message: String,
    pub duration_secs: f32,
}

/// Late-arriving weather/tide/geo data for a logged catch, matched by
/// sequence number. Best-effort: if the entry is gone the update is dropped.
#[derive(Event, Debug, Clone)]
pub struct ConditionsUpdateEvent {
    pub seq: u64,
    pub conditions: CatchConditions,
}

/// Requests a roster save (emitted after every confirmed catch and at
/// session closeout).
#[derive(Event, Debug, Clone)]
pub struct SaveRequestEvent;

/// Sent after a save completes (success or failure).
#[derive(Event, Debug, Clone)]
pub struct SaveCompleteEvent {
    pub success: bool,
    pub error_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_name_order_matches_band_rank() {
        assert!(TierName::Juvenile < TierName::Bronze);
        assert!(TierName::Bronze < TierName::Silver);
        assert!(TierName::Silver < TierName::Gold);
        assert!(TierName::Gold < TierName::Diamond);
        assert!(TierName::Diamond < TierName::Legendary);
    }

    #[test]
    fn test_badges_are_a_set() {
        let mut p = AnglerProfile::new(0, "Ada", 34, "anglerOne.png");
        p.add_badge("legendary-Cod");
        p.add_badge("legendary-Cod");
        p.add_badge("legendary-Bass");
        assert_eq!(p.badges, vec!["legendary-Cod", "legendary-Bass"]);
    }

    #[test]
    fn test_roster_register_assigns_unique_ids() {
        let mut roster = AnglerRoster::default();
        let a = roster.register("Ada", 34, "anglerOne.png");
        let b = roster.register("Brin", 29, "anglerTwo.png");
        assert_ne!(a, b);
        assert_eq!(roster.get(a).unwrap().name, "Ada");
        assert_eq!(roster.get(b).unwrap().level, 1);
    }

    #[test]
    fn test_session_log_prepends_and_iterates_chronologically() {
        let mut log = SessionLog::default();
        log.reset(vec![0], RankingMode::HeaviestHaul);
        let snap = |species: &str| CatchSnapshot {
            species: species.to_string(),
            length_cm: 30.0,
            weight_lbs: 0.69,
            tier: TierName::Bronze,
            legendary_name: None,
            method: CatchMethod::Feathers,
            notes: String::new(),
            timestamp: String::new(),
            score: 1,
            conditions: CatchConditions::default(),
        };
        let first = log.push_catch(0, snap("Mackerel"));
        let second = log.push_catch(0, snap("Whiting"));
        assert_eq!(first, 0);
        assert_eq!(second, 1);
        // Most-recent-first storage, chronological iteration.
        assert!(matches!(&log.entries[0], LogEntry::Catch(c) if c.snapshot.species == "Whiting"));
        let order: Vec<&str> = log
            .catches_for(0)
            .map(|c| c.snapshot.species.as_str())
            .collect();
        assert_eq!(order, vec!["Mackerel", "Whiting"]);
    }

    #[test]
    fn test_conditions_defaults_are_unknown_sentinels() {
        let c = CatchConditions::default();
        assert_eq!(c.weather.description, "unknown");
        assert!(c.weather.temp_c.is_none());
        assert_eq!(c.tide.state, "N/A");
        assert!(c.latitude.is_none() && c.longitude.is_none());
    }

    #[test]
    fn test_default_profile_starts_at_level_one() {
        assert_eq!(AnglerProfile::default().level, 1);
        assert_eq!(AnglerProfile::new(0, "Ada", 34, "anglerOne.png").level, 1);
    }

    #[test]
    fn test_profile_backfills_missing_fields_on_load() {
        // A minimal roster entry written by an older build: level and the
        // collection fields are absent and must come back as defaults.
        let json = r#"{"id": 3, "name": "Cole", "age": 41, "avatar": "anglerThree.png"}"#;
        let p: AnglerProfile = serde_json::from_str(json).unwrap();
        assert_eq!(p.level, 1);
        assert_eq!(p.xp, 0);
        assert!(p.badges.is_empty());
        assert!(p.history.is_empty());
        assert!(p.session_score.is_none());
    }
}
