//! Seascore: scoring and progression core for a group sea-fishing
//! scoring companion.
//!
//! The crate is headless: a host (native shell or wasm front end) drives it
//! by sending the events declared in [`shared`] and reading back resources
//! and response events. [`SeascorePlugin`] wires up the whole core; add it
//! after Bevy's state plugin and everything else follows from events.

pub mod shared;

pub mod data;
pub mod leaderboard;
pub mod progression;
pub mod save;
pub mod scoring;
pub mod session;
pub mod summary;

use bevy::prelude::*;
use shared::*;

/// Registers the session state machine, every shared resource and event,
/// and the domain plugins. The species catalog is populated during
/// `SessionPhase::Loading`, after which the core idles until a
/// `SessionStartEvent` arrives.
pub struct SeascorePlugin;

impl Plugin for SeascorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Session state machine
            .init_state::<SessionPhase>()
            // Shared resources
            .init_resource::<SpeciesCatalog>()
            .init_resource::<AnglerRoster>()
            .init_resource::<SessionLog>()
            .init_resource::<SessionClock>()
            .init_resource::<scoring::ScoringRng>()
            // Events
            .add_event::<SessionStartEvent>()
            .add_event::<CatchConfirmedEvent>()
            .add_event::<CatchRejectedEvent>()
            .add_event::<CatchScoredEvent>()
            .add_event::<UndoRequestEvent>()
            .add_event::<SessionEndEvent>()
            .add_event::<LevelUpEvent>()
            .add_event::<LegendaryCatchEvent>()
            .add_event::<ToastEvent>()
            .add_event::<ConditionsUpdateEvent>()
            .add_event::<SaveRequestEvent>()
            .add_event::<SaveCompleteEvent>()
            // Domain plugins
            .add_plugins(session::SessionPlugin)
            .add_plugins(save::SavePlugin)
            // Data loading
            .add_plugins(data::DataPlugin);
    }
}
