//! Session lifecycle — start, catch confirmation, undo, closeout.
//!
//! All mutation of the roster and the session log happens here, driven by
//! events from the UI layer. Scoring math lives in `scoring`, XP rules in
//! `progression`; this module wires them to the log and the profiles.

use crate::progression;
use crate::scoring::{self, ScoringRng};
use crate::shared::*;
use bevy::prelude::*;

pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            start_session.run_if(in_state(SessionPhase::Idle)),
        )
        .add_systems(
            Update,
            (
                confirm_catches,
                handle_undo,
                apply_conditions_updates,
                tick_session_clock,
                close_session,
            )
                .chain()
                .run_if(in_state(SessionPhase::Active)),
        )
        .add_systems(Update, finish_closing.run_if(in_state(SessionPhase::Closing)));
    }
}

/// Begins a session: fresh log, zeroed session scores, reset clock.
///
/// A start request with no participants (or unknown ids only) is refused
/// with a toast; the phase stays Idle.
fn start_session(
    mut events: EventReader<SessionStartEvent>,
    mut roster: ResMut<AnglerRoster>,
    mut log: ResMut<SessionLog>,
    mut clock: ResMut<SessionClock>,
    mut toasts: EventWriter<ToastEvent>,
    mut next_state: ResMut<NextState<SessionPhase>>,
) {
    for ev in events.read() {
        let participants: Vec<AnglerId> = ev
            .participants
            .iter()
            .copied()
            .filter(|id| roster.get(*id).is_some())
            .collect();
        if participants.is_empty() {
            warn!("session start refused: no registered participants");
            toasts.send(ToastEvent {
                message: "Select at least one angler to start.".to_string(),
                duration_secs: 3.0,
            });
            continue;
        }

        for &id in &participants {
            if let Some(profile) = roster.get_mut(id) {
                profile.session_score = Some(0);
            }
        }
        log.reset(participants, ev.mode);
        clock.elapsed = std::time::Duration::ZERO;
        info!(
            "session started: {} anglers, mode {:?}",
            log.participants.len(),
            log.mode
        );
        next_state.set(SessionPhase::Active);
    }
}

/// Scores each confirmed catch and applies it to the log and the angler.
///
/// Rejections leave every resource untouched; the UI gets the reason back
/// and re-prompts.
fn confirm_catches(
    mut events: EventReader<CatchConfirmedEvent>,
    catalog: Res<SpeciesCatalog>,
    mut roster: ResMut<AnglerRoster>,
    mut log: ResMut<SessionLog>,
    mut rng: ResMut<ScoringRng>,
    mut scored: EventWriter<CatchScoredEvent>,
    mut rejected: EventWriter<CatchRejectedEvent>,
    mut level_ups: EventWriter<LevelUpEvent>,
    mut legendaries: EventWriter<LegendaryCatchEvent>,
    mut toasts: EventWriter<ToastEvent>,
    mut saves: EventWriter<SaveRequestEvent>,
) {
    for ev in events.read() {
        let details = &ev.details;
        if !log.participants.contains(&details.angler_id) {
            warn!(
                "catch for angler {} ignored: not in this session",
                details.angler_id
            );
            continue;
        }

        let result = match scoring::score_catch(
            &catalog,
            &details.species,
            details.length_cm,
            &mut rng.0,
        ) {
            Ok(result) => result,
            Err(reason) => {
                warn!("catch rejected: {reason}");
                toasts.send(ToastEvent {
                    message: reason.to_string(),
                    duration_secs: 4.0,
                });
                rejected.send(CatchRejectedEvent {
                    details: details.clone(),
                    reason,
                });
                continue;
            }
        };

        let Some(profile) = roster.get_mut(details.angler_id) else {
            continue;
        };
        for level in progression::apply_catch(profile, details, &result) {
            toasts.send(ToastEvent {
                message: format!("Level up! {} reached level {level}", profile.name),
                duration_secs: 4.0,
            });
            level_ups.send(LevelUpEvent {
                angler_id: details.angler_id,
                new_level: level,
            });
        }
        if let Some(name) = &result.legendary_name {
            toasts.send(ToastEvent {
                message: format!("Legendary catch: {name}!"),
                duration_secs: 5.0,
            });
            legendaries.send(LegendaryCatchEvent {
                angler_id: details.angler_id,
                species: details.species.clone(),
                name: name.clone(),
            });
        }

        let seq = log.push_catch(
            details.angler_id,
            CatchSnapshot {
                species: details.species.clone(),
                length_cm: details.length_cm,
                weight_lbs: result.weight_lbs,
                tier: result.tier.name,
                legendary_name: result.legendary_name.clone(),
                method: details.method,
                notes: details.notes.clone(),
                timestamp: details.timestamp.clone(),
                score: result.final_score,
                conditions: details.conditions.clone(),
            },
        );
        info!(
            "catch #{seq}: {} {} cm, {} pts",
            details.species, details.length_cm, result.final_score
        );
        scored.send(CatchScoredEvent {
            angler_id: details.angler_id,
            seq,
            result,
        });
        saves.send(SaveRequestEvent);
    }
}

/// Undoes the most recent still-standing catch.
///
/// The entry stays in the log flagged `undone` and an audit marker is
/// prepended above it. Session score is reverted; XP and level are not.
fn handle_undo(
    mut events: EventReader<UndoRequestEvent>,
    mut roster: ResMut<AnglerRoster>,
    mut log: ResMut<SessionLog>,
    mut toasts: EventWriter<ToastEvent>,
    mut saves: EventWriter<SaveRequestEvent>,
) {
    for ev in events.read() {
        // Entries are most-recent-first, so the first live catch is the
        // latest one.
        let target = log.entries.iter_mut().find_map(|e| match e {
            LogEntry::Catch(c) if !c.undone => Some(c),
            _ => None,
        });
        let Some(record) = target else {
            toasts.send(ToastEvent {
                message: "Nothing to undo.".to_string(),
                duration_secs: 3.0,
            });
            continue;
        };

        record.undone = true;
        let marker = UndoRecord {
            seq: record.seq,
            angler_id: record.angler_id,
            species: record.snapshot.species.clone(),
            timestamp: ev.timestamp.clone(),
        };
        let reverted = record.snapshot.score;
        let angler_id = record.angler_id;

        if let Some(profile) = roster.get_mut(angler_id) {
            if let Some(score) = profile.session_score.as_mut() {
                *score = score.saturating_sub(reverted);
            }
        }
        info!("undid catch #{} ({})", marker.seq, marker.species);
        toasts.send(ToastEvent {
            message: format!("Removed {} ({} pts)", marker.species, reverted),
            duration_secs: 3.0,
        });
        log.entries.insert(0, LogEntry::UndoMarker(marker));
        saves.send(SaveRequestEvent);
    }
}

/// Attaches late-arriving geo/weather/tide data to the matching log entry.
/// Updates for entries that no longer exist are dropped silently.
fn apply_conditions_updates(
    mut events: EventReader<ConditionsUpdateEvent>,
    mut log: ResMut<SessionLog>,
) {
    for ev in events.read() {
        let found = log.entries.iter_mut().any(|e| match e {
            LogEntry::Catch(c) if c.seq == ev.seq => {
                c.snapshot.conditions = ev.conditions.clone();
                true
            }
            _ => false,
        });
        if !found {
            debug!("conditions update for missing catch #{} dropped", ev.seq);
        }
    }
}

fn tick_session_clock(time: Res<Time>, mut clock: ResMut<SessionClock>) {
    clock.elapsed += time.delta();
}

/// Closes the session: one `SessionRecord` per participant, session scores
/// folded into history, fishing time accumulated.
fn close_session(
    mut events: EventReader<SessionEndEvent>,
    mut roster: ResMut<AnglerRoster>,
    log: Res<SessionLog>,
    mut toasts: EventWriter<ToastEvent>,
    mut saves: EventWriter<SaveRequestEvent>,
    mut next_state: ResMut<NextState<SessionPhase>>,
) {
    for ev in events.read() {
        for &id in &log.participants {
            let catches: Vec<CatchSnapshot> =
                log.catches_for(id).map(|c| c.snapshot.clone()).collect();
            let Some(profile) = roster.get_mut(id) else {
                continue;
            };
            let score = profile.session_score.take().unwrap_or(0);
            profile.history.push(SessionRecord {
                date: ev.date.clone(),
                score,
                duration_secs: ev.duration_secs,
                catches,
            });
            profile.total_fishing_time_secs += ev.duration_secs;
        }
        info!(
            "session closed after {}s, {} participants",
            ev.duration_secs,
            log.participants.len()
        );
        toasts.send(ToastEvent {
            message: "Session ended. Tight lines!".to_string(),
            duration_secs: 4.0,
        });
        saves.send(SaveRequestEvent);
        next_state.set(SessionPhase::Closing);
    }
}

/// One frame in Closing lets report readers see the fresh records, then the
/// transient session state is dropped and we return to Idle.
fn finish_closing(
    mut log: ResMut<SessionLog>,
    mut clock: ResMut<SessionClock>,
    mut next_state: ResMut<NextState<SessionPhase>>,
) {
    log.clear();
    clock.elapsed = std::time::Duration::ZERO;
    next_state.set(SessionPhase::Idle);
}
