//! Roster persistence.
//!
//! Profiles are the only durable state. The roster loads once at startup
//! and is written on every `SaveRequestEvent` (each confirmed catch, each
//! undo, session closeout), so a dead phone battery costs at most one
//! in-flight entry.
//!
//! Native builds write `saves/anglers.json` next to the executable, via a
//! temp file and rename so a crash mid-write never corrupts the roster.
//! Browser builds use localStorage under the legacy "fishingAnglers" key.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
#[cfg(not(target_arch = "wasm32"))]
use std::fs;
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

use crate::shared::*;

pub const SAVE_VERSION: u32 = 1;

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "fishingAnglers";

/// On-disk wrapper: version header plus the roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RosterFile {
    version: u32,
    anglers: Vec<AnglerProfile>,
}

// ═══════════════════════════════════════════════════════════════════════
// PLUGIN
// ═══════════════════════════════════════════════════════════════════════

pub struct SavePlugin;

impl Plugin for SavePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_roster)
            .add_systems(Update, handle_save_request);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// STORAGE BACKENDS
// ═══════════════════════════════════════════════════════════════════════

#[cfg(not(target_arch = "wasm32"))]
fn roster_path() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));
    exe_dir.join("saves").join("anglers.json")
}

#[cfg(not(target_arch = "wasm32"))]
fn write_store(json: &str) -> Result<(), String> {
    let path = roster_path();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| format!("Could not create saves directory: {e}"))?;
    }
    // Write to a temp file first, then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, json)
        .map_err(|e| format!("Write failed for {}: {e}", tmp_path.display()))?;
    fs::rename(&tmp_path, &path).map_err(|e| format!("Rename failed: {e}"))?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn read_store() -> Result<Option<String>, String> {
    let path = roster_path();
    if !path.exists() {
        return Ok(None);
    }
    fs::read_to_string(&path)
        .map(Some)
        .map_err(|e| format!("Read failed for {}: {e}", path.display()))
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .ok_or_else(|| "no window".to_string())?
        .local_storage()
        .map_err(|_| "localStorage unavailable".to_string())?
        .ok_or_else(|| "localStorage unavailable".to_string())
}

#[cfg(target_arch = "wasm32")]
fn write_store(json: &str) -> Result<(), String> {
    local_storage()?
        .set_item(STORAGE_KEY, json)
        .map_err(|_| "localStorage write failed (quota?)".to_string())
}

#[cfg(target_arch = "wasm32")]
fn read_store() -> Result<Option<String>, String> {
    local_storage()?
        .get_item(STORAGE_KEY)
        .map_err(|_| "localStorage read failed".to_string())
}

// ═══════════════════════════════════════════════════════════════════════
// SAVE / LOAD LOGIC
// ═══════════════════════════════════════════════════════════════════════

fn write_roster(roster: &AnglerRoster) -> Result<(), String> {
    let file = RosterFile {
        version: SAVE_VERSION,
        anglers: roster.anglers.clone(),
    };
    let json =
        serde_json::to_string_pretty(&file).map_err(|e| format!("Serialization failed: {e}"))?;
    write_store(&json)
}

fn parse_roster(json: &str) -> Result<AnglerRoster, String> {
    let file: RosterFile =
        serde_json::from_str(json).map_err(|e| format!("Deserialization failed: {e}"))?;

    // Version check — future versions can add migration here
    if file.version != SAVE_VERSION {
        warn!(
            "roster has version {} but current version is {}. Attempting to load anyway.",
            file.version, SAVE_VERSION
        );
    }
    Ok(AnglerRoster {
        anglers: file.anglers,
    })
}

fn read_roster() -> Result<Option<AnglerRoster>, String> {
    let Some(json) = read_store()? else {
        return Ok(None);
    };
    parse_roster(&json).map(Some)
}

// ═══════════════════════════════════════════════════════════════════════
// SYSTEMS
// ═══════════════════════════════════════════════════════════════════════

/// Loads the roster at startup. A missing store is a first run; a corrupt
/// store is surfaced and the app continues with an empty roster rather
/// than overwriting what might still be recoverable by hand.
fn load_roster(mut roster: ResMut<AnglerRoster>, mut toasts: EventWriter<ToastEvent>) {
    match read_roster() {
        Ok(Some(loaded)) => {
            info!("roster loaded: {} anglers", loaded.anglers.len());
            *roster = loaded;
        }
        Ok(None) => {
            info!("no roster found, starting fresh");
        }
        Err(e) => {
            warn!("roster load FAILED: {e}");
            toasts.send(ToastEvent {
                message: "Could not load saved anglers.".to_string(),
                duration_secs: 5.0,
            });
        }
    }
}

fn handle_save_request(
    mut save_events: EventReader<SaveRequestEvent>,
    mut complete_events: EventWriter<SaveCompleteEvent>,
    mut toasts: EventWriter<ToastEvent>,
    roster: Res<AnglerRoster>,
) {
    // Multiple requests in one frame collapse to a single write.
    if save_events.read().next().is_none() {
        return;
    }
    save_events.clear();

    match write_roster(&roster) {
        Ok(()) => {
            debug!("roster saved ({} anglers)", roster.anglers.len());
            complete_events.send(SaveCompleteEvent {
                success: true,
                error_message: None,
            });
        }
        Err(e) => {
            warn!("roster save FAILED: {e}");
            toasts.send(ToastEvent {
                message: "Saving failed! Progress may be lost.".to_string(),
                duration_secs: 5.0,
            });
            complete_events.send(SaveCompleteEvent {
                success: false,
                error_message: Some(e),
            });
        }
    }
}
