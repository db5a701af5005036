//! Data layer — populates the species catalog at startup.
//!
//! This plugin runs in OnEnter(SessionPhase::Loading), fills the
//! SpeciesCatalog (species coefficients, renown tier tables, legendary name
//! pools) from the hard-coded design data in submodules, then transitions
//! into SessionPhase::Idle.
//!
//! No other domain needs to seed the catalog. All domain plugins can safely
//! read it once SessionPhase has advanced past Loading.

mod legendaries;
mod renown;
mod species;

use crate::shared::*;
use bevy::prelude::*;

pub struct DataPlugin;

impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(SessionPhase::Loading), load_catalog);
    }
}

/// Single system that populates the catalog and then transitions to Idle.
fn load_catalog(
    mut catalog: ResMut<SpeciesCatalog>,
    mut next_state: ResMut<NextState<SessionPhase>>,
) {
    info!("DataPlugin: populating species catalog…");

    species::populate_species(&mut catalog);
    info!("  Species loaded: {}", catalog.species.len());

    renown::populate_renown(&mut catalog);
    info!("  Renown tables loaded: {}", catalog.renown.len());

    legendaries::populate_legendary_names(&mut catalog);
    info!(
        "  Legendary name pools loaded: {}",
        catalog.legendary_names.len()
    );

    next_state.set(SessionPhase::Idle);
}

/// Fully populated catalog for unit tests that bypass the Loading state.
#[cfg(test)]
pub fn test_catalog() -> SpeciesCatalog {
    let mut catalog = SpeciesCatalog::default();
    species::populate_species(&mut catalog);
    renown::populate_renown(&mut catalog);
    legendaries::populate_legendary_names(&mut catalog);
    catalog
}
