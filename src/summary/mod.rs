//! Catch tallies for session and all-time profile views.
//!
//! Pure aggregation over catch snapshots; report layers render the result
//! however they like (screen, PDF, whatever).

use crate::scoring::round2;
use crate::shared::*;
use std::collections::HashMap;

/// Aggregated view over a set of catches.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatchSummary {
    /// Count of catches per renown band. Bands with zero catches are absent.
    pub renown_tally: HashMap<TierName, usize>,
    /// Count of catches per species.
    pub species_tally: HashMap<String, usize>,
    /// Heaviest catch per species, in lbs.
    pub biggest_per_species: HashMap<String, f64>,
    /// Species with the most catches and its count. Ties break by name so
    /// the answer is stable.
    pub most_caught: Option<(String, usize)>,
    /// Mean weight across all catches, rounded to 2 decimals.
    pub average_weight_lbs: Option<f64>,
    pub total_catches: usize,
}

/// Folds any sequence of catch snapshots into a summary.
pub fn summarize<'a>(catches: impl IntoIterator<Item = &'a CatchSnapshot>) -> CatchSummary {
    let mut summary = CatchSummary::default();
    let mut total_weight = 0.0;

    for c in catches {
        *summary.renown_tally.entry(c.tier).or_default() += 1;
        *summary.species_tally.entry(c.species.clone()).or_default() += 1;
        let biggest = summary
            .biggest_per_species
            .entry(c.species.clone())
            .or_insert(0.0);
        if c.weight_lbs > *biggest {
            *biggest = c.weight_lbs;
        }
        total_weight += c.weight_lbs;
        summary.total_catches += 1;
    }

    summary.most_caught = summary
        .species_tally
        .iter()
        .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(species, &count)| (species.clone(), count));

    if summary.total_catches > 0 {
        summary.average_weight_lbs = Some(round2(total_weight / summary.total_catches as f64));
    }
    summary
}

/// Summary of one angler's catches in the current session.
pub fn session_summary(log: &SessionLog, angler_id: AnglerId) -> CatchSummary {
    summarize(log.catches_for(angler_id).map(|c| &c.snapshot))
}

/// All-time summary across every closed session in the profile's history.
pub fn all_time_summary(profile: &AnglerProfile) -> CatchSummary {
    summarize(profile.history.iter().flat_map(|r| r.catches.iter()))
}
