//! Session standings under the four ranking modes.
//!
//! Standings are recomputed on demand from the log, so an undo is reflected
//! the moment the entry is flagged. All four modes measure weight or count,
//! never points; points are the progression currency, the leaderboard is
//! bragging rights.

use crate::scoring::round2;
use crate::shared::*;

/// One scoreboard row. `score` is the mode's measure (lbs or fish count);
/// `label` is the human-readable rendering of it.
#[derive(Debug, Clone, PartialEq)]
pub struct StandingRow {
    pub rank: u32,
    pub angler_id: AnglerId,
    pub name: String,
    pub level: u32,
    pub score: f64,
    pub label: String,
}

/// Computes ranked standings for the session's participants.
///
/// Rows sort by score descending, name ascending on ties. Ranks are dense:
/// equal scores share a rank and the next distinct score takes the next
/// rank (1, 2, 2, 3), so nobody is pushed down by a tie above them.
pub fn session_standings(
    log: &SessionLog,
    roster: &AnglerRoster,
    catalog: &SpeciesCatalog,
) -> Vec<StandingRow> {
    let mut rows: Vec<StandingRow> = log
        .participants
        .iter()
        .filter_map(|&id| roster.get(id))
        .map(|profile| {
            let (score, label) = measure(log, catalog, profile.id, log.mode);
            StandingRow {
                rank: 0,
                angler_id: profile.id,
                name: profile.name.clone(),
                level: profile.level,
                score,
                label,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });

    let mut rank = 0u32;
    let mut last_score: Option<f64> = None;
    for row in &mut rows {
        if last_score.map_or(true, |ls| row.score < ls) {
            rank += 1;
        }
        row.rank = rank;
        last_score = Some(row.score);
    }
    rows
}

fn measure(
    log: &SessionLog,
    catalog: &SpeciesCatalog,
    angler_id: AnglerId,
    mode: RankingMode,
) -> (f64, String) {
    let catches: Vec<&CatchRecord> = log.catches_for(angler_id).collect();
    match mode {
        RankingMode::BiggestFish => {
            let best = catches.iter().max_by(|a, b| {
                a.snapshot
                    .weight_lbs
                    .partial_cmp(&b.snapshot.weight_lbs)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            match best {
                Some(c) => (
                    c.snapshot.weight_lbs,
                    format!(
                        "{} ({} lbs, {} cm)",
                        c.snapshot.species, c.snapshot.weight_lbs, c.snapshot.length_cm
                    ),
                ),
                None => (0.0, "—".to_string()),
            }
        }
        RankingMode::MostFish => {
            let count = catches.len();
            (count as f64, format!("{count} fish"))
        }
        RankingMode::SharksOnly => {
            let total: f64 = catches
                .iter()
                .filter(|c| {
                    catalog
                        .lookup(&c.snapshot.species)
                        .is_some_and(|def| def.category == SpeciesCategory::Shark)
                })
                .map(|c| c.snapshot.weight_lbs)
                .sum();
            let total = round2(total);
            if total > 0.0 {
                (total, format!("{total:.2} lbs"))
            } else {
                (0.0, "—".to_string())
            }
        }
        RankingMode::HeaviestHaul => {
            let total: f64 = catches.iter().map(|c| c.snapshot.weight_lbs).sum();
            let total = round2(total);
            if total > 0.0 {
                (total, format!("{total:.2} lbs"))
            } else {
                (0.0, "—".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_catalog;

    fn snap(species: &str, weight: f64) -> CatchSnapshot {
        CatchSnapshot {
            species: species.to_string(),
            length_cm: 50.0,
            weight_lbs: weight,
            tier: TierName::Bronze,
            legendary_name: None,
            method: CatchMethod::Ledger,
            notes: String::new(),
            timestamp: String::new(),
            score: 1,
            conditions: CatchConditions::default(),
        }
    }

    fn fixture(mode: RankingMode) -> (SessionLog, AnglerRoster, SpeciesCatalog) {
        let mut roster = AnglerRoster::default();
        let ada = roster.register("Ada", 34, "anglerOne.png");
        let brin = roster.register("Brin", 29, "anglerTwo.png");
        let cole = roster.register("Cole", 41, "anglerThree.png");
        let mut log = SessionLog::default();
        log.reset(vec![ada, brin, cole], mode);
        (log, roster, test_catalog())
    }

    #[test]
    fn test_heaviest_haul_sums_weights() {
        let (mut log, roster, catalog) = fixture(RankingMode::HeaviestHaul);
        log.push_catch(0, snap("Mackerel", 0.69));
        log.push_catch(0, snap("Cod", 6.25));
        log.push_catch(1, snap("Bass", 5.0));
        let rows = session_standings(&log, &roster, &catalog);
        assert_eq!(rows[0].name, "Ada");
        assert_eq!(rows[0].score, 6.94);
        assert_eq!(rows[0].label, "6.94 lbs");
        assert_eq!(rows[2].label, "—");
    }

    #[test]
    fn test_biggest_fish_takes_single_best() {
        let (mut log, roster, catalog) = fixture(RankingMode::BiggestFish);
        log.push_catch(0, snap("Mackerel", 0.69));
        log.push_catch(1, snap("Cod", 6.25));
        log.push_catch(1, snap("Dab", 0.5));
        let rows = session_standings(&log, &roster, &catalog);
        assert_eq!(rows[0].name, "Brin");
        assert_eq!(rows[0].score, 6.25);
        assert!(rows[0].label.starts_with("Cod"));
    }

    #[test]
    fn test_most_fish_counts_catches() {
        let (mut log, roster, catalog) = fixture(RankingMode::MostFish);
        for _ in 0..3 {
            log.push_catch(1, snap("Whiting", 0.75));
        }
        log.push_catch(0, snap("Cod", 6.25));
        let rows = session_standings(&log, &roster, &catalog);
        assert_eq!(rows[0].name, "Brin");
        assert_eq!(rows[0].label, "3 fish");
        assert_eq!(rows[1].score, 1.0);
    }

    #[test]
    fn test_sharks_only_ignores_everything_else() {
        let (mut log, roster, catalog) = fixture(RankingMode::SharksOnly);
        log.push_catch(0, snap("Tope", 15.5));
        log.push_catch(0, snap("Cod", 6.25));
        log.push_catch(1, snap("Conger eel", 30.0));
        let rows = session_standings(&log, &roster, &catalog);
        assert_eq!(rows[0].name, "Ada");
        assert_eq!(rows[0].score, 15.5);
        assert_eq!(rows[1].score, 0.0);
        assert_eq!(rows[1].label, "—");
    }

    #[test]
    fn test_dense_ranking_on_ties() {
        let mut roster = AnglerRoster::default();
        let dana = roster.register("Dana", 38, "anglerFour.png");
        let ada = roster.register("Ada", 34, "anglerOne.png");
        let brin = roster.register("Brin", 29, "anglerTwo.png");
        let cole = roster.register("Cole", 41, "anglerThree.png");
        let mut log = SessionLog::default();
        log.reset(vec![dana, ada, brin, cole], RankingMode::HeaviestHaul);
        log.push_catch(dana, snap("Tope", 20.0));
        log.push_catch(ada, snap("Cod", 12.5));
        log.push_catch(brin, snap("Bass", 12.5));
        log.push_catch(cole, snap("Dab", 5.0));

        let rows = session_standings(&log, &roster, &test_catalog());
        let ranks: Vec<u32> = rows.iter().map(|r| r.rank).collect();
        // Dense: the tied pair shares rank 2, the next score takes rank 3.
        assert_eq!(ranks, vec![1, 2, 2, 3]);
        assert_eq!(rows[0].name, "Dana");
        // Tied scores order alphabetically.
        assert_eq!(rows[1].name, "Ada");
        assert_eq!(rows[2].name, "Brin");
        assert_eq!(rows[3].name, "Cole");
    }

    #[test]
    fn test_undone_catches_are_excluded() {
        let (mut log, roster, catalog) = fixture(RankingMode::HeaviestHaul);
        log.push_catch(0, snap("Cod", 6.25));
        log.push_catch(0, snap("Bass", 5.0));
        if let LogEntry::Catch(c) = &mut log.entries[0] {
            c.undone = true;
        }
        let rows = session_standings(&log, &roster, &catalog);
        assert_eq!(rows[0].score, 6.25);
    }
}
