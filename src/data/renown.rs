use crate::shared::*;

/// Bonus XP ladder shared by every species, Juvenile through Legendary.
const BONUS_XP: [u32; 6] = [0, 5, 10, 15, 25, 50];

/// Only the Legendary band carries a flat score bonus.
const LEGENDARY_BONUS_MULT: f64 = 1.5;

/// Builds one species tier table from its five non-Juvenile length
/// thresholds (Bronze, Silver, Gold, Diamond, Legendary, in cm).
/// Juvenile always starts at 0, so the result is sorted ascending by
/// construction.
fn tier_table(thresholds: [f64; 5]) -> Vec<RenownTier> {
    let mut min_cm = [0.0; 6];
    min_cm[1..].copy_from_slice(&thresholds);
    TierName::ALL
        .iter()
        .zip(min_cm)
        .zip(BONUS_XP)
        .map(|((&name, min_length_cm), bonus_xp)| RenownTier {
            name,
            min_length_cm,
            bonus_xp,
            bonus_score_mult: if name == TierName::Legendary {
                LEGENDARY_BONUS_MULT
            } else {
                0.0
            },
        })
        .collect()
}

/// Populate the per-species renown tables. Thresholds reflect realistic UK
/// shore/boat sizes: a Legendary Mackerel is 45 cm, a Legendary Thresher
/// 280 cm.
pub fn populate_renown(catalog: &mut SpeciesCatalog) {
    let rows: [(&str, [f64; 5]); 43] = [
        // ── Sharks ───────────────────────────────────────────────────────
        ("Blue shark", [100.0, 150.0, 200.0, 230.0, 260.0]),
        ("Porbeagle shark", [80.0, 120.0, 160.0, 200.0, 230.0]),
        ("Thresher shark", [120.0, 170.0, 210.0, 250.0, 280.0]),
        ("Tope", [80.0, 110.0, 130.0, 150.0, 170.0]),
        ("Smoothhound", [60.0, 80.0, 95.0, 110.0, 125.0]),
        ("Spurdog", [50.0, 70.0, 85.0, 100.0, 115.0]),
        ("Bull huss", [60.0, 80.0, 95.0, 110.0, 125.0]),
        ("Lesser spotted dogfish", [45.0, 55.0, 65.0, 75.0, 85.0]),
        // ── Rays & skates ────────────────────────────────────────────────
        ("Thornback ray", [45.0, 60.0, 70.0, 80.0, 90.0]),
        ("Blonde ray", [50.0, 65.0, 80.0, 95.0, 110.0]),
        ("Small-eyed ray", [40.0, 55.0, 65.0, 75.0, 85.0]),
        ("Spotted ray", [35.0, 45.0, 55.0, 65.0, 75.0]),
        ("Undulate ray", [45.0, 60.0, 75.0, 90.0, 105.0]),
        ("Cuckoo ray", [35.0, 45.0, 55.0, 65.0, 75.0]),
        // ── Flatfish ─────────────────────────────────────────────────────
        ("Plaice", [30.0, 40.0, 50.0, 60.0, 65.0]),
        ("Dab", [20.0, 25.0, 30.0, 35.0, 40.0]),
        ("Flounder", [30.0, 40.0, 50.0, 55.0, 60.0]),
        ("Sole (common/Dover)", [28.0, 35.0, 40.0, 45.0, 50.0]),
        ("Turbot", [35.0, 50.0, 60.0, 70.0, 80.0]),
        ("Brill", [35.0, 45.0, 55.0, 65.0, 75.0]),
        // ── Eels ─────────────────────────────────────────────────────────
        ("Conger eel", [80.0, 120.0, 150.0, 180.0, 200.0]),
        ("Silver eel", [40.0, 60.0, 70.0, 80.0, 90.0]),
        ("Launce (greater sand eel)", [20.0, 25.0, 30.0, 35.0, 40.0]),
        // ── Roundfish ────────────────────────────────────────────────────
        ("Cod", [40.0, 55.0, 65.0, 75.0, 85.0]),
        ("Pollack", [40.0, 55.0, 65.0, 75.0, 85.0]),
        ("Coalfish", [35.0, 50.0, 60.0, 70.0, 80.0]),
        ("Bass", [36.0, 50.0, 60.0, 70.0, 80.0]),
        ("Mackerel", [25.0, 32.0, 35.0, 40.0, 45.0]),
        ("Scad (horse mackerel)", [20.0, 25.0, 30.0, 35.0, 40.0]),
        ("Garfish", [40.0, 55.0, 65.0, 75.0, 85.0]),
        ("Whiting", [25.0, 35.0, 40.0, 45.0, 50.0]),
        ("Pouting", [20.0, 30.0, 35.0, 40.0, 45.0]),
        ("Poor cod", [15.0, 20.0, 25.0, 30.0, 35.0]),
        ("Ling", [60.0, 90.0, 110.0, 130.0, 150.0]),
        ("Haddock", [35.0, 45.0, 50.0, 55.0, 60.0]),
        // ── Gurnards & oddities ──────────────────────────────────────────
        ("Red gurnard", [25.0, 35.0, 40.0, 45.0, 50.0]),
        ("Grey gurnard", [20.0, 25.0, 30.0, 35.0, 40.0]),
        ("Tub gurnard", [30.0, 40.0, 45.0, 50.0, 55.0]),
        ("John Dory", [25.0, 35.0, 40.0, 45.0, 50.0]),
        // ── Wrasse ───────────────────────────────────────────────────────
        ("Ballan wrasse", [30.0, 40.0, 45.0, 50.0, 55.0]),
        ("Cuckoo wrasse", [20.0, 25.0, 30.0, 35.0, 40.0]),
        // ── Bream ────────────────────────────────────────────────────────
        ("Black bream", [25.0, 30.0, 35.0, 40.0, 45.0]),
        ("Gilthead bream", [25.0, 35.0, 40.0, 45.0, 50.0]),
    ];

    for (name, thresholds) in rows {
        catalog
            .renown
            .insert(name.to_string(), tier_table(thresholds));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_table_is_sorted_and_complete() {
        let mut catalog = SpeciesCatalog::default();
        populate_renown(&mut catalog);
        assert_eq!(catalog.renown.len(), 43);
        for (species, tiers) in &catalog.renown {
            assert_eq!(tiers.len(), 6, "{species}");
            assert_eq!(tiers[0].name, TierName::Juvenile);
            assert_eq!(tiers[0].min_length_cm, 0.0, "{species}");
            for pair in tiers.windows(2) {
                assert!(
                    pair[0].min_length_cm < pair[1].min_length_cm,
                    "{species} thresholds not strictly ascending"
                );
                assert!(pair[0].name < pair[1].name, "{species} band order");
            }
        }
    }

    #[test]
    fn test_bonus_ladder_is_uniform() {
        let mut catalog = SpeciesCatalog::default();
        populate_renown(&mut catalog);
        let tiers = catalog.tiers_for("Conger eel").unwrap();
        let xp: Vec<u32> = tiers.iter().map(|t| t.bonus_xp).collect();
        assert_eq!(xp, vec![0, 5, 10, 15, 25, 50]);
        assert_eq!(tiers[5].bonus_score_mult, 1.5);
        assert!(tiers[..5].iter().all(|t| t.bonus_score_mult == 0.0));
    }

    #[test]
    fn test_conger_legendary_threshold() {
        let mut catalog = SpeciesCatalog::default();
        populate_renown(&mut catalog);
        let tiers = catalog.tiers_for("Conger eel").unwrap();
        assert_eq!(tiers[5].min_length_cm, 200.0);
    }
}
