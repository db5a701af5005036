//! Scoring engine — pure catch evaluation.
//!
//! Everything here is deterministic given the catalog, the catch inputs,
//! and the RNG state. The session plugin owns when these run; this module
//! never touches profiles or the log.

use crate::shared::*;
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Session-wide RNG used only for legendary name draws. A resource so tests
/// can seed it and replay an exact outing.
#[derive(Resource)]
pub struct ScoringRng(pub StdRng);

impl Default for ScoringRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

/// Round to 2 decimal places, half away from zero. Matches how weights are
/// displayed, so the stored weight and the shown weight never disagree.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Finds the renown band for a length: the highest band whose lower bound
/// the length reaches. Walks the table from the top down, so ties on an
/// exact threshold land in the higher band.
pub fn resolve_tier<'a>(
    tiers: &'a [RenownTier],
    species: &str,
    length_cm: f64,
) -> Result<&'a RenownTier, ScoreError> {
    if tiers.is_empty() {
        return Err(ScoreError::MissingTierTable(species.to_string()));
    }
    Ok(tiers
        .iter()
        .rev()
        .find(|t| length_cm >= t.min_length_cm)
        .unwrap_or(&tiers[0]))
}

/// Draws a legendary flavor name uniformly from the species pool.
pub fn pick_legendary_name(
    pool: &[String],
    species: &str,
    rng: &mut impl Rng,
) -> Result<String, ScoreError> {
    if pool.is_empty() {
        return Err(ScoreError::EmptyNamePool(species.to_string()));
    }
    Ok(pool[rng.gen_range(0..pool.len())].clone())
}

/// Evaluates one catch against the catalog.
///
/// weight   = round2(length × weight_per_cm)
/// raw      = weight × score_mult
/// xp gain  = round(raw × 10) + band bonus XP
/// score    = round(raw + band score bonus)
///
/// The band score bonus is a flat addend (1.5 on Legendary, 0 elsewhere),
/// so a Legendary catch scores round(raw + 1.5), not raw × 1.5.
pub fn score_catch(
    catalog: &SpeciesCatalog,
    species: &str,
    length_cm: f64,
    rng: &mut impl Rng,
) -> Result<CatchResult, ScoreError> {
    if !(length_cm.is_finite() && length_cm > 0.0) {
        return Err(ScoreError::InvalidLength(length_cm));
    }
    let def = catalog
        .lookup(species)
        .ok_or_else(|| ScoreError::UnknownSpecies(species.to_string()))?;
    let tiers = catalog
        .tiers_for(species)
        .ok_or_else(|| ScoreError::MissingTierTable(species.to_string()))?;
    let tier = resolve_tier(tiers, species, length_cm)?.clone();

    let weight_lbs = round2(length_cm * def.weight_per_cm);
    let raw_points = weight_lbs * def.score_mult;
    let xp_gain = (raw_points * 10.0).round() as u32 + tier.bonus_xp;
    let final_score = (raw_points + tier.bonus_score_mult).round() as u32;

    let legendary_name = if tier.name == TierName::Legendary {
        let pool = catalog
            .name_pool(species)
            .ok_or_else(|| ScoreError::EmptyNamePool(species.to_string()))?;
        Some(pick_legendary_name(pool, species, rng)?)
    } else {
        None
    };

    Ok(CatchResult {
        weight_lbs,
        raw_points,
        tier,
        xp_gain,
        final_score,
        legendary_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_catalog;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.689), 0.69);
        assert_eq!(round2(0.685), 0.69);
        assert_eq!(round2(54.0), 54.0);
        assert_eq!(round2(1.004), 1.0);
    }

    #[test]
    fn test_mackerel_30cm_worked_example() {
        let catalog = test_catalog();
        let r = score_catch(&catalog, "Mackerel", 30.0, &mut rng()).unwrap();
        assert_eq!(r.weight_lbs, 0.69);
        assert_eq!(r.tier.name, TierName::Bronze);
        assert_eq!(r.raw_points, 0.69);
        assert_eq!(r.xp_gain, 12); // round(6.9) + 5
        assert_eq!(r.final_score, 1);
        assert!(r.legendary_name.is_none());
    }

    #[test]
    fn test_mackerel_silver_boundary() {
        let catalog = test_catalog();
        let r = score_catch(&catalog, "Mackerel", 31.9, &mut rng()).unwrap();
        assert_eq!(r.tier.name, TierName::Bronze);
        let r = score_catch(&catalog, "Mackerel", 32.0, &mut rng()).unwrap();
        assert_eq!(r.tier.name, TierName::Silver);
    }

    #[test]
    fn test_conger_200cm_legendary_worked_example() {
        let catalog = test_catalog();
        let r = score_catch(&catalog, "Conger eel", 200.0, &mut rng()).unwrap();
        assert_eq!(r.weight_lbs, 54.0);
        assert_eq!(r.raw_points, 378.0);
        assert_eq!(r.tier.name, TierName::Legendary);
        assert_eq!(r.xp_gain, 3830); // 3780 + 50
        assert_eq!(r.final_score, 380); // round(378 + 1.5)
        let name = r.legendary_name.unwrap();
        assert!(catalog
            .name_pool("Conger eel")
            .unwrap()
            .contains(&name));
    }

    #[test]
    fn test_exact_threshold_lands_in_higher_band() {
        let catalog = test_catalog();
        let tiers = catalog.tiers_for("Mackerel").unwrap();
        assert_eq!(resolve_tier(tiers, "Mackerel", 25.0).unwrap().name, TierName::Bronze);
        assert_eq!(resolve_tier(tiers, "Mackerel", 45.0).unwrap().name, TierName::Legendary);
        assert_eq!(resolve_tier(tiers, "Mackerel", 5.0).unwrap().name, TierName::Juvenile);
    }

    #[test]
    fn test_weight_strictly_increasing_in_length() {
        let catalog = test_catalog();
        for species in ["Mackerel", "Conger eel", "Thresher shark"] {
            let mut last = 0.0;
            for len in [10.0, 20.0, 40.0, 80.0, 160.0] {
                let r = score_catch(&catalog, species, len, &mut rng()).unwrap();
                assert!(r.weight_lbs > last, "{species} at {len} cm");
                last = r.weight_lbs;
            }
        }
    }

    #[test]
    fn test_tier_resolution_is_monotonic_in_length() {
        let catalog = test_catalog();
        for (species, tiers) in &catalog.renown {
            let mut last = TierName::Juvenile;
            for tenths in 1..3000u32 {
                let len = f64::from(tenths) / 10.0;
                let name = resolve_tier(tiers, species, len).unwrap().name;
                assert!(name >= last, "{species} regressed at {len} cm");
                last = name;
            }
        }
    }

    #[test]
    fn test_unknown_species_rejected() {
        let catalog = test_catalog();
        let err = score_catch(&catalog, "Kraken", 100.0, &mut rng()).unwrap_err();
        assert_eq!(err, ScoreError::UnknownSpecies("Kraken".into()));
    }

    #[test]
    fn test_bad_lengths_rejected() {
        let catalog = test_catalog();
        for bad in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let err = score_catch(&catalog, "Mackerel", bad, &mut rng()).unwrap_err();
            assert!(matches!(err, ScoreError::InvalidLength(_)), "{bad}");
        }
    }

    #[test]
    fn test_empty_tier_table_is_an_error() {
        let mut catalog = test_catalog();
        catalog.renown.insert("Mackerel".into(), Vec::new());
        let err = score_catch(&catalog, "Mackerel", 30.0, &mut rng()).unwrap_err();
        assert_eq!(err, ScoreError::MissingTierTable("Mackerel".into()));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let catalog = test_catalog();
        let a = score_catch(&catalog, "Cod", 90.0, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = score_catch(&catalog, "Cod", 90.0, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
        assert!(a.legendary_name.is_some());
    }
}
