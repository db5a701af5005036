use crate::shared::*;

/// Populate the catalog with all 43 sea species.
///
/// Each row is (name, weight_per_cm in lbs, score multiplier, category).
/// The weight coefficient is a rough linear estimate tuned per species so
/// that a typical adult length lands near the real-world average weight;
/// the multiplier reflects fighting difficulty and prestige.
pub fn populate_species(catalog: &mut SpeciesCatalog) {
    use SpeciesCategory::*;

    let rows: [(&str, f64, f64, SpeciesCategory); 43] = [
        // ── Sharks ───────────────────────────────────────────────────────
        ("Blue shark", 0.59, 12.0, Shark),
        ("Porbeagle shark", 1.10, 15.0, Shark),
        ("Thresher shark", 1.00, 20.0, Shark),
        ("Tope", 0.31, 10.0, Shark),
        ("Smoothhound", 0.15, 6.0, Shark),
        ("Spurdog", 0.15, 8.0, Shark),
        ("Bull huss", 0.16, 5.0, Shark),
        ("Lesser spotted dogfish", 0.043, 2.0, Shark),
        // ── Rays & skates ────────────────────────────────────────────────
        ("Thornback ray", 0.25, 5.0, Ray),
        ("Blonde ray", 0.37, 6.0, Ray),
        ("Small-eyed ray", 0.23, 7.0, Ray),
        ("Spotted ray", 0.13, 4.0, Ray),
        ("Undulate ray", 0.30, 9.0, Ray),
        ("Cuckoo ray", 0.10, 11.0, Ray),
        // ── Flatfish ─────────────────────────────────────────────────────
        ("Plaice", 0.049, 4.0, Flatfish),
        ("Dab", 0.033, 2.0, Flatfish),
        ("Flounder", 0.056, 3.0, Flatfish),
        ("Sole (common/Dover)", 0.056, 6.0, Flatfish),
        ("Turbot", 0.21, 9.0, Flatfish),
        ("Brill", 0.17, 8.0, Flatfish),
        // ── Eels ─────────────────────────────────────────────────────────
        ("Conger eel", 0.27, 7.0, Eel),
        ("Silver eel", 0.035, 10.0, Eel),
        ("Launce (greater sand eel)", 0.007, 1.3, Eel),
        // ── Roundfish ────────────────────────────────────────────────────
        ("Cod", 0.125, 6.0, Roundfish),
        ("Pollack", 0.11, 4.0, Roundfish),
        ("Coalfish", 0.083, 3.0, Roundfish),
        ("Bass", 0.10, 8.0, Roundfish),
        ("Mackerel", 0.023, 1.0, Roundfish),
        ("Scad (horse mackerel)", 0.017, 1.5, Roundfish),
        ("Garfish", 0.025, 5.0, Roundfish),
        ("Whiting", 0.030, 2.0, Roundfish),
        ("Pouting", 0.029, 1.5, Roundfish),
        ("Poor cod", 0.020, 1.2, Roundfish),
        ("Ling", 0.27, 9.0, Roundfish),
        ("Haddock", 0.083, 3.5, Roundfish),
        // ── Gurnards & oddities ──────────────────────────────────────────
        ("Red gurnard", 0.056, 3.0, GurnardsAndOddities),
        ("Grey gurnard", 0.043, 2.5, GurnardsAndOddities),
        ("Tub gurnard", 0.083, 4.0, GurnardsAndOddities),
        ("John Dory", 0.080, 12.0, GurnardsAndOddities),
        // ── Wrasse ───────────────────────────────────────────────────────
        ("Ballan wrasse", 0.080, 3.0, Wrasse),
        ("Cuckoo wrasse", 0.029, 4.0, Wrasse),
        // ── Bream ────────────────────────────────────────────────────────
        ("Black bream", 0.075, 5.0, Bream),
        ("Gilthead bream", 0.10, 8.0, Bream),
    ];

    for (name, weight_per_cm, score_mult, category) in rows {
        catalog.species.insert(
            name.to_string(),
            SpeciesDef {
                name: name.to_string(),
                weight_per_cm,
                score_mult,
                category,
            },
        );
    }
}
