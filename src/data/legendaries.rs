use crate::shared::*;

/// Populate the legendary name pools, five names per species.
///
/// A legendary-band catch draws one of these uniformly at random and the
/// name is stamped onto the catch record and the angler's legendary log.
pub fn populate_legendary_names(catalog: &mut SpeciesCatalog) {
    let pools: [(&str, [&str; 5]); 43] = [
        // ── Sharks ───────────────────────────────────────────────────────
        (
            "Blue shark",
            [
                "Cobalt Kraken-Kisser",
                "Sapphire Slashfin",
                "Azure Ripjaw",
                "Midnight Bluesbane",
                "Turquoise Titan",
            ],
        ),
        (
            "Porbeagle shark",
            [
                "Barking Beagleback",
                "Porbeagle of Perdition",
                "Beaglejaw Battalion",
                "Hound of the Deep",
                "Barkaleviathan",
            ],
        ),
        (
            "Thresher shark",
            [
                "The Threshinator",
                "Whale-Tail Wraith",
                "Scythefin Titan",
                "Thresher's Requiem",
                "Tailwhip Terror",
            ],
        ),
        (
            "Tope",
            [
                "Topes of Wrath",
                "Abyssal Apex Tope",
                "Tope Terrorizer",
                "Sea-Tope Behemoth",
                "Tip-Top Tornado",
            ],
        ),
        (
            "Smoothhound",
            [
                "Velvet-Jaw Sovereign",
                "Silken Hound of the Deep",
                "Smoothhound Scourge",
                "Lupine Leviathan",
                "Slippery Sovereign",
            ],
        ),
        (
            "Spurdog",
            [
                "Thornspine Tyrant",
                "Spurred Fang Fiend",
                "Spurdog Sovereign",
                "Spikejaw Behemoth",
                "Spinegrip Leviathan",
            ],
        ),
        (
            "Bull huss",
            [
                "Bullhorn Behemoth",
                "Husshammer Herald",
                "Raging Bull Huss",
                "Abyssal Bull Rager",
                "Horned Fury of the Deep",
            ],
        ),
        (
            "Lesser spotted dogfish",
            [
                "Spotsbane Pup",
                "Microspotted Mauler",
                "Dotjaw Desolator",
                "Pup of a Thousand Spots",
                "Dappled Doom",
            ],
        ),
        // ── Rays & skates ────────────────────────────────────────────────
        (
            "Thornback ray",
            [
                "Thornback Titan",
                "Spikescale Sovereign",
                "Bristleback Brutus",
                "Prickledus Rex",
                "Thornbringer Leviathan",
            ],
        ),
        (
            "Blonde ray",
            [
                "Goldilocks Glider",
                "Blondelord of the Deep",
                "Flaxen Flapper",
                "Sunlit Sovereign",
                "Honeyfin Horror",
            ],
        ),
        (
            "Small-eyed ray",
            [
                "Squintwing Scourge",
                "Pinpoint Prowler",
                "Microsight Marauder",
                "The Squinter Sovereign",
                "Beady-Gaze Behemoth",
            ],
        ),
        (
            "Spotted ray",
            [
                "Polka-Dot Destroyer",
                "Spotstrike Sovereign",
                "Punctal Powerhouse",
                "Polkadot Phantom",
                "Dottedus Rex",
            ],
        ),
        (
            "Undulate ray",
            [
                "Wavelord of the Depths",
                "Rippleback Ravager",
                "Undulatus Titan",
                "Cresting Chaos",
                "Sinuous Scourge",
            ],
        ),
        (
            "Cuckoo ray",
            [
                "Cuckoofin Czar",
                "Lunefin Lunatic",
                "Cuckoorageous Leviathan",
                "Birdfin Behemoth",
                "Devouring Cuckoo",
            ],
        ),
        // ── Flatfish ─────────────────────────────────────────────────────
        (
            "Plaice",
            [
                "Placidus Rex",
                "Plaicequake Terror",
                "Flatland Fury",
                "Plaice of Peril",
                "Bedrock Beast",
            ],
        ),
        (
            "Dab",
            [
                "Dabolisher of Seas",
                "Dabsolutive Destroyer",
                "The Dabdominator",
                "Abyssal Dabraith",
                "Flat-Strike Fiend",
            ],
        ),
        (
            "Flounder",
            [
                "Flounderwraith",
                "Abyssal Floundraptor",
                "Floudershred Titan",
                "Flounder Fury",
                "Flatfin Phenom",
            ],
        ),
        (
            "Sole (common/Dover)",
            [
                "Solstice Sovereign",
                "Dover Dominator",
                "Solemnus Rex",
                "Sandstride Scourge",
                "Single-Foot Behemoth",
            ],
        ),
        (
            "Turbot",
            [
                "Turbo-Tsunami Turbot",
                "Turbotron Titan",
                "Spottledus Maximus",
                "Abyssal Discus",
                "Turbotoren Ravager",
            ],
        ),
        (
            "Brill",
            [
                "Brilliance Bringer",
                "Brillarific Beast",
                "Abyssal Beacon",
                "Brill's Wrath",
                "Flatlight Fury",
            ],
        ),
        // ── Eels ─────────────────────────────────────────────────────────
        (
            "Conger eel",
            [
                "Conge-Ravager",
                "Abyssal Congeratron",
                "Coilpede Conqueror",
                "Jawconger Juggernaut",
                "Serpentail Sovereign",
            ],
        ),
        (
            "Silver eel",
            [
                "Argentum Serpent",
                "Silverstrike Sovereign",
                "Sterling Serpent",
                "Gleamjaw Guardian",
                "Moonlit Mamba",
            ],
        ),
        (
            "Launce (greater sand eel)",
            [
                "Lance of the Sandy Depths",
                "Sandlance Scourge",
                "Spearfin Sovereign",
                "Substratum Stabber",
                "Launcetastic Leviathan",
            ],
        ),
        // ── Roundfish ────────────────────────────────────────────────────
        (
            "Cod",
            [
                "Codzilla",
                "Codfather of Chaos",
                "Abyssal Coddom",
                "Codgaze Colossus",
                "Bountiful Behemoth",
            ],
        ),
        (
            "Pollack",
            [
                "Pollackpocalypse",
                "The Pollack Paladin",
                "Abyssal Pollscraper",
                "Pollackulous Predator",
                "Puncturepoll Conqueror",
            ],
        ),
        (
            "Coalfish",
            [
                "Coalcrusher Titan",
                "Sulfurous Sovereign",
                "Carbocoalus Beast",
                "Emberjaw Leviathan",
                "Blackscale Behemoth",
            ],
        ),
        (
            "Bass",
            [
                "Bassquake Behemoth",
                "Sonic-Boom Bass",
                "Bassdrop Dominator",
                "Lowdown Leviathan",
                "Thunder-Tone Titan",
            ],
        ),
        (
            "Mackerel",
            [
                "Mackerel Maelstrom",
                "Mackersaurus Rex",
                "Flickerfin Fury",
                "Silver-Bullet Beast",
                "Mach-Fin Maverick",
            ],
        ),
        (
            "Scad (horse mackerel)",
            [
                "Hoofin' Horror",
                "Scadnado Sovereign",
                "Abyssal Stallionfin",
                "Horsepower Ravager",
                "Scaddling Scourge",
            ],
        ),
        (
            "Garfish",
            [
                "Garfury Striker",
                "Spikebeak Sovereign",
                "Garfish Gargantua",
                "Beakblade Beast",
                "Lancer Leviathan",
            ],
        ),
        (
            "Whiting",
            [
                "Whiteout Wraith",
                "Whitelash Terror",
                "Whiting Warlord",
                "Bleachblade Behemoth",
                "Frostfin Fury",
            ],
        ),
        (
            "Pouting",
            [
                "Poutpocalypse",
                "Abyssal Sulker",
                "Poutjaw Juggernaut",
                "Sullen Sovereign",
                "Grumblefin Giant",
            ],
        ),
        (
            "Poor cod",
            [
                "Pitycod Punisher",
                "Patron Saint of Poor Cod",
                "Benevolent Behemoth",
                "Misanthropic Morsel",
                "Underdog of the Deep",
            ],
        ),
        (
            "Ling",
            [
                "Linglord Leviathan",
                "Sea-Ling Sovereign",
                "Dreadling Destroyer",
                "Lingblade Rumbler",
                "Enduring Eelcod",
            ],
        ),
        (
            "Haddock",
            [
                "Haddockhammer",
                "The Haddominator",
                "Abyssal Flamefin",
                "Pisci-haddock Punisher",
                "Saltshard Sovereign",
            ],
        ),
        // ── Gurnards & oddities ──────────────────────────────────────────
        (
            "Red gurnard",
            [
                "Crimson Crawler",
                "Gurnador of the Deep",
                "Ruby Rumbler",
                "Scarlet Striker",
                "Firefin Fury",
            ],
        ),
        (
            "Grey gurnard",
            [
                "Ashen Ambusher",
                "Greyhound of the Depths",
                "Smokestack Sovereign",
                "Shadowfin Stalker",
                "Fogwing Fiend",
            ],
        ),
        (
            "Tub gurnard",
            [
                "Tubbered Titan",
                "Gurnardian Guardian",
                "Tubstrike Terror",
                "Bulkfin Behemoth",
                "Barrelback Brute",
            ],
        ),
        (
            "John Dory",
            [
                "Doryus Dominator",
                "Lucky Stinger",
                "Zeus-Dory Rex",
                "Singular Scourge",
                "Marblefin Monarch",
            ],
        ),
        // ── Wrasse ───────────────────────────────────────────────────────
        (
            "Ballan wrasse",
            [
                "Ballan Basher",
                "Wrassewarrior of the Deep",
                "Boulderjaw Behemoth",
                "Stonecrush Sovereign",
                "Reefbulwark Titan",
            ],
        ),
        (
            "Cuckoo wrasse",
            [
                "Cuckoo Crusader",
                "Wrassewraith",
                "Lunefin Lancer",
                "Eccentrifin Emperor",
                "Cuckooclamor Colossus",
            ],
        ),
        // ── Bream ────────────────────────────────────────────────────────
        (
            "Black bream",
            [
                "Onyx Breambringer",
                "Blackout Behemoth",
                "Shadowbream Scourge",
                "Obsidianjaw Leviathan",
                "Darkfin Dominator",
            ],
        ),
        (
            "Gilthead bream",
            [
                "Gilded Crownfin",
                "Aureate Avenger",
                "Helmbream Herald",
                "Suncrest Sovereign",
                "Goldenhead Guardian",
            ],
        ),
    ];

    for (species, names) in pools {
        catalog.legendary_names.insert(
            species.to_string(),
            names.iter().map(|n| n.to_string()).collect(),
        );
    }
}
