//! Hunting Horn tree specification

use super::WeaponTree;

/// Hunting Horn upgrade trees, in display order
pub const HUNTING_HORN_TREES: &[WeaponTree] = &[
    WeaponTree {
        name: "Kamura Tree",
        base: None,
        weapons: &[
            ("Kamura Chorus I", "1a"),
            ("Kamura Chorus II", "1b"),
            ("Kamura Chorus III", "1c"),
            ("Kamura Chorus IV", "1d"),
            ("Kamura Chorus V", "1e"),
            ("Kamura Ninja Horn", "1f"),
        ],
    },
    WeaponTree {
        name: "Mizutsune Tree",
        base: None,
        weapons: &[
            ("Poetic Bell I", "2a"),
            ("Poetic Bell II", "2b"),
            ("Summoning Bell", "2c"),
        ],
    },
    WeaponTree {
        name: "Rakna-Kadaki Tree",
        base: None,
        weapons: &[
            ("Sublime Bell I", "3a"),
            ("Sublime Bell II", "3b"),
            ("Araknahorn", "3c"),
        ],
    },
    WeaponTree {
        name: "Basarios Tree",
        base: None,
        weapons: &[
            ("Basarios Rock I", "4a"),
            ("Basarios Rock Mk.II", "4b"),
            ("Gigant Rock", "4c"),
        ],
    },
    WeaponTree {
        name: "Zinogre Tree",
        base: None,
        weapons: &[
            ("Usurper's Growl I", "5a"),
            ("Usurper's Growl II", "5b"),
            ("Despot's Thunderclap", "5c"),
        ],
    },
    WeaponTree {
        name: "Arzuros Tree",
        base: None,
        weapons: &[
            ("Zurogong Primo I", "6a"),
            ("Zurogong Primo II", "6b"),
            ("Zurogong Secundo", "6c"),
        ],
    },
    WeaponTree {
        name: "Tigrex Tree",
        base: None,
        weapons: &[
            ("Striped Dragonga I", "7a"),
            ("Striped Dragonga II", "7b"),
            ("Tigrex Horn", "7c"),
        ],
    },
    WeaponTree {
        name: "Barioth Tree",
        base: None,
        weapons: &[
            ("Bariguiro I", "8a"),
            ("Bariguiro II", "8b"),
            ("Algiguiro", "8c"),
        ],
    },
    WeaponTree {
        name: "Somnacanth Tree",
        base: None,
        weapons: &[
            ("Frilled Flute I", "9a"),
            ("Frilled Flute II", "9b"),
            ("Illusory Flute", "9c"),
        ],
    },
    WeaponTree {
        name: "Ore Tree",
        base: None,
        weapons: &[
            ("Iron Horn I", "10a"),
            ("Wind Horn", "10b"),
            ("Metal Bagpipe I", "10c"),
            ("Great Bagpipe", "10d"),
            ("Heavy Bagpipe I", "10e"),
            ("Fortissimo", "10f"),
        ],
    },
    WeaponTree {
        name: "Nargacuga Tree",
        base: None,
        weapons: &[
            ("Hidden Harmonic I", "11a"),
            ("Hidden Harmonic II", "11b"),
            ("Cry in the Night", "11c"),
        ],
    },
    WeaponTree {
        name: "Pukei-Pukei Tree",
        base: None,
        weapons: &[
            ("Pukei Bagpipe I", "12a"),
            ("Pukei Bagpipe II", "12b"),
            ("Datura Lurr", "12c"),
        ],
    },
    WeaponTree {
        name: "Anjanath Tree",
        base: None,
        weapons: &[
            ("Flammenkornett I", "13a"),
            ("Flammenkornett II", "13b"),
            ("Forte Flammenkornett", "13c"),
        ],
    },
    WeaponTree {
        name: "Rathian Tree",
        base: None,
        weapons: &[
            ("Valkyrie Chordmaker I", "14a"),
            ("Valkyrie Chordmaker II", "14b"),
            ("Queen Chordmaker", "14c"),
        ],
    },
    WeaponTree {
        name: "Barroth Tree",
        base: None,
        weapons: &[
            ("Sandpipe I", "15a"),
            ("Sandpipe II", "15b"),
            ("Sandcrier", "15c"),
        ],
    },
    WeaponTree {
        name: "Tetranadon Tree",
        base: None,
        weapons: &[
            ("Frog Flute I", "16a"),
            ("Frog Flute II", "16b"),
            ("Amphibia Allargando", "16c"),
        ],
    },
    WeaponTree {
        name: "Izuchi Tree",
        base: None,
        weapons: &[
            ("Wind Thief Horn I", "17a"),
            ("Wind Thief Horn II", "17b"),
            ("Gale Horn", "17c"),
        ],
    },
    WeaponTree {
        name: "Royal Ludroth Tree",
        base: None,
        weapons: &[
            ("Droth Drone I", "18a"),
            ("Droth Drone II", "18b"),
            ("Droth Roar", "18c"),
        ],
    },
    WeaponTree {
        name: "Bone Tree",
        base: None,
        weapons: &[
            ("Bone Horn I", "19a"),
            ("Bone Horn II", "19b"),
            ("Hardened Bone Horn", "19c"),
            ("Hunter's Horn I", "19d"),
            ("Native's Horn", "19e"),
        ],
    },
    WeaponTree {
        name: "Diablos Tree",
        base: None,
        weapons: &[
            ("Duo Horn I", "20a"),
            ("Duo Horn II", "20b"),
            ("Duo Risoluto", "20c"),
        ],
    },
    WeaponTree {
        name: "Bullfango Tree",
        base: None,
        weapons: &[
            ("Bull Grunt I", "21a"),
            ("Bull Grunt II", "21b"),
            ("Wild Grunt", "21c"),
        ],
    },
    WeaponTree {
        name: "Rathalos Tree",
        base: None,
        weapons: &[
            ("Flame Feroce I", "22a"),
            ("Flame Feroce II", "22b"),
            ("Rathalos Feroce", "22c"),
        ],
    },
    WeaponTree {
        name: "Kulu-Ya-Ku Tree",
        base: None,
        weapons: &[
            ("Kulu Mosso I", "23a"),
            ("Kulu Mosso II", "23b"),
            ("Kulu Grosso", "23c"),
        ],
    },
    WeaponTree {
        name: "Khezu Tree",
        base: None,
        weapons: &[
            ("Khezu Horn I", "24a"),
            ("Khezu Horn II", "24b"),
            ("Khezu Flute", "24c"),
        ],
    },
    WeaponTree {
        name: "Bnahabra Tree",
        base: None,
        weapons: &[
            ("Vicello Nulo I", "25a"),
            ("Vicello Nulo II", "25b"),
            ("Vicello Unu", "25c"),
            ("Vicello Nulo Black I", "25d"),
            ("Vicello Nulo Black II", "25e"),
            ("Vicello Uno Black", "25f"),
        ],
    },
    WeaponTree {
        name: "Bnahabra (Paralysis)",
        base: None,
        weapons: &[
            ("Vicello Nulo Green I", "26a"),
            ("Vicello Nulo Green II", "26b"),
            ("Vicello Unu Green", "26c"),
        ],
    },
    WeaponTree {
        name: "Bnahabra (Ice)",
        base: None,
        weapons: &[
            ("Vicello Nulo White I", "27a"),
            ("Vicello Nulo White II", "27b"),
            ("Vicello Unu White", "27c"),
        ],
    },
    WeaponTree {
        name: "Magnamalo Tree",
        base: None,
        weapons: &[
            ("Sinister Strum I", "28a"),
            ("Sinister Strum II", "28b"),
            ("Sinister Shadestrum", "28c"),
        ],
    },
    WeaponTree {
        name: "Rajang Tree",
        base: None,
        weapons: &[
            ("Denden Daiko I", "29a"),
            ("Denden Daiko II", "29b"),
            ("Denden Doomsounder", "29c"),
        ],
    },
    WeaponTree {
        name: "Ibushi Tree",
        base: None,
        weapons: &[
            ("Azure Elder Horn I", "30a"),
            ("Azure Elder Horn II", "30b"),
            ("Abyssal Gale Horn", "30c"),
        ],
    },
    WeaponTree {
        name: "Narwa Tree",
        base: None,
        weapons: &[
            ("Thunderbolt Horn I", "31a"),
            ("Abyssal Storm Horn", "31b"),
        ],
    },
    WeaponTree {
        name: "Bazelgeuse Tree",
        base: None,
        weapons: &[
            ("Rookslayer Drum I", "32a"),
            ("Rookslayer Drum II", "32b"),
            ("Bazelreid Rookslayer", "32c"),
        ],
    },
    WeaponTree {
        name: "Kushala Daora Tree",
        base: None,
        weapons: &[
            ("Daora's Taus I", "33a"),
            ("Daora's Baphophone", "33b"),
        ],
    },
    WeaponTree {
        name: "Teostra Tree",
        base: None,
        weapons: &[
            ("Teostra's Tiple I", "34a"),
            ("Teostra's Orphée", "34b"),
        ],
    },
    WeaponTree {
        name: "Chameleos Tree",
        base: None,
        weapons: &[
            ("Blessed Ocarina I", "35a"),
            ("Cursed Ocarina", "35b"),
        ],
    },
    WeaponTree {
        name: "Valstrax Tree",
        base: None,
        weapons: &[
            ("Redwing Flute I", "36a"),
            ("Reddnaught Ritmico", "36b"),
        ],
    },
    WeaponTree {
        name: "Chaos Tree",
        base: None,
        weapons: &[
            ("Poison Fungasax I", "37a"),
            ("Poison Fungasax II", "37b"),
            ("Toxic Fungasax", "37c"),
        ],
    },
    WeaponTree {
        name: "Magia Tree",
        base: None,
        weapons: &[
            ("Magia Charm I", "38a"),
            ("Magia Charm II", "38b"),
            ("Magia Charm III", "38c"),
            ("Magia Charmbell", "38d"),
        ],
    },
    WeaponTree {
        name: "Spio Tree",
        base: None,
        weapons: &[
            ("Cornupion I", "39a"),
            ("Cornupion II", "39b"),
            ("Webbed Cornupion", "39c"),
        ],
    },
    WeaponTree {
        name: "Bombadgy Tree",
        base: None,
        weapons: &[
            ("Grass Flute I", "40a"),
            ("Grass Flute II", "40b"),
            ("Bombadgy's Cry", "40c"),
        ],
    },
    WeaponTree {
        name: "Rampage Tree",
        base: None,
        weapons: &[
            ("Rampage Agitato I", "41a"),
            ("Rampage Agitato II", "41b"),
            ("Rampage Agitato III", "41c"),
            ("Rampage Agitato IV", "41d"),
            ("Rampage Agitato V", "41e"),
            ("Rampage Agitato S", "41f"),
        ],
    },
];
