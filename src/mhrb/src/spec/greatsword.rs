//! Greatsword tree specification

use super::WeaponTree;

/// Greatsword upgrade trees, in display order
pub const GREATSWORD_TREES: &[WeaponTree] = &[
    WeaponTree {
        name: "Kamura Tree",
        base: None,
        weapons: &[
            ("Kamura Cleaver I", "1a"),
            ("Kamura Cleaver II", "1b"),
            ("Kamura Cleaver III", "1c"),
            ("Kamura Cleaver IV", "1d"),
            ("Kamura Cleaver V", "1e"),
            ("Kamura Ninja Cleaver", "1f"),
        ],
    },
    WeaponTree {
        name: "Ore Tree",
        base: None,
        weapons: &[
            ("Buster Sword I", "2a"),
            ("Buster Sword II", "2b"),
            ("Buster Blade", "2c"),
            ("Chrome Razor I", "2d"),
            ("Chrome Razor II", "2e"),
            ("Chrome Quietus", "2f"),
        ],
    },
    // Khezu line branches off the mid ore blade rather than its own root
    WeaponTree {
        name: "Khezu Tree",
        base: Some("2c"),
        weapons: &[
            ("Khezu Shock Sword I", "3a"),
            ("Khezu Shock Sword II", "3b"),
            ("Khezu Shock Blade", "3c"),
        ],
    },
    WeaponTree {
        name: "Bone Tree",
        base: None,
        weapons: &[
            ("Bone Blade I", "4a"),
            ("Bone Blade II", "4b"),
            ("Bone Slasher", "4c"),
            ("Giant Jawblade I", "4d"),
            ("Giant Jawblade II", "4e"),
            ("Grand Jawblade", "4f"),
        ],
    },
    WeaponTree {
        name: "Magnamalo Tree",
        base: None,
        weapons: &[
            ("Sinister Blade I", "5a"),
            ("Sinister Blade II", "5b"),
            ("Sinister Shadowblade", "5c"),
        ],
    },
    WeaponTree {
        name: "Rathian Tree",
        base: None,
        weapons: &[
            ("Valkyrie Blade I", "6a"),
            ("Valkyrie Blade II", "6b"),
            ("Queen's Broadsword", "6c"),
        ],
    },
    WeaponTree {
        name: "Rathalos Tree",
        base: None,
        weapons: &[
            ("Red Wing I", "7a"),
            ("Red Wing II", "7b"),
            ("Inferno Wing", "7c"),
        ],
    },
    WeaponTree {
        name: "Anjanath Tree",
        base: None,
        weapons: &[
            ("Flammenzahn I", "8a"),
            ("Flammenzahn II", "8b"),
            ("Forte Flammenzahn", "8c"),
        ],
    },
    WeaponTree {
        name: "Tigrex Tree",
        base: None,
        weapons: &[
            ("Tigrex Blade I", "9a"),
            ("Tigrex Blade II", "9b"),
            ("Tigrex Cleaver", "9c"),
        ],
    },
    WeaponTree {
        name: "Zinogre Tree",
        base: None,
        weapons: &[
            ("Usurper's Storm I", "10a"),
            ("Usurper's Storm II", "10b"),
            ("Despot's Blackstorm", "10c"),
        ],
    },
    WeaponTree {
        name: "Nargacuga Tree",
        base: None,
        weapons: &[
            ("Hidden Blade I", "11a"),
            ("Hidden Blade II", "11b"),
            ("Deepest Night", "11c"),
        ],
    },
    WeaponTree {
        name: "Barioth Tree",
        base: None,
        weapons: &[
            ("Icicle Blade I", "12a"),
            ("Icicle Blade II", "12b"),
            ("Glacial Cleaver", "12c"),
        ],
    },
    WeaponTree {
        name: "Mizutsune Tree",
        base: None,
        weapons: &[
            ("Fond Farewell I", "13a"),
            ("Fond Farewell II", "13b"),
            ("Parting Gift", "13c"),
        ],
    },
    WeaponTree {
        name: "Diablos Tree",
        base: None,
        weapons: &[
            ("Cataclysm Sword I", "14a"),
            ("Cataclysm Sword II", "14b"),
            ("Grand Cataclysm", "14c"),
        ],
    },
    WeaponTree {
        name: "Somnacanth Tree",
        base: None,
        weapons: &[
            ("Frilled Slash I", "15a"),
            ("Frilled Slash II", "15b"),
            ("Illusory Frilled Slash", "15c"),
        ],
    },
    WeaponTree {
        name: "Royal Ludroth Tree",
        base: None,
        weapons: &[
            ("Droth Splashsword I", "16a"),
            ("Droth Splashsword II", "16b"),
            ("Droth Spraysword", "16c"),
        ],
    },
    WeaponTree {
        name: "Izuchi Tree",
        base: None,
        weapons: &[
            ("Wind Thief Blade I", "17a"),
            ("Wind Thief Blade II", "17b"),
            ("Gale Blade", "17c"),
        ],
    },
    WeaponTree {
        name: "Arzuros Tree",
        base: None,
        weapons: &[
            ("Arzuros Strikequill I", "18a"),
            ("Arzuros Strikequill II", "18b"),
            ("Azure Strikequill", "18c"),
        ],
    },
    WeaponTree {
        name: "Rajang Tree",
        base: None,
        weapons: &[
            ("Undying Blade I", "19a"),
            ("Undying Blade II", "19b"),
            ("Undying Light", "19c"),
        ],
    },
    WeaponTree {
        name: "Bazelgeuse Tree",
        base: None,
        weapons: &[
            ("Rookslayer Saber I", "20a"),
            ("Rookslayer Saber II", "20b"),
            ("Bazelreid Rookslayer", "20c"),
        ],
    },
    WeaponTree {
        name: "Ibushi Tree",
        base: None,
        weapons: &[
            ("Azure Elder Blade I", "21a"),
            ("Azure Elder Blade II", "21b"),
            ("Abyssal Gale Blade", "21c"),
        ],
    },
    WeaponTree {
        name: "Narwa Tree",
        base: None,
        weapons: &[
            ("Thunderbolt Blade I", "22a"),
            ("Abyssal Storm Cleaver", "22b"),
        ],
    },
    WeaponTree {
        name: "Kushala Daora Tree",
        base: None,
        weapons: &[
            ("Daora's Decimator I", "23a"),
            ("Daora's Tempest", "23b"),
        ],
    },
    WeaponTree {
        name: "Teostra Tree",
        base: None,
        weapons: &[
            ("Teostra's Arx I", "24a"),
            ("Teostra's Emblem", "24b"),
        ],
    },
    WeaponTree {
        name: "Chameleos Tree",
        base: None,
        weapons: &[
            ("Genie's Expanse I", "25a"),
            ("Genie's Grandeur", "25b"),
        ],
    },
    WeaponTree {
        name: "Valstrax Tree",
        base: None,
        weapons: &[
            ("Redwing Claymore I", "26a"),
            ("Reddnaught Blade", "26b"),
        ],
    },
    WeaponTree {
        name: "Rampage Tree",
        base: None,
        weapons: &[
            ("Rampage Sword I", "27a"),
            ("Rampage Sword II", "27b"),
            ("Rampage Sword III", "27c"),
            ("Rampage Sword IV", "27d"),
            ("Rampage Sword V", "27e"),
            ("Rampage Sword S", "27f"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_khezu_grafts_onto_ore() {
        let khezu = GREATSWORD_TREES.iter().find(|t| t.name == "Khezu Tree").unwrap();
        assert_eq!(khezu.base, Some("2c"));

        let ore = GREATSWORD_TREES.iter().find(|t| t.name == "Ore Tree").unwrap();
        assert!(ore.weapons.iter().any(|&(_, id)| id == "2c"));
    }
}
