//! Sword and Shield tree specification

use super::WeaponTree;

/// Sword and Shield upgrade trees, in display order
pub const SWORD_AND_SHIELD_TREES: &[WeaponTree] = &[
    WeaponTree {
        name: "Kamura Tree",
        base: None,
        weapons: &[
            ("Kamura Glintblade I", "1a"),
            ("Kamura Glintblade II", "1b"),
            ("Kamura Glintblade III", "1c"),
            ("Kamura Glintblade IV", "1d"),
            ("Kamura Glintblade V", "1e"),
            ("Kamura Ninja Blade", "1f"),
        ],
    },
    WeaponTree {
        name: "Ore Tree",
        base: None,
        weapons: &[
            ("Hunter's Knife I", "2a"),
            ("Hunter's Knife II", "2b"),
            ("Steel Knife", "2c"),
            ("Chrome Slicer I", "2d"),
            ("Chrome Slicer II", "2e"),
            ("Chrome Deathscythe", "2f"),
        ],
    },
    WeaponTree {
        name: "Bone Tree",
        base: None,
        weapons: &[
            ("Bone Kukri I", "3a"),
            ("Bone Kukri II", "3b"),
            ("Chief Kukri", "3c"),
            ("Grand Barong I", "3d"),
            ("Grand Barong II", "3e"),
            ("Grandest Barong", "3f"),
        ],
    },
    WeaponTree {
        name: "Magnamalo Tree",
        base: None,
        weapons: &[
            ("Sinister Sword I", "4a"),
            ("Sinister Sword II", "4b"),
            ("Sinister Shadeblade", "4c"),
        ],
    },
    WeaponTree {
        name: "Mizutsune Tree",
        base: None,
        weapons: &[
            ("Morning Dawn I", "5a"),
            ("Morning Dawn II", "5b"),
            ("Daybreak Pradarona", "5c"),
        ],
    },
    WeaponTree {
        name: "Rathian Tree",
        base: None,
        weapons: &[
            ("Princess Rapier I", "6a"),
            ("Princess Rapier II", "6b"),
            ("Queen Rapier", "6c"),
        ],
    },
    WeaponTree {
        name: "Rathalos Tree",
        base: None,
        weapons: &[
            ("Djinn I", "7a"),
            ("Djinn II", "7b"),
            ("Grand Djinn", "7c"),
        ],
    },
    WeaponTree {
        name: "Tigrex Tree",
        base: None,
        weapons: &[
            ("Rex Talon I", "8a"),
            ("Rex Talon II", "8b"),
            ("Tigrex Sword", "8c"),
        ],
    },
    WeaponTree {
        name: "Zinogre Tree",
        base: None,
        weapons: &[
            ("Usurper's Firstrain I", "9a"),
            ("Usurper's Firstrain II", "9b"),
            ("Despot's Cloudburst", "9c"),
        ],
    },
    WeaponTree {
        name: "Nargacuga Tree",
        base: None,
        weapons: &[
            ("Hidden Edge I", "10a"),
            ("Hidden Edge II", "10b"),
            ("Corpse Blade", "10c"),
        ],
    },
    WeaponTree {
        name: "Barioth Tree",
        base: None,
        weapons: &[
            ("Barioth Spike I", "11a"),
            ("Barioth Spike II", "11b"),
            ("Amber Spike", "11c"),
        ],
    },
    WeaponTree {
        name: "Somnacanth Tree",
        base: None,
        weapons: &[
            ("Frilled Claw I", "12a"),
            ("Frilled Claw II", "12b"),
            ("Illusory Frilled Claw", "12c"),
        ],
    },
    WeaponTree {
        name: "Pukei-Pukei Tree",
        base: None,
        weapons: &[
            ("Datura Blitz I", "13a"),
            ("Datura Blitz II", "13b"),
            ("Datura Storm", "13c"),
        ],
    },
    WeaponTree {
        name: "Royal Ludroth Tree",
        base: None,
        weapons: &[
            ("Droth Dagger I", "14a"),
            ("Droth Dagger II", "14b"),
            ("Spiral Splash", "14c"),
        ],
    },
    WeaponTree {
        name: "Izuchi Tree",
        base: None,
        weapons: &[
            ("Wind Thief Sword I", "15a"),
            ("Wind Thief Sword II", "15b"),
            ("Gale Sword", "15c"),
        ],
    },
    WeaponTree {
        name: "Arzuros Tree",
        base: None,
        weapons: &[
            ("Arzuros Naginata I", "16a"),
            ("Arzuros Naginata II", "16b"),
            ("Azure Naginata", "16c"),
        ],
    },
    WeaponTree {
        name: "Khezu Tree",
        base: None,
        weapons: &[
            ("Khezu Razor I", "17a"),
            ("Khezu Razor II", "17b"),
            ("Khezu Shredder", "17c"),
        ],
    },
    WeaponTree {
        name: "Rajang Tree",
        base: None,
        weapons: &[
            ("Ploshasta I", "18a"),
            ("Ploshasta II", "18b"),
            ("Demonlord Ploshasta", "18c"),
        ],
    },
    WeaponTree {
        name: "Bazelgeuse Tree",
        base: None,
        weapons: &[
            ("Rookslayer Blade I", "19a"),
            ("Rookslayer Blade II", "19b"),
            ("Bazelreid Rookslayer", "19c"),
        ],
    },
    WeaponTree {
        name: "Ibushi Tree",
        base: None,
        weapons: &[
            ("Azure Elder Sword I", "20a"),
            ("Azure Elder Sword II", "20b"),
            ("Abyssal Gale Sword", "20c"),
        ],
    },
    WeaponTree {
        name: "Narwa Tree",
        base: None,
        weapons: &[
            ("Thunderbolt Sword I", "21a"),
            ("Abyssal Storm Sword", "21b"),
        ],
    },
    WeaponTree {
        name: "Kushala Daora Tree",
        base: None,
        weapons: &[
            ("Daora's Razor I", "22a"),
            ("Daora's Raid", "22b"),
        ],
    },
    WeaponTree {
        name: "Teostra Tree",
        base: None,
        weapons: &[
            ("Teostra's Spada I", "23a"),
            ("Teostra's Emblem", "23b"),
        ],
    },
    WeaponTree {
        name: "Chameleos Tree",
        base: None,
        weapons: &[
            ("Blessed Dagger I", "24a"),
            ("Cursed Dagger", "24b"),
        ],
    },
    WeaponTree {
        name: "Valstrax Tree",
        base: None,
        weapons: &[
            ("Redwing Sword I", "25a"),
            ("Reddnaught Sword", "25b"),
        ],
    },
    WeaponTree {
        name: "Rampage Tree",
        base: None,
        weapons: &[
            ("Rampage Blade I", "26a"),
            ("Rampage Blade II", "26b"),
            ("Rampage Blade III", "26c"),
            ("Rampage Blade IV", "26d"),
            ("Rampage Blade V", "26e"),
            ("Rampage Blade S", "26f"),
        ],
    },
];
