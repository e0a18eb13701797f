//! Weapon category definitions

use std::fmt;

use crate::spec::{self, WeaponTree};

/// The fourteen weapon categories.
///
/// Each category is processed independently of the others. Codes match the
/// keys of the scraped data file and the names of the emitted database files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeaponCategory {
    Greatsword,
    Longsword,
    SwordAndShield,
    DualBlades,
    Lance,
    Gunlance,
    Hammer,
    HuntingHorn,
    SwitchAxe,
    ChargeBlade,
    InsectGlaive,
    LightBowgun,
    HeavyBowgun,
    Bow,
}

/// All weapon categories, in pipeline processing order
pub const WEAPON_CATEGORIES: &[WeaponCategory] = &[
    WeaponCategory::Greatsword,
    WeaponCategory::Longsword,
    WeaponCategory::SwordAndShield,
    WeaponCategory::DualBlades,
    WeaponCategory::Lance,
    WeaponCategory::Gunlance,
    WeaponCategory::Hammer,
    WeaponCategory::HuntingHorn,
    WeaponCategory::SwitchAxe,
    WeaponCategory::ChargeBlade,
    WeaponCategory::InsectGlaive,
    WeaponCategory::LightBowgun,
    WeaponCategory::HeavyBowgun,
    WeaponCategory::Bow,
];

impl WeaponCategory {
    /// Stable category code (scraped data key / output file suffix)
    pub fn code(&self) -> &'static str {
        match self {
            Self::Greatsword => "greatsword",
            Self::Longsword => "longsword",
            Self::SwordAndShield => "swordandshield",
            Self::DualBlades => "dualblades",
            Self::Lance => "lance",
            Self::Gunlance => "gunlance",
            Self::Hammer => "hammer",
            Self::HuntingHorn => "huntinghorn",
            Self::SwitchAxe => "switchaxe",
            Self::ChargeBlade => "chargeblade",
            Self::InsectGlaive => "insectglaive",
            Self::LightBowgun => "lightbowgun",
            Self::HeavyBowgun => "heavybowgun",
            Self::Bow => "bow",
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Greatsword => "Greatsword",
            Self::Longsword => "Longsword",
            Self::SwordAndShield => "Sword and Shield",
            Self::DualBlades => "Dual Blades",
            Self::Lance => "Lance",
            Self::Gunlance => "Gunlance",
            Self::Hammer => "Hammer",
            Self::HuntingHorn => "Hunting Horn",
            Self::SwitchAxe => "Switch Axe",
            Self::ChargeBlade => "Charge Blade",
            Self::InsectGlaive => "Insect Glaive",
            Self::LightBowgun => "Light Bowgun",
            Self::HeavyBowgun => "Heavy Bowgun",
            Self::Bow => "Bow",
        }
    }

    /// Melee categories carry sharpness data in their scraped records
    pub fn is_melee(&self) -> bool {
        !matches!(self, Self::LightBowgun | Self::HeavyBowgun | Self::Bow)
    }

    /// Get weapon category by code
    pub fn from_code(code: &str) -> Option<Self> {
        WEAPON_CATEGORIES.iter().copied().find(|c| c.code() == code)
    }

    /// The category's hardcoded tree specification, if transcribed.
    ///
    /// Categories without a table yet return `None` and are skipped by the
    /// pipeline rather than processed with invented identity data.
    pub fn tree_spec(&self) -> Option<&'static [WeaponTree]> {
        match self {
            Self::Greatsword => Some(spec::greatsword::GREATSWORD_TREES),
            Self::SwordAndShield => Some(spec::swordandshield::SWORD_AND_SHIELD_TREES),
            Self::HuntingHorn => Some(spec::huntinghorn::HUNTING_HORN_TREES),
            _ => None,
        }
    }
}

impl fmt::Display for WeaponCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
