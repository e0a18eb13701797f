//! Weapon record types and the per-category record arena.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::category::WeaponCategory;
use crate::error::PipelineError;

/// One scraped weapon record, keyed by display name.
///
/// Field names follow the scraped data file. The per-slot rampage option
/// lists in `ramp_skills` may contain empty lists; the merger filters those
/// out before slot indices are assigned.
#[derive(Debug, Clone, Deserialize)]
pub struct RawWeapon {
    pub name: String,
    pub rarity: u8,
    pub attack: i32,
    pub affinity: i32,
    pub defense: i32,
    #[serde(rename = "decos")]
    pub deco_slots: Vec<u8>,
    #[serde(rename = "elestat")]
    pub ele_stat: BTreeMap<String, i32>,
    #[serde(rename = "ramps")]
    pub ramp_skills: Vec<Vec<String>>,
    /// Melee categories only
    #[serde(default)]
    pub base_sharpness: Option<Vec<u16>>,
    /// Melee categories only
    #[serde(default)]
    pub max_sharpness: Option<Vec<u16>>,
    /// Hunting horn only
    #[serde(default)]
    pub huntinghorn_songs: Option<BTreeMap<String, String>>,
}

/// Sharpness bar data for melee weapons.
///
/// The scraped arrays carry one value per sharpness level; the final level
/// is trimmed at merge time, matching the upstream data fix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sharpness {
    pub base: Vec<u16>,
    pub max: Vec<u16>,
}

impl Sharpness {
    pub(crate) fn from_scrape(mut base: Vec<u16>, mut max: Vec<u16>) -> Self {
        base.truncate(base.len().saturating_sub(1));
        max.truncate(max.len().saturating_sub(1));
        Sharpness { base, max }
    }
}

/// One entry of a resolved rampage-skill slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RampSkillEntry {
    pub skill: String,
    /// `None` when the skill is native to the weapon itself
    pub inherited_from: Option<String>,
}

/// Canonical per-weapon record, produced by the merger and completed by the
/// resolver
#[derive(Debug, Clone, Serialize)]
pub struct WeaponRecord {
    pub id: String,
    pub parent_id: Option<String>,
    pub tree_name: String,
    pub end_of_line: bool,

    pub name: String,
    pub rarity: u8,
    pub attack: i32,
    pub affinity: i32,
    pub defense: i32,
    pub deco_slots: Vec<u8>,
    pub ele_stat: BTreeMap<String, i32>,

    /// Native rampage-skill options, one ordered list per slot
    pub ramp_slots: Vec<Vec<String>>,
    /// Effective options per slot, populated by the resolver; empty until
    /// resolution runs
    pub resolved_ramp_slots: Vec<Vec<RampSkillEntry>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sharpness: Option<Sharpness>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub songs: Option<BTreeMap<String, String>>,
}

/// Record arena for one category.
///
/// Records stay in authoritative spec order; parent lookups go through the
/// id index, so the upgrade forest needs no owned child pointers.
#[derive(Debug, Clone)]
pub struct CategoryRecords {
    category: WeaponCategory,
    records: Vec<WeaponRecord>,
    by_id: HashMap<String, usize>,
}

impl CategoryRecords {
    pub(crate) fn new(category: WeaponCategory) -> Self {
        CategoryRecords {
            category,
            records: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    pub(crate) fn push(&mut self, record: WeaponRecord) -> Result<(), PipelineError> {
        if self.by_id.contains_key(&record.id) {
            return Err(PipelineError::DuplicateId {
                category: self.category,
                id: record.id.clone(),
            });
        }
        self.by_id.insert(record.id.clone(), self.records.len());
        self.records.push(record);
        Ok(())
    }

    pub fn category(&self) -> WeaponCategory {
        self.category
    }

    /// Look up a record by weapon id
    pub fn get(&self, id: &str) -> Option<&WeaponRecord> {
        self.by_id.get(id).map(|&i| &self.records[i])
    }

    /// Records in authoritative spec order
    pub fn iter(&self) -> std::slice::Iter<'_, WeaponRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn record(&self, index: usize) -> &WeaponRecord {
        &self.records[index]
    }

    pub(crate) fn record_mut(&mut self, index: usize) -> &mut WeaponRecord {
        &mut self.records[index]
    }
}

impl<'a> IntoIterator for &'a CategoryRecords {
    type Item = &'a WeaponRecord;
    type IntoIter = std::slice::Iter<'a, WeaponRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
