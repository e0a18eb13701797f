//! Merges scraped weapon records with a category's tree spec.

use std::collections::HashMap;

use crate::category::WeaponCategory;
use crate::error::PipelineError;
use crate::record::{CategoryRecords, RawWeapon, Sharpness, WeaponRecord};
use crate::spec::{CategorySpec, SpecEntry};

/// Join scraped records with the spec by display name, producing one
/// canonical record per weapon id in authoritative order.
///
/// The spec and the scraped set must correspond one-to-one: a scraped name
/// missing from the spec or a spec entry without a scraped record is a fatal
/// error. Empty per-slot rampage option lists are filtered out before slot
/// indices are assigned, and the resulting slot counts are checked against
/// each weapon's parent before the records are handed on.
pub fn merge_category(
    spec: &CategorySpec,
    raw_weapons: Vec<RawWeapon>,
) -> Result<CategoryRecords, PipelineError> {
    let category = spec.category();

    let mut raw_by_name: HashMap<String, RawWeapon> = HashMap::new();
    for raw in raw_weapons {
        let entry = spec
            .get(&raw.name)
            .ok_or_else(|| PipelineError::UnknownWeapon {
                category,
                name: raw.name.clone(),
            })?;
        if raw_by_name.insert(raw.name.clone(), raw).is_some() {
            return Err(PipelineError::DuplicateId {
                category,
                id: entry.id.clone(),
            });
        }
    }

    let mut records = CategoryRecords::new(category);
    for entry in spec.entries() {
        let raw = raw_by_name
            .remove(&entry.name)
            .ok_or_else(|| PipelineError::MissingWeaponData {
                category,
                tree: entry.tree_name.clone(),
                name: entry.name.clone(),
                id: entry.id.clone(),
            })?;
        records.push(build_record(category, entry, raw)?)?;
    }

    check_slot_alignment(&records)?;

    Ok(records)
}

fn build_record(
    category: WeaponCategory,
    entry: &SpecEntry,
    raw: RawWeapon,
) -> Result<WeaponRecord, PipelineError> {
    let ramp_slots: Vec<Vec<String>> = raw
        .ramp_skills
        .into_iter()
        .filter(|options| !options.is_empty())
        .collect();

    let sharpness = if category.is_melee() {
        let base = raw
            .base_sharpness
            .ok_or_else(|| missing(category, &entry.name, "base_sharpness"))?;
        let max = raw
            .max_sharpness
            .ok_or_else(|| missing(category, &entry.name, "max_sharpness"))?;
        Some(Sharpness::from_scrape(base, max))
    } else {
        None
    };

    let songs = if category == WeaponCategory::HuntingHorn {
        Some(
            raw.huntinghorn_songs
                .ok_or_else(|| missing(category, &entry.name, "huntinghorn_songs"))?,
        )
    } else {
        None
    };

    Ok(WeaponRecord {
        id: entry.id.clone(),
        parent_id: entry.parent_id.clone(),
        tree_name: entry.tree_name.clone(),
        end_of_line: entry.end_of_line,
        name: raw.name,
        rarity: raw.rarity,
        attack: raw.attack,
        affinity: raw.affinity,
        defense: raw.defense,
        deco_slots: raw.deco_slots,
        ele_stat: raw.ele_stat,
        ramp_slots,
        resolved_ramp_slots: Vec::new(),
        sharpness,
        songs,
    })
}

fn missing(category: WeaponCategory, name: &str, field: &'static str) -> PipelineError {
    PipelineError::MissingField {
        category,
        name: name.to_string(),
        field,
    }
}

/// Every weapon must expose exactly as many rampage slots as its parent.
///
/// Empty-list filtering can desynchronize counts across a tree; that is a
/// structural input error, not something to reconcile.
fn check_slot_alignment(records: &CategoryRecords) -> Result<(), PipelineError> {
    for record in records.iter() {
        let Some(parent_id) = record.parent_id.as_deref() else {
            continue;
        };
        let Some(parent) = records.get(parent_id) else {
            continue; // dangling parents are caught by the resolver walk
        };
        if parent.ramp_slots.len() != record.ramp_slots.len() {
            return Err(PipelineError::SlotCountMismatch {
                category: records.category(),
                id: record.id.clone(),
                ancestor: parent.id.clone(),
                slots: record.ramp_slots.len(),
                ancestor_slots: parent.ramp_slots.len(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{build_category_spec, WeaponTree};

    const CATEGORY: WeaponCategory = WeaponCategory::Bow;

    const TREES: &[WeaponTree] = &[WeaponTree {
        name: "Ore Tree",
        base: None,
        weapons: &[("Iron Bow I", "1a"), ("Iron Bow II", "1b")],
    }];

    fn raw(name: &str, ramps: &[&[&str]]) -> RawWeapon {
        RawWeapon {
            name: name.to_string(),
            rarity: 1,
            attack: 60,
            affinity: 0,
            defense: 0,
            deco_slots: vec![1],
            ele_stat: Default::default(),
            ramp_skills: ramps
                .iter()
                .map(|slot| slot.iter().map(|s| s.to_string()).collect())
                .collect(),
            base_sharpness: None,
            max_sharpness: None,
            huntinghorn_songs: None,
        }
    }

    fn spec() -> crate::spec::CategorySpec {
        build_category_spec(CATEGORY, TREES).unwrap()
    }

    #[test]
    fn test_merge_preserves_spec_order_and_metadata() {
        let records = merge_category(
            &spec(),
            vec![
                raw("Iron Bow II", &[&["attack_boost_2"]]),
                raw("Iron Bow I", &[&["attack_boost_1"]]),
            ],
        )
        .unwrap();

        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["1a", "1b"]);

        let child = records.get("1b").unwrap();
        assert_eq!(child.parent_id.as_deref(), Some("1a"));
        assert_eq!(child.tree_name, "Ore Tree");
        assert!(child.end_of_line);
        assert!(child.resolved_ramp_slots.is_empty());
    }

    #[test]
    fn test_empty_slot_lists_are_filtered() {
        let records = merge_category(
            &spec(),
            vec![
                raw("Iron Bow I", &[&[], &["a"], &[]]),
                raw("Iron Bow II", &[&["b"]]),
            ],
        )
        .unwrap();
        assert_eq!(records.get("1a").unwrap().ramp_slots, vec![vec!["a"]]);
    }

    #[test]
    fn test_unknown_weapon_rejected() {
        let err = merge_category(&spec(), vec![raw("Chrome Bow", &[])]).unwrap_err();
        assert_eq!(
            err,
            PipelineError::UnknownWeapon {
                category: CATEGORY,
                name: "Chrome Bow".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_weapon_data_rejected() {
        let err = merge_category(&spec(), vec![raw("Iron Bow I", &[&["a"]])]).unwrap_err();
        assert_eq!(
            err,
            PipelineError::MissingWeaponData {
                category: CATEGORY,
                tree: "Ore Tree".to_string(),
                name: "Iron Bow II".to_string(),
                id: "1b".to_string(),
            }
        );
    }

    #[test]
    fn test_duplicate_raw_record_rejected() {
        let err = merge_category(
            &spec(),
            vec![
                raw("Iron Bow I", &[&["a"]]),
                raw("Iron Bow I", &[&["a"]]),
                raw("Iron Bow II", &[&["b"]]),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, PipelineError::DuplicateId { .. }));
    }

    #[test]
    fn test_slot_count_mismatch_detected_at_merge() {
        // Filtering leaves the child with one slot fewer than its parent
        let err = merge_category(
            &spec(),
            vec![
                raw("Iron Bow I", &[&["a"], &["b"]]),
                raw("Iron Bow II", &[&["c"], &[]]),
            ],
        )
        .unwrap_err();
        assert_eq!(
            err,
            PipelineError::SlotCountMismatch {
                category: CATEGORY,
                id: "1b".to_string(),
                ancestor: "1a".to_string(),
                slots: 1,
                ancestor_slots: 2,
            }
        );
    }

    #[test]
    fn test_melee_requires_sharpness() {
        const MELEE_TREES: &[WeaponTree] = &[WeaponTree {
            name: "Ore Tree",
            base: None,
            weapons: &[("Iron Hammer I", "1a")],
        }];
        let melee_spec = build_category_spec(WeaponCategory::Hammer, MELEE_TREES).unwrap();
        let err = merge_category(&melee_spec, vec![raw("Iron Hammer I", &[&["a"]])]).unwrap_err();
        assert_eq!(
            err,
            PipelineError::MissingField {
                category: WeaponCategory::Hammer,
                name: "Iron Hammer I".to_string(),
                field: "base_sharpness",
            }
        );
    }

    #[test]
    fn test_sharpness_trims_final_level() {
        const MELEE_TREES: &[WeaponTree] = &[WeaponTree {
            name: "Ore Tree",
            base: None,
            weapons: &[("Iron Hammer I", "1a")],
        }];
        let melee_spec = build_category_spec(WeaponCategory::Hammer, MELEE_TREES).unwrap();

        let mut weapon = raw("Iron Hammer I", &[&["a"]]);
        weapon.base_sharpness = Some(vec![50, 60, 30, 0, 0, 0, 0]);
        weapon.max_sharpness = Some(vec![50, 60, 80, 20, 0, 0, 0]);

        let records = merge_category(&melee_spec, vec![weapon]).unwrap();
        let sharpness = records.get("1a").unwrap().sharpness.clone().unwrap();
        assert_eq!(sharpness.base, vec![50, 60, 30, 0, 0, 0]);
        assert_eq!(sharpness.max, vec![50, 60, 80, 20, 0, 0]);
    }
}
