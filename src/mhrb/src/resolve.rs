//! Rampage-skill inheritance resolution.
//!
//! A weapon's effective option set per slot is its own native options plus
//! every option any upgrade ancestor offers in that slot, each annotated
//! with the ancestor that contributed it. Ancestors are visited nearest
//! first and the first contributor of an option wins, so the result is
//! deterministic and a closer ancestor's copy of a shared option is the
//! canonical provenance record.

use std::collections::HashSet;

use crate::error::PipelineError;
use crate::record::{CategoryRecords, RampSkillEntry};

/// Populate `resolved_ramp_slots` on every record of a category.
///
/// Fails without partial output on a slot-count mismatch between a weapon
/// and one of its ancestors, or on a cyclic parent chain.
pub fn resolve_category(records: &mut CategoryRecords) -> Result<(), PipelineError> {
    // A valid parent chain can never be longer than the arena itself, so the
    // arena size doubles as the cycle guard.
    let max_depth = records.len();

    for index in 0..records.len() {
        let resolved = resolve_weapon(records, index, max_depth)?;
        records.record_mut(index).resolved_ramp_slots = resolved;
    }
    Ok(())
}

fn resolve_weapon(
    records: &CategoryRecords,
    index: usize,
    max_depth: usize,
) -> Result<Vec<Vec<RampSkillEntry>>, PipelineError> {
    let weapon = records.record(index);
    let category = records.category();

    // Native options come first, in their stored order, with no origin.
    let mut resolved: Vec<Vec<RampSkillEntry>> = weapon
        .ramp_slots
        .iter()
        .map(|options| {
            options
                .iter()
                .map(|skill| RampSkillEntry {
                    skill: skill.clone(),
                    inherited_from: None,
                })
                .collect()
        })
        .collect();
    let mut seen: Vec<HashSet<&str>> = weapon
        .ramp_slots
        .iter()
        .map(|options| options.iter().map(String::as_str).collect())
        .collect();

    let mut ancestor_id = weapon.parent_id.as_deref();
    let mut depth = 0;
    while let Some(id) = ancestor_id {
        depth += 1;
        if depth > max_depth {
            return Err(PipelineError::CyclicAncestry {
                category,
                id: weapon.id.clone(),
                max_depth,
            });
        }

        let ancestor = records.get(id).ok_or_else(|| PipelineError::UnknownWeapon {
            category,
            name: id.to_string(),
        })?;

        if ancestor.ramp_slots.len() != weapon.ramp_slots.len() {
            return Err(PipelineError::SlotCountMismatch {
                category,
                id: weapon.id.clone(),
                ancestor: ancestor.id.clone(),
                slots: weapon.ramp_slots.len(),
                ancestor_slots: ancestor.ramp_slots.len(),
            });
        }

        for (slot, options) in ancestor.ramp_slots.iter().enumerate() {
            for skill in options {
                if seen[slot].insert(skill.as_str()) {
                    resolved[slot].push(RampSkillEntry {
                        skill: skill.clone(),
                        inherited_from: Some(ancestor.id.clone()),
                    });
                }
            }
        }

        ancestor_id = ancestor.parent_id.as_deref();
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::WeaponCategory;
    use crate::merge::merge_category;
    use crate::record::RawWeapon;
    use crate::spec::{build_category_spec, WeaponTree};

    const CATEGORY: WeaponCategory = WeaponCategory::Bow;

    fn raw(name: &str, ramps: &[&[&str]]) -> RawWeapon {
        RawWeapon {
            name: name.to_string(),
            rarity: 1,
            attack: 60,
            affinity: 0,
            defense: 0,
            deco_slots: vec![],
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

    fn entry(skill: &str, origin: Option<&str>) -> RampSkillEntry {
        RampSkillEntry {
            skill: skill.to_string(),
            inherited_from: origin.map(str::to_string),
        }
    }

    /// A → B → C line with one slot each (the worked inheritance example)
    fn abc_records() -> CategoryRecords {
        const TREES: &[WeaponTree] = &[WeaponTree {
            name: "Ore Tree",
            base: None,
            weapons: &[("A", "a"), ("B", "b"), ("C", "c")],
        }];
        let spec = build_category_spec(CATEGORY, TREES).unwrap();
        merge_category(
            &spec,
            vec![
                raw("A", &[&["x"]]),
                raw("B", &[&["y"]]),
                raw("C", &[&["x", "z"]]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_inheritance_with_dedup_and_provenance() {
        let mut records = abc_records();
        resolve_category(&mut records).unwrap();

        // C keeps its own "x", so A's copy is suppressed; B's "y" is inherited
        assert_eq!(
            records.get("c").unwrap().resolved_ramp_slots,
            vec![vec![
                entry("x", None),
                entry("z", None),
                entry("y", Some("b")),
            ]]
        );

        // B inherits A's "x"
        assert_eq!(
            records.get("b").unwrap().resolved_ramp_slots,
            vec![vec![entry("y", None), entry("x", Some("a"))]]
        );
    }

    #[test]
    fn test_root_resolves_to_native_options() {
        let mut records = abc_records();
        resolve_category(&mut records).unwrap();
        assert_eq!(
            records.get("a").unwrap().resolved_ramp_slots,
            vec![vec![entry("x", None)]]
        );
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let mut first = abc_records();
        let mut second = abc_records();
        resolve_category(&mut first).unwrap();
        resolve_category(&mut second).unwrap();
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.resolved_ramp_slots, b.resolved_ramp_slots);
        }
    }

    #[test]
    fn test_native_options_stay_in_front() {
        let mut records = abc_records();
        resolve_category(&mut records).unwrap();
        for weapon in records.iter() {
            for (slot, options) in weapon.ramp_slots.iter().enumerate() {
                let resolved = &weapon.resolved_ramp_slots[slot];
                assert!(resolved.len() >= options.len());
                for (i, skill) in options.iter().enumerate() {
                    assert_eq!(resolved[i], entry(skill, None));
                }
            }
        }
    }

    #[test]
    fn test_no_duplicate_skills_within_a_slot() {
        let mut records = abc_records();
        resolve_category(&mut records).unwrap();
        for weapon in records.iter() {
            for slot in &weapon.resolved_ramp_slots {
                let mut seen = HashSet::new();
                for option in slot {
                    assert!(seen.insert(option.skill.as_str()), "{:?}", weapon.id);
                }
            }
        }
    }

    #[test]
    fn test_nearest_ancestor_wins_provenance() {
        // "x" is native to both A and B; C must credit B, the nearer one
        const TREES: &[WeaponTree] = &[WeaponTree {
            name: "Ore Tree",
            base: None,
            weapons: &[("A", "a"), ("B", "b"), ("C", "c")],
        }];
        let spec = build_category_spec(CATEGORY, TREES).unwrap();
        let mut records = merge_category(
            &spec,
            vec![
                raw("A", &[&["x"]]),
                raw("B", &[&["x"]]),
                raw("C", &[&["z"]]),
            ],
        )
        .unwrap();
        resolve_category(&mut records).unwrap();

        assert_eq!(
            records.get("c").unwrap().resolved_ramp_slots,
            vec![vec![entry("z", None), entry("x", Some("b"))]]
        );
    }

    #[test]
    fn test_every_ancestor_option_is_present() {
        let mut records = abc_records();
        resolve_category(&mut records).unwrap();
        let resolved = &records.get("c").unwrap().resolved_ramp_slots[0];
        for skill in ["x", "y", "z"] {
            assert!(resolved.iter().any(|e| e.skill == skill));
        }
    }

    #[test]
    fn test_grafted_tree_inherits_across_the_graft() {
        const TREES: &[WeaponTree] = &[
            WeaponTree {
                name: "Ore Tree",
                base: None,
                weapons: &[("A", "a"), ("B", "b")],
            },
            WeaponTree {
                name: "Khezu Tree",
                base: Some("a"),
                weapons: &[("K", "k")],
            },
        ];
        let spec = build_category_spec(CATEGORY, TREES).unwrap();
        let mut records = merge_category(
            &spec,
            vec![
                raw("A", &[&["x"]]),
                raw("B", &[&["y"]]),
                raw("K", &[&["z"]]),
            ],
        )
        .unwrap();
        resolve_category(&mut records).unwrap();

        // K descends from A only; B's options must not leak in
        assert_eq!(
            records.get("k").unwrap().resolved_ramp_slots,
            vec![vec![entry("z", None), entry("x", Some("a"))]]
        );
    }

    #[test]
    fn test_slot_count_mismatch_is_fatal() {
        let mut records = abc_records();
        // Corrupt B to have two slots after the merge checks ran
        let index = records.iter().position(|r| r.id == "b").unwrap();
        records.record_mut(index).ramp_slots = vec![vec!["y".to_string()], vec![]];

        // B itself hits the mismatch first, walking up to A
        let err = resolve_category(&mut records).unwrap_err();
        assert_eq!(
            err,
            PipelineError::SlotCountMismatch {
                category: CATEGORY,
                id: "b".to_string(),
                ancestor: "a".to_string(),
                slots: 2,
                ancestor_slots: 1,
            }
        );
    }

    #[test]
    fn test_cyclic_ancestry_is_detected() {
        let mut records = abc_records();
        // Corrupt the chain into a → b → a
        let index = records.iter().position(|r| r.id == "a").unwrap();
        records.record_mut(index).parent_id = Some("b".to_string());

        let err = resolve_category(&mut records).unwrap_err();
        assert!(matches!(err, PipelineError::CyclicAncestry { .. }));
    }
}
