//! Weapon tree specification tables and the spec builder.
//!
//! The hardcoded tables are the authoritative ordering and identity source
//! for the whole pipeline: scraped data never changes them, it only has to
//! match them. Tables are transcribed one category at a time from the
//! in-game upgrade trees.

// TODO: transcribe the remaining eleven category tables (same format as
// huntinghorn.rs); untranscribed categories are skipped by the pipeline.

use std::collections::{HashMap, HashSet};

use crate::category::WeaponCategory;
use crate::error::PipelineError;

pub mod greatsword;
pub mod huntinghorn;
pub mod swordandshield;

/// One upgrade tree within a category's hardcoded specification.
///
/// Trees are authored in display order. A tree with a `base` grafts onto a
/// weapon declared in an earlier tree; the first weapon of an ungrafted tree
/// is a root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeaponTree {
    pub name: &'static str,
    pub base: Option<&'static str>,
    /// (display name, weapon id) pairs in upgrade order
    pub weapons: &'static [(&'static str, &'static str)],
}

/// Spec metadata for a single weapon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecEntry {
    pub name: String,
    pub id: String,
    /// `None` for tree roots
    pub parent_id: Option<String>,
    pub tree_name: String,
    /// Set on the final weapon of each tree (emitted as the endline marker)
    pub end_of_line: bool,
}

/// A category's built specification: entries in authoritative order plus a
/// display-name index
#[derive(Debug, Clone)]
pub struct CategorySpec {
    category: WeaponCategory,
    entries: Vec<SpecEntry>,
    by_name: HashMap<String, usize>,
}

impl CategorySpec {
    pub fn category(&self) -> WeaponCategory {
        self.category
    }

    /// Entries in authoritative spec order
    pub fn entries(&self) -> &[SpecEntry] {
        &self.entries
    }

    /// Look up a spec entry by weapon display name
    pub fn get(&self, name: &str) -> Option<&SpecEntry> {
        self.by_name.get(name).map(|&i| &self.entries[i])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build a category's spec from its tree table.
///
/// Assigns each weapon its parent (the previous weapon in its tree, the
/// tree's graft base for the first weapon, or none for a root) and marks the
/// final weapon of each tree. Weapon ids and tree names must be unique
/// within the category.
pub fn build_category_spec(
    category: WeaponCategory,
    trees: &[WeaponTree],
) -> Result<CategorySpec, PipelineError> {
    let mut entries = Vec::new();
    let mut by_name = HashMap::new();
    let mut ids_seen: HashSet<&str> = HashSet::new();
    let mut tree_names: HashSet<&str> = HashSet::new();

    for tree in trees {
        if !tree_names.insert(tree.name) {
            return Err(PipelineError::DuplicateTree {
                category,
                tree: tree.name.to_string(),
            });
        }

        if let Some(base) = tree.base {
            if !ids_seen.contains(base) {
                return Err(PipelineError::UnknownBaseId {
                    category,
                    tree: tree.name.to_string(),
                    base: base.to_string(),
                });
            }
        }

        let mut parent_id = tree.base;
        for (i, &(name, id)) in tree.weapons.iter().enumerate() {
            if !ids_seen.insert(id) {
                return Err(PipelineError::DuplicateId {
                    category,
                    id: id.to_string(),
                });
            }

            by_name.insert(name.to_string(), entries.len());
            entries.push(SpecEntry {
                name: name.to_string(),
                id: id.to_string(),
                parent_id: parent_id.map(str::to_string),
                tree_name: tree.name.to_string(),
                end_of_line: i + 1 == tree.weapons.len(),
            });

            parent_id = Some(id);
        }
    }

    Ok(CategorySpec {
        category,
        entries,
        by_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATEGORY: WeaponCategory = WeaponCategory::Hammer;

    const TREES: &[WeaponTree] = &[
        WeaponTree {
            name: "Ore Tree",
            base: None,
            weapons: &[
                ("Iron Hammer I", "1a"),
                ("Iron Hammer II", "1b"),
                ("Iron Devil", "1c"),
            ],
        },
        WeaponTree {
            name: "Bone Tree",
            base: None,
            weapons: &[("Bone Hammer I", "2a"), ("Bone Bludgeon", "2b")],
        },
    ];

    #[test]
    fn test_parent_assignment() {
        let spec = build_category_spec(CATEGORY, TREES).unwrap();
        assert_eq!(spec.len(), 5);

        let root = spec.get("Iron Hammer I").unwrap();
        assert_eq!(root.id, "1a");
        assert_eq!(root.parent_id, None);
        assert!(!root.end_of_line);

        let mid = spec.get("Iron Hammer II").unwrap();
        assert_eq!(mid.parent_id.as_deref(), Some("1a"));

        let last = spec.get("Iron Devil").unwrap();
        assert_eq!(last.parent_id.as_deref(), Some("1b"));
        assert!(last.end_of_line);

        // Trees chain independently
        assert_eq!(spec.get("Bone Hammer I").unwrap().parent_id, None);
        assert_eq!(spec.get("Bone Hammer I").unwrap().tree_name, "Bone Tree");
    }

    #[test]
    fn test_entries_keep_authoritative_order() {
        let spec = build_category_spec(CATEGORY, TREES).unwrap();
        let ids: Vec<&str> = spec.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["1a", "1b", "1c", "2a", "2b"]);
    }

    #[test]
    fn test_graft_base_becomes_parent() {
        const GRAFTED: &[WeaponTree] = &[
            WeaponTree {
                name: "Ore Tree",
                base: None,
                weapons: &[("Iron Hammer I", "1a"), ("Iron Hammer II", "1b")],
            },
            WeaponTree {
                name: "Ore Tree (Poison)",
                base: Some("1a"),
                weapons: &[("Venom Hammer I", "2a"), ("Venom Hammer II", "2b")],
            },
        ];
        let spec = build_category_spec(CATEGORY, GRAFTED).unwrap();
        assert_eq!(spec.get("Venom Hammer I").unwrap().parent_id.as_deref(), Some("1a"));
        assert_eq!(spec.get("Venom Hammer II").unwrap().parent_id.as_deref(), Some("2a"));
    }

    #[test]
    fn test_graft_base_must_exist() {
        const BAD: &[WeaponTree] = &[WeaponTree {
            name: "Orphan Tree",
            base: Some("99z"),
            weapons: &[("Orphan Hammer", "1a")],
        }];
        let err = build_category_spec(CATEGORY, BAD).unwrap_err();
        assert_eq!(
            err,
            PipelineError::UnknownBaseId {
                category: CATEGORY,
                tree: "Orphan Tree".to_string(),
                base: "99z".to_string(),
            }
        );
    }

    #[test]
    fn test_duplicate_id_rejected() {
        const BAD: &[WeaponTree] = &[
            WeaponTree {
                name: "Ore Tree",
                base: None,
                weapons: &[("Iron Hammer I", "1a")],
            },
            WeaponTree {
                name: "Bone Tree",
                base: None,
                weapons: &[("Bone Hammer I", "1a")],
            },
        ];
        let err = build_category_spec(CATEGORY, BAD).unwrap_err();
        assert_eq!(
            err,
            PipelineError::DuplicateId {
                category: CATEGORY,
                id: "1a".to_string(),
            }
        );
    }

    #[test]
    fn test_duplicate_tree_name_rejected() {
        const BAD: &[WeaponTree] = &[
            WeaponTree {
                name: "Ore Tree",
                base: None,
                weapons: &[("Iron Hammer I", "1a")],
            },
            WeaponTree {
                name: "Ore Tree",
                base: None,
                weapons: &[("Iron Hammer II", "1b")],
            },
        ];
        let err = build_category_spec(CATEGORY, BAD).unwrap_err();
        assert!(matches!(err, PipelineError::DuplicateTree { .. }));
    }

    #[test]
    fn test_hardcoded_tables_build() {
        for &category in crate::category::WEAPON_CATEGORIES {
            if let Some(trees) = category.tree_spec() {
                let spec = build_category_spec(category, trees).unwrap();
                assert!(!spec.is_empty());
            }
        }
    }
}
