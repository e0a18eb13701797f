//! Pipeline error definitions.
//!
//! Every variant is fatal for the category being processed: these are
//! structural data-authoring errors meant to be fixed in the input, so there
//! is no recovery, partial output, or default substitution.

use thiserror::Error;

use crate::category::WeaponCategory;

/// Errors raised while building specs, merging records, or resolving
/// inheritance
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error("{category}: duplicate weapon id {id:?}")]
    DuplicateId { category: WeaponCategory, id: String },

    #[error("{category}: duplicate tree name {tree:?}")]
    DuplicateTree {
        category: WeaponCategory,
        tree: String,
    },

    #[error("{category}: tree {tree:?} grafts onto unknown weapon id {base:?}")]
    UnknownBaseId {
        category: WeaponCategory,
        tree: String,
        base: String,
    },

    #[error("{category}: weapon {name:?} is not in the tree spec")]
    UnknownWeapon {
        category: WeaponCategory,
        name: String,
    },

    #[error("{category}: no scraped record for {name:?} (id {id:?} in {tree:?})")]
    MissingWeaponData {
        category: WeaponCategory,
        tree: String,
        name: String,
        id: String,
    },

    #[error("{category}: weapon {name:?} is missing required field {field:?}")]
    MissingField {
        category: WeaponCategory,
        name: String,
        field: &'static str,
    },

    #[error(
        "{category}: weapon {id:?} has {slots} rampage slots but {ancestor:?} has {ancestor_slots}"
    )]
    SlotCountMismatch {
        category: WeaponCategory,
        id: String,
        ancestor: String,
        slots: usize,
        ancestor_slots: usize,
    },

    #[error("{category}: ancestry of weapon {id:?} exceeds {max_depth} steps, parent chain is cyclic")]
    CyclicAncestry {
        category: WeaponCategory,
        id: String,
        max_depth: usize,
    },
}
