//! # mhrb
//!
//! Monster Hunter Rise Builder data pipeline library.
//!
//! This library provides functionality to:
//! - Build per-category weapon tree specifications from the hardcoded tables
//! - Merge scraped per-weapon stat records with a spec by display name
//! - Resolve each weapon's effective rampage-skill options, including options
//!   inherited from upgrade ancestors, annotated with provenance
//! - Hand resolved categories to an output backend via the [`Emitter`] trait
//!
//! ## Example
//!
//! ```no_run
//! use std::collections::HashMap;
//! use std::fs;
//!
//! use mhrb::{build_category_spec, merge_category, resolve_category};
//! use mhrb::{RawWeapon, WeaponCategory};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let text = fs::read_to_string("downloaded_data.json")?;
//! let mut scraped: HashMap<String, Vec<RawWeapon>> = serde_json::from_str(&text)?;
//!
//! let category = WeaponCategory::HuntingHorn;
//! let trees = category.tree_spec().ok_or("no tree spec")?;
//! let spec = build_category_spec(category, trees)?;
//!
//! let raw = scraped.remove(category.code()).ok_or("no scraped data")?;
//! let mut records = merge_category(&spec, raw)?;
//! resolve_category(&mut records)?;
//!
//! for weapon in records.iter() {
//!     println!("{}: {} slots", weapon.name, weapon.resolved_ramp_slots.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod category;
pub mod emit;
pub mod error;
pub mod merge;
pub mod record;
pub mod resolve;
pub mod spec;

// Re-export commonly used items
#[doc(inline)]
pub use category::{WeaponCategory, WEAPON_CATEGORIES};
#[doc(inline)]
pub use emit::{EmitError, Emitter};
#[doc(inline)]
pub use error::PipelineError;
#[doc(inline)]
pub use merge::merge_category;
#[doc(inline)]
pub use record::{CategoryRecords, RampSkillEntry, RawWeapon, Sharpness, WeaponRecord};
#[doc(inline)]
pub use resolve::resolve_category;
#[doc(inline)]
pub use spec::{build_category_spec, CategorySpec, SpecEntry, WeaponTree};
