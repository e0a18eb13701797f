//! JSON database file emitter.
//!
//! Renders each resolved category as `weapons_<category>.json` in the shape
//! the builder app's code generators consume: tree name -> weapon id ->
//! weapon object, with resolved rampage skills as `[option, origin]` pairs
//! where an empty origin marks a native option.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use mhrb::{CategoryRecords, EmitError, Emitter, WeaponRecord};

/// Writes one database file per category into an output directory
pub struct JsonEmitter {
    output_dir: PathBuf,
}

impl JsonEmitter {
    pub fn new(output_dir: &Path) -> Self {
        JsonEmitter {
            output_dir: output_dir.to_path_buf(),
        }
    }
}

/// Wire shape of one emitted weapon
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EmittedWeapon<'a> {
    rarity: u8,
    endline_tag: &'static str,
    name: &'a str,
    attack: i32,
    affinity: i32,
    defense: i32,
    deco_slots: &'a [u8],
    ele_stat: &'a BTreeMap<String, i32>,
    ramp_skills: Vec<Vec<[&'a str; 2]>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    base_sharpness: Option<&'a [u16]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_sharpness: Option<&'a [u16]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    huntinghorn_songs: Option<&'a BTreeMap<String, String>>,
}

fn emitted(record: &WeaponRecord) -> EmittedWeapon<'_> {
    EmittedWeapon {
        rarity: record.rarity,
        endline_tag: if record.end_of_line { "hr" } else { "" },
        name: &record.name,
        attack: record.attack,
        affinity: record.affinity,
        defense: record.defense,
        deco_slots: &record.deco_slots,
        ele_stat: &record.ele_stat,
        ramp_skills: record
            .resolved_ramp_slots
            .iter()
            .map(|slot| {
                slot.iter()
                    .map(|entry| {
                        [
                            entry.skill.as_str(),
                            entry.inherited_from.as_deref().unwrap_or(""),
                        ]
                    })
                    .collect()
            })
            .collect(),
        base_sharpness: record.sharpness.as_ref().map(|s| s.base.as_slice()),
        max_sharpness: record.sharpness.as_ref().map(|s| s.max.as_slice()),
        huntinghorn_songs: record.songs.as_ref(),
    }
}

impl Emitter for JsonEmitter {
    fn emit_category(&mut self, records: &CategoryRecords) -> Result<(), EmitError> {
        // Records arrive in authoritative order, so inserting as we go keeps
        // trees and weapons in spec order in the output.
        let mut trees: Map<String, Value> = Map::new();
        for record in records {
            let weapon = serde_json::to_value(emitted(record))?;
            let tree = trees
                .entry(record.tree_name.clone())
                .or_insert_with(|| Value::Object(Map::new()));
            if let Value::Object(weapons) = tree {
                weapons.insert(record.id.clone(), weapon);
            }
        }

        let file_name = format!("weapons_{}.json", records.category().code());
        let path = self.output_dir.join(file_name);
        fs::write(&path, serde_json::to_string_pretty(&Value::Object(trees))?)?;
        Ok(())
    }
}
