//! Pipeline command handlers: process scraped data into database files.

use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use mhrb::{
    build_category_spec, merge_category, resolve_category, CategoryRecords, Emitter, RawWeapon,
    WeaponCategory, WEAPON_CATEGORIES,
};

use crate::emit::JsonEmitter;

/// Run the full pipeline and write one database file per category
pub fn handle(input: &Path, output: &Path, category: Option<&str>) -> Result<()> {
    let resolved = run_pipeline(input, category)?;

    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory {:?}", output))?;

    let mut emitter = JsonEmitter::new(output);
    for records in &resolved {
        emitter.emit_category(records)?;
        println!(
            "  weapons_{}.json - {} weapons",
            records.category().code(),
            records.len()
        );
    }

    println!("\nWrote {} categories to {:?}", resolved.len(), output);
    Ok(())
}

/// Run the pipeline without writing output
pub fn check(input: &Path, category: Option<&str>) -> Result<()> {
    let resolved = run_pipeline(input, category)?;
    let weapons: usize = resolved.iter().map(CategoryRecords::len).sum();
    println!(
        "OK - {} weapons across {} categories",
        weapons,
        resolved.len()
    );
    Ok(())
}

/// Build, merge, and resolve every transcribed category found in the input.
///
/// Any structural error aborts the run; there is no partial output.
fn run_pipeline(input: &Path, only: Option<&str>) -> Result<Vec<CategoryRecords>> {
    let only = match only {
        Some(code) => match WeaponCategory::from_code(code) {
            Some(category) => Some(category),
            None => bail!("Unknown weapon category: {}", code),
        },
        None => None,
    };

    let text = fs::read_to_string(input)
        .with_context(|| format!("Failed to read scraped data file {:?}", input))?;
    let mut scraped: HashMap<String, Vec<RawWeapon>> =
        serde_json::from_str(&text).context("Failed to parse scraped data file")?;

    let mut resolved = Vec::new();
    for &category in WEAPON_CATEGORIES {
        if only.is_some_and(|c| c != category) {
            continue;
        }

        let Some(trees) = category.tree_spec() else {
            if scraped.contains_key(category.code()) {
                println!("  {}: skipped (tree spec not yet transcribed)", category);
            }
            continue;
        };

        let spec = build_category_spec(category, trees)?;
        let raw = scraped
            .remove(category.code())
            .with_context(|| format!("Scraped data has no \"{}\" section", category))?;

        let mut records = merge_category(&spec, raw)?;
        resolve_category(&mut records)?;
        println!("  {}: {} weapons resolved", category, records.len());
        resolved.push(records);
    }

    if resolved.is_empty() {
        bail!("No categories processed - nothing in the input matches a transcribed tree spec");
    }
    Ok(resolved)
}
