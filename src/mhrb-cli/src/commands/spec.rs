//! Tree spec listing command handler

use anyhow::{bail, Result};

use mhrb::{build_category_spec, WeaponCategory, WEAPON_CATEGORIES};

/// List transcribed categories, or one category's trees in full
pub fn handle(category: Option<&str>) -> Result<()> {
    match category {
        Some(code) => {
            let Some(category) = WeaponCategory::from_code(code) else {
                bail!("Unknown weapon category: {}", code);
            };
            show_category(category)
        }
        None => {
            for &category in WEAPON_CATEGORIES {
                match category.tree_spec() {
                    Some(trees) => {
                        let weapons: usize = trees.iter().map(|t| t.weapons.len()).sum();
                        println!(
                            "  {:<16} {} trees, {} weapons",
                            category.code(),
                            trees.len(),
                            weapons
                        );
                    }
                    None => println!("  {:<16} (not transcribed)", category.code()),
                }
            }
            Ok(())
        }
    }
}

fn show_category(category: WeaponCategory) -> Result<()> {
    let Some(trees) = category.tree_spec() else {
        bail!("{}: tree spec not yet transcribed", category);
    };

    // Building validates ids and graft bases before anything is printed
    let spec = build_category_spec(category, trees)?;
    println!("{} - {} weapons\n", category.name(), spec.len());

    for tree in trees {
        match tree.base {
            Some(base) => println!("{} (from {})", tree.name, base),
            None => println!("{}", tree.name),
        }
        for &(name, id) in tree.weapons {
            println!("  {:<6} {}", id, name);
        }
    }
    Ok(())
}
