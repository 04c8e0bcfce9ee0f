//! The `opskills answers` command.

use std::collections::BTreeMap;

use anyhow::Result;

use opskills_core::model::{Category, Role, Sector};
use opskills_core::reference::category_of;
use opskills_core::resolver::lookup_context;

pub fn execute(sector: String, role: String) -> Result<()> {
    let sector = sector_title(&sector)?;
    let role = role_title(&role)?;
    let ctx = lookup_context(&sector, &role)?;

    let mut by_category: BTreeMap<Category, Vec<&str>> = BTreeMap::new();
    let mut unscored = Vec::new();
    for &label in ctx.skills {
        match category_of(label) {
            Some(category) => by_category.entry(category).or_default().push(label),
            None => unscored.push(label),
        }
    }

    println!("{} / {}", ctx.role, ctx.sector);
    for (category, labels) in &by_category {
        println!("\n{} ({})", category.heading(), labels.len());
        for label in labels {
            println!("  - {label}");
        }
    }

    if !unscored.is_empty() {
        println!("\nNot scored (no catalog entry):");
        for label in &unscored {
            println!("  - {label}");
        }
    }

    Ok(())
}

/// A selection-screen id, a sector name, or anything else passed through for
/// the answer-key lookup to judge.
fn sector_title(arg: &str) -> Result<String> {
    if let Ok(id) = arg.trim().parse::<u8>() {
        return Ok(Sector::from_id(id)?.title().to_string());
    }
    Ok(arg
        .parse::<Sector>()
        .map(|s| s.title().to_string())
        .unwrap_or_else(|_| arg.to_string()))
}

fn role_title(arg: &str) -> Result<String> {
    if let Ok(id) = arg.trim().parse::<u8>() {
        return Ok(Role::from_id(id)?.title().to_string());
    }
    Ok(arg
        .parse::<Role>()
        .map(|r| r.title().to_string())
        .unwrap_or_else(|_| arg.to_string()))
}
