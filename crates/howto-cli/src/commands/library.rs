use howto_catalog::{CATEGORIES, SkillCatalog};
use howto_config::HowToConfig;
use howto_store::SavedSkillStore;

use super::render;

pub(super) fn cmd_library(search: &str, category: &str, json: bool) -> howto_core::Result<()> {
    if !CATEGORIES.contains(&category) {
        println!("Unknown category '{category}'.");
        println!("   Valid categories: {}", CATEGORIES.join(", "));
        return Ok(());
    }

    if json {
        let catalog = SkillCatalog::builtin();
        let entries = catalog.filter(search, category);
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    render::print_library(search, category);
    Ok(())
}

pub(super) fn cmd_saved(config: HowToConfig, json: bool) -> howto_core::Result<()> {
    let store = SavedSkillStore::open(config.store.resolve_path());
    let records = store.list()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No saved skills yet.");
        println!("   Save one with: howto learn tie a tie --save");
        return Ok(());
    }

    render::print_saved(&records);
    println!();
    println!("   File: {}", store.path().display());
    Ok(())
}
