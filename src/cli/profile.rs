//! Export, import and reset commands

use std::path::Path;

use anyhow::{Context, Result};

use pointforge::ProgressionStore;

use super::print_events;

pub fn export_command(store: &mut ProgressionStore, out: Option<&Path>) -> Result<()> {
    print_events(store);
    let json = store
        .export_profile()
        .with_context(|| "Failed to serialize profile")?;

    match out {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write export: {}", path.display()))?;
            println!("Exported profile to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

pub fn import_command(store: &mut ProgressionStore, file: &Path) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read export: {}", file.display()))?;
    store
        .import_profile(&text)
        .with_context(|| format!("Rejected import from {}", file.display()))?;
    print_events(store);

    let p = store.progress();
    println!(
        "Imported profile: {} points, level {}, {} item(s) owned",
        p.total_points,
        p.level,
        store.purchases().len()
    );
    Ok(())
}

pub fn reset_command(store: &mut ProgressionStore, yes: bool) -> Result<()> {
    if !yes {
        println!("This wipes all points, milestones and purchases. Re-run with --yes to confirm.");
        return Ok(());
    }
    store.reset_progress();
    print_events(store);
    Ok(())
}
