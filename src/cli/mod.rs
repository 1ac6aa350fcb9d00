//! CLI command implementations

pub mod activity;
pub mod init;
pub mod profile;
pub mod shop;
pub mod status;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use pointforge::progression::SystemClock;
use pointforge::{
    Config, MemoryStorage, ProfileStorage, ProgressionEvent, ProgressionStore, SqliteStorage,
};

/// Config from `--config`, else the local or global config file
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path),
        None => Config::from_dir(Path::new(".")),
    }
}

/// Open the profile. An unusable database still gives a working store
/// that just does not save.
pub fn open_store(config: &Config, profile: Option<&Path>) -> Result<ProgressionStore> {
    let path = profile
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.profile_path());
    let rules = config.rules()?;

    let storage: Box<dyn ProfileStorage> = match SqliteStorage::open(&path) {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            tracing::warn!("Cannot open profile {}: {}", path.display(), e);
            println!(
                "  {}",
                ProgressionEvent::StorageUnavailable {
                    reason: e.to_string()
                }
            );
            Box::new(MemoryStorage::new())
        }
    };

    let store = ProgressionStore::open(storage, rules, Arc::new(SystemClock))
        .with_shop_settings(config.shop);
    Ok(store)
}

/// Print and clear queued notifications.
pub fn print_events(store: &mut ProgressionStore) {
    for event in store.drain_events() {
        println!("  {}", event);
    }
}
