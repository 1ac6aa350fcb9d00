//! Init command implementation

use anyhow::{Result, bail};
use std::path::PathBuf;

use pointforge::Config;

/// Default configuration content for pointforge init
pub const DEFAULT_CONFIG: &str = r#"# Pointforge Configuration
# ========================

# Where the profile database lives. Leave unset for the default
# (<data dir>/pointforge/profile.db).
[storage]
# path = "/path/to/profile.db"

# Discovery rewards per calendar day. Activity past a cap is still
# tracked, it just earns nothing.
[caps]
unique_games_points = 5
utilities_points = 3
pages_points = 5

# XP needed to leave each level. Every level up to and including
# `up_to_level` costs `xp`; the last tier applies to all higher levels.
[[levels.tiers]]
up_to_level = 3
xp = 100

[[levels.tiers]]
up_to_level = 7
xp = 150

[[levels.tiers]]
up_to_level = 12
xp = 250

[[levels.tiers]]
up_to_level = 20
xp = 400

[[levels.tiers]]
up_to_level = 30
xp = 600

[[levels.tiers]]
up_to_level = 4294967295
xp = 1000

[shop]
# Allow buying ad-skip tokens
ad_skip_enabled = false
"#;

/// Write a commented default config
pub fn init_command(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = config_path.unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    Config::write_file(&config_path, DEFAULT_CONFIG)?;
    println!("Created: {}", config_path.display());

    Ok(())
}
