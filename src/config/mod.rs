//! Configuration loading and management

mod io;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::progression::{
    DEFAULT_XP_TIERS, DailyCaps, ProgressionRules, ShopSettings, XpCurve, XpTier,
};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where the profile lives
    #[serde(default)]
    pub storage: StorageConfig,

    /// Daily ceilings on discovery rewards
    #[serde(default)]
    pub caps: DailyCaps,

    /// XP curve
    #[serde(default)]
    pub levels: LevelsConfig,

    /// Shop feature switches
    #[serde(default)]
    pub shop: ShopSettings,
}

/// `[storage]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// SQLite profile database. Defaults to the user data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// `[levels]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelsConfig {
    #[serde(default = "default_tiers")]
    pub tiers: Vec<XpTier>,
}

impl Default for LevelsConfig {
    fn default() -> Self {
        Self {
            tiers: default_tiers(),
        }
    }
}

fn default_tiers() -> Vec<XpTier> {
    DEFAULT_XP_TIERS.to_vec()
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from a directory
    /// Looks for: .pointforge/config.toml, then the global config
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let local_path = dir.join(".pointforge/config.toml");
        if local_path.exists() {
            return Self::from_file(&local_path);
        }

        let global_path = Self::global_config_path();
        if global_path.exists() {
            return Self::from_file(&global_path);
        }

        Ok(Self::with_defaults())
    }

    /// Create a config with sensible defaults
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Check everything that serde cannot.
    pub fn validate(&self) -> Result<()> {
        XpCurve::new(self.levels.tiers.clone()).context("Invalid [[levels.tiers]]")?;
        Ok(())
    }

    /// Build the progression rules this config describes.
    pub fn rules(&self) -> Result<ProgressionRules> {
        let curve =
            XpCurve::new(self.levels.tiers.clone()).context("Invalid [[levels.tiers]]")?;
        Ok(ProgressionRules::new(curve, self.caps))
    }

    /// Profile database path: configured, or the default location.
    pub fn profile_path(&self) -> PathBuf {
        self.storage
            .path
            .clone()
            .unwrap_or_else(Self::default_profile_path)
    }
}
