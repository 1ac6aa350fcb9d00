//! Configuration file I/O and default locations

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;
use tracing::debug;

use super::Config;

impl Config {
    /// Get the global config directory path (~/.pointforge/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".pointforge")
    }

    /// Get the global config file path (~/.pointforge/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Default profile database (<data dir>/pointforge/profile.db)
    pub fn default_profile_path() -> PathBuf {
        dirs::data_dir()
            .map(|dir| dir.join("pointforge"))
            .unwrap_or_else(Self::global_config_dir)
            .join("profile.db")
    }

    /// Validate and save this configuration.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        Self::write_file(path, &content)
    }

    /// Replace the config file with `content`.
    ///
    /// Readers see either the old file or the new one, never a partial
    /// write. Concurrent writers are serialized through `<name>.toml.lock`.
    pub fn write_file(path: &Path, content: &str) -> Result<()> {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
        }

        let _lock = ConfigLock::acquire(path)?;
        let staged = path.with_extension("toml.tmp");
        stage(&staged, content)?;
        fs::rename(&staged, path)
            .with_context(|| format!("Failed to replace config file: {}", path.display()))?;

        debug!(path = %path.display(), bytes = content.len(), "Wrote config");
        Ok(())
    }
}

/// Write and flush `content` to a scratch file next to the target.
fn stage(staged: &Path, content: &str) -> Result<()> {
    let mut file = File::create(staged)
        .with_context(|| format!("Failed to create temp file: {}", staged.display()))?;
    file.write_all(content.as_bytes())
        .and_then(|()| file.sync_all())
        .with_context(|| format!("Failed to write temp file: {}", staged.display()))
}

/// Exclusive advisory lock held for the lifetime of the guard
struct ConfigLock(File);

impl ConfigLock {
    fn acquire(config: &Path) -> Result<Self> {
        let path = config.with_extension("toml.lock");
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .with_context(|| format!("Failed to open lock file: {}", path.display()))?;
        file.lock_exclusive()
            .context("Failed to acquire config lock")?;
        Ok(Self(file))
    }
}

impl Drop for ConfigLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_file_replaces_and_cleans_up() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        Config::write_file(&path, "[shop]\nad_skip_enabled = true\n").unwrap();
        Config::write_file(&path, "[caps]\npages_points = 2\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.caps.pages_points, 2);
        assert!(!config.shop.ad_skip_enabled);
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn test_save_refuses_invalid_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::with_defaults();
        config.levels.tiers.clear();

        assert!(config.save_to_file(&path).is_err());
        assert!(!path.exists());
    }
}
