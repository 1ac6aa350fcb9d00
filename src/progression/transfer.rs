//! Profile export and import
//!
//! Export produces a self-describing JSON document. Import parses and
//! validates the whole document before touching the store, so a rejected
//! import leaves the current profile exactly as it was.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::progress::{UserProgress, ValidationError};
use super::store::ProgressionStore;

/// Format marker written into every export
pub const EXPORT_FORMAT: &str = "pointforge-profile";

/// Current export version
pub const EXPORT_VERSION: u32 = 1;

/// Portable snapshot of a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileExport {
    pub format: String,
    pub version: u32,
    pub exported_at: DateTime<Utc>,
    pub progress: UserProgress,
    #[serde(default)]
    pub purchases: Vec<String>,
    #[serde(default)]
    pub ad_skip_active_until: Option<DateTime<Utc>>,
}

/// Error type for profile import
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Not valid profile JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unexpected export format '{0}'")]
    WrongFormat(String),

    #[error("Unsupported export version {0} (expected {expected})", expected = EXPORT_VERSION)]
    UnsupportedVersion(u32),

    #[error("Invalid progress: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Item '{0}' is listed twice in purchases")]
    DuplicatePurchase(String),
}

impl ProfileExport {
    /// Parse and validate an export document without applying it.
    pub fn parse(text: &str) -> Result<Self, ImportError> {
        let export: ProfileExport = serde_json::from_str(text)?;
        if export.format != EXPORT_FORMAT {
            return Err(ImportError::WrongFormat(export.format));
        }
        if export.version != EXPORT_VERSION {
            return Err(ImportError::UnsupportedVersion(export.version));
        }
        export.progress.validate()?;
        for (i, id) in export.purchases.iter().enumerate() {
            if export.purchases[..i].contains(id) {
                return Err(ImportError::DuplicatePurchase(id.clone()));
            }
        }
        Ok(export)
    }
}

impl ProgressionStore {
    /// Snapshot the profile as pretty-printed JSON.
    pub fn export_profile(&self) -> Result<String, serde_json::Error> {
        let export = ProfileExport {
            format: EXPORT_FORMAT.to_string(),
            version: EXPORT_VERSION,
            exported_at: self.clock.now(),
            progress: self.progress.clone(),
            purchases: self.purchases.clone(),
            ad_skip_active_until: self.ad_skip_until,
        };
        serde_json::to_string_pretty(&export)
    }

    /// Replace the profile with an exported one.
    ///
    /// On error nothing changes.
    pub fn import_profile(&mut self, text: &str) -> Result<(), ImportError> {
        let mut export = ProfileExport::parse(text)?;
        export.progress.normalize(&self.rules.curve);

        info!(
            points = export.progress.total_points,
            level = export.progress.level,
            "Importing profile exported at {}",
            export.exported_at.to_rfc3339()
        );
        self.progress = export.progress;
        self.purchases = export.purchases;
        self.ad_skip_until = export.ad_skip_active_until;
        self.persist();
        Ok(())
    }
}
