//! Profile storage
//!
//! A profile is a handful of string values under fixed keys (see [`keys`]).
//! Every state transition is written as one batch, so a reader sees either
//! the whole update or none of it.
//!
//! ```text
//! ┌──────────────────┐      write_batch       ┌──────────────────────┐
//! │ ProgressionStore │ ─────────────────────▶ │ SqliteStorage        │
//! │                  │ ◀───────────────────── │ (profile.db)         │
//! └──────────────────┘          get           └──────────────────────┘
//! ```

mod memory;
mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

use std::path::PathBuf;

/// Keys of the persisted profile layout
pub mod keys {
    /// JSON `UserProgress`
    pub const USER_PROGRESS: &str = "userProgress";
    /// JSON array of owned item ids
    pub const PURCHASES: &str = "purchases";
    /// RFC 3339 expiry of the ad-skip entitlement
    pub const AD_SKIP_ACTIVE_UNTIL: &str = "adSkipActiveUntil";
    /// Legacy mirror of `totalPoints` as a plain integer string
    pub const REWARD_POINTS: &str = "rewardPoints";
}

/// Error type for profile storage
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to create storage dir {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Storage quota exceeded ({used} of {quota} bytes)")]
    QuotaExceeded { used: usize, quota: usize },
}

/// One pending write; `None` deletes the key
pub type Write<'a> = (&'a str, Option<String>);

/// Key/value backend for one profile
pub trait ProfileStorage: Send {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Apply all writes or none of them.
    fn write_batch(&self, writes: &[Write<'_>]) -> Result<(), StorageError>;

    fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.write_batch(&[(key, Some(value))])
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.write_batch(&[(key, None)])
    }
}
