//! Pointforge - points, levels and rewards for a local player profile
//!
//! Pointforge turns player activity (opening games, trying utilities,
//! exploring pages, coming back day after day) into points. Points drive
//! levels and ranks, unlock milestones and buy cosmetic items from a shop.
//!
//! ## Layout
//!
//! - [`progression`]: the engine. [`ProgressionStore`] owns one profile and
//!   queues [`ProgressionEvent`]s for whatever presents them.
//! - [`shop`]: the static item catalog.
//! - [`storage`]: where the profile is kept (SQLite or memory).
//! - [`config`]: TOML settings and progression tuning.

pub mod config;
pub mod progression;
pub mod shop;
pub mod storage;

pub use config::Config;
pub use progression::{ProgressionEvent, ProgressionRules, ProgressionStore, UserProgress};
pub use storage::{MemoryStorage, ProfileStorage, SqliteStorage, StorageError};
