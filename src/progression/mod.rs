//! Progression engine: points, levels, ranks, streaks, milestones and purchases
//!
//! # Usage
//!
//! ```ignore
//! let storage = SqliteStorage::open(&path)?;
//! let mut store = ProgressionStore::open(Box::new(storage), rules, Arc::new(SystemClock));
//!
//! store.track_game_play("snake", "Snake");
//! for event in store.drain_events() {
//!     println!("{event}");
//! }
//! ```

pub mod calendar;
mod events;
mod levels;
mod milestones;
mod progress;
mod purchase;
mod ranks;
mod rules;
mod store;
mod transfer;

pub use calendar::{Clock, ManualClock, SystemClock, days_between, is_new_day};
pub use events::ProgressionEvent;
pub use levels::{DEFAULT_XP_TIERS, LevelOutcome, MAX_LEVEL, XpCurve, XpCurveError, XpTier};
pub use milestones::{
    MILESTONES, Milestone, MilestoneCategory, MilestoneId, MilestoneStatus, check_milestones,
};
pub use progress::{
    MAX_STORED_XP, RECENTLY_PLAYED_LIMIT, RecentPlay, UserProgress, ValidationError, page_key,
    utility_key,
};
pub use purchase::{PurchaseOutcome, format_time_remaining};
pub use ranks::{RANKS, Rank};
pub use rules::{ActivityRewards, DailyCaps, ProgressionRules};
pub use store::{ProgressionStore, ShopSettings};
pub use transfer::{EXPORT_FORMAT, EXPORT_VERSION, ImportError, ProfileExport};
