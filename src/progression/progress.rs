//! The persisted progress aggregate

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::calendar::visit_date;
use super::levels::{MAX_LEVEL, XpCurve};
use super::ranks::Rank;

/// Maximum number of entries kept in the recently played list
pub const RECENTLY_PLAYED_LIMIT: usize = 10;

/// Largest XP balance a stored record may carry
pub const MAX_STORED_XP: u64 = u32::MAX as u64;

/// Feature key prefix for utilities
pub const UTILITY_PREFIX: &str = "utility_";

/// Feature key prefix for pages
pub const PAGE_PREFIX: &str = "page_";

/// A game in the recently played list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentPlay {
    pub game_id: String,
    pub game_name: String,
    pub timestamp: DateTime<Utc>,
}

/// Everything known about one player profile.
///
/// Field names serialize in camelCase so the stored JSON keeps the layout
/// older readers expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProgress {
    // Core stats
    pub total_points: u64,
    pub level: u32,
    pub xp: u64,
    pub rank: String,

    // Streak
    pub streak_count: u32,
    #[serde(with = "visit_date")]
    pub last_visit: Option<NaiveDate>,
    pub first_game_today: bool,

    // Reset at each new calendar day
    pub games_played_today: BTreeSet<String>,
    pub utilities_used_today: BTreeSet<String>,
    pub pages_visited_today: BTreeSet<String>,

    // Lifetime
    pub unique_games_played: BTreeSet<String>,
    pub recently_played: Vec<RecentPlay>,
    pub total_games_played: u64,
    pub features_discovered: BTreeSet<String>,
    pub milestones_achieved: BTreeSet<String>,
}

impl Default for UserProgress {
    fn default() -> Self {
        Self {
            total_points: 0,
            level: 1,
            xp: 0,
            rank: Rank::lowest().name.to_string(),
            streak_count: 0,
            last_visit: None,
            first_game_today: false,
            games_played_today: BTreeSet::new(),
            utilities_used_today: BTreeSet::new(),
            pages_visited_today: BTreeSet::new(),
            unique_games_played: BTreeSet::new(),
            recently_played: Vec::new(),
            total_games_played: 0,
            features_discovered: BTreeSet::new(),
            milestones_achieved: BTreeSet::new(),
        }
    }
}

/// Structural problems that make a stored or imported record unusable
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("level must be at least 1")]
    ZeroLevel,

    #[error("level {0} is above the maximum of {max}", max = MAX_LEVEL)]
    LevelOutOfRange(u32),

    #[error("xp {0} is above the maximum of {max}", max = MAX_STORED_XP)]
    XpOutOfRange(u64),

    #[error("recently played list has {0} entries (max {max})", max = RECENTLY_PLAYED_LIMIT)]
    TooManyRecent(usize),

    #[error("game '{0}' appears twice in recently played")]
    DuplicateRecent(String),

    #[error("unknown rank '{0}'")]
    UnknownRank(String),
}

impl UserProgress {
    /// Check structural invariants that normalization cannot repair.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.level == 0 {
            return Err(ValidationError::ZeroLevel);
        }
        if self.level > MAX_LEVEL {
            return Err(ValidationError::LevelOutOfRange(self.level));
        }
        if self.xp > MAX_STORED_XP {
            return Err(ValidationError::XpOutOfRange(self.xp));
        }
        if self.recently_played.len() > RECENTLY_PLAYED_LIMIT {
            return Err(ValidationError::TooManyRecent(self.recently_played.len()));
        }
        let mut seen = BTreeSet::new();
        for entry in &self.recently_played {
            if !seen.insert(entry.game_id.as_str()) {
                return Err(ValidationError::DuplicateRecent(entry.game_id.clone()));
            }
        }
        if Rank::by_name(&self.rank).is_none() {
            return Err(ValidationError::UnknownRank(self.rank.clone()));
        }
        Ok(())
    }

    /// Re-derive level/xp/rank against the current curve.
    ///
    /// Returns true if anything changed.
    pub fn normalize(&mut self, curve: &XpCurve) -> bool {
        let outcome = curve.apply_xp(self.level, self.xp, 0);
        let rank = Rank::for_points(self.total_points).name;
        let changed = outcome.new_level != self.level || outcome.xp != self.xp || self.rank != rank;
        self.level = outcome.new_level;
        self.xp = outcome.xp;
        self.rank = rank.to_string();
        changed
    }

    /// Clear the per-day activity sets.
    pub fn reset_daily_activity(&mut self) {
        self.games_played_today.clear();
        self.utilities_used_today.clear();
        self.pages_visited_today.clear();
        self.first_game_today = false;
    }

    /// Move (or insert) a game to the front of the recently played list.
    pub fn push_recent(&mut self, game_id: &str, game_name: &str, at: DateTime<Utc>) {
        self.recently_played.retain(|g| g.game_id != game_id);
        self.recently_played.insert(
            0,
            RecentPlay {
                game_id: game_id.to_string(),
                game_name: game_name.to_string(),
                timestamp: at,
            },
        );
        self.recently_played.truncate(RECENTLY_PLAYED_LIMIT);
    }

    /// Number of discovered features with the given key prefix
    pub fn discovered_with_prefix(&self, prefix: &str) -> usize {
        self.features_discovered
            .iter()
            .filter(|f| f.starts_with(prefix))
            .count()
    }
}

pub fn utility_key(utility_id: &str) -> String {
    format!("{UTILITY_PREFIX}{utility_id}")
}

pub fn page_key(page_id: &str) -> String {
    format!("{PAGE_PREFIX}{page_id}")
}
