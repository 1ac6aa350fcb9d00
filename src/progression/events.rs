//! Notification events produced by state transitions
//!
//! The store queues these as it mutates. Views drain the queue and decide
//! how (and how fast) to show them; dropping the rest of a queue never
//! affects the stored state.

use std::fmt;

/// Something a view may want to announce
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressionEvent {
    PointsAwarded {
        amount: u64,
        source: String,
    },
    LevelUp {
        old_level: u32,
        new_level: u32,
    },
    RankUp {
        old_rank: String,
        new_rank: String,
    },
    MilestoneAchieved {
        id: &'static str,
        name: &'static str,
        description: &'static str,
        reward: u64,
    },
    StreakExtended {
        count: u32,
    },
    StreakBroken,
    PointsSpent {
        amount: u64,
    },
    ItemPurchased {
        item_id: String,
        cost: u64,
    },
    /// Saving failed; the session continues in memory only.
    StorageUnavailable {
        reason: String,
    },
    ProgressReset,
}

impl fmt::Display for ProgressionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointsAwarded { amount, source } => write!(f, "+{amount} points ({source})"),
            Self::LevelUp { new_level, .. } => write!(f, "🎉 Level Up! You reached Level {new_level}!"),
            Self::RankUp { new_rank, .. } => write!(f, "Rank Up! You're now a {new_rank}!"),
            Self::MilestoneAchieved {
                name,
                description,
                reward,
                ..
            } => write!(f, "🏆 Milestone: {name} (+{reward} points! {description})"),
            Self::StreakExtended { count } => write!(f, "🔥 {count} day streak"),
            Self::StreakBroken => write!(f, "Streak broken! Starting fresh."),
            Self::PointsSpent { amount } => write!(f, "-{amount} points"),
            Self::ItemPurchased { item_id, cost } => write!(f, "Purchased {item_id} for {cost} points"),
            Self::StorageUnavailable { reason } => {
                write!(f, "Progress is not being saved: {reason}")
            }
            Self::ProgressReset => write!(f, "Progress reset"),
        }
    }
}
