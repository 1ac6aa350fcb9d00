//! Milestone definitions and checking
//!
//! Milestones are one-time achievements. Each one carries a predicate over
//! [`UserProgress`]; once the predicate holds and the id is not yet recorded,
//! the reward is granted and the id stored. Catalog order decides the award
//! order when several qualify at once.

use std::collections::BTreeSet;

use super::progress::{UTILITY_PREFIX, UserProgress};

/// Unique identifier for each milestone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MilestoneId {
    // Games
    FirstGame,
    Explorer,
    VarietyLover,
    GameMaster,

    // Streaks
    WeekWarrior,
    MonthMaster,
    CenturyClub,

    // Discovery
    UtilityUser,
    SiteExplorer,
}

impl MilestoneId {
    /// String id used in the persisted record
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstGame => "first_game",
            Self::Explorer => "explorer",
            Self::VarietyLover => "variety_lover",
            Self::GameMaster => "game_master",
            Self::WeekWarrior => "week_warrior",
            Self::MonthMaster => "month_master",
            Self::CenturyClub => "century_club",
            Self::UtilityUser => "utility_user",
            Self::SiteExplorer => "site_explorer",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "first_game" => Some(Self::FirstGame),
            "explorer" => Some(Self::Explorer),
            "variety_lover" => Some(Self::VarietyLover),
            "game_master" => Some(Self::GameMaster),
            "week_warrior" => Some(Self::WeekWarrior),
            "month_master" => Some(Self::MonthMaster),
            "century_club" => Some(Self::CenturyClub),
            "utility_user" => Some(Self::UtilityUser),
            "site_explorer" => Some(Self::SiteExplorer),
            _ => None,
        }
    }
}

/// Milestone category for grouping in views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MilestoneCategory {
    Games,
    Streak,
    Discovery,
    Social,
}

impl MilestoneCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Games => "Games",
            Self::Streak => "Streaks",
            Self::Discovery => "Discovery",
            Self::Social => "Social",
        }
    }
}

/// Milestone definition with all metadata
#[derive(Debug, Clone)]
pub struct Milestone {
    pub id: MilestoneId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub reward: u64,
    pub category: MilestoneCategory,
    pub requirement: fn(&UserProgress) -> bool,
}

/// All milestones, in award order
pub static MILESTONES: &[Milestone] = &[
    // === GAMES ===
    Milestone {
        id: MilestoneId::FirstGame,
        name: "First Steps",
        description: "Play your first game",
        icon: "🎮",
        reward: 50,
        category: MilestoneCategory::Games,
        requirement: |p| p.unique_games_played.len() >= 1,
    },
    Milestone {
        id: MilestoneId::Explorer,
        name: "Explorer",
        description: "Try 10 different games",
        icon: "🗺️",
        reward: 80,
        category: MilestoneCategory::Games,
        requirement: |p| p.unique_games_played.len() >= 10,
    },
    Milestone {
        id: MilestoneId::VarietyLover,
        name: "Variety Lover",
        description: "Play 25 unique games",
        icon: "🎨",
        reward: 200,
        category: MilestoneCategory::Games,
        requirement: |p| p.unique_games_played.len() >= 25,
    },
    Milestone {
        id: MilestoneId::GameMaster,
        name: "Game Master",
        description: "Play 50 different games",
        icon: "🏆",
        reward: 400,
        category: MilestoneCategory::Games,
        requirement: |p| p.unique_games_played.len() >= 50,
    },
    // === STREAK ===
    Milestone {
        id: MilestoneId::WeekWarrior,
        name: "Week Warrior",
        description: "Maintain a 7-day streak",
        icon: "🔥",
        reward: 150,
        category: MilestoneCategory::Streak,
        requirement: |p| p.streak_count >= 7,
    },
    Milestone {
        id: MilestoneId::MonthMaster,
        name: "Month Master",
        description: "Maintain a 30-day streak",
        icon: "⭐",
        reward: 400,
        category: MilestoneCategory::Streak,
        requirement: |p| p.streak_count >= 30,
    },
    Milestone {
        id: MilestoneId::CenturyClub,
        name: "Century Club",
        description: "Achieve a 100-day streak",
        icon: "💯",
        reward: 800,
        category: MilestoneCategory::Streak,
        requirement: |p| p.streak_count >= 100,
    },
    // === DISCOVERY ===
    Milestone {
        id: MilestoneId::UtilityUser,
        name: "Utility User",
        description: "Try 5 different utilities",
        icon: "🔧",
        reward: 75,
        category: MilestoneCategory::Discovery,
        requirement: |p| p.discovered_with_prefix(UTILITY_PREFIX) >= 5,
    },
    Milestone {
        id: MilestoneId::SiteExplorer,
        name: "Site Explorer",
        description: "Visit all main pages",
        icon: "🧭",
        reward: 100,
        category: MilestoneCategory::Discovery,
        requirement: |p| p.pages_visited_today.len() >= 5,
    },
];

impl Milestone {
    /// Get milestone by ID
    pub fn get(id: MilestoneId) -> &'static Milestone {
        MILESTONES
            .iter()
            .find(|m| m.id == id)
            .expect("every MilestoneId has a catalog entry")
    }

    pub fn is_met(&self, progress: &UserProgress) -> bool {
        (self.requirement)(progress)
    }
}

/// Milestones whose requirement now holds and that are not yet recorded,
/// in catalog order.
pub fn check_milestones(
    progress: &UserProgress,
    achieved: &BTreeSet<String>,
) -> Vec<&'static Milestone> {
    MILESTONES
        .iter()
        .filter(|m| !achieved.contains(m.id.as_str()) && m.is_met(progress))
        .collect()
}

/// A milestone paired with whether the profile has it
#[derive(Debug, Clone)]
pub struct MilestoneStatus {
    pub milestone: &'static Milestone,
    pub achieved: bool,
}
