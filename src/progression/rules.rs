//! Tunable progression rules: daily caps, activity rewards and the XP curve

use serde::{Deserialize, Serialize};

use super::levels::XpCurve;

/// Ceilings on point-earning discovery events per calendar day.
///
/// Events past a cap are still tracked, they just earn nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyCaps {
    pub unique_games_points: u32,
    pub utilities_points: u32,
    pub pages_points: u32,
}

impl Default for DailyCaps {
    fn default() -> Self {
        Self {
            unique_games_points: 5,
            utilities_points: 3,
            pages_points: 5,
        }
    }
}

/// Points for various activities
pub struct ActivityRewards;

impl ActivityRewards {
    /// First game played on a calendar day
    pub const FIRST_GAME_TODAY: u64 = 25;

    /// A game never played before
    pub const NEW_GAME: u64 = 30;

    /// Reaching the third distinct game of the day
    pub const VARIETY_BONUS: u64 = 20;

    /// Distinct games today at which the variety bonus fires
    pub const VARIETY_THRESHOLD: usize = 3;

    /// A utility never used before
    pub const NEW_UTILITY: u64 = 15;

    /// A page never visited before
    pub const NEW_PAGE: u64 = 10;

    /// Base login bonus, also the welcome and new-streak bonus
    pub const DAILY_LOGIN: u64 = 50;

    /// Extra login points per full week of streak
    pub const STREAK_WEEK_BONUS: u64 = 10;

    /// Ceiling on the streak part of the login bonus
    pub const STREAK_BONUS_CAP: u64 = 100;

    /// Login bonus for continuing a streak that stood at `streak` days
    /// before today's visit.
    pub fn streak_login_bonus(streak: u32) -> u64 {
        let weeks = u64::from(streak / 7);
        Self::DAILY_LOGIN + (weeks * Self::STREAK_WEEK_BONUS).min(Self::STREAK_BONUS_CAP)
    }
}

/// Everything the store needs to score activity
#[derive(Debug, Clone, Default)]
pub struct ProgressionRules {
    pub curve: XpCurve,
    pub caps: DailyCaps,
}

impl ProgressionRules {
    pub fn new(curve: XpCurve, caps: DailyCaps) -> Self {
        Self { curve, caps }
    }

    pub fn xp_required_for(&self, level: u32) -> u32 {
        self.curve.xp_required_for(level)
    }
}
