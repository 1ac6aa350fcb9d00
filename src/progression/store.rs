//! Progression store - the stateful engine
//!
//! Owns the profile aggregate and the purchase list. Every mutation goes
//! through [`ProgressionStore::apply_award`] so level, XP and rank can never
//! disagree, and every public mutator ends with exactly one persist so a
//! transition is written as a single batch.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::calendar::{Clock, days_between, is_new_day};
use super::events::ProgressionEvent;
use super::levels::LevelOutcome;
use super::milestones::{MILESTONES, Milestone, MilestoneStatus, check_milestones};
use super::progress::{RecentPlay, UserProgress, ValidationError, page_key, utility_key};
use super::ranks::Rank;
use super::rules::{ActivityRewards, ProgressionRules};
use crate::storage::{ProfileStorage, StorageError, keys};

/// Shop switches that are not progression rules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopSettings {
    /// Whether ad-skip items may be bought from the catalog
    pub ad_skip_enabled: bool,
}

/// The progression engine for one profile
pub struct ProgressionStore {
    pub(super) progress: UserProgress,
    pub(super) purchases: Vec<String>,
    pub(super) ad_skip_until: Option<DateTime<Utc>>,
    pub(super) rules: ProgressionRules,
    pub(super) shop: ShopSettings,
    pub(super) clock: Arc<dyn Clock>,
    storage: Box<dyn ProfileStorage>,
    events: Vec<ProgressionEvent>,
    degraded: bool,
}

impl ProgressionStore {
    /// Load the profile from `storage` and run the daily check-in.
    ///
    /// Unreadable or malformed stored values fall back to a fresh profile.
    pub fn open(
        storage: Box<dyn ProfileStorage>,
        rules: ProgressionRules,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let mut store = Self {
            progress: UserProgress::default(),
            purchases: Vec::new(),
            ad_skip_until: None,
            rules,
            shop: ShopSettings::default(),
            clock,
            storage,
            events: Vec::new(),
            degraded: false,
        };
        store.load();
        store.check_in();
        store
    }

    pub fn with_shop_settings(mut self, shop: ShopSettings) -> Self {
        self.shop = shop;
        self
    }

    // ========================================
    // LOADING & PERSISTENCE
    // ========================================

    fn load(&mut self) {
        match self.read_stored() {
            Ok((progress, purchases, ad_skip_until)) => {
                self.progress = progress;
                self.purchases = purchases;
                self.ad_skip_until = ad_skip_until;
            }
            Err(e) => self.degrade(e),
        }
    }

    fn read_stored(
        &self,
    ) -> Result<(UserProgress, Vec<String>, Option<DateTime<Utc>>), StorageError> {
        let progress = match self.storage.get(keys::USER_PROGRESS)? {
            Some(raw) => self.parse_progress(&raw).unwrap_or_else(|reason| {
                warn!("Discarding stored progress: {}", reason);
                UserProgress::default()
            }),
            None => UserProgress::default(),
        };

        let purchases = match self.storage.get(keys::PURCHASES)? {
            Some(raw) => serde_json::from_str::<Vec<String>>(&raw)
                .map(dedup_purchases)
                .unwrap_or_else(|e| {
                    warn!("Discarding stored purchases: {}", e);
                    Vec::new()
                }),
            None => Vec::new(),
        };

        let ad_skip_until = self
            .storage
            .get(keys::AD_SKIP_ACTIVE_UNTIL)?
            .and_then(|raw| match DateTime::parse_from_rfc3339(raw.trim()) {
                Ok(dt) => Some(dt.with_timezone(&Utc)),
                Err(e) => {
                    warn!("Ignoring stored ad-skip expiry '{}': {}", raw, e);
                    None
                }
            });

        Ok((progress, purchases, ad_skip_until))
    }

    /// Parse, validate and normalize a stored progress blob.
    fn parse_progress(&self, raw: &str) -> Result<UserProgress, String> {
        let mut progress: UserProgress = serde_json::from_str(raw).map_err(|e| e.to_string())?;
        progress
            .validate()
            .map_err(|e: ValidationError| e.to_string())?;
        if progress.normalize(&self.rules.curve) {
            debug!(
                level = progress.level,
                xp = progress.xp,
                "Normalized stored progress against current XP curve"
            );
        }
        Ok(progress)
    }

    /// Write the whole profile as one batch.
    pub(super) fn persist(&mut self) {
        if self.degraded {
            return;
        }
        if let Err(e) = self.write_all() {
            self.degrade(e);
        }
    }

    fn write_all(&self) -> Result<(), StorageError> {
        let progress = serde_json::to_string(&self.progress)?;
        let purchases = serde_json::to_string(&self.purchases)?;
        let ad_skip = self.ad_skip_until.map(|t| t.to_rfc3339());
        self.storage.write_batch(&[
            (keys::USER_PROGRESS, Some(progress)),
            (keys::REWARD_POINTS, Some(self.progress.total_points.to_string())),
            (keys::PURCHASES, Some(purchases)),
            (keys::AD_SKIP_ACTIVE_UNTIL, ad_skip),
        ])
    }

    /// Switch to in-memory operation for the rest of the session.
    fn degrade(&mut self, error: StorageError) {
        warn!("Profile storage unavailable, continuing in memory: {}", error);
        self.degraded = true;
        self.events.push(ProgressionEvent::StorageUnavailable {
            reason: error.to_string(),
        });
    }

    /// True once a storage failure has switched the store to memory-only.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    // ========================================
    // EVENTS
    // ========================================

    /// Take all queued notifications, oldest first.
    pub fn drain_events(&mut self) -> Vec<ProgressionEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn pending_events(&self) -> &[ProgressionEvent] {
        &self.events
    }

    pub(super) fn emit(&mut self, event: ProgressionEvent) {
        self.events.push(event);
    }

    // ========================================
    // POINTS
    // ========================================

    /// Credit points and XP, rolling XP overflow into level-ups.
    pub fn award_points(&mut self, amount: u64, source: &str, silent: bool) -> LevelOutcome {
        let outcome = self.apply_award(amount, source, silent);
        self.persist();
        outcome
    }

    /// The single point-award primitive. Does not persist.
    pub(super) fn apply_award(&mut self, amount: u64, source: &str, silent: bool) -> LevelOutcome {
        let p = &mut self.progress;
        if amount == 0 {
            return LevelOutcome {
                old_level: p.level,
                new_level: p.level,
                xp: p.xp,
            };
        }

        let old_rank = std::mem::take(&mut p.rank);
        let outcome = self.rules.curve.apply_xp(p.level, p.xp, amount);
        p.total_points = p.total_points.saturating_add(amount);
        p.level = outcome.new_level;
        p.xp = outcome.xp;
        p.rank = Rank::for_points(p.total_points).name.to_string();

        debug!(amount, source, total = p.total_points, "Awarded points");

        let new_rank = p.rank.clone();
        if outcome.levels_gained() > 0 {
            info!(
                "Level up: {} -> {} ({})",
                outcome.old_level, outcome.new_level, source
            );
        }
        if new_rank != old_rank {
            info!("Rank change: {} -> {}", old_rank, new_rank);
        }

        if !silent {
            self.emit(ProgressionEvent::PointsAwarded {
                amount,
                source: source.to_string(),
            });
            for level in outcome.old_level..outcome.new_level {
                self.emit(ProgressionEvent::LevelUp {
                    old_level: level,
                    new_level: level + 1,
                });
            }
            if new_rank != old_rank {
                self.emit(ProgressionEvent::RankUp { old_rank, new_rank });
            }
        }

        outcome
    }

    /// Deduct points if the balance covers `amount`.
    ///
    /// Returns false and leaves everything untouched otherwise.
    pub fn spend_points(&mut self, amount: u64) -> bool {
        if !self.apply_spend(amount) {
            return false;
        }
        if amount > 0 {
            self.emit(ProgressionEvent::PointsSpent { amount });
        }
        self.persist();
        true
    }

    /// Does not persist. Level and XP are untouched; rank follows the balance.
    pub(super) fn apply_spend(&mut self, amount: u64) -> bool {
        let p = &mut self.progress;
        if p.total_points < amount {
            debug!(amount, balance = p.total_points, "Insufficient points");
            return false;
        }
        p.total_points -= amount;
        p.rank = Rank::for_points(p.total_points).name.to_string();
        true
    }

    // ========================================
    // DAILY CHECK-IN
    // ========================================

    /// Handle the calendar-day boundary: reset today's activity, update the
    /// streak and grant the login bonus. At most once per day.
    ///
    /// Returns true if a new day was started.
    pub fn check_in(&mut self) -> bool {
        let started = self.apply_day_boundary();
        if started {
            self.persist();
        }
        started
    }

    fn apply_day_boundary(&mut self) -> bool {
        let today = self.clock.today();
        self.clear_expired_entitlements();
        if !is_new_day(self.progress.last_visit, today) {
            return false;
        }

        match self.progress.last_visit {
            Some(last) => {
                let gap = days_between(last, today);
                self.progress.reset_daily_activity();
                self.progress.last_visit = Some(today);

                if gap == 1 {
                    let previous = self.progress.streak_count;
                    self.progress.streak_count = previous + 1;
                    let count = self.progress.streak_count;
                    info!("Daily streak extended to {}", count);
                    self.emit(ProgressionEvent::StreakExtended { count });
                    self.apply_award(
                        ActivityRewards::streak_login_bonus(previous),
                        &format!("Daily Login (Day {count})"),
                        false,
                    );
                } else {
                    info!("Daily streak broken after {} days away", gap);
                    self.progress.streak_count = 1;
                    self.emit(ProgressionEvent::StreakBroken);
                    self.apply_award(
                        ActivityRewards::DAILY_LOGIN,
                        "Daily Login (New Streak)",
                        false,
                    );
                }
            }
            None => {
                self.progress.reset_daily_activity();
                self.progress.last_visit = Some(today);
                self.progress.streak_count = 1;
                self.apply_award(ActivityRewards::DAILY_LOGIN, "Welcome Bonus!", false);
            }
        }

        self.apply_milestones();
        true
    }

    // ========================================
    // ACTIVITY TRACKING
    // ========================================

    /// Record a game being opened.
    pub fn track_game_play(&mut self, game_id: &str, game_name: &str) {
        self.apply_day_boundary();

        let now = self.clock.now();
        let cap = self.rules.caps.unique_games_points as usize;
        let p = &mut self.progress;

        let is_new_game = !p.unique_games_played.contains(game_id);
        let is_first_today = !p.first_game_today;
        let played_today = p.games_played_today.contains(game_id);
        let today_count = p.games_played_today.len();

        let mut awards: Vec<(u64, String)> = Vec::new();
        if is_first_today && today_count < cap {
            awards.push((ActivityRewards::FIRST_GAME_TODAY, "First game today!".into()));
        }
        if is_new_game && today_count < cap {
            awards.push((ActivityRewards::NEW_GAME, format!("Discovered: {game_name}")));
        }
        if !played_today && today_count + 1 == ActivityRewards::VARIETY_THRESHOLD {
            awards.push((ActivityRewards::VARIETY_BONUS, "Variety bonus!".into()));
        }

        p.first_game_today = true;
        p.games_played_today.insert(game_id.to_string());
        p.unique_games_played.insert(game_id.to_string());
        p.push_recent(game_id, game_name, now);
        p.total_games_played += 1;

        debug!(
            game_id,
            new = is_new_game,
            today = p.games_played_today.len(),
            "Tracked game play"
        );

        for (amount, source) in awards {
            self.apply_award(amount, &source, false);
        }
        self.apply_milestones();
        self.persist();
    }

    /// Record a utility being used.
    pub fn track_utility_use(&mut self, utility_id: &str) {
        self.apply_day_boundary();

        let cap = self.rules.caps.utilities_points as usize;
        let p = &mut self.progress;
        let key = utility_key(utility_id);
        let is_new = !p.features_discovered.contains(&key);
        let today_count = p.utilities_used_today.len();

        p.utilities_used_today.insert(utility_id.to_string());
        p.features_discovered.insert(key);
        debug!(utility_id, new = is_new, "Tracked utility use");

        if is_new && today_count < cap {
            self.apply_award(ActivityRewards::NEW_UTILITY, "Tried new utility!", false);
        }
        self.apply_milestones();
        self.persist();
    }

    /// Record a page visit.
    pub fn track_page_visit(&mut self, page_id: &str) {
        self.apply_day_boundary();

        let cap = self.rules.caps.pages_points as usize;
        let p = &mut self.progress;
        let key = page_key(page_id);
        let is_new = !p.features_discovered.contains(&key);
        let today_count = p.pages_visited_today.len();

        p.pages_visited_today.insert(page_id.to_string());
        p.features_discovered.insert(key);
        debug!(page_id, new = is_new, "Tracked page visit");

        if is_new && today_count < cap {
            self.apply_award(ActivityRewards::NEW_PAGE, "Explored new page!", false);
        }
        self.apply_milestones();
        self.persist();
    }

    // ========================================
    // MILESTONES
    // ========================================

    /// Grant every milestone that now qualifies and is not yet recorded.
    ///
    /// Returns the newly achieved milestones in catalog order; a second call
    /// with no state change in between returns nothing.
    pub fn check_milestones(&mut self) -> Vec<&'static Milestone> {
        let granted = self.apply_milestones();
        if !granted.is_empty() {
            self.persist();
        }
        granted
    }

    /// Does not persist.
    fn apply_milestones(&mut self) -> Vec<&'static Milestone> {
        let mut granted = Vec::new();
        loop {
            let due = check_milestones(&self.progress, &self.progress.milestones_achieved);
            if due.is_empty() {
                break;
            }
            for milestone in due {
                self.progress
                    .milestones_achieved
                    .insert(milestone.id.as_str().to_string());
                info!("Milestone achieved: {}", milestone.name);
                self.emit(ProgressionEvent::MilestoneAchieved {
                    id: milestone.id.as_str(),
                    name: milestone.name,
                    description: milestone.description,
                    reward: milestone.reward,
                });
                self.apply_award(
                    milestone.reward,
                    &format!("Milestone: {}", milestone.name),
                    true,
                );
                granted.push(milestone);
            }
        }
        granted
    }

    pub fn milestones(&self) -> &'static [Milestone] {
        MILESTONES
    }

    pub fn milestone_status(&self) -> Vec<MilestoneStatus> {
        MILESTONES
            .iter()
            .map(|milestone| MilestoneStatus {
                milestone,
                achieved: self
                    .progress
                    .milestones_achieved
                    .contains(milestone.id.as_str()),
            })
            .collect()
    }

    // ========================================
    // DERIVED VIEWS
    // ========================================

    pub fn progress(&self) -> &UserProgress {
        &self.progress
    }

    pub fn rules(&self) -> &ProgressionRules {
        &self.rules
    }

    pub fn total_points(&self) -> u64 {
        self.progress.total_points
    }

    pub fn current_rank(&self) -> &'static Rank {
        Rank::for_points(self.progress.total_points)
    }

    pub fn next_rank(&self) -> Option<&'static Rank> {
        self.current_rank().next()
    }

    /// XP needed to leave the current level
    pub fn xp_for_next_level(&self) -> u32 {
        self.rules.xp_required_for(self.progress.level)
    }

    /// Percentage of the current level completed, in `[0, 100)`
    pub fn level_progress(&self) -> f64 {
        self.rules
            .curve
            .level_progress(self.progress.level, self.progress.xp)
    }

    /// Most recent first, at most ten
    pub fn recently_played(&self) -> &[RecentPlay] {
        &self.progress.recently_played
    }

    /// Candidate games never played, skipping `current`, in candidate order.
    pub fn recommendations(
        &self,
        candidates: &[&str],
        current: Option<&str>,
        limit: usize,
    ) -> Vec<String> {
        let mut seen = BTreeSet::new();
        candidates
            .iter()
            .filter(|id| Some(**id) != current)
            .filter(|id| !self.progress.unique_games_played.contains(**id))
            .filter(|id| seen.insert(**id))
            .take(limit)
            .map(|id| id.to_string())
            .collect()
    }

    // ========================================
    // RESET
    // ========================================

    /// Wipe progress, purchases and entitlements back to a fresh profile.
    pub fn reset_progress(&mut self) {
        info!("Resetting progress");
        self.progress = UserProgress::default();
        self.purchases.clear();
        self.ad_skip_until = None;
        self.emit(ProgressionEvent::ProgressReset);
        self.persist();
    }
}

fn dedup_purchases(ids: Vec<String>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}
