//! XP curve and the level-up loop
//!
//! Levels cost a fixed amount of XP each, stepped by tier. XP is reset per
//! level: a profile stores only the XP accumulated toward the next level.

use serde::{Deserialize, Serialize};

/// One step of the XP curve: every level up to and including `up_to_level`
/// (and above the previous tier) costs `xp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpTier {
    pub up_to_level: u32,
    pub xp: u32,
}

/// Default tiers. Beyond the last bound the last tier's cost applies.
pub static DEFAULT_XP_TIERS: &[XpTier] = &[
    XpTier {
        up_to_level: 3,
        xp: 100,
    },
    XpTier {
        up_to_level: 7,
        xp: 150,
    },
    XpTier {
        up_to_level: 12,
        xp: 250,
    },
    XpTier {
        up_to_level: 20,
        xp: 400,
    },
    XpTier {
        up_to_level: 30,
        xp: 600,
    },
    XpTier {
        up_to_level: u32::MAX,
        xp: 1000,
    },
];

/// Highest reachable level
pub const MAX_LEVEL: u32 = 1_000_000;

/// Reasons a tier list cannot be used as a curve
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum XpCurveError {
    #[error("XP curve needs at least one tier")]
    Empty,

    #[error("tier {index} costs 0 XP")]
    ZeroCost { index: usize },

    #[error("tier {index} bound {up_to_level} does not increase")]
    NotIncreasing { index: usize, up_to_level: u32 },
}

/// Monotonic step function `level -> XP needed to leave that level`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XpCurve {
    tiers: Vec<XpTier>,
}

impl Default for XpCurve {
    fn default() -> Self {
        Self {
            tiers: DEFAULT_XP_TIERS.to_vec(),
        }
    }
}

impl XpCurve {
    /// Build a curve from ordered tiers.
    pub fn new(tiers: Vec<XpTier>) -> Result<Self, XpCurveError> {
        if tiers.is_empty() {
            return Err(XpCurveError::Empty);
        }
        for (index, tier) in tiers.iter().enumerate() {
            if tier.xp == 0 {
                return Err(XpCurveError::ZeroCost { index });
            }
            if index > 0 && tier.up_to_level <= tiers[index - 1].up_to_level {
                return Err(XpCurveError::NotIncreasing {
                    index,
                    up_to_level: tier.up_to_level,
                });
            }
        }
        Ok(Self { tiers })
    }

    pub fn tiers(&self) -> &[XpTier] {
        &self.tiers
    }

    /// XP required to advance from `level` to `level + 1`.
    pub fn xp_required_for(&self, level: u32) -> u32 {
        self.tier_for(level).xp
    }

    /// Tier pricing `level`. The last tier covers everything above its bound.
    fn tier_for(&self, level: u32) -> XpTier {
        let last = self.tiers[self.tiers.len() - 1];
        match self.tiers.iter().find(|t| level <= t.up_to_level) {
            Some(tier) if tier.up_to_level != last.up_to_level => *tier,
            _ => XpTier {
                up_to_level: u32::MAX,
                xp: last.xp,
            },
        }
    }

    /// Add `amount` XP and roll overflow into as many level-ups as it covers.
    ///
    /// Whole tiers are consumed per step, so the cost is bounded by the
    /// number of tiers rather than by `amount`. Levels stop at [`MAX_LEVEL`].
    pub fn apply_xp(&self, level: u32, xp: u64, amount: u64) -> LevelOutcome {
        let mut new_level = level.max(1);
        let mut remaining = xp.saturating_add(amount);

        while new_level < MAX_LEVEL {
            let tier = self.tier_for(new_level);
            let cost = u64::from(tier.xp);
            if remaining < cost {
                break;
            }
            // Levels still priced at `cost`, counting the current one
            let span = u64::from(tier.up_to_level.min(MAX_LEVEL - 1) - new_level) + 1;
            let steps = (remaining / cost).min(span);
            remaining -= steps * cost;
            new_level += steps as u32;
        }

        if new_level >= MAX_LEVEL {
            let cost = u64::from(self.xp_required_for(new_level));
            remaining = remaining.min(cost - 1);
        }

        LevelOutcome {
            old_level: level,
            new_level,
            xp: remaining,
        }
    }

    /// Fraction of the current level completed, as a percentage in `[0, 100)`.
    pub fn level_progress(&self, level: u32, xp: u64) -> f64 {
        let needed = f64::from(self.xp_required_for(level));
        ((xp as f64) / needed * 100.0).clamp(0.0, 100.0)
    }
}

/// Result of running the level-up loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelOutcome {
    pub old_level: u32,
    pub new_level: u32,
    pub xp: u64,
}

impl LevelOutcome {
    pub fn levels_gained(&self) -> u32 {
        self.new_level.saturating_sub(self.old_level)
    }
}
