//! Rank bands keyed on lifetime points

/// Rank definition
///
/// `max_points` of `None` marks the open-ended top band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rank {
    pub name: &'static str,
    pub icon: &'static str,
    pub min_points: u64,
    pub max_points: Option<u64>,
    pub color: &'static str,
}

/// All ranks, sorted and contiguous over `[0, inf)`
pub static RANKS: &[Rank] = &[
    Rank {
        name: "Newbie",
        icon: "🎮",
        min_points: 0,
        max_points: Some(300),
        color: "#94a3b8",
    },
    Rank {
        name: "Gamer",
        icon: "🕹️",
        min_points: 301,
        max_points: Some(1000),
        color: "#60a5fa",
    },
    Rank {
        name: "Pro",
        icon: "🎯",
        min_points: 1001,
        max_points: Some(3000),
        color: "#a78bfa",
    },
    Rank {
        name: "Elite",
        icon: "💎",
        min_points: 3001,
        max_points: Some(7000),
        color: "#f59e0b",
    },
    Rank {
        name: "Legend",
        icon: "👑",
        min_points: 7001,
        max_points: Some(15000),
        color: "#f97316",
    },
    Rank {
        name: "Master",
        icon: "🚀",
        min_points: 15001,
        max_points: None,
        color: "#ef4444",
    },
];

impl Rank {
    pub fn contains(&self, points: u64) -> bool {
        points >= self.min_points && self.max_points.is_none_or(|max| points <= max)
    }

    /// Rank for a lifetime point total. Falls back to the highest rank.
    pub fn for_points(points: u64) -> &'static Rank {
        let idx = RANKS.partition_point(|r| r.min_points <= points);
        idx.checked_sub(1)
            .and_then(|i| RANKS.get(i))
            .filter(|r| r.contains(points))
            .unwrap_or_else(|| Self::highest())
    }

    /// The rank above this one, if any.
    pub fn next(&self) -> Option<&'static Rank> {
        let idx = RANKS.iter().position(|r| r.name == self.name)?;
        RANKS.get(idx + 1)
    }

    pub fn by_name(name: &str) -> Option<&'static Rank> {
        RANKS.iter().find(|r| r.name == name)
    }

    pub fn lowest() -> &'static Rank {
        &RANKS[0]
    }

    pub fn highest() -> &'static Rank {
        &RANKS[RANKS.len() - 1]
    }

    /// Points still needed to reach the next rank (None at the top).
    pub fn points_to_next(points: u64) -> Option<u64> {
        Self::for_points(points)
            .next()
            .map(|next| next.min_points.saturating_sub(points))
    }
}
