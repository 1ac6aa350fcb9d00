//! Rewards shop catalog
//!
//! Static data plus lookups. Spending and ownership live in the progression
//! store; this module never holds state.

mod catalog;

pub use catalog::SHOP_ITEMS;

/// Shop category for grouping in views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShopCategory {
    Visual,
    Convenience,
    Discovery,
    Profile,
    Premium,
}

impl ShopCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Visual => "visual",
            Self::Convenience => "convenience",
            Self::Discovery => "discovery",
            Self::Profile => "profile",
            Self::Premium => "premium",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "visual" => Some(Self::Visual),
            "convenience" => Some(Self::Convenience),
            "discovery" => Some(Self::Discovery),
            "profile" => Some(Self::Profile),
            "premium" => Some(Self::Premium),
            _ => None,
        }
    }

    pub fn all() -> &'static [ShopCategory] {
        &[
            Self::Visual,
            Self::Convenience,
            Self::Discovery,
            Self::Profile,
            Self::Premium,
        ]
    }

    /// Display metadata for the category
    pub fn info(&self) -> CategoryInfo {
        match self {
            Self::Visual => CategoryInfo {
                name: "Visual",
                icon: "🎨",
                description: "Themes, colors, and visual effects",
            },
            Self::Convenience => CategoryInfo {
                name: "Convenience",
                icon: "⚡",
                description: "Quality of life improvements",
            },
            Self::Discovery => CategoryInfo {
                name: "Discovery",
                icon: "🔍",
                description: "Find and explore new games",
            },
            Self::Profile => CategoryInfo {
                name: "Profile",
                icon: "👤",
                description: "Customize your identity",
            },
            Self::Premium => CategoryInfo {
                name: "Premium",
                icon: "💎",
                description: "Ultimate upgrades and support",
            },
        }
    }
}

/// Category display metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

/// Price tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShopTier {
    Starter,
    Medium,
    Advanced,
    Ultimate,
}

impl ShopTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Starter => "starter",
            Self::Medium => "medium",
            Self::Advanced => "advanced",
            Self::Ultimate => "ultimate",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "starter" => Some(Self::Starter),
            "medium" => Some(Self::Medium),
            "advanced" => Some(Self::Advanced),
            "ultimate" => Some(Self::Ultimate),
            _ => None,
        }
    }
}

/// Kind of time-boxed effect an item grants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntitlementKind {
    /// Reduced ads until the expiry stored under `adSkipActiveUntil`
    AdSkip,
}

/// Time-boxed effect granted on purchase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entitlement {
    pub kind: EntitlementKind,
    pub hours: i64,
}

impl Entitlement {
    pub fn duration(&self) -> chrono::Duration {
        chrono::Duration::hours(self.hours)
    }
}

/// Shop item definition
#[derive(Debug, Clone)]
pub struct ShopItem {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub cost: u64,
    pub icon: &'static str,
    pub category: ShopCategory,
    pub tier: ShopTier,
    pub effects: &'static [&'static str],
    pub preview: Option<&'static str>,
    /// Items with an entitlement are consumable and may be bought again
    pub entitlement: Option<Entitlement>,
}

impl ShopItem {
    pub fn is_consumable(&self) -> bool {
        self.entitlement.is_some()
    }
}

pub fn get_items_by_category(category: ShopCategory) -> Vec<&'static ShopItem> {
    SHOP_ITEMS.iter().filter(|i| i.category == category).collect()
}

pub fn get_items_by_tier(tier: ShopTier) -> Vec<&'static ShopItem> {
    SHOP_ITEMS.iter().filter(|i| i.tier == tier).collect()
}

pub fn get_item_by_id(id: &str) -> Option<&'static ShopItem> {
    SHOP_ITEMS.iter().find(|i| i.id == id)
}
