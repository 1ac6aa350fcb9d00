//! Shop item catalog
//!
//! Organized by category; costs grow with tier so there is always a next
//! thing to save up for.

use super::{Entitlement, EntitlementKind, ShopCategory, ShopItem, ShopTier};

/// All purchasable items
pub static SHOP_ITEMS: &[ShopItem] = &[
    // === VISUAL (75-300) ===
    ShopItem {
        id: "ocean-theme",
        name: "Ocean Breeze",
        description: "Calming blue ocean-inspired theme",
        cost: 75,
        icon: "🌊",
        category: ShopCategory::Visual,
        tier: ShopTier::Starter,
        effects: &["Blue gradient backgrounds", "Wave animations"],
        preview: Some("Cool blue tones with gentle wave effects"),
        entitlement: None,
    },
    ShopItem {
        id: "dark-mode-pro",
        name: "Dark Mode Pro",
        description: "OLED-optimized true black theme",
        cost: 100,
        icon: "🌙",
        category: ShopCategory::Visual,
        tier: ShopTier::Starter,
        effects: &["True black backgrounds", "Enhanced contrast"],
        preview: Some("Perfect for night browsing and battery saving"),
        entitlement: None,
    },
    ShopItem {
        id: "retro-theme",
        name: "Retro Arcade",
        description: "Classic 80s arcade aesthetic",
        cost: 125,
        icon: "👾",
        category: ShopCategory::Visual,
        tier: ShopTier::Medium,
        effects: &["Pixelated borders", "Orange/cyan accents", "Retro fonts"],
        preview: Some("Nostalgic arcade vibes with pixel-perfect styling"),
        entitlement: None,
    },
    ShopItem {
        id: "neon-theme",
        name: "Neon Nights",
        description: "Electric neon with glowing effects",
        cost: 150,
        icon: "💜",
        category: ShopCategory::Visual,
        tier: ShopTier::Medium,
        effects: &["Glowing purple/cyan", "Neon text effects", "Animated glow"],
        preview: Some("Cyberpunk-inspired neon aesthetics"),
        entitlement: None,
    },
    ShopItem {
        id: "rainbow-theme",
        name: "Rainbow Dreams",
        description: "Vibrant rainbow gradient theme",
        cost: 150,
        icon: "🌈",
        category: ShopCategory::Visual,
        tier: ShopTier::Medium,
        effects: &["Rainbow gradients", "Color-shifting accents", "Smooth transitions"],
        preview: Some("Colorful and energetic rainbow styling"),
        entitlement: None,
    },
    ShopItem {
        id: "custom-theme-editor",
        name: "Theme Studio",
        description: "Create your own custom themes",
        cost: 300,
        icon: "🎨",
        category: ShopCategory::Visual,
        tier: ShopTier::Ultimate,
        effects: &["Custom color picker", "Save multiple themes", "Export/import"],
        preview: Some("Full creative control over your color scheme"),
        entitlement: None,
    },
    // === CONVENIENCE (100-250) ===
    ShopItem {
        id: "unlimited-favorites",
        name: "Unlimited Favorites",
        description: "Save as many favorite games as you want",
        cost: 200,
        icon: "⭐",
        category: ShopCategory::Convenience,
        tier: ShopTier::Medium,
        effects: &["No limit on favorites", "Quick access sidebar"],
        preview: Some("Never worry about favorite slots again"),
        entitlement: None,
    },
    ShopItem {
        id: "recently-played-tracker",
        name: "Play History",
        description: "Track your 20 most recently played games",
        cost: 150,
        icon: "🕐",
        category: ShopCategory::Convenience,
        tier: ShopTier::Medium,
        effects: &["Recently played list", "Quick resume", "Time tracking"],
        preview: Some("Easily return to your recent games"),
        entitlement: None,
    },
    ShopItem {
        id: "quick-launch-slots",
        name: "Quick Launch",
        description: "Pin 5 games for instant access",
        cost: 175,
        icon: "⚡",
        category: ShopCategory::Convenience,
        tier: ShopTier::Medium,
        effects: &["5 pinned slots", "Keyboard shortcuts", "One-click launch"],
        preview: Some("Lightning-fast access to your go-to games"),
        entitlement: None,
    },
    ShopItem {
        id: "game-notes",
        name: "Game Notes",
        description: "Add personal notes to any game",
        cost: 125,
        icon: "📝",
        category: ShopCategory::Convenience,
        tier: ShopTier::Starter,
        effects: &["Write notes per game", "Tips & strategies", "Personal records"],
        preview: Some("Keep track of strategies and high scores"),
        entitlement: None,
    },
    ShopItem {
        id: "auto-save-progress",
        name: "Auto-Save",
        description: "Automatically save your game preferences",
        cost: 100,
        icon: "💾",
        category: ShopCategory::Convenience,
        tier: ShopTier::Starter,
        effects: &["Auto-save settings", "Cloud sync ready", "Never lose progress"],
        preview: Some("Your preferences saved automatically"),
        entitlement: None,
    },
    ShopItem {
        id: "offline-mode-plus",
        name: "Offline Mode+",
        description: "Enhanced offline game experience",
        cost: 250,
        icon: "📡",
        category: ShopCategory::Convenience,
        tier: ShopTier::Advanced,
        effects: &["Offline game cache", "No-connection indicators", "Auto-sync"],
        preview: Some("Play even when internet is spotty"),
        entitlement: None,
    },
    // === DISCOVERY (175-350) ===
    ShopItem {
        id: "smart-recommendations",
        name: "Smart Recommendations",
        description: "Game suggestions based on your taste",
        cost: 300,
        icon: "🧠",
        category: ShopCategory::Discovery,
        tier: ShopTier::Advanced,
        effects: &["Personalized suggestions", "Similar games finder", "Hidden gems"],
        preview: Some("Discover games you'll love"),
        entitlement: None,
    },
    ShopItem {
        id: "advanced-search",
        name: "Advanced Search",
        description: "Powerful search with filters and tags",
        cost: 175,
        icon: "🔍",
        category: ShopCategory::Discovery,
        tier: ShopTier::Medium,
        effects: &["Multiple filters", "Tag search", "Sort options"],
        preview: Some("Find exactly what you're looking for"),
        entitlement: None,
    },
    ShopItem {
        id: "game-collections",
        name: "Custom Collections",
        description: "Create and organize your own game collections",
        cost: 250,
        icon: "📚",
        category: ShopCategory::Discovery,
        tier: ShopTier::Advanced,
        effects: &["Create collections", "Share with friends", "Import/export"],
        preview: Some("Organize games your way"),
        entitlement: None,
    },
    ShopItem {
        id: "trending-insights",
        name: "Trending Insights",
        description: "See what's popular and rising",
        cost: 200,
        icon: "📈",
        category: ShopCategory::Discovery,
        tier: ShopTier::Medium,
        effects: &["Trending games", "Rising stars", "Community favorites"],
        preview: Some("Stay on top of what's hot"),
        entitlement: None,
    },
    ShopItem {
        id: "discovery-feed",
        name: "Discovery Feed",
        description: "Personalized daily game recommendations",
        cost: 350,
        icon: "🎯",
        category: ShopCategory::Discovery,
        tier: ShopTier::Advanced,
        effects: &["Daily feed", "New releases", "Curated picks"],
        preview: Some("Fresh discoveries every day"),
        entitlement: None,
    },
    // === PROFILE (175-400) ===
    ShopItem {
        id: "profile-badges",
        name: "Badge Collection",
        description: "Unlock and display achievement badges",
        cost: 200,
        icon: "🏅",
        category: ShopCategory::Profile,
        tier: ShopTier::Medium,
        effects: &["Achievement badges", "Display on profile", "Earn more badges"],
        preview: Some("Show off your accomplishments"),
        entitlement: None,
    },
    ShopItem {
        id: "custom-title",
        name: "Custom Titles",
        description: "Choose from exclusive profile titles",
        cost: 250,
        icon: "✨",
        category: ShopCategory::Profile,
        tier: ShopTier::Medium,
        effects: &["20+ titles to choose", "Animated titles", "Unlock more with play"],
        preview: Some("Stand out with unique titles"),
        entitlement: None,
    },
    ShopItem {
        id: "stats-dashboard",
        name: "Stats Dashboard",
        description: "Detailed analytics of your gaming",
        cost: 300,
        icon: "📊",
        category: ShopCategory::Profile,
        tier: ShopTier::Advanced,
        effects: &["Play time tracking", "Favorite genres", "Weekly reports"],
        preview: Some("Deep insights into your gaming habits"),
        entitlement: None,
    },
    ShopItem {
        id: "profile-border",
        name: "Animated Border",
        description: "Animated profile picture border",
        cost: 175,
        icon: "🖼️",
        category: ShopCategory::Profile,
        tier: ShopTier::Medium,
        effects: &["Choose border style", "Animated effects", "Color customization"],
        preview: Some("Make your profile pop"),
        entitlement: None,
    },
    ShopItem {
        id: "activity-timeline",
        name: "Activity Timeline",
        description: "Visual timeline of your gaming journey",
        cost: 400,
        icon: "📅",
        category: ShopCategory::Profile,
        tier: ShopTier::Advanced,
        effects: &["Interactive timeline", "Milestones", "Share highlights"],
        preview: Some("Your gaming story visualized"),
        entitlement: None,
    },
    ShopItem {
        id: "achievement-showcase",
        name: "Achievement Showcase",
        description: "Highlight your best achievements",
        cost: 275,
        icon: "🏆",
        category: ShopCategory::Profile,
        tier: ShopTier::Advanced,
        effects: &["Feature top achievements", "Animated displays", "Share showcase"],
        preview: Some("Display your proudest moments"),
        entitlement: None,
    },
    // === PREMIUM (500-5000), long-term goals ===
    ShopItem {
        id: "ad-skip-tokens-1hr",
        name: "Ad-Skip Token (1 Hour)",
        description: "Temporarily reduce ads for 1 hour",
        cost: 500,
        icon: "🚫",
        category: ShopCategory::Premium,
        tier: ShopTier::Advanced,
        effects: &["1 hour reduced ads", "Time-limited", "Reusable purchase"],
        preview: Some("Less interruption for focused gaming"),
        entitlement: Some(Entitlement {
            kind: EntitlementKind::AdSkip,
            hours: 1,
        }),
    },
    ShopItem {
        id: "ad-skip-tokens-1day",
        name: "Ad-Skip Token (24 Hours)",
        description: "Temporarily reduce ads for 24 hours",
        cost: 1500,
        icon: "⭐",
        category: ShopCategory::Premium,
        tier: ShopTier::Ultimate,
        effects: &["24 hours reduced ads", "Time-limited", "Best value"],
        preview: Some("Day-long reduced ad experience"),
        entitlement: Some(Entitlement {
            kind: EntitlementKind::AdSkip,
            hours: 24,
        }),
    },
    ShopItem {
        id: "exclusive-games-pack",
        name: "Exclusive Games Pack",
        description: "Access to 10+ exclusive premium games",
        cost: 1000,
        icon: "🎮",
        category: ShopCategory::Premium,
        tier: ShopTier::Ultimate,
        effects: &["10+ exclusive games", "Early access", "Premium quality"],
        preview: Some("Games you won't find elsewhere"),
        entitlement: None,
    },
    ShopItem {
        id: "developer-supporter",
        name: "Developer Supporter",
        description: "Special badge supporting site development",
        cost: 2000,
        icon: "💝",
        category: ShopCategory::Premium,
        tier: ShopTier::Ultimate,
        effects: &["Supporter badge", "Special profile color", "Thank you message"],
        preview: Some("Help keep the site running"),
        entitlement: None,
    },
    ShopItem {
        id: "early-access-features",
        name: "Early Access Pass",
        description: "Try new features before everyone else",
        cost: 800,
        icon: "🚀",
        category: ShopCategory::Premium,
        tier: ShopTier::Advanced,
        effects: &["Beta features", "Feedback priority", "Exclusive updates"],
        preview: Some("Be the first to try new stuff"),
        entitlement: None,
    },
    ShopItem {
        id: "vip-status",
        name: "VIP Status",
        description: "Ultimate premium experience bundle",
        cost: 5000,
        icon: "👑",
        category: ShopCategory::Premium,
        tier: ShopTier::Ultimate,
        effects: &["All premium features", "VIP badge", "Priority support", "Lifetime access"],
        preview: Some("The complete premium package"),
        entitlement: None,
    },
];
