//! Spending points on shop items and time-boxed entitlements
//!
//! Ownership is a plain list of item ids, each at most once. Consumable
//! items (those with an entitlement) can be bought again to restart their
//! timer. Expiry is never scheduled; readers compare against the clock.

use chrono::{DateTime, Duration, Utc};
use tracing::info;

use super::events::ProgressionEvent;
use super::store::ProgressionStore;
use crate::shop::{EntitlementKind, ShopItem, get_item_by_id};

/// Result of buying an item from the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Purchased,
    AlreadyOwned,
    InsufficientFunds { needed: u64 },
    UnknownItem,
    /// The item exists but is switched off
    Unavailable,
}

impl ProgressionStore {
    /// Spend `cost` and record `item_id` as owned, both or neither.
    ///
    /// The store does not refuse ids that are already owned; callers check
    /// [`ProgressionStore::owns`] first (or use
    /// [`ProgressionStore::purchase_catalog_item`]). An id is never listed twice.
    pub fn purchase_item(&mut self, item_id: &str, cost: u64) -> bool {
        if !self.apply_spend(cost) {
            return false;
        }

        if !self.owns(item_id) {
            self.purchases.push(item_id.to_string());
        }

        if let Some(entitlement) = get_item_by_id(item_id).and_then(|i| i.entitlement) {
            match entitlement.kind {
                EntitlementKind::AdSkip => {
                    let until = self.clock.now() + entitlement.duration();
                    info!("Ad-skip active until {}", until.to_rfc3339());
                    self.ad_skip_until = Some(until);
                }
            }
        }

        info!("Purchased {} for {} points", item_id, cost);
        self.emit(ProgressionEvent::ItemPurchased {
            item_id: item_id.to_string(),
            cost,
        });
        self.persist();
        true
    }

    /// Shop-view purchase: look the item up, guard ownership, feature flags
    /// and balance, then buy at catalog price.
    pub fn purchase_catalog_item(&mut self, item_id: &str) -> PurchaseOutcome {
        let Some(item) = get_item_by_id(item_id) else {
            return PurchaseOutcome::UnknownItem;
        };
        if self.owns(item.id) && !item.is_consumable() {
            return PurchaseOutcome::AlreadyOwned;
        }
        if !self.is_available(item) {
            return PurchaseOutcome::Unavailable;
        }
        let balance = self.total_points();
        if balance < item.cost {
            return PurchaseOutcome::InsufficientFunds {
                needed: item.cost - balance,
            };
        }
        if self.purchase_item(item.id, item.cost) {
            PurchaseOutcome::Purchased
        } else {
            PurchaseOutcome::InsufficientFunds {
                needed: item.cost.saturating_sub(self.total_points()),
            }
        }
    }

    /// Whether the catalog currently offers this item.
    pub fn is_available(&self, item: &ShopItem) -> bool {
        match item.entitlement.map(|e| e.kind) {
            Some(EntitlementKind::AdSkip) => self.shop.ad_skip_enabled,
            None => true,
        }
    }

    pub fn purchases(&self) -> &[String] {
        &self.purchases
    }

    pub fn owns(&self, item_id: &str) -> bool {
        self.purchases.iter().any(|p| p == item_id)
    }

    /// Stored ad-skip expiry, whether or not it has passed
    pub fn ad_skip_until(&self) -> Option<DateTime<Utc>> {
        self.ad_skip_until
    }

    pub fn ad_skip_active(&self) -> bool {
        self.ad_skip_remaining().is_some()
    }

    /// Time left on the ad-skip entitlement, if it is still running.
    pub fn ad_skip_remaining(&self) -> Option<Duration> {
        let until = self.ad_skip_until?;
        let left = until - self.clock.now();
        (left > Duration::zero()).then_some(left)
    }

    /// Drop entitlements whose expiry has passed. Does not persist.
    pub(super) fn clear_expired_entitlements(&mut self) -> bool {
        if self.ad_skip_until.is_some() && !self.ad_skip_active() {
            self.ad_skip_until = None;
            return true;
        }
        false
    }
}

/// Compact remaining-time label: "45s", "12m", "3h".
pub fn format_time_remaining(seconds: i64) -> String {
    if seconds < 60 {
        format!("{}s", seconds.max(0))
    } else if seconds < 3600 {
        format!("{}m", seconds / 60)
    } else {
        format!("{}h", seconds / 3600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::calendar::ManualClock;
    use crate::progression::rules::ProgressionRules;
    use crate::progression::store::ShopSettings;
    use crate::storage::{MemoryStorage, ProfileStorage, keys};
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn store_with_points(points: u64) -> (ProgressionStore, Arc<ManualClock>, MemoryStorage) {
        let clock = Arc::new(ManualClock::at_date(
            NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
        ));
        let storage = MemoryStorage::new();
        let mut store = ProgressionStore::open(
            Box::new(storage.clone()),
            ProgressionRules::default(),
            clock.clone(),
        );
        // Welcome bonus is 50
        store.award_points(points.saturating_sub(50), "seed", true);
        store.drain_events();
        assert_eq!(store.total_points(), points.max(50));
        (store, clock, storage)
    }

    #[test]
    fn test_purchase_insufficient_funds_changes_nothing() {
        let (mut store, _, _) = store_with_points(50);
        assert!(!store.purchase_item("ocean-theme", 75));
        assert_eq!(store.total_points(), 50);
        assert!(store.purchases().is_empty());
        assert!(store.drain_events().is_empty());
    }

    #[test]
    fn test_purchase_records_once() {
        let (mut store, _, storage) = store_with_points(200);
        assert!(store.purchase_item("ocean-theme", 75));
        assert!(store.purchase_item("ocean-theme", 75));
        assert_eq!(store.purchases(), &["ocean-theme".to_string()]);
        assert_eq!(store.total_points(), 50);
        assert_eq!(
            storage.get(keys::PURCHASES).unwrap().as_deref(),
            Some(r#"["ocean-theme"]"#)
        );
    }

    #[test]
    fn test_ad_skip_entitlement_expires_lazily() {
        let (mut store, clock, storage) = store_with_points(600);
        assert!(store.purchase_item("ad-skip-tokens-1hr", 500));
        assert!(store.ad_skip_active());
        assert!(storage.get(keys::AD_SKIP_ACTIVE_UNTIL).unwrap().is_some());

        clock.advance(Duration::minutes(59));
        assert!(store.ad_skip_active());
        clock.advance(Duration::minutes(2));
        assert!(!store.ad_skip_active());
        assert!(store.ad_skip_remaining().is_none());

        assert!(store.clear_expired_entitlements());
        assert!(store.ad_skip_until().is_none());
    }

    #[test]
    fn test_day_token_lasts_24_hours() {
        let (mut store, clock, _) = store_with_points(1500);
        assert!(store.purchase_item("ad-skip-tokens-1day", 1500));
        let remaining = store.ad_skip_remaining().unwrap();
        assert_eq!(remaining, Duration::hours(24));
        clock.advance(Duration::hours(23));
        assert!(store.ad_skip_active());
    }

    #[test]
    fn test_catalog_purchase_outcomes() {
        let (mut store, _, _) = store_with_points(100);
        assert_eq!(
            store.purchase_catalog_item("nope"),
            PurchaseOutcome::UnknownItem
        );
        assert_eq!(
            store.purchase_catalog_item("retro-theme"),
            PurchaseOutcome::InsufficientFunds { needed: 25 }
        );
        assert_eq!(
            store.purchase_catalog_item("ocean-theme"),
            PurchaseOutcome::Purchased
        );
        assert_eq!(
            store.purchase_catalog_item("ocean-theme"),
            PurchaseOutcome::AlreadyOwned
        );
        assert_eq!(store.total_points(), 25);
    }

    #[test]
    fn test_ad_skip_gated_by_settings() {
        let (store, _, _) = store_with_points(2000);
        let mut store = store.with_shop_settings(ShopSettings::default());
        assert_eq!(
            store.purchase_catalog_item("ad-skip-tokens-1hr"),
            PurchaseOutcome::Unavailable
        );

        let mut store = store.with_shop_settings(ShopSettings {
            ad_skip_enabled: true,
        });
        assert_eq!(
            store.purchase_catalog_item("ad-skip-tokens-1hr"),
            PurchaseOutcome::Purchased
        );
        // Consumable: buying again renews instead of reporting ownership
        assert_eq!(
            store.purchase_catalog_item("ad-skip-tokens-1hr"),
            PurchaseOutcome::Purchased
        );
        assert_eq!(store.purchases().len(), 1);
        assert_eq!(store.total_points(), 1000);
    }

    #[test]
    fn test_format_time_remaining() {
        assert_eq!(format_time_remaining(45), "45s");
        assert_eq!(format_time_remaining(60), "1m");
        assert_eq!(format_time_remaining(3599), "59m");
        assert_eq!(format_time_remaining(7200), "2h");
    }
}
