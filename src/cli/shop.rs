//! Shop browsing and purchase commands

use anyhow::{Result, bail};

use pointforge::ProgressionStore;
use pointforge::progression::PurchaseOutcome;
use pointforge::shop::{
    ShopCategory, ShopItem, ShopTier, get_item_by_id, get_items_by_category,
};

use super::print_events;

/// List shop items, optionally filtered
pub fn shop_command(
    store: &mut ProgressionStore,
    category: Option<&str>,
    tier: Option<&str>,
) -> Result<()> {
    print_events(store);

    let category = match category {
        Some(name) => match ShopCategory::from_str(name) {
            Some(c) => Some(c),
            None => bail!("Unknown category: {}", name),
        },
        None => None,
    };
    let tier = match tier {
        Some(name) => match ShopTier::from_str(name) {
            Some(t) => Some(t),
            None => bail!("Unknown tier: {}", name),
        },
        None => None,
    };

    println!("Balance: {} points", store.total_points());

    for &cat in ShopCategory::all() {
        if category.is_some_and(|c| c != cat) {
            continue;
        }
        let items: Vec<&ShopItem> = get_items_by_category(cat)
            .into_iter()
            .filter(|i| tier.is_none_or(|t| i.tier == t))
            .collect();
        if items.is_empty() {
            continue;
        }

        let info = cat.info();
        println!("\n{} {} - {}", info.icon, info.name, info.description);
        for item in items {
            let marker = if store.owns(item.id) && !item.is_consumable() {
                "owned"
            } else if !store.is_available(item) {
                "unavailable"
            } else if store.total_points() >= item.cost {
                "affordable"
            } else {
                ""
            };
            println!(
                "  {} {:<28} {:>5}  [{}] {}",
                item.icon,
                item.id,
                item.cost,
                item.tier.as_str(),
                marker
            );
            println!("      {}", item.description);
        }
    }

    Ok(())
}

/// Buy an item at catalog price
pub fn buy_command(store: &mut ProgressionStore, item_id: &str) -> Result<()> {
    let outcome = store.purchase_catalog_item(item_id);
    print_events(store);

    match outcome {
        PurchaseOutcome::Purchased => {
            let name = get_item_by_id(item_id).map_or(item_id, |i| i.name);
            println!("Bought {}. {} points left.", name, store.total_points());
        }
        PurchaseOutcome::AlreadyOwned => println!("You already own {}.", item_id),
        PurchaseOutcome::InsufficientFunds { needed } => {
            println!("Not enough points: {} more needed.", needed)
        }
        PurchaseOutcome::UnknownItem => bail!("Unknown item: {}", item_id),
        PurchaseOutcome::Unavailable => println!("{} is not available right now.", item_id),
    }

    Ok(())
}
