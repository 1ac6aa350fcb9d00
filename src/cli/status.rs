//! Status and milestones commands

use anyhow::Result;

use pointforge::progression::{MilestoneCategory, Rank, format_time_remaining};
use pointforge::ProgressionStore;

use super::print_events;

/// Show points, level, rank, streak and recent games
pub fn status_command(store: &mut ProgressionStore) -> Result<()> {
    print_events(store);

    let rank = store.current_rank();
    let p = store.progress();

    println!("{} {} - Level {}\n", rank.icon, rank.name, p.level);
    println!("  Points: {}", p.total_points);
    println!(
        "  XP: {}/{} ({:.0}%)",
        p.xp,
        store.xp_for_next_level(),
        store.level_progress()
    );
    match (store.next_rank(), Rank::points_to_next(p.total_points)) {
        (Some(next), Some(missing)) => {
            println!("  Next rank: {} {} in {} points", next.icon, next.name, missing)
        }
        _ => println!("  Top rank reached"),
    }
    println!("  Streak: {} day(s)", p.streak_count);
    println!(
        "  Games: {} unique, {} plays, {} today",
        p.unique_games_played.len(),
        p.total_games_played,
        p.games_played_today.len()
    );

    if !p.recently_played.is_empty() {
        println!("\nRecently played:");
        for play in &p.recently_played {
            println!(
                "  {} ({}) {}",
                play.game_name,
                play.game_id,
                play.timestamp.format("%Y-%m-%d %H:%M")
            );
        }
    }

    if let Some(left) = store.ad_skip_remaining() {
        println!(
            "\nAd-skip active: {} left",
            format_time_remaining(left.num_seconds())
        );
    }

    if store.is_degraded() {
        println!("\nProgress is not being saved this session.");
    }

    Ok(())
}

/// List every milestone grouped by category
pub fn milestones_command(store: &mut ProgressionStore) -> Result<()> {
    print_events(store);

    let status = store.milestone_status();
    let achieved = status.iter().filter(|s| s.achieved).count();
    println!("Milestones ({}/{}):", achieved, status.len());

    for category in [
        MilestoneCategory::Games,
        MilestoneCategory::Streak,
        MilestoneCategory::Discovery,
        MilestoneCategory::Social,
    ] {
        let entries: Vec<_> = status
            .iter()
            .filter(|s| s.milestone.category == category)
            .collect();
        if entries.is_empty() {
            continue;
        }

        println!("\n{}", category.label());
        for entry in entries {
            let m = entry.milestone;
            println!(
                "  [{}] {} {} - {} (+{})",
                if entry.achieved { "x" } else { " " },
                m.icon,
                m.name,
                m.description,
                m.reward
            );
        }
    }

    Ok(())
}
