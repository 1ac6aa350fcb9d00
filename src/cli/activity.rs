//! Activity tracking commands

use anyhow::Result;

use pointforge::ProgressionStore;

use super::print_events;

pub fn play_command(store: &mut ProgressionStore, game_id: &str, game_name: &str) -> Result<()> {
    store.track_game_play(game_id, game_name);
    print_events(store);
    print_balance(store);
    Ok(())
}

pub fn utility_command(store: &mut ProgressionStore, utility_id: &str) -> Result<()> {
    store.track_utility_use(utility_id);
    print_events(store);
    print_balance(store);
    Ok(())
}

pub fn visit_command(store: &mut ProgressionStore, page_id: &str) -> Result<()> {
    store.track_page_visit(page_id);
    print_events(store);
    print_balance(store);
    Ok(())
}

fn print_balance(store: &ProgressionStore) {
    let p = store.progress();
    println!(
        "{} points, level {} ({})",
        p.total_points,
        p.level,
        store.current_rank().name
    );
}
