//! Integration tests for the progression engine

mod common;

use chrono::Duration;

use pointforge::progression::{ProgressionEvent, UserProgress};

use common::{awards, checked_in, new_profile, open, seed, start_date};

#[test]
fn test_award_level_loop_invariant() {
    for amount in [0u64, 1, 99, 100, 101, 250, 999, 5_000, 123_456] {
        let (mut store, _, _) = checked_in();
        store.award_points(17, "seed", true);
        let before = store.progress().clone();

        store.award_points(amount, "test", true);
        let after = store.progress();

        assert_eq!(after.total_points, before.total_points + amount);
        assert!(
            after.xp < u64::from(store.xp_for_next_level()),
            "xp {} must be below the cost of level {}",
            after.xp,
            after.level
        );
        let consumed: u64 = (before.level..after.level)
            .map(|l| u64::from(store.rules().xp_required_for(l)))
            .sum();
        assert_eq!(after.xp + consumed, before.xp + amount);
    }
}

#[test]
fn test_fresh_profile_250_points() {
    let (mut store, _, _) = checked_in();
    assert_eq!(store.progress().level, 1);
    assert_eq!(store.total_points(), 0);

    store.award_points(250, "test", false);
    let p = store.progress();
    assert_eq!((p.level, p.xp, p.total_points), (3, 50, 250));

    let events = store.drain_events();
    assert!(events.contains(&ProgressionEvent::LevelUp {
        old_level: 1,
        new_level: 2
    }));
    assert!(events.contains(&ProgressionEvent::LevelUp {
        old_level: 2,
        new_level: 3
    }));
}

#[test]
fn test_spend_never_goes_negative() {
    let (mut store, _, _) = checked_in();
    store.award_points(30, "seed", true);
    let before = store.progress().clone();

    assert!(!store.spend_points(31));
    assert_eq!(store.progress(), &before);
    assert!(store.drain_events().is_empty());

    assert!(store.spend_points(30));
    assert_eq!(store.total_points(), 0);
    assert_eq!(
        store.drain_events(),
        vec![ProgressionEvent::PointsSpent { amount: 30 }]
    );
}

#[test]
fn test_ocean_theme_needs_75_points() {
    let (mut store, _, _) = new_profile();
    assert_eq!(store.total_points(), 50);

    assert!(!store.purchase_item("ocean-theme", 75));
    assert!(store.purchases().is_empty());
    assert_eq!(store.total_points(), 50);
}

#[test]
fn test_first_game_ever() {
    let (mut store, _, _) = checked_in();
    store.track_game_play("g1", "Alpha");

    let events = store.drain_events();
    assert_eq!(awards(&events), vec![25, 30]);
    assert_eq!(store.recently_played()[0].game_id, "g1");
    assert_eq!(store.recently_played()[0].game_name, "Alpha");
    assert!(events.iter().any(|e| matches!(
        e,
        ProgressionEvent::MilestoneAchieved {
            id: "first_game",
            ..
        }
    )));
}

#[test]
fn test_recently_played_keeps_ten_unique() {
    let (mut store, _, _) = checked_in();
    for i in 0..12 {
        store.track_game_play(&format!("g{i}"), "Game");
    }
    store.track_game_play("g5", "Game");

    let recent = store.recently_played();
    assert_eq!(recent.len(), 10);
    assert_eq!(recent[0].game_id, "g5");
    assert_eq!(recent.iter().filter(|r| r.game_id == "g5").count(), 1);
    assert_eq!(store.progress().total_games_played, 13);
}

#[test]
fn test_game_discovery_cap() {
    let (mut store, _, _) = checked_in();
    let mut new_game_awards = 0;
    for i in 0..8 {
        store.track_game_play(&format!("g{i}"), "Game");
        new_game_awards += awards(&store.drain_events())
            .iter()
            .filter(|a| **a == 30)
            .count();
    }

    assert_eq!(new_game_awards, 5);
    assert_eq!(store.progress().unique_games_played.len(), 8);
    assert_eq!(store.progress().games_played_today.len(), 8);
}

#[test]
fn test_utility_cap() {
    let (mut store, _, _) = checked_in();
    for id in ["u1", "u2", "u3", "u4", "u1"] {
        store.track_utility_use(id);
    }

    assert_eq!(awards(&store.drain_events()), vec![15, 15, 15]);
    assert_eq!(store.progress().utilities_used_today.len(), 4);
    assert_eq!(store.progress().features_discovered.len(), 4);
    assert_eq!(store.total_points(), 45);
}

#[test]
fn test_page_cap_and_site_explorer() {
    let (mut store, _, _) = checked_in();
    for i in 0..6 {
        store.track_page_visit(&format!("p{i}"));
    }

    assert_eq!(awards(&store.drain_events()), vec![10; 5]);
    assert!(
        store
            .progress()
            .milestones_achieved
            .contains("site_explorer")
    );
    // 5 pages plus the milestone reward
    assert_eq!(store.total_points(), 150);
}

#[test]
fn test_caps_reset_next_day() {
    let (mut store, clock, _) = checked_in();
    for i in 0..5 {
        store.track_game_play(&format!("g{i}"), "Game");
    }
    store.drain_events();

    clock.advance_days(1);
    store.track_game_play("g9", "Game");
    let events = store.drain_events();
    assert!(events.contains(&ProgressionEvent::StreakExtended { count: 2 }));
    assert_eq!(awards(&events), vec![50, 25, 30]);
    assert_eq!(store.progress().games_played_today.len(), 1);
}

#[test]
fn test_welcome_bonus_once() {
    let (mut store, _, storage) = new_profile();
    assert_eq!(
        store.drain_events(),
        vec![ProgressionEvent::PointsAwarded {
            amount: 50,
            source: "Welcome Bonus!".into()
        }]
    );
    assert_eq!(store.progress().streak_count, 1);
    assert_eq!(store.progress().last_visit, Some(start_date()));

    assert!(!store.check_in());
    drop(store);

    let clock = common::clock();
    let reopened = open(&storage, &clock);
    assert_eq!(reopened.total_points(), 50);
    assert!(reopened.pending_events().is_empty());
}

#[test]
fn test_streak_extends_from_yesterday() {
    let (mut store, clock, _) = new_profile();
    store.drain_events();

    clock.advance_days(1);
    assert!(store.check_in());
    assert_eq!(store.progress().streak_count, 2);
    assert_eq!(
        store.drain_events(),
        vec![
            ProgressionEvent::StreakExtended { count: 2 },
            ProgressionEvent::PointsAwarded {
                amount: 50,
                source: "Daily Login (Day 2)".into()
            },
        ]
    );
}

#[test]
fn test_streak_resets_after_gap() {
    let (mut store, clock, _) = new_profile();
    clock.advance_days(1);
    store.check_in();
    clock.advance_days(1);
    store.check_in();
    assert_eq!(store.progress().streak_count, 3);
    store.drain_events();

    clock.advance_days(3);
    assert!(store.check_in());
    assert_eq!(store.progress().streak_count, 1);
    let events = store.drain_events();
    assert_eq!(events[0], ProgressionEvent::StreakBroken);
    assert_eq!(awards(&events), vec![50]);
}

#[test]
fn test_weekly_streak_bonus_and_week_warrior() {
    let clock = common::clock();
    let storage = pointforge::MemoryStorage::new();
    seed(
        &storage,
        &UserProgress {
            streak_count: 7,
            last_visit: start_date().pred_opt(),
            ..Default::default()
        },
    );

    let mut store = open(&storage, &clock);
    assert_eq!(store.progress().streak_count, 8);
    let events = store.drain_events();
    assert_eq!(awards(&events), vec![60]);
    assert!(
        store
            .progress()
            .milestones_achieved
            .contains("week_warrior")
    );
    // 60 login + 150 milestone
    assert_eq!(store.total_points(), 210);
}

#[test]
fn test_clock_going_backwards_is_same_day() {
    let (mut store, clock, _) = new_profile();
    store.drain_events();
    let before = store.progress().clone();

    clock.advance(Duration::days(-2));
    assert!(!store.check_in());
    store.track_page_visit("about");

    assert_eq!(store.progress().streak_count, before.streak_count);
    assert_eq!(store.progress().last_visit, before.last_visit);
}

#[test]
fn test_session_crossing_midnight() {
    let (mut store, clock, _) = checked_in();
    store.track_utility_use("calc");
    clock.advance(Duration::hours(13));

    store.track_utility_use("calc");
    let p = store.progress();
    assert_eq!(p.utilities_used_today.len(), 1);
    assert_eq!(p.streak_count, 2);
    // Already discovered yesterday, so only the login bonus
    assert_eq!(awards(&store.drain_events()), vec![15, 50]);
}

#[test]
fn test_milestones_at_most_once() {
    let (mut store, clock, storage) = checked_in();
    store.track_game_play("g1", "Alpha");
    store.track_game_play("g1", "Alpha");
    assert!(store.check_milestones().is_empty());

    let clock2 = clock.clone();
    drop(store);
    let mut reopened = open(&storage, &clock2);
    reopened.track_game_play("g2", "Beta");

    let achieved = &reopened.progress().milestones_achieved;
    assert_eq!(achieved.len(), 1);
    assert!(achieved.contains("first_game"));
    assert!(
        !reopened
            .drain_events()
            .iter()
            .any(|e| matches!(e, ProgressionEvent::MilestoneAchieved { .. }))
    );
}

#[test]
fn test_milestone_status_lists_catalog() {
    let (mut store, _, _) = checked_in();
    store.track_game_play("g1", "Alpha");

    let status = store.milestone_status();
    assert_eq!(status.len(), store.milestones().len());
    let achieved: Vec<_> = status
        .iter()
        .filter(|s| s.achieved)
        .map(|s| s.milestone.id.as_str())
        .collect();
    assert_eq!(achieved, vec!["first_game"]);
}
