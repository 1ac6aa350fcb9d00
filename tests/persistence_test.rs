//! Integration tests for loading, saving and transferring profiles

mod common;

use std::sync::Arc;

use tempfile::TempDir;

use pointforge::progression::{
    ImportError, MAX_LEVEL, ManualClock, ProgressionEvent, ValidationError,
};
use pointforge::storage::keys;
use pointforge::{MemoryStorage, ProfileStorage, ProgressionRules, ProgressionStore, SqliteStorage};

use common::{checked_in, clock, new_profile, open};

fn open_sqlite(storage: &SqliteStorage, clock: &Arc<ManualClock>) -> ProgressionStore {
    ProgressionStore::open(
        Box::new(storage.clone()),
        ProgressionRules::default(),
        clock.clone(),
    )
}

#[test]
fn test_sqlite_profile_survives_reopen() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("profile.db");
    let clock = clock();

    {
        let storage = SqliteStorage::open(&path).unwrap();
        let mut store = open_sqlite(&storage, &clock);
        store.track_game_play("snake", "Snake");
        store.track_utility_use("timer");
        assert!(store.purchase_item("ocean-theme", 75));
    }

    let storage = SqliteStorage::open(&path).unwrap();
    let store = open_sqlite(&storage, &clock);
    assert!(!store.is_degraded());
    // 50 welcome + 25 + 30 + 50 first_game + 15 - 75
    assert_eq!(store.total_points(), 95);
    assert_eq!(store.purchases(), &["ocean-theme".to_string()]);
    assert_eq!(store.recently_played()[0].game_id, "snake");
    assert!(store.progress().features_discovered.contains("utility_timer"));
    assert_eq!(
        storage.get(keys::REWARD_POINTS).unwrap().as_deref(),
        Some("95")
    );
}

#[test]
fn test_malformed_progress_falls_back_to_default() {
    let storage = MemoryStorage::new();
    storage
        .set(keys::USER_PROGRESS, "{not json".to_string())
        .unwrap();
    storage
        .set(keys::PURCHASES, "also not json".to_string())
        .unwrap();

    let clock = clock();
    let store = open(&storage, &clock);
    assert!(!store.is_degraded());
    assert_eq!(store.total_points(), 50);
    assert_eq!(store.progress().level, 1);
    assert!(store.purchases().is_empty());
}

#[test]
fn test_structurally_invalid_progress_falls_back() {
    let storage = MemoryStorage::new();
    storage
        .set(
            keys::USER_PROGRESS,
            r#"{"totalPoints":900,"level":0,"rank":"Gamer"}"#.to_string(),
        )
        .unwrap();
    let clock = clock();
    let store = open(&storage, &clock);
    assert_eq!(store.total_points(), 50);

    storage
        .set(
            keys::USER_PROGRESS,
            r#"{"totalPoints":900,"level":2,"rank":"Overlord"}"#.to_string(),
        )
        .unwrap();
    let store = open(&storage, &clock);
    assert_eq!(store.total_points(), 50);
}

#[test]
fn test_legacy_layout_loads_and_normalizes() {
    let storage = MemoryStorage::new();
    storage
        .set(
            keys::USER_PROGRESS,
            r#"{
                "totalPoints": 500,
                "level": 1,
                "xp": 250,
                "rank": "Newbie",
                "streakCount": 4,
                "lastVisit": "Fri Oct 16 2026",
                "gamesPlayedToday": ["g1"],
                "uniqueGamesPlayed": ["g1"],
                "milestonesAchieved": ["first_game"]
            }"#
            .to_string(),
        )
        .unwrap();
    storage
        .set(keys::PURCHASES, r#"["a","b","a"]"#.to_string())
        .unwrap();

    let clock = clock();
    let mut store = open(&storage, &clock);
    assert!(store.drain_events().is_empty(), "same day, no bonus");

    let p = store.progress();
    assert_eq!(p.streak_count, 4);
    assert_eq!((p.level, p.xp), (3, 50));
    assert_eq!(p.rank, "Gamer");
    assert_eq!(p.games_played_today.len(), 1);
    assert_eq!(store.purchases(), &["a".to_string(), "b".to_string()]);
}

#[test]
fn test_quota_failure_degrades_once() {
    let storage = MemoryStorage::with_quota(0);
    let clock = clock();
    let mut store = open(&storage, &clock);

    assert!(store.is_degraded());
    let events = store.drain_events();
    assert_eq!(
        events
            .iter()
            .filter(|e| matches!(e, ProgressionEvent::StorageUnavailable { .. }))
            .count(),
        1
    );

    // Keeps working in memory, never writes, never warns again
    store.track_game_play("g1", "Alpha");
    assert!(store.purchase_item("ocean-theme", 75));
    assert_eq!(store.total_points(), 80);
    assert!(
        !store
            .drain_events()
            .iter()
            .any(|e| matches!(e, ProgressionEvent::StorageUnavailable { .. }))
    );
    assert!(storage.is_empty());
}

#[test]
fn test_expired_ad_skip_cleared_on_next_day() {
    let (mut store, clock, storage) = checked_in();
    store.award_points(600, "seed", true);
    assert!(store.purchase_item("ad-skip-tokens-1hr", 500));
    assert!(storage.get(keys::AD_SKIP_ACTIVE_UNTIL).unwrap().is_some());

    clock.advance_days(1);
    assert!(store.check_in());
    assert!(store.ad_skip_until().is_none());
    assert!(storage.get(keys::AD_SKIP_ACTIVE_UNTIL).unwrap().is_none());
    assert!(store.owns("ad-skip-tokens-1hr"));
}

#[test]
fn test_export_import_through_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let file = dir.path().join("export.json");

    let (mut source, _, _) = new_profile();
    source.track_game_play("g1", "Alpha");
    source.track_page_visit("about");
    std::fs::write(&file, source.export_profile().unwrap()).unwrap();

    let (mut target, _, target_storage) = checked_in();
    let text = std::fs::read_to_string(&file).unwrap();
    target.import_profile(&text).unwrap();

    assert_eq!(target.progress(), source.progress());
    let stored = target_storage.get(keys::REWARD_POINTS).unwrap();
    assert_eq!(stored, Some(source.total_points().to_string()));
}

#[test]
fn test_rejected_import_keeps_stored_profile() {
    let (mut store, _, storage) = checked_in();
    store.award_points(321, "seed", true);
    let stored_before = storage.get(keys::USER_PROGRESS).unwrap();

    let text = r#"{"format":"pointforge-profile","version":1,"exportedAt":"2026-10-16T12:00:00Z","progress":{"rank":"Nobody"}}"#;
    let err = store.import_profile(text).unwrap_err();
    assert!(matches!(err, ImportError::Invalid(_)));

    assert_eq!(store.total_points(), 321);
    assert_eq!(storage.get(keys::USER_PROGRESS).unwrap(), stored_before);
}

#[test]
fn test_import_rejects_out_of_range_level() {
    let (mut store, _, _) = checked_in();
    store.award_points(40, "seed", true);

    let text = r#"{"format":"pointforge-profile","version":1,"exportedAt":"2026-10-16T12:00:00Z","progress":{"level":4294967295,"xp":5000}}"#;
    let err = store.import_profile(text).unwrap_err();
    assert!(matches!(
        err,
        ImportError::Invalid(ValidationError::LevelOutOfRange(4294967295))
    ));
    assert_eq!(store.progress().level, 1);
    assert_eq!(store.total_points(), 40);
}

#[test]
fn test_stored_out_of_range_level_falls_back() {
    let storage = MemoryStorage::new();
    storage
        .set(
            keys::USER_PROGRESS,
            r#"{"level":4294967295,"xp":5000}"#.to_string(),
        )
        .unwrap();
    let clock = clock();
    let store = open(&storage, &clock);
    assert_eq!(store.progress().level, 1);
    assert_eq!(store.total_points(), 50);

    storage
        .set(keys::USER_PROGRESS, r#"{"xp":18446744073709551615}"#.to_string())
        .unwrap();
    let store = open(&storage, &clock);
    assert_eq!(store.progress().xp, 50);
}

#[test]
fn test_huge_award_finishes_at_level_cap() {
    let (mut store, _, _) = checked_in();
    store.award_points(u64::MAX, "jackpot", true);

    let p = store.progress();
    assert_eq!(p.level, MAX_LEVEL);
    assert_eq!(p.total_points, u64::MAX);
    assert!(p.xp < u64::from(store.xp_for_next_level()));
}
