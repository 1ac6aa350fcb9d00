//! Shared test utilities for progression integration tests

#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;

use pointforge::progression::{ManualClock, ProgressionEvent, UserProgress};
use pointforge::storage::keys;
use pointforge::{MemoryStorage, ProfileStorage, ProgressionRules, ProgressionStore};

/// Calendar day every test starts on
pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date")
}

pub fn clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::at_date(start_date()))
}

/// Open a store over `storage` with default rules.
pub fn open(storage: &MemoryStorage, clock: &Arc<ManualClock>) -> ProgressionStore {
    ProgressionStore::open(
        Box::new(storage.clone()),
        ProgressionRules::default(),
        clock.clone(),
    )
}

/// Store for a brand-new profile (the welcome bonus is already applied).
pub fn new_profile() -> (ProgressionStore, Arc<ManualClock>, MemoryStorage) {
    let clock = clock();
    let storage = MemoryStorage::new();
    let store = open(&storage, &clock);
    (store, clock, storage)
}

/// Seed `storage` with a stored profile.
pub fn seed(storage: &MemoryStorage, progress: &UserProgress) {
    storage
        .set(
            keys::USER_PROGRESS,
            serde_json::to_string(progress).expect("serialize progress"),
        )
        .expect("seed storage");
}

/// Store for a zero-point profile that already checked in today.
pub fn checked_in() -> (ProgressionStore, Arc<ManualClock>, MemoryStorage) {
    let clock = clock();
    let storage = MemoryStorage::new();
    seed(
        &storage,
        &UserProgress {
            last_visit: Some(start_date()),
            streak_count: 1,
            ..Default::default()
        },
    );
    let store = open(&storage, &clock);
    (store, clock, storage)
}

/// Amounts of the `PointsAwarded` events, in order
pub fn awards(events: &[ProgressionEvent]) -> Vec<u64> {
    events
        .iter()
        .filter_map(|e| match e {
            ProgressionEvent::PointsAwarded { amount, .. } => Some(*amount),
            _ => None,
        })
        .collect()
}
