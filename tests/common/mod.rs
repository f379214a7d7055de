// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{DateTime, Duration, TimeZone, Utc};
use mapty::models::{Coordinates, Workout};
use mapty::services::WorkoutStore;
use mapty::storage::{keys, KeyValueStorage, MemoryStorage};

/// Creation instant `offset_ms` after a fixed base time.
#[allow(dead_code)]
pub fn at(offset_ms: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 4, 14, 8, 30, 0).unwrap() + Duration::milliseconds(offset_ms)
}

/// Running workout from the reference scenario: pace 6.0.
#[allow(dead_code)]
pub fn sample_run() -> Workout {
    Workout::running_at(Coordinates::new(10.0, 20.0), 5.0, 30.0, 150.0, at(0))
}

/// Cycling workout from the reference scenario: speed 20.0.
#[allow(dead_code)]
pub fn sample_ride() -> Workout {
    Workout::cycling_at(Coordinates::new(11.0, 21.0), 20.0, 60.0, 100.0, at(1))
}

/// Memory storage preloaded with a raw workouts blob.
#[allow(dead_code)]
pub fn storage_with_blob(blob: &str) -> MemoryStorage {
    let mut storage = MemoryStorage::new();
    storage
        .set(keys::WORKOUTS, blob)
        .expect("memory storage without quota accepts writes");
    storage
}

/// Store holding both sample workouts, already persisted.
#[allow(dead_code)]
pub fn populated_store() -> WorkoutStore<MemoryStorage> {
    let mut store = WorkoutStore::new(MemoryStorage::new());
    store.append(sample_run()).expect("append run");
    store.append(sample_ride()).expect("append ride");
    store
}
