// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout collection with a write-through storage mirror.
//!
//! The in-memory list is the source of truth for the session. Every append
//! rewrites the whole list under one storage key; startup reads it back and
//! rebuilds each workout's variant from the stored tag.

use crate::error::AppError;
use crate::models::{StoredWorkout, Workout};
use crate::storage::{keys, KeyValueStorage};

/// Ordered workouts for the session, mirrored to `S`.
pub struct WorkoutStore<S> {
    storage: S,
    key: String,
    workouts: Vec<Workout>,
}

impl<S: KeyValueStorage> WorkoutStore<S> {
    /// Empty store writing under the default key.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, keys::WORKOUTS)
    }

    /// Empty store writing under `key`.
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            workouts: Vec::new(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Workouts in insertion order.
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id == id)
    }

    /// Bump the interaction counter of workout `id`.
    ///
    /// The counter is written on the next persist, not immediately.
    pub fn record_click(&mut self, id: &str) -> Result<&Workout, AppError> {
        let workout = self
            .workouts
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;
        workout.click();
        Ok(workout)
    }

    /// Add `workout` at the end and write the whole list through.
    ///
    /// The workout is kept in memory even when the write fails; the
    /// `StorageUnavailable` error is returned so the caller can warn.
    pub fn append(&mut self, workout: Workout) -> Result<(), AppError> {
        if self.find(&workout.id).is_some() {
            tracing::warn!(id = %workout.id, "Duplicate workout id");
        }

        tracing::info!(
            id = %workout.id,
            kind = %workout.kind(),
            distance_km = workout.distance_km,
            duration_min = workout.duration_min,
            "Workout added"
        );
        self.workouts.push(workout);

        self.persist().inspect_err(|e| {
            tracing::warn!(error = %e, count = self.workouts.len(), "Workout kept in memory only");
        })
    }

    /// Serialize every workout and overwrite the stored blob.
    pub fn persist(&mut self) -> Result<(), AppError> {
        let rows: Vec<StoredWorkout> = self.workouts.iter().map(StoredWorkout::from).collect();
        let blob = serde_json::to_string(&rows)
            .map_err(|e| AppError::StorageUnavailable(format!("cannot serialize workouts: {}", e)))?;

        self.storage.set(&self.key, &blob)?;
        tracing::debug!(key = %self.key, count = rows.len(), bytes = blob.len(), "Workouts persisted");
        Ok(())
    }

    /// Replace the in-memory list with the stored one.
    ///
    /// A missing key yields an empty collection. An unreadable backend or a
    /// corrupt blob also leaves the collection empty, and the error is
    /// returned for the caller to report.
    pub fn restore(&mut self) -> Result<usize, AppError> {
        self.workouts.clear();

        let blob = match self.storage.get(&self.key) {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                tracing::info!(key = %self.key, "No stored workouts");
                return Ok(0);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Could not read stored workouts");
                return Err(e);
            }
        };

        match decode(&blob) {
            Ok(workouts) => {
                self.workouts = workouts;
                tracing::info!(count = self.workouts.len(), "Workouts restored");
                Ok(self.workouts.len())
            }
            Err(e) => {
                tracing::warn!(error = %e, key = %self.key, "Discarding corrupt stored workouts");
                Err(e)
            }
        }
    }

    /// Drop the stored blob and every workout in memory.
    ///
    /// If the stored blob cannot be removed the in-memory list is left as is.
    pub fn reset(&mut self) -> Result<(), AppError> {
        self.storage.remove(&self.key)?;
        self.workouts.clear();
        tracing::info!(key = %self.key, "Workouts reset");
        Ok(())
    }
}

/// Parse a stored blob into tagged workouts.
fn decode(blob: &str) -> Result<Vec<Workout>, AppError> {
    let rows: Vec<StoredWorkout> =
        serde_json::from_str(blob).map_err(|e| AppError::CorruptState(e.to_string()))?;

    rows.into_iter()
        .map(|row| Workout::try_from(row).map_err(|e| AppError::CorruptState(e.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinates;
    use crate::storage::MemoryStorage;
    use chrono::{TimeZone, Utc};

    fn run(millis: i64) -> Workout {
        let at = Utc.timestamp_millis_opt(millis).unwrap();
        Workout::running_at(Coordinates::new(10.0, 20.0), 5.0, 30.0, 150.0, at)
    }

    #[test]
    fn test_append_writes_through() {
        let mut store = WorkoutStore::new(MemoryStorage::new());
        store.append(run(1_000)).unwrap();

        let blob = store.storage().get(keys::WORKOUTS).unwrap().unwrap();
        let rows: Vec<StoredWorkout> = serde_json::from_str(&blob).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].kind, "running");
    }

    #[test]
    fn test_append_keeps_workout_when_storage_full() {
        let mut store = WorkoutStore::new(MemoryStorage::with_quota(16));
        let err = store.append(run(1_000)).unwrap_err();

        assert!(err.is_durability_loss());
        assert_eq!(store.len(), 1);
        assert_eq!(store.storage().get(keys::WORKOUTS).unwrap(), None);
    }

    #[test]
    fn test_duplicate_id_still_appended() {
        let mut store = WorkoutStore::new(MemoryStorage::new());
        store.append(run(1_000)).unwrap();
        store.append(run(1_000)).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.workouts()[0].id, store.workouts()[1].id);
    }

    #[test]
    fn test_record_click() {
        let mut store = WorkoutStore::new(MemoryStorage::new());
        let w = run(1_000);
        let id = w.id.clone();
        store.append(w).unwrap();

        assert_eq!(store.record_click(&id).unwrap().clicks, 1);
        assert!(matches!(
            store.record_click("nope"),
            Err(AppError::NotFound(_))
        ));
    }

    /// Storage whose writes and removals always fail.
    #[derive(Default)]
    struct ReadOnlyStorage {
        inner: MemoryStorage,
    }

    impl KeyValueStorage for ReadOnlyStorage {
        fn get(&self, key: &str) -> Result<Option<String>, AppError> {
            self.inner.get(key)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), AppError> {
            Err(AppError::StorageUnavailable("read-only".to_string()))
        }

        fn remove(&mut self, _key: &str) -> Result<(), AppError> {
            Err(AppError::StorageUnavailable("read-only".to_string()))
        }
    }

    #[test]
    fn test_failed_reset_keeps_workouts() {
        let mut store = WorkoutStore::new(ReadOnlyStorage::default());
        assert!(store.append(run(1_000)).is_err());

        let err = store.reset().unwrap_err();
        assert!(err.is_durability_loss());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_custom_key() {
        let mut store = WorkoutStore::with_key(MemoryStorage::new(), "other");
        store.append(run(1_000)).unwrap();
        assert!(store.storage().contains_key("other"));
        assert!(!store.storage().contains_key(keys::WORKOUTS));
        assert_eq!(store.key(), "other");
    }
}
