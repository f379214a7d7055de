// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application state driven by the UI event layer.
//!
//! Holds the workout store, the map location picked for the next workout
//! and the zoom level used when focusing a workout on the map.

use crate::config::Config;
use crate::error::{AppError, NO_LOCATION};
use crate::models::{Coordinates, Workout, WorkoutInput};
use crate::services::WorkoutStore;
use crate::storage::KeyValueStorage;
use chrono::{DateTime, Utc};

/// Where the map should center after a list item is clicked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center: Coordinates,
    pub zoom: u8,
}

/// Shared application state.
pub struct AppState<S> {
    pub store: WorkoutStore<S>,
    pending_location: Option<Coordinates>,
    map_zoom: u8,
}

impl<S: KeyValueStorage> AppState<S> {
    /// Build state over `storage` and load any saved workouts.
    ///
    /// Unreadable or corrupt storage is logged and the session starts empty.
    pub fn restore(storage: S, config: &Config) -> Self {
        let mut store = WorkoutStore::with_key(storage, config.storage_key.clone());
        if let Err(e) = store.restore() {
            tracing::warn!(error = %e, "Starting with an empty workout list");
        }
        Self {
            store,
            pending_location: None,
            map_zoom: config.map_zoom,
        }
    }

    /// Remember the map location for the next submitted workout.
    pub fn select_location(&mut self, coords: Coordinates) {
        tracing::debug!(lat = coords.lat, lng = coords.lng, "Location selected");
        self.pending_location = Some(coords);
    }

    pub fn pending_location(&self) -> Option<Coordinates> {
        self.pending_location
    }

    /// Validate `input` and record it at the selected location.
    ///
    /// Returns the new workout's id. Rejected input leaves state unchanged,
    /// including the selected location. A failed storage write is logged
    /// and the workout is kept for the session.
    pub fn submit_workout(&mut self, input: WorkoutInput) -> Result<String, AppError> {
        self.submit_workout_at(input, Utc::now())
    }

    /// [`Self::submit_workout`] with an explicit creation time.
    pub fn submit_workout_at(
        &mut self,
        input: WorkoutInput,
        created_at: DateTime<Utc>,
    ) -> Result<String, AppError> {
        let coords = self
            .pending_location
            .ok_or_else(|| AppError::InvalidInput(NO_LOCATION.to_string()))?;
        let workout = input.into_workout_at(coords, created_at)?;
        let id = workout.id.clone();

        self.pending_location = None;
        if let Err(e) = self.store.append(workout) {
            tracing::warn!(id = %id, error = %e, "{}", e.user_message());
        }
        Ok(id)
    }

    /// Look up workout `id`, count the interaction, and return the map view
    /// centered on it.
    pub fn focus_workout(&mut self, id: &str) -> Result<MapView, AppError> {
        let workout = self.store.record_click(id)?;
        Ok(MapView {
            center: workout.coords,
            zoom: self.map_zoom,
        })
    }

    /// Workouts in display order.
    pub fn workouts(&self) -> &[Workout] {
        self.store.workouts()
    }

    /// Forget every workout, the stored blob, and the selected location.
    pub fn reset(&mut self) -> Result<(), AppError> {
        self.pending_location = None;
        self.store.reset()
    }
}
