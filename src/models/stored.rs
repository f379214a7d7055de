// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Flat storage row for a workout.
//!
//! Generic JSON decoding yields plain rows with every variant field optional;
//! [`Workout::try_from`] inspects the stored `type` tag and rebuilds the
//! proper tagged value. Stored derived metrics are trusted as-is.

use crate::models::workout::{Coordinates, Workout, WorkoutDetails, WorkoutKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// One element of the stored workouts array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "bindings/")
)]
pub struct StoredWorkout {
    pub id: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub created_at: DateTime<Utc>,
    /// `[lat, lng]`
    #[cfg_attr(feature = "binding-generation", ts(type = "[number, number]"))]
    pub coordinates: [f64; 2],
    pub distance_km: f64,
    pub duration_min: f64,
    /// Variant tag, `"running"` or `"cycling"`
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub interaction_count: u32,

    // ─── Running ─────────────────────────────────────────────────
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cadence_spm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pace_min_per_km: Option<f64>,

    // ─── Cycling ─────────────────────────────────────────────────
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_gain_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_km_per_h: Option<f64>,
}

impl From<&Workout> for StoredWorkout {
    fn from(w: &Workout) -> Self {
        let mut row = Self {
            id: w.id.clone(),
            created_at: w.created_at,
            coordinates: w.coords.into(),
            distance_km: w.distance_km,
            duration_min: w.duration_min,
            kind: w.kind().as_str().to_string(),
            interaction_count: w.clicks,
            cadence_spm: None,
            pace_min_per_km: None,
            elevation_gain_m: None,
            speed_km_per_h: None,
        };
        match w.details {
            WorkoutDetails::Running {
                cadence_spm,
                pace_min_per_km,
            } => {
                row.cadence_spm = Some(cadence_spm);
                row.pace_min_per_km = Some(pace_min_per_km);
            }
            WorkoutDetails::Cycling {
                elevation_gain_m,
                speed_km_per_h,
            } => {
                row.elevation_gain_m = Some(elevation_gain_m);
                row.speed_km_per_h = Some(speed_km_per_h);
            }
        }
        row
    }
}

/// Why a stored row could not be turned back into a workout.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RowError {
    #[error("workout {id}: unknown type {kind:?}")]
    UnknownKind { id: String, kind: String },

    #[error("workout {id}: missing field {field}")]
    MissingField { id: String, field: &'static str },
}

impl TryFrom<StoredWorkout> for Workout {
    type Error = RowError;

    fn try_from(row: StoredWorkout) -> Result<Self, Self::Error> {
        let kind: WorkoutKind = row.kind.parse().map_err(|_| RowError::UnknownKind {
            id: row.id.clone(),
            kind: row.kind.clone(),
        })?;
        let require = |value: Option<f64>, field: &'static str| {
            value.ok_or_else(|| RowError::MissingField {
                id: row.id.clone(),
                field,
            })
        };

        let details = match kind {
            WorkoutKind::Running => WorkoutDetails::Running {
                cadence_spm: require(row.cadence_spm, "cadenceSpm")?,
                pace_min_per_km: require(row.pace_min_per_km, "paceMinPerKm")?,
            },
            WorkoutKind::Cycling => WorkoutDetails::Cycling {
                elevation_gain_m: require(row.elevation_gain_m, "elevationGainM")?,
                speed_km_per_h: require(row.speed_km_per_h, "speedKmPerH")?,
            },
        };

        Ok(Workout {
            id: row.id,
            created_at: row.created_at,
            coords: Coordinates::from(row.coordinates),
            distance_km: row.distance_km,
            duration_min: row.duration_min,
            clicks: row.interaction_count,
            details,
        })
    }
}
