// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout record model: a tagged union over running and cycling.

use crate::time_utils::{format_month_day, workout_id};
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// A `(latitude, longitude)` pair picked on the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Finite and inside the latitude/longitude ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(c: Coordinates) -> Self {
        [c.lat, c.lng]
    }
}

/// Workout variant tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    /// Lowercase tag used in storage and as a CSS class suffix.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Cycling => "Cycling",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "🏃",
            WorkoutKind::Cycling => "🚴",
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "running" => Ok(WorkoutKind::Running),
            "cycling" => Ok(WorkoutKind::Cycling),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

/// Returned when a variant tag is neither `running` nor `cycling`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unknown workout type: {0:?}")]
pub struct UnknownKind(pub String);

/// Running pace in minutes per kilometre.
pub fn calc_pace(distance_km: f64, duration_min: f64) -> f64 {
    duration_min / distance_km
}

/// Cycling speed in kilometres per hour.
pub fn calc_speed(distance_km: f64, duration_min: f64) -> f64 {
    distance_km / (duration_min / 60.0)
}

/// Variant-specific input and derived metric.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkoutDetails {
    Running {
        /// Steps per minute
        cadence_spm: f64,
        /// Derived: `duration_min / distance_km`
        pace_min_per_km: f64,
    },
    Cycling {
        /// Elevation gain in meters
        elevation_gain_m: f64,
        /// Derived: `distance_km / (duration_min / 60)`
        speed_km_per_h: f64,
    },
}

/// One logged workout.
///
/// Values are checked before construction (see [`crate::models::WorkoutInput`]);
/// the constructors themselves never fail.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub coords: Coordinates,
    /// Distance in kilometres
    pub distance_km: f64,
    /// Duration in minutes
    pub duration_min: f64,
    /// Times the workout was focused from the list
    pub clicks: u32,
    pub details: WorkoutDetails,
}

impl Workout {
    /// Create a running workout stamped with the current time.
    pub fn running(coords: Coordinates, distance_km: f64, duration_min: f64, cadence_spm: f64) -> Self {
        Self::running_at(coords, distance_km, duration_min, cadence_spm, Utc::now())
    }

    /// Create a running workout with an explicit creation time.
    pub fn running_at(
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: workout_id(created_at),
            created_at,
            coords,
            distance_km,
            duration_min,
            clicks: 0,
            details: WorkoutDetails::Running {
                cadence_spm,
                pace_min_per_km: calc_pace(distance_km, duration_min),
            },
        }
    }

    /// Create a cycling workout stamped with the current time.
    pub fn cycling(
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Self {
        Self::cycling_at(coords, distance_km, duration_min, elevation_gain_m, Utc::now())
    }

    /// Create a cycling workout with an explicit creation time.
    pub fn cycling_at(
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: workout_id(created_at),
            created_at,
            coords,
            distance_km,
            duration_min,
            clicks: 0,
            details: WorkoutDetails::Cycling {
                elevation_gain_m,
                speed_km_per_h: calc_speed(distance_km, duration_min),
            },
        }
    }

    pub fn kind(&self) -> WorkoutKind {
        match self.details {
            WorkoutDetails::Running { .. } => WorkoutKind::Running,
            WorkoutDetails::Cycling { .. } => WorkoutKind::Cycling,
        }
    }

    /// Stored pace, for running workouts.
    pub fn pace(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Running {
                pace_min_per_km, ..
            } => Some(pace_min_per_km),
            WorkoutDetails::Cycling { .. } => None,
        }
    }

    /// Stored speed, for cycling workouts.
    pub fn speed(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Cycling { speed_km_per_h, .. } => Some(speed_km_per_h),
            WorkoutDetails::Running { .. } => None,
        }
    }

    /// Stored pace or speed, whichever the variant carries.
    pub fn derived_value(&self) -> f64 {
        match self.details {
            WorkoutDetails::Running {
                pace_min_per_km, ..
            } => pace_min_per_km,
            WorkoutDetails::Cycling { speed_km_per_h, .. } => speed_km_per_h,
        }
    }

    /// Cadence for running, elevation gain for cycling.
    pub fn variant_value(&self) -> f64 {
        match self.details {
            WorkoutDetails::Running { cadence_spm, .. } => cadence_spm,
            WorkoutDetails::Cycling {
                elevation_gain_m, ..
            } => elevation_gain_m,
        }
    }

    /// Re-derive the variant's metric from distance and duration.
    pub fn recalculate(&mut self) {
        let (distance, duration) = (self.distance_km, self.duration_min);
        match &mut self.details {
            WorkoutDetails::Running {
                pace_min_per_km, ..
            } => *pace_min_per_km = calc_pace(distance, duration),
            WorkoutDetails::Cycling { speed_km_per_h, .. } => {
                *speed_km_per_h = calc_speed(distance, duration)
            }
        }
    }

    /// Record one interaction with this workout.
    pub fn click(&mut self) {
        self.clicks = self.clicks.saturating_add(1);
    }

    /// Title used for list items and marker popups, e.g. `"Running on April, 14"`.
    pub fn description(&self) -> String {
        format!("{} on {}", self.kind().label(), format_month_day(self.created_at))
    }

    /// Marker popup text: icon followed by the description.
    pub fn popup_text(&self) -> String {
        format!("{} {}", self.kind().icon(), self.description())
    }
}
