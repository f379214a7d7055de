// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Raw workout form input and its validation.

use crate::error::AppError;
use crate::models::workout::{Coordinates, UnknownKind, Workout, WorkoutKind};
use chrono::{DateTime, Utc};
use validator::{Validate, ValidationError};

/// Values submitted from the workout form, before any record exists.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct WorkoutInput {
    pub kind: WorkoutKind,
    #[validate(custom(function = "finite_positive"))]
    pub distance_km: f64,
    #[validate(custom(function = "finite_positive"))]
    pub duration_min: f64,
    /// Required for running
    #[validate(custom(function = "finite_non_negative"))]
    pub cadence_spm: Option<f64>,
    /// Required for cycling
    #[validate(custom(function = "finite_non_negative"))]
    pub elevation_gain_m: Option<f64>,
}

fn finite_positive(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new("finite_positive"))
    }
}

fn finite_non_negative(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new("finite_non_negative"))
    }
}

impl WorkoutInput {
    pub fn running(distance_km: f64, duration_min: f64, cadence_spm: f64) -> Self {
        Self {
            kind: WorkoutKind::Running,
            distance_km,
            duration_min,
            cadence_spm: Some(cadence_spm),
            elevation_gain_m: None,
        }
    }

    pub fn cycling(distance_km: f64, duration_min: f64, elevation_gain_m: f64) -> Self {
        Self {
            kind: WorkoutKind::Cycling,
            distance_km,
            duration_min,
            cadence_spm: None,
            elevation_gain_m: Some(elevation_gain_m),
        }
    }

    /// Build input from the raw text of the form fields.
    ///
    /// `variant_value` is the cadence field for running and the elevation
    /// field for cycling. Text that does not parse as a number is rejected.
    pub fn from_form(
        kind: &str,
        distance: &str,
        duration: &str,
        variant_value: &str,
    ) -> Result<Self, AppError> {
        let kind: WorkoutKind = kind
            .trim()
            .parse()
            .map_err(|e: UnknownKind| AppError::InvalidInput(e.to_string()))?;
        let distance_km = parse_number("distance", distance)?;
        let duration_min = parse_number("duration", duration)?;
        let value = parse_number(
            match kind {
                WorkoutKind::Running => "cadence",
                WorkoutKind::Cycling => "elevation",
            },
            variant_value,
        )?;

        Ok(match kind {
            WorkoutKind::Running => Self::running(distance_km, duration_min, value),
            WorkoutKind::Cycling => Self::cycling(distance_km, duration_min, value),
        })
    }

    /// Check every numeric field and the variant parameter.
    pub fn check(&self) -> Result<(), AppError> {
        self.validate()
            .map_err(|e| AppError::InvalidInput(e.to_string()))?;

        let missing = match self.kind {
            WorkoutKind::Running if self.cadence_spm.is_none() => Some("cadence"),
            WorkoutKind::Cycling if self.elevation_gain_m.is_none() => Some("elevation gain"),
            _ => None,
        };
        if let Some(field) = missing {
            return Err(AppError::InvalidInput(format!(
                "{} is required for {}",
                field, self.kind
            )));
        }
        Ok(())
    }

    /// Validate and build the workout at `coords`, created at `created_at`.
    ///
    /// Rejects coordinates outside the map and inputs whose pace or speed
    /// overflows, since a non-finite value cannot be stored.
    pub fn into_workout_at(
        self,
        coords: Coordinates,
        created_at: DateTime<Utc>,
    ) -> Result<Workout, AppError> {
        if !coords.is_valid() {
            return Err(AppError::InvalidInput(format!(
                "coordinates out of range: [{}, {}]",
                coords.lat, coords.lng
            )));
        }
        self.check()?;

        let workout = match self.kind {
            WorkoutKind::Running => Workout::running_at(
                coords,
                self.distance_km,
                self.duration_min,
                self.cadence_spm.unwrap_or_default(),
                created_at,
            ),
            WorkoutKind::Cycling => Workout::cycling_at(
                coords,
                self.distance_km,
                self.duration_min,
                self.elevation_gain_m.unwrap_or_default(),
                created_at,
            ),
        };
        if !workout.derived_value().is_finite() {
            return Err(AppError::InvalidInput(format!(
                "{} metric is not finite for distance {} and duration {}",
                workout.kind(),
                workout.distance_km,
                workout.duration_min
            )));
        }
        Ok(workout)
    }

    /// Validate and build the workout at `coords`, stamped now.
    pub fn into_workout(self, coords: Coordinates) -> Result<Workout, AppError> {
        self.into_workout_at(coords, Utc::now())
    }
}

fn parse_number(field: &str, raw: &str) -> Result<f64, AppError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| AppError::InvalidInput(format!("{} is not a number: {:?}", field, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_running_input() {
        assert!(WorkoutInput::running(5.0, 30.0, 150.0).check().is_ok());
    }

    #[test]
    fn test_valid_cycling_with_zero_elevation() {
        assert!(WorkoutInput::cycling(20.0, 60.0, 0.0).check().is_ok());
    }

    #[test]
    fn test_zero_distance_rejected() {
        let err = WorkoutInput::running(0.0, 30.0, 150.0).check().unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_zero_duration_rejected() {
        let err = WorkoutInput::cycling(20.0, 0.0, 100.0).check().unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_negative_values_rejected() {
        assert!(WorkoutInput::running(-5.0, 30.0, 150.0).check().is_err());
        assert!(WorkoutInput::running(5.0, -30.0, 150.0).check().is_err());
        assert!(WorkoutInput::running(5.0, 30.0, -1.0).check().is_err());
        assert!(WorkoutInput::cycling(5.0, 30.0, -100.0).check().is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(WorkoutInput::running(f64::NAN, 30.0, 150.0).check().is_err());
        assert!(WorkoutInput::running(5.0, f64::INFINITY, 150.0).check().is_err());
        assert!(WorkoutInput::cycling(5.0, 30.0, f64::NEG_INFINITY).check().is_err());
    }

    #[test]
    fn test_missing_variant_value_rejected() {
        let input = WorkoutInput {
            kind: WorkoutKind::Running,
            distance_km: 5.0,
            duration_min: 30.0,
            cadence_spm: None,
            elevation_gain_m: Some(10.0),
        };
        let err = input.check().unwrap_err();
        assert!(err.to_string().contains("cadence"));
    }

    #[test]
    fn test_from_form_parses_fields() {
        let input = WorkoutInput::from_form("cycling", " 20 ", "60", "100").unwrap();
        assert_eq!(input, WorkoutInput::cycling(20.0, 60.0, 100.0));
    }

    #[test]
    fn test_from_form_rejects_text() {
        assert!(WorkoutInput::from_form("running", "five", "30", "150").is_err());
        assert!(WorkoutInput::from_form("running", "", "30", "150").is_err());
        assert!(WorkoutInput::from_form("swimming", "5", "30", "150").is_err());
    }

    #[test]
    fn test_into_workout_builds_variant() {
        let coords = Coordinates::new(10.0, 20.0);
        let workout = WorkoutInput::running(5.0, 30.0, 150.0)
            .into_workout(coords)
            .unwrap();
        assert_eq!(workout.kind(), WorkoutKind::Running);
        assert_eq!(workout.coords, coords);
        assert_eq!(workout.pace(), Some(6.0));
    }

    #[test]
    fn test_infinite_pace_rejected() {
        let err = WorkoutInput::running(1e-310, 30.0, 150.0)
            .into_workout(Coordinates::new(10.0, 20.0))
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_infinite_speed_rejected() {
        let err = WorkoutInput::cycling(1e308, 1e-308, 0.0)
            .into_workout(Coordinates::new(10.0, 20.0))
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_invalid_coordinates_rejected() {
        let input = WorkoutInput::running(5.0, 30.0, 150.0);
        assert!(input.clone().into_workout(Coordinates::new(f64::NAN, 20.0)).is_err());
        assert!(input.into_workout(Coordinates::new(10.0, 200.0)).is_err());
    }
}
