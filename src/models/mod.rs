// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod input;
pub mod stored;
pub mod workout;

pub use input::WorkoutInput;
pub use stored::{RowError, StoredWorkout};
pub use workout::{calc_pace, calc_speed, Coordinates, Workout, WorkoutDetails, WorkoutKind};
