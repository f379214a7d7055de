// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Mapty: log running and cycling workouts picked on a map
//!
//! This crate provides the workout record model, the workout collection
//! with its durable key/value mirror, and the application state that the
//! map UI drives.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod time_utils;

pub use state::{AppState, MapView};
