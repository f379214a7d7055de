// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Mapty session bootstrap
//!
//! Loads configuration, opens file storage, and restores the saved workout
//! list the map UI starts from.

use anyhow::Context;
use mapty::{config::Config, storage::FileStorage, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        dir = %config.storage_dir.display(),
        key = %config.storage_key,
        "Starting Mapty"
    );

    let storage = FileStorage::open(&config.storage_dir).context("Failed to open storage")?;
    let state = AppState::restore(storage, &config);

    for workout in state.workouts() {
        tracing::info!(
            id = %workout.id,
            lat = workout.coords.lat,
            lng = workout.coords.lng,
            "{}",
            workout.popup_text()
        );
    }
    tracing::info!(count = state.workouts().len(), "Workout list ready");
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("mapty=debug,info"));

    tracing_subscriber::registry().with(filter).with(format).init();
}
