// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use crate::storage::keys;
use std::env;
use std::path::PathBuf;

/// Default map zoom when focusing a workout.
pub const DEFAULT_MAP_ZOOM: u8 = 13;
/// Highest zoom level offered by common tile servers.
pub const MAX_MAP_ZOOM: u8 = 22;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding file-backed storage
    pub storage_dir: PathBuf,
    /// Key the workouts array is stored under
    pub storage_key: String,
    /// Zoom level used when centering the map on a workout
    pub map_zoom: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(".mapty"),
            storage_key: keys::WORKOUTS.to_string(),
            map_zoom: DEFAULT_MAP_ZOOM,
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let storage_key = env::var("MAPTY_STORAGE_KEY").unwrap_or(defaults.storage_key);
        if storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("MAPTY_STORAGE_KEY", storage_key));
        }

        let map_zoom = env::var("MAPTY_MAP_ZOOM")
            .ok()
            .and_then(|v| v.trim().parse::<u8>().ok())
            .unwrap_or(defaults.map_zoom);
        if map_zoom > MAX_MAP_ZOOM {
            return Err(ConfigError::Invalid("MAPTY_MAP_ZOOM", map_zoom.to_string()));
        }

        Ok(Self {
            storage_dir: env::var("MAPTY_STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.storage_dir),
            storage_key,
            map_zoom,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    // All env mutation lives in one test so parallel tests never race.
    #[test]
    fn test_config_from_env() {
        env::set_var("MAPTY_STORAGE_DIR", "/tmp/mapty-test");
        env::set_var("MAPTY_STORAGE_KEY", "runs");
        env::set_var("MAPTY_MAP_ZOOM", "not-a-number");

        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.storage_dir, PathBuf::from("/tmp/mapty-test"));
        assert_eq!(config.storage_key, "runs");
        assert_eq!(config.map_zoom, DEFAULT_MAP_ZOOM);

        env::set_var("MAPTY_MAP_ZOOM", "30");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Invalid("MAPTY_MAP_ZOOM", _))
        ));

        env::set_var("MAPTY_MAP_ZOOM", "15");
        env::set_var("MAPTY_STORAGE_KEY", "  ");
        assert!(Config::from_env().is_err());

        env::remove_var("MAPTY_STORAGE_KEY");
        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.storage_key, "workouts");
        assert_eq!(config.map_zoom, 15);

        env::remove_var("MAPTY_STORAGE_DIR");
        env::remove_var("MAPTY_MAP_ZOOM");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.storage_key, keys::WORKOUTS);
        assert_eq!(config.map_zoom, 13);
    }
}
