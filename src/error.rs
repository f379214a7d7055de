// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.
//!
//! None of these are fatal: an error either blocks a single user action
//! (`InvalidInput`, `NotFound`) or degrades persistence (`CorruptState`,
//! `StorageUnavailable`) while the in-memory collection stays intact.

/// Application error type shared by the store and the UI-facing state.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Stored workouts are corrupt: {0}")]
    CorruptState(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Workout not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Alert text shown when form values fail validation.
    pub const INVALID_NUMBERS_MESSAGE: &'static str = "Please enter POSITIVE numeric values";

    /// Text suitable for a user-facing alert.
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg) if msg == NO_LOCATION => {
                "Select a workout location".to_string()
            }
            AppError::InvalidInput(_) => Self::INVALID_NUMBERS_MESSAGE.to_string(),
            AppError::CorruptState(_) => {
                "Saved workouts could not be read and were discarded".to_string()
            }
            AppError::StorageUnavailable(_) => {
                "Workout saved for this session only; storage is unavailable".to_string()
            }
            AppError::NotFound(_) => "That workout no longer exists".to_string(),
        }
    }

    /// Whether the session can carry on after this error. Every variant
    /// leaves the in-memory collection consistent.
    pub fn is_recoverable(&self) -> bool {
        match self {
            AppError::InvalidInput(_)
            | AppError::CorruptState(_)
            | AppError::StorageUnavailable(_)
            | AppError::NotFound(_) => true,
        }
    }

    /// True when the error means the latest change was not made durable.
    pub fn is_durability_loss(&self) -> bool {
        matches!(self, AppError::StorageUnavailable(_))
    }
}

/// Detail carried by `InvalidInput` when a workout is submitted before a map
/// location was picked.
pub const NO_LOCATION: &str = "select a workout location";

/// Result type alias for store and state operations.
pub type Result<T> = std::result::Result<T, AppError>;
