// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Durable key/value storage (the `localStorage` contract).

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::AppError;

/// Storage key names as constants.
pub mod keys {
    /// Serialized workouts array
    pub const WORKOUTS: &str = "workouts";
}

/// String blobs addressed by key, overwritten as a whole.
///
/// Every failure maps to [`AppError::StorageUnavailable`].
pub trait KeyValueStorage {
    /// Read the value under `key`, `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), AppError>;
}
