// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory storage backend.

use super::KeyValueStorage;
use crate::error::AppError;
use std::collections::HashMap;

/// Key/value storage held in a `HashMap`.
///
/// An optional quota bounds the total bytes of keys plus values, the way a
/// browser caps `localStorage`; writes past it fail.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    quota_bytes: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that rejects writes once keys plus values exceed `quota_bytes`.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Whether a value is stored under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        if let Some(quota) = self.quota_bytes {
            let needed = self.used_bytes_without(key) + key.len() + value.len();
            if needed > quota {
                return Err(AppError::StorageUnavailable(format!(
                    "quota exceeded: {} of {} bytes",
                    needed, quota
                )));
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), AppError> {
        self.entries.remove(key);
        Ok(())
    }
}
