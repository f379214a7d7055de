// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! File-backed storage: one file per key inside a directory.

use super::KeyValueStorage;
use crate::error::AppError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Extension of the file holding each key's value.
const VALUE_EXTENSION: &str = "json";

/// Key/value storage persisted under a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open storage rooted at `dir`, creating the directory if needed.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self, AppError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| {
            AppError::StorageUnavailable(format!("cannot create {}: {}", dir.display(), e))
        })?;
        tracing::debug!(dir = %dir.display(), "Opened file storage");
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, AppError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
            && !key.starts_with('.');
        if !valid {
            return Err(AppError::StorageUnavailable(format!(
                "invalid storage key: {:?}",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.{}", key, VALUE_EXTENSION)))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::StorageUnavailable(format!(
                "cannot read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        let path = self.path_for(key)?;
        // Write a sibling file and rename so a failed write never truncates
        // the previous value.
        let tmp = path.with_extension(format!("{}.tmp", VALUE_EXTENSION));
        fs::write(&tmp, value)
            .and_then(|_| fs::rename(&tmp, &path))
            .map_err(|e| {
                let _ = fs::remove_file(&tmp);
                AppError::StorageUnavailable(format!("cannot write {}: {}", path.display(), e))
            })
    }

    fn remove(&mut self, key: &str) -> Result<(), AppError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::StorageUnavailable(format!(
                "cannot remove {}: {}",
                path.display(),
                e
            ))),
        }
    }
}
