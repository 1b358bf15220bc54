// ABOUTME: Key-value persistence backends for client-side preferences
// ABOUTME: File-backed cache under the platform config dir and an in-memory cache for tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use crate::errors::{AppError, AppResult};

/// String key-value storage for preferences
///
/// Implementations must tolerate concurrent readers; writes replace the
/// whole value for a key.
pub trait PreferenceCache: Send + Sync {
    /// Read the raw value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backing store cannot be read
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backing store cannot be written
    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backing store cannot be modified
    fn remove(&self, key: &str) -> AppResult<()>;
}

/// One JSON file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    /// Cache rooted at `dir`; the directory is created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the cache files
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{file_name}.json"))
    }
}

impl PreferenceCache for FileCache {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!(
                "Failed to read {}: {e}",
                path.display()
            ))
            .with_source(e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            AppError::storage(format!("Failed to create {}: {e}", self.dir.display())).with_source(e)
        })?;

        // Write to a sibling temp file and rename so a crash never leaves half a document
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(|e| {
            AppError::storage(format!("Failed to write {}: {e}", tmp.display())).with_source(e)
        })?;
        fs::rename(&tmp, &path).map_err(|e| {
            AppError::storage(format!("Failed to replace {}: {e}", path.display())).with_source(e)
        })?;

        debug!(path = %path.display(), "Preference cache written");
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

/// Process-local cache; clones share the same entries
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    entries: Arc<DashMap<String, String>>,
}

impl MemoryCache {
    /// Empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache pre-seeded with one entry
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let cache = Self::new();
        cache.entries.insert(key.to_owned(), value.to_owned());
        cache
    }
}

impl PreferenceCache for MemoryCache {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}
