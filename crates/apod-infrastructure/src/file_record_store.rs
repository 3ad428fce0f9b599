//! File-backed record store.
//!
//! Each record lives in its own `<YYYY-MM-DD>.json` file under a single
//! directory, so entries are independent and survive process restarts.

use std::path::{Path, PathBuf};

use apod_core::error::{ApodError, Result};
use apod_core::record::{DateKey, Record, RecordStore};
use async_trait::async_trait;

use crate::storage::AtomicFile;

const RECORD_EXTENSION: &str = "json";

/// [`RecordStore`] keeping one JSON document per date.
///
/// File I/O runs on the blocking pool. Writes are atomic (tmp file + rename)
/// and skip the disk entirely when an equal record is already stored.
#[derive(Debug, Clone)]
pub struct FileRecordStore {
    root: PathBuf,
}

impl FileRecordStore {
    /// Creates a store rooted at `root`. The directory is created lazily on
    /// first write.
    pub fn with_path(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &DateKey) -> PathBuf {
        self.root.join(format!("{key}.{RECORD_EXTENSION}"))
    }

    fn entry(&self, key: &DateKey) -> AtomicFile<Record> {
        AtomicFile::json(self.entry_path(key))
    }

    /// Lists every stored date, oldest first.
    ///
    /// Lock files, temporary files and anything not named after a date are
    /// skipped.
    pub async fn list_keys(&self) -> Result<Vec<DateKey>> {
        let root = self.root.clone();
        tokio::task::spawn_blocking(move || list_keys_blocking(&root))
            .await
            .map_err(|e| ApodError::internal(format!("Failed to join task: {}", e)))?
    }
}

fn list_keys_blocking(root: &Path) -> Result<Vec<DateKey>> {
    if !root.exists() {
        return Ok(Vec::new());
    }

    let mut keys = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let path = entry?.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(RECORD_EXTENSION) {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        if let Ok(key) = stem.parse::<DateKey>() {
            keys.push(key);
        }
    }
    keys.sort();
    Ok(keys)
}

#[async_trait]
impl RecordStore for FileRecordStore {
    async fn get(&self, key: &DateKey) -> Option<Record> {
        let entry = self.entry(key);
        let loaded = tokio::task::spawn_blocking(move || entry.load()).await;

        match loaded {
            Ok(Ok(record)) => record,
            Ok(Err(e)) => {
                tracing::warn!(date = %key, error = %e, "Unreadable store entry, treating as absent");
                None
            }
            Err(e) => {
                tracing::warn!(date = %key, error = %e, "Store read task failed");
                None
            }
        }
    }

    async fn put(&self, key: &DateKey, record: &Record) -> Result<()> {
        let entry = self.entry(key);
        let path = entry.path().to_path_buf();
        let record = record.clone();

        let written = tokio::task::spawn_blocking(move || entry.save_if_changed(&record))
            .await
            .map_err(|e| ApodError::store_write(format!("Failed to join task: {}", e)))?
            .map_err(|e| {
                ApodError::store_write(format!("Failed to write {}: {}", path.display(), e))
            })?;

        if written {
            tracing::debug!(date = %key, path = %path.display(), "Stored record");
        } else {
            tracing::debug!(date = %key, "Equal record already stored");
        }
        Ok(())
    }
}
