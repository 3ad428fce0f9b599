use std::collections::HashMap;
use std::sync::Arc;

use apod_core::error::Result;
use apod_core::record::{DateKey, Record, RecordStore};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// In-memory [`RecordStore`].
///
/// Entries live as long as the store; useful for tests and for running
/// without touching the disk. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecordStore {
    records: Arc<RwLock<HashMap<DateKey, Record>>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `records`, keyed by their own date.
    pub fn with_records(records: impl IntoIterator<Item = Record>) -> Self {
        let records = records.into_iter().map(|r| (r.date, r)).collect();
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    pub async fn contains(&self, key: &DateKey) -> bool {
        self.records.read().await.contains_key(key)
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn get(&self, key: &DateKey) -> Option<Record> {
        self.records.read().await.get(key).cloned()
    }

    async fn put(&self, key: &DateKey, record: &Record) -> Result<()> {
        let mut records = self.records.write().await;
        records.insert(*key, record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apod_core::MediaType;

    fn record(date: &str) -> Record {
        Record {
            date: date.parse().unwrap(),
            title: format!("Picture {date}"),
            explanation: String::new(),
            url: "https://example.com/v".to_string(),
            hdurl: None,
            media_type: MediaType::Video,
            copyright: Some("Someone".to_string()),
            service_version: None,
            thumbnail_url: None,
        }
    }

    #[tokio::test]
    async fn test_put_get_and_idempotent_write() {
        let store = MemoryRecordStore::new();
        let key: DateKey = "2024-01-01".parse().unwrap();
        assert!(store.get(&key).await.is_none());

        store.put(&key, &record("2024-01-01")).await.unwrap();
        store.put(&key, &record("2024-01-01")).await.unwrap();

        assert_eq!(store.len().await, 1);
        assert_eq!(store.get(&key).await, Some(record("2024-01-01")));
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let store = MemoryRecordStore::with_records([record("2020-02-02")]);
        let other = store.clone();
        let key: DateKey = "2021-03-03".parse().unwrap();
        other.put(&key, &record("2021-03-03")).await.unwrap();

        assert!(store.contains(&key).await);
        assert_eq!(store.len().await, 2);
    }
}
