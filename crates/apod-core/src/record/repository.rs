//! Record store trait.
//!
//! Defines the interface for date-keyed record persistence.

use async_trait::async_trait;

use super::date_key::DateKey;
use super::model::Record;
use crate::error::Result;

/// An abstract store mapping [`DateKey`] to [`Record`].
///
/// This trait decouples the resolver from the physical storage medium
/// (files on disk, memory, anything with get/put semantics).
///
/// # Implementation Notes
///
/// - Entries are kept indefinitely; there is no eviction.
/// - `get` must not fail. Unreadable entries are reported as absent.
/// - `put` with an equal payload must leave the store unchanged; a different
///   payload replaces the entry (last writer wins).
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Looks up the record stored for `key`.
    ///
    /// # Returns
    ///
    /// - `Some(Record)`: entry found
    /// - `None`: no entry, or the entry could not be read
    async fn get(&self, key: &DateKey) -> Option<Record>;

    /// Stores `record` under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: entry written (or already present with an equal payload)
    /// - `Err(ApodError::StoreWrite)`: the entry is not durable
    async fn put(&self, key: &DateKey, record: &Record) -> Result<()>;
}
