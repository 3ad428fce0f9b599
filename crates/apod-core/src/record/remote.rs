//! Remote service trait.

use async_trait::async_trait;

use super::date_key::DateKey;
use super::model::Record;
use crate::error::Result;

/// Source of records for dates the store has not seen yet.
///
/// The three outcomes of a fetch map onto `Result<Option<Record>>`:
///
/// - `Ok(Some(record))`: the service answered with a usable record
/// - `Ok(None)`: the service answered successfully but the body held no
///   usable record (absent, malformed, or of another shape)
/// - `Err(ApodError::RemoteRequest)`: transport failure or non-success status
#[async_trait]
pub trait RemoteService: Send + Sync {
    async fn fetch(&self, key: &DateKey) -> Result<Option<Record>>;
}
