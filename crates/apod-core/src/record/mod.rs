//! Record domain: date keys, the record payload, and the store/remote seams.

mod date_key;
mod model;
mod remote;
mod repository;

pub use date_key::DateKey;
pub use model::{MediaType, Record};
pub use remote::RemoteService;
pub use repository::RecordStore;
