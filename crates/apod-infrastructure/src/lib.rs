pub mod config_service;
pub mod file_record_store;
pub mod memory_record_store;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::file_record_store::FileRecordStore;
pub use crate::memory_record_store::MemoryRecordStore;
