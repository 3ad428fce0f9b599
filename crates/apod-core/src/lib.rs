//! Domain layer for the APOD browser.
//!
//! Holds the date-keyed record model, the resolution lifecycle types, and the
//! capability traits ([`RecordStore`], [`RemoteService`],
//! [`ResolutionObserver`]) that the resolver is written against.

pub mod config;
pub mod error;
pub mod record;
pub mod resolution;

// Re-export common types
pub use error::{ApodError, Result};
pub use record::{DateKey, MediaType, Record, RecordStore, RemoteService};
pub use resolution::{ResolutionObserver, ResolutionSnapshot, ResolutionState};
