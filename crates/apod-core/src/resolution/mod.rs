//! Resolution domain: lifecycle states and how they reach presentation.

mod observer;
mod state;

pub use observer::{NoopObserver, ResolutionObserver};
pub use state::{ResolutionSnapshot, ResolutionState};
