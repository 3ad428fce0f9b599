//! Presentation-facing observer trait.

use super::state::ResolutionSnapshot;

/// Receives every published [`ResolutionSnapshot`], in publication order.
///
/// Called while the resolver holds its state lock, so implementations must
/// return quickly and must not call back into the resolver.
pub trait ResolutionObserver: Send + Sync {
    fn publish(&self, snapshot: &ResolutionSnapshot);
}

/// Observer that drops every snapshot, for callers that poll instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ResolutionObserver for NoopObserver {
    fn publish(&self, _snapshot: &ResolutionSnapshot) {}
}
