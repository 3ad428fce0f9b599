use apod_core::resolution::{ResolutionObserver, ResolutionSnapshot};
use tokio::sync::mpsc;

/// Forwards every published snapshot over an unbounded channel.
///
/// Lets a presentation loop consume resolution changes without holding a
/// reference to the resolver. Publishing never blocks; snapshots sent after
/// the receiver is dropped are discarded.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    sender: mpsc::UnboundedSender<ResolutionSnapshot>,
}

impl ChannelObserver {
    pub fn new(sender: mpsc::UnboundedSender<ResolutionSnapshot>) -> Self {
        Self { sender }
    }

    /// Creates an observer together with the receiving end of its channel.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ResolutionSnapshot>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self::new(sender), receiver)
    }
}

impl ResolutionObserver for ChannelObserver {
    fn publish(&self, snapshot: &ResolutionSnapshot) {
        if self.sender.send(snapshot.clone()).is_err() {
            tracing::trace!("Snapshot receiver dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apod_core::resolution::ResolutionState;

    #[test]
    fn test_forwards_snapshots_in_order() {
        let (observer, mut receiver) = ChannelObserver::channel();
        let key = "2024-01-01".parse().unwrap();

        observer.publish(&ResolutionSnapshot::loading(key));
        observer.publish(&ResolutionSnapshot::empty(key));

        assert_eq!(receiver.try_recv().unwrap().state, ResolutionState::Loading);
        assert_eq!(receiver.try_recv().unwrap().state, ResolutionState::Empty);
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn test_dropped_receiver_is_ignored() {
        let (observer, receiver) = ChannelObserver::channel();
        drop(receiver);
        observer.publish(&ResolutionSnapshot::unselected());
    }
}
