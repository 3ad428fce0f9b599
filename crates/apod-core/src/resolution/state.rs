//! Resolution lifecycle models.

use serde::{Deserialize, Serialize};

use crate::record::{DateKey, Record};

/// Lifecycle status of the currently selected date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionState {
    /// No date chosen
    #[default]
    Unselected,
    /// Store lookup or remote request in progress for the current date
    Loading,
    /// A record is available for the current date
    Resolved,
    /// The request completed without a usable record
    Empty,
    /// The request failed
    Failed,
}

impl ResolutionState {
    /// Whether the state is final for its date until the user selects again.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Resolved | Self::Empty | Self::Failed)
    }
}

/// What the presentation layer receives on every change.
///
/// `record` is present exactly when `state` is `Resolved`; `failure` holds
/// the logged error message when `state` is `Failed`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResolutionSnapshot {
    pub key: Option<DateKey>,
    pub state: ResolutionState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record: Option<Record>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

impl ResolutionSnapshot {
    pub fn unselected() -> Self {
        Self::default()
    }

    pub fn loading(key: DateKey) -> Self {
        Self {
            key: Some(key),
            state: ResolutionState::Loading,
            record: None,
            failure: None,
        }
    }

    pub fn resolved(key: DateKey, record: Record) -> Self {
        Self {
            key: Some(key),
            state: ResolutionState::Resolved,
            record: Some(record),
            failure: None,
        }
    }

    pub fn empty(key: DateKey) -> Self {
        Self {
            key: Some(key),
            state: ResolutionState::Empty,
            record: None,
            failure: None,
        }
    }

    pub fn failed(key: DateKey, failure: impl Into<String>) -> Self {
        Self {
            key: Some(key),
            state: ResolutionState::Failed,
            record: None,
            failure: Some(failure.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unselected() {
        let snapshot = ResolutionSnapshot::default();
        assert_eq!(snapshot, ResolutionSnapshot::unselected());
        assert_eq!(snapshot.state, ResolutionState::Unselected);
        assert!(snapshot.key.is_none());
    }

    #[test]
    fn test_settled_states() {
        assert!(!ResolutionState::Unselected.is_settled());
        assert!(!ResolutionState::Loading.is_settled());
        assert!(ResolutionState::Resolved.is_settled());
        assert!(ResolutionState::Empty.is_settled());
        assert!(ResolutionState::Failed.is_settled());
    }

    #[test]
    fn test_failed_carries_message() {
        let key: DateKey = "2030-05-05".parse().unwrap();
        let snapshot = ResolutionSnapshot::failed(key, "boom");
        assert_eq!(snapshot.state, ResolutionState::Failed);
        assert_eq!(snapshot.failure.as_deref(), Some("boom"));
        assert!(snapshot.record.is_none());
    }
}
