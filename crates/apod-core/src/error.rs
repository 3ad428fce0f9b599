//! Error types for the APOD browser.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the whole workspace.
///
/// Every failure the resolver can meet is absorbed into a
/// [`ResolutionState`](crate::resolution::ResolutionState); this type is what
/// gets logged and, for request failures, shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApodError {
    /// Date text that is not a usable `YYYY-MM-DD` selection
    #[error("Invalid date '{input}': {reason}")]
    InvalidDate { input: String, reason: String },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport failure or non-success response from the remote service
    #[error("{}", remote_request_message(.status_code, .message))]
    RemoteRequest {
        status_code: Option<u16>,
        message: String,
    },

    /// Record store write failure
    #[error("Store write error: {0}")]
    StoreWrite(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

fn remote_request_message(status_code: &Option<u16>, message: &str) -> String {
    match status_code {
        Some(code) => format!("Remote request failed (HTTP {code}): {message}"),
        None => format!("Remote request failed: {message}"),
    }
}

impl ApodError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an InvalidDate error
    pub fn invalid_date(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a RemoteRequest error
    pub fn remote(status_code: Option<u16>, message: impl Into<String>) -> Self {
        Self::RemoteRequest {
            status_code,
            message: message.into(),
        }
    }

    /// Creates a StoreWrite error
    pub fn store_write(message: impl Into<String>) -> Self {
        Self::StoreWrite(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_invalid_date(&self) -> bool {
        matches!(self, Self::InvalidDate { .. })
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::RemoteRequest { .. })
    }

    pub fn is_store_write(&self) -> bool {
        matches!(self, Self::StoreWrite(_))
    }

    /// HTTP status of a remote failure, if the service answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::RemoteRequest { status_code, .. } => *status_code,
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for ApodError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for ApodError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for ApodError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for ApodError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, ApodError>`.
pub type Result<T> = std::result::Result<T, ApodError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_message_with_status() {
        let err = ApodError::remote(Some(429), "OVER_RATE_LIMIT");
        assert_eq!(
            err.to_string(),
            "Remote request failed (HTTP 429): OVER_RATE_LIMIT"
        );
        assert_eq!(err.status_code(), Some(429));
        assert!(err.is_remote());
    }

    #[test]
    fn test_remote_message_without_status() {
        let err = ApodError::remote(None, "connection refused");
        assert_eq!(err.to_string(), "Remote request failed: connection refused");
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn test_io_conversion_keeps_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ApodError = io.into();
        assert!(err.to_string().contains("PermissionDenied"));
    }
}
