//! Error types for the system checks engine.
//!
//! Data providers classify their failures through `ProviderError` so that
//! individual checks can degrade to a boolean verdict instead of aborting a
//! whole pass. The root `Error` type is what collaborator seams (stores,
//! registration client) surface to the caller.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the system checks engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Data provider request failed: {0}")]
    Provider(#[from] ProviderError),

    #[error("Persistence operation failed: {0}")]
    Store(String),

    #[error("Check snapshot is missing required field '{0}'")]
    MissingSnapshotField(&'static str),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Classified failures from async data providers (token fetch, server status,
/// registration calls).
///
/// The distinction that matters to checks is network-vs-everything-else:
/// a network failure means "we could not reach the server", which several
/// checks treat as a non-failure so that the connectivity check stays the
/// single owner of the offline story.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The request never produced a response (DNS, connect, TLS, offline).
    #[error("network request failed: {0}")]
    Network(String),

    /// The request did not settle within its deadline.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// A response arrived but could not be parsed into the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),

    /// Anything else: server-side rejection, missing credentials, etc.
    #[error("provider failure: {0}")]
    Other(String),
}

impl ProviderError {
    /// True when the failure is transient connectivity rather than a real
    /// answer from the server. Checks use this to defer to the dedicated
    /// connectivity check instead of surfacing a misleading failure.
    pub fn is_network(&self) -> bool {
        matches!(self, ProviderError::Network(_) | ProviderError::Timeout(_))
    }

    /// Creates a Network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a Decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Creates an Other error.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_classification() {
        assert!(ProviderError::network("connection refused").is_network());
        assert!(ProviderError::Timeout("token endpoint".to_string()).is_network());
        assert!(!ProviderError::decode("missing claim").is_network());
        assert!(!ProviderError::other("500 from server").is_network());
    }

    #[test]
    fn test_error_messages() {
        let err = Error::Provider(ProviderError::network("offline"));
        assert_eq!(
            err.to_string(),
            "Data provider request failed: network request failed: offline"
        );

        let err = Error::MissingSnapshotField("account_expiry");
        assert_eq!(
            err.to_string(),
            "Check snapshot is missing required field 'account_expiry'"
        );
    }
}
