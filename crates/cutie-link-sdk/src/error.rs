//! SDK error types.
//!
//! [`LinkError`] is the single error type returned by every fallible
//! operation on [`LinkClient`](crate::LinkClient).  Each failure mode is a
//! distinct variant so the host app can decide how to present it.
//!
//! [`StoreError`] covers the local key-value storage used for the device
//! identifier.  It never escapes the link flow: storage writes are
//! best-effort.

/// Error type for the link-opening flow.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    /// Neither an App ID nor an API key has been configured.
    #[error("CutiELink not configured: call configure() with an App ID first")]
    NotConfigured,

    /// The token API rejected the configured credentials (HTTP 401).
    #[error("invalid App ID or API key")]
    InvalidCredentials,

    /// The configured base URL does not produce a valid endpoint URL.
    #[error("invalid API URL: {0}")]
    InvalidURL(String),

    /// The deep link could not be built from the issued token.
    #[error("failed to create deep link")]
    InvalidDeepLink,

    /// The token API answered with a body we could not interpret.
    #[error("invalid server response: {0}")]
    InvalidResponse(String),

    /// The token API answered with a non-200, non-401 status.
    #[error("server error: {0}")]
    ServerError(u16),

    /// The Feedback App is not installed.
    ///
    /// Reserved: [`LinkClient::open_feedback_app`](crate::LinkClient::open_feedback_app)
    /// reports a missing app by returning `Ok(false)` instead.
    #[error("Cuti-E Feedback App is not installed")]
    FeedbackAppNotInstalled,

    /// The HTTP request to the token API failed at the transport level.
    #[error("HTTP error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Errors raised by [`KeyValueStore`](crate::KeyValueStore) implementations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The platform exposes no configuration directory.
    #[error("could not determine config directory")]
    NoConfigDir,

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization / deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_display_carries_status() {
        assert_eq!(LinkError::ServerError(503).to_string(), "server error: 503");
    }

    #[test]
    fn not_configured_display_mentions_configure() {
        assert!(LinkError::NotConfigured.to_string().contains("configure()"));
    }

    #[test]
    fn store_error_wraps_io() {
        let err: StoreError = std::io::Error::other("disk full").into();
        assert_eq!(err.to_string(), "I/O error: disk full");
    }
}
