//! Routing error types

use thiserror::Error;

/// Errors that can occur during directions lookups
#[derive(Debug, Error)]
pub enum RoutingError {
    /// No API key configured for the directions service
    #[error("Directions API key not configured")]
    MissingApiKey,

    /// API key rejected by the provider
    #[error("Directions service rejected the credential: {0}")]
    Unauthorized(String),

    /// No route exists between the coordinates for this profile
    #[error("No {profile} route found")]
    NoRoute {
        /// Profile the lookup was made for
        profile: String,
    },

    /// Connection to the directions service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the directions service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the directions service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by API)
        retry_after_secs: Option<u64>,
    },

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl RoutingError {
    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_)
                | Self::RequestFailed(_)
                | Self::ServiceUnavailable(_)
                | Self::Timeout { .. }
                | Self::RateLimitExceeded { .. }
        )
    }

    /// Returns true if this is a credential problem
    ///
    /// Auth failures are fatal to a whole route comparison: every other
    /// profile call would fail identically.
    #[must_use]
    pub const fn is_auth_failure(&self) -> bool {
        matches!(self, Self::MissingApiKey | Self::Unauthorized(_))
    }
}
