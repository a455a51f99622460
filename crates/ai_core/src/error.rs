//! Inference errors

use thiserror::Error;

/// Errors that can occur during inference
#[derive(Debug, Error)]
pub enum InferenceError {
    /// Failed to connect to the inference provider
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the inference provider failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// API key missing or rejected by the provider
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Response parsing failed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Timeout during inference
    #[error("Inference timed out after {0}s")]
    Timeout(u64),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Provider-side error
    #[error("Server error: {0}")]
    ServerError(String),
}

impl InferenceError {
    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::Timeout(_) | Self::RateLimited | Self::ServerError(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_errors() {
        assert!(InferenceError::RateLimited.is_retryable());
        assert!(InferenceError::Timeout(30).is_retryable());
        assert!(InferenceError::ServerError("500".to_string()).is_retryable());
        assert!(InferenceError::ConnectionFailed("refused".to_string()).is_retryable());
    }

    #[test]
    fn non_retryable_errors() {
        assert!(!InferenceError::Unauthorized("bad key".to_string()).is_retryable());
        assert!(!InferenceError::InvalidResponse("no choices".to_string()).is_retryable());
    }
}
