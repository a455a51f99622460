//! API error handling
//!
//! Maps application and route-pipeline errors onto HTTP statuses. The
//! status carries the failure class: caller mistakes are 4xx, provider
//! problems are 502/503/504 depending on whether they are routing
//! failures, configuration problems, or deadline misses.

use application::{ApplicationError, EcoRouteError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Bad gateway: {0}")]
    BadGateway(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Gateway timeout: {0}")]
    GatewayTimeout(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Stable error code
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            Self::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "unauthorized", msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            Self::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                "rate_limited",
                "Rate limit exceeded. Please try again in a moment.".to_string(),
            ),
            Self::BadGateway(msg) => (StatusCode::BAD_GATEWAY, "bad_gateway", msg),
            Self::ServiceUnavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "service_unavailable",
                msg,
            ),
            Self::GatewayTimeout(msg) => (StatusCode::GATEWAY_TIMEOUT, "gateway_timeout", msg),
            Self::Internal(msg) => {
                tracing::error!(%msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            },
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<EcoRouteError> for ApiError {
    fn from(err: EcoRouteError) -> Self {
        match err {
            EcoRouteError::Validation(_) | EcoRouteError::LocationNotFound { .. } => {
                Self::BadRequest(err.to_string())
            },
            EcoRouteError::ServiceUnauthorized(_) => Self::ServiceUnavailable(err.to_string()),
            EcoRouteError::NoRouteAvailable => Self::BadGateway(err.to_string()),
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) => Self::BadRequest(e.to_string()),
            ApplicationError::NotAuthorized(msg) => Self::Unauthorized(msg),
            ApplicationError::RateLimited => Self::RateLimited,
            ApplicationError::Timeout(msg) => Self::GatewayTimeout(msg),
            ApplicationError::Inference(msg) | ApplicationError::ExternalService(msg) => {
                Self::ServiceUnavailable(msg)
            },
            ApplicationError::NotFound(msg) => Self::NotFound(msg),
            ApplicationError::Configuration(msg) | ApplicationError::Internal(msg) => {
                Self::Internal(msg)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::DomainError;

    fn status_of(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn validation_maps_to_400() {
        let err: ApiError = EcoRouteError::Validation("empty".to_string()).into();
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn location_not_found_maps_to_400() {
        let err: ApiError = EcoRouteError::LocationNotFound {
            place: "Atlantis".to_string(),
        }
        .into();
        assert!(matches!(&err, ApiError::BadRequest(msg) if msg.contains("Atlantis")));
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unauthorized_service_maps_to_503() {
        let err: ApiError = EcoRouteError::ServiceUnauthorized("bad key".to_string()).into();
        assert_eq!(status_of(err), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn no_route_maps_to_502() {
        let err: ApiError = EcoRouteError::NoRouteAvailable.into();
        assert_eq!(status_of(err), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn application_error_statuses() {
        let cases: Vec<(ApplicationError, StatusCode)> = vec![
            (
                ApplicationError::Domain(DomainError::ValidationError("x".to_string())),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApplicationError::NotAuthorized("key".to_string()),
                StatusCode::UNAUTHORIZED,
            ),
            (ApplicationError::RateLimited, StatusCode::TOO_MANY_REQUESTS),
            (
                ApplicationError::Timeout("slow".to_string()),
                StatusCode::GATEWAY_TIMEOUT,
            ),
            (
                ApplicationError::Inference("down".to_string()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                ApplicationError::NotFound("gone".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (
                ApplicationError::Internal("bug".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(status_of(err.into()), expected);
        }
    }

    #[test]
    fn internal_error_hides_details() {
        let response = ApiError::Internal("sqlite path /var/db broke".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
