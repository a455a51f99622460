//! OpenRouteService directions client
//!
//! Per-profile route lookups via the
//! [v2 directions API](https://openrouteservice.org/dev/#/api-docs/v2/directions).
//! One GET per (coordinate pair, profile); the caller decides which profile
//! failures it can tolerate.

use std::time::Duration;

use async_trait::async_trait;
use domain::Coordinate;
use reqwest::{Client, StatusCode, header};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::RoutingConfig;
use crate::error::RoutingError;
use crate::models::{OrsProfile, RouteSummary};

/// Trait for directions clients
#[async_trait]
pub trait DirectionsClient: Send + Sync {
    /// Compute a route between two coordinates for one travel profile
    async fn route(
        &self,
        start: Coordinate,
        end: Coordinate,
        profile: OrsProfile,
    ) -> Result<RouteSummary, RoutingError>;
}

/// OpenRouteService HTTP client
#[derive(Debug)]
pub struct OrsDirectionsClient {
    client: Client,
    config: RoutingConfig,
}

impl OrsDirectionsClient {
    /// Create a new directions client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &RoutingConfig) -> Result<Self, RoutingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("EcoVision/1.0")
            .build()
            .map_err(|e| RoutingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Parse the raw GeoJSON directions response into a route summary
    fn parse_directions_response(
        body: &str,
        profile: OrsProfile,
    ) -> Result<RouteSummary, RoutingError> {
        let raw: RawDirectionsResponse =
            serde_json::from_str(body).map_err(|e| RoutingError::ParseError(e.to_string()))?;

        let feature = raw
            .features
            .into_iter()
            .next()
            .ok_or_else(|| RoutingError::NoRoute {
                profile: profile.to_string(),
            })?;

        Ok(RouteSummary {
            distance_m: feature.properties.summary.distance,
            duration_s: feature.properties.summary.duration,
        })
    }

    fn retry_after_secs(response: &reqwest::Response) -> Option<u64> {
        response
            .headers()
            .get(header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
    }
}

#[async_trait]
impl DirectionsClient for OrsDirectionsClient {
    #[instrument(skip(self), fields(profile = %profile, start = %start, end = %end))]
    async fn route(
        &self,
        start: Coordinate,
        end: Coordinate,
        profile: OrsProfile,
    ) -> Result<RouteSummary, RoutingError> {
        if self.config.api_key.is_empty() {
            return Err(RoutingError::MissingApiKey);
        }

        let url = format!("{}/v2/directions/{}", self.config.base_url, profile);
        let params = [
            (
                "start",
                format!("{},{}", start.longitude(), start.latitude()),
            ),
            ("end", format!("{},{}", end.longitude(), end.latitude())),
        ];

        debug!(%url, "Requesting directions");

        let response = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .header(header::AUTHORIZATION, self.config.api_key.as_str())
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RoutingError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    RoutingError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(RoutingError::Unauthorized(format!("HTTP {status}")));
            },
            StatusCode::NOT_FOUND => {
                // ORS answers 404 when no routable point exists for a profile
                return Err(RoutingError::NoRoute {
                    profile: profile.to_string(),
                });
            },
            StatusCode::TOO_MANY_REQUESTS => {
                return Err(RoutingError::RateLimitExceeded {
                    retry_after_secs: Self::retry_after_secs(&response),
                });
            },
            status if status.is_server_error() => {
                return Err(RoutingError::ServiceUnavailable(format!("HTTP {status}")));
            },
            status if !status.is_success() => {
                return Err(RoutingError::RequestFailed(format!("HTTP {status}")));
            },
            _ => {},
        }

        let body = response
            .text()
            .await
            .map_err(|e| RoutingError::RequestFailed(e.to_string()))?;

        Self::parse_directions_response(&body, profile)
    }
}

/// Raw GeoJSON directions response
#[derive(Debug, Deserialize)]
struct RawDirectionsResponse {
    #[serde(default)]
    features: Vec<RawFeature>,
}

#[derive(Debug, Deserialize)]
struct RawFeature {
    properties: RawProperties,
}

#[derive(Debug, Deserialize)]
struct RawProperties {
    summary: RawSummary,
}

#[derive(Debug, Deserialize)]
struct RawSummary {
    /// Meters
    distance: f64,
    /// Seconds
    duration: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_BODY: &str = r#"{
        "features": [{
            "properties": {
                "summary": { "distance": 346000.0, "duration": 14400.0 }
            },
            "geometry": { "coordinates": [[-74.006, 40.7128], [-71.0589, 42.3601]] }
        }]
    }"#;

    #[test]
    fn parses_summary_from_first_feature() {
        let summary =
            OrsDirectionsClient::parse_directions_response(SAMPLE_BODY, OrsProfile::DrivingCar)
                .expect("summary");
        assert!((summary.distance_m - 346_000.0).abs() < f64::EPSILON);
        assert!((summary.duration_s - 14_400.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_features_is_no_route() {
        let err = OrsDirectionsClient::parse_directions_response(
            r#"{"features": []}"#,
            OrsProfile::CyclingRegular,
        )
        .expect_err("should fail");
        assert!(matches!(err, RoutingError::NoRoute { .. }));
    }

    #[test]
    fn malformed_body_is_parse_error() {
        let err =
            OrsDirectionsClient::parse_directions_response("not json", OrsProfile::FootWalking)
                .expect_err("should fail");
        assert!(matches!(err, RoutingError::ParseError(_)));
    }

    #[tokio::test]
    async fn missing_api_key_fails_without_network() {
        let config = RoutingConfig::default();
        let client = OrsDirectionsClient::new(&config).expect("client");
        let err = client
            .route(
                Coordinate::new_unchecked(13.405, 52.52),
                Coordinate::new_unchecked(13.0645, 52.3906),
                OrsProfile::DrivingCar,
            )
            .await
            .expect_err("should fail");
        assert!(matches!(err, RoutingError::MissingApiKey));
        assert!(err.is_auth_failure());
    }
}
