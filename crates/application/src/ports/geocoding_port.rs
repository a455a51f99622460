//! Geocoding port - place name to coordinate resolution

use async_trait::async_trait;
use domain::Coordinate;
use thiserror::Error;

/// Failure to resolve a place name
///
/// The route pipeline treats provider errors the same as "no match": either
/// way the place could not be resolved and the request fails. The variants
/// exist for log fidelity only.
#[derive(Debug, Error)]
pub enum GeocodeFailure {
    /// The provider returned no match for the place name
    #[error("No match for place: {0}")]
    NotFound(String),

    /// The provider could not be reached or answered with an error
    #[error("Geocoding service unavailable: {0}")]
    Unavailable(String),
}

/// Port for resolving free-text place names to coordinates
///
/// Coordinates are resolved fresh on every call; implementations must not
/// cache results across requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve a place name to a coordinate pair
    async fn geocode(&self, place: &str) -> Result<Coordinate, GeocodeFailure>;
}
