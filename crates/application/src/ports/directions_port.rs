//! Directions port - coordinate pair + travel profile to distance/duration

use async_trait::async_trait;
use domain::Coordinate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Travel profile passed to the directions provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelProfile {
    Driving,
    Cycling,
    Walking,
}

impl fmt::Display for TravelProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Driving => "driving",
            Self::Cycling => "cycling",
            Self::Walking => "walking",
        };
        f.write_str(name)
    }
}

/// Raw distance/duration of a single route leg, as returned by the provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteLeg {
    /// Route length in meters
    pub distance_m: f64,
    /// Travel time in seconds
    pub duration_s: f64,
}

/// Failure of a single directions request
///
/// `Unauthorized` is fatal to the whole route request: every other profile
/// call would fail identically, and the caller needs actionable diagnostics.
/// The remaining variants are local to one profile; the synthesizer logs
/// them and keeps trying the other profiles.
#[derive(Debug, Error)]
pub enum DirectionsFailure {
    /// Credential missing or rejected by the provider
    #[error("Directions service unauthorized: {0}")]
    Unauthorized(String),

    /// No route exists between the two coordinates for this profile
    #[error("No route found for this profile")]
    NoRoute,

    /// Timeout, rate limit, or any other transient provider failure
    #[error("Directions unavailable: {0}")]
    Unavailable(String),
}

/// Port for fetching directions from an external routing provider
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectionsPort: Send + Sync {
    /// Fetch distance and duration between two coordinates for one profile
    async fn directions(
        &self,
        from: Coordinate,
        to: Coordinate,
        profile: TravelProfile,
    ) -> Result<RouteLeg, DirectionsFailure>;
}
