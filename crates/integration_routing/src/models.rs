//! Routing data models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Travel profile identifier as understood by OpenRouteService
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrsProfile {
    /// Regular car routing
    DrivingCar,
    /// Regular bicycle routing
    CyclingRegular,
    /// Pedestrian routing
    FootWalking,
}

impl OrsProfile {
    /// Path segment used in the directions URL
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DrivingCar => "driving-car",
            Self::CyclingRegular => "cycling-regular",
            Self::FootWalking => "foot-walking",
        }
    }
}

impl fmt::Display for OrsProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Distance and duration of a computed route
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    /// Route length in meters
    pub distance_m: f64,
    /// Travel time in seconds
    pub duration_s: f64,
}
