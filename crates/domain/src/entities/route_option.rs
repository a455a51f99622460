//! Route option entity
//!
//! One comparable transport choice for a single origin/destination query.
//! All route options in one response share the same endpoints; within a
//! response the car-mode options share distance and duration and differ
//! only in their emission figure.

use serde::{Deserialize, Serialize};

use crate::value_objects::TransportMode;

/// A single transport option with comparable distance/duration/emission figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteOption {
    /// Display label, e.g. "Drive (Electric Vehicle)"
    pub name: String,
    /// Route length in km, rounded to one decimal
    pub distance_km: f64,
    /// Travel time in whole minutes
    pub duration_min: u32,
    /// CO₂ emitted in kg, rounded to one decimal
    pub co2_kg: f64,
    /// Transport mode, serialized as `type` on the wire
    #[serde(rename = "type")]
    pub mode: TransportMode,
    /// Whether this option is the suggested choice
    pub recommended: bool,
}
