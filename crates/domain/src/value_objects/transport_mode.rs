//! Transport mode value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// A transport mode a route option can use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    /// Private car (gas, diesel or electric)
    Car,
    /// Bus or train
    PublicTransit,
    /// Bicycle
    Bike,
    /// On foot
    Walk,
}

impl TransportMode {
    /// Wire name of the mode, as used in API payloads
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::PublicTransit => "public_transit",
            Self::Bike => "bike",
            Self::Walk => "walk",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
