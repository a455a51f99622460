//! Value objects for the EcoVision domain

mod coordinate;
mod emission;
mod transport_mode;

pub use coordinate::{Coordinate, InvalidCoordinates};
pub use emission::{EmissionFactor, round_to_minutes, round_to_tenth};
pub use transport_mode::TransportMode;
