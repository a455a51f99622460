//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod directions_port;
mod geocoding_port;
mod inference_port;
mod route_log_store;
mod tips_port;
mod usage_store;

pub use directions_port::{DirectionsFailure, DirectionsPort, RouteLeg, TravelProfile};
#[cfg(test)]
pub use directions_port::MockDirectionsPort;
pub use geocoding_port::{GeocodeFailure, GeocodingPort};
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use inference_port::{InferencePort, InferenceResult};
#[cfg(test)]
pub use inference_port::MockInferencePort;
pub use route_log_store::RouteLogStorePort;
pub use tips_port::TipsPort;
pub use usage_store::UsageStorePort;
#[cfg(test)]
pub use usage_store::MockUsageStorePort;
