//! Routing integration for EcoVision
//!
//! Provides driving/cycling/walking directions via the
//! [OpenRouteService](https://openrouteservice.org) API and place-name
//! geocoding via [Nominatim/OpenStreetMap](https://nominatim.openstreetmap.org).
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern. [`DirectionsClient`] defines the
//! interface for per-profile route lookups, implemented by
//! [`OrsDirectionsClient`]. [`GeocodingClient`] handles place-name-to-coordinate
//! conversion via [`NominatimGeocodingClient`]. Results are resolved fresh on
//! every call; nothing is cached across requests.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_routing::{OrsDirectionsClient, OrsProfile, RoutingConfig};
//!
//! let config = RoutingConfig { api_key: "...".into(), ..RoutingConfig::default() };
//! let client = OrsDirectionsClient::new(&config)?;
//!
//! let summary = client.route(
//!     Coordinate::new_unchecked(-74.006, 40.7128),  // New York
//!     Coordinate::new_unchecked(-71.0589, 42.3601), // Boston
//!     OrsProfile::DrivingCar,
//! ).await?;
//! ```

mod config;
mod directions;
mod error;
mod geocoding;
mod models;

pub use config::RoutingConfig;
pub use directions::{DirectionsClient, OrsDirectionsClient};
pub use error::RoutingError;
pub use geocoding::{GeocodingClient, GeocodingError, NominatimConfig, NominatimGeocodingClient};
pub use models::{OrsProfile, RouteSummary};
