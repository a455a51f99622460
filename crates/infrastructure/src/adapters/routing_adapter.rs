//! Routing adapter - implements the geocoding and directions ports
//!
//! Bridges the application-layer ports to the OpenRouteService and
//! Nominatim clients, collapsing the integration error enums into the
//! port failure shapes the route synthesizer branches on.

use application::ApplicationError;
use application::ports::{
    DirectionsFailure, DirectionsPort, GeocodeFailure, GeocodingPort, RouteLeg, TravelProfile,
};
use async_trait::async_trait;
use domain::Coordinate;
use integration_routing::{
    DirectionsClient, GeocodingClient, GeocodingError, NominatimConfig, NominatimGeocodingClient,
    OrsDirectionsClient, OrsProfile, RoutingConfig, RoutingError,
};

/// Adapter for the external geocoding and directions providers
#[derive(Debug)]
pub struct RoutingAdapter {
    geocoding: NominatimGeocodingClient,
    directions: OrsDirectionsClient,
}

impl RoutingAdapter {
    /// Create the adapter with both provider clients
    ///
    /// # Errors
    ///
    /// Returns a configuration error if either HTTP client cannot be built.
    pub fn new(
        routing: &RoutingConfig,
        geocoding: &NominatimConfig,
    ) -> Result<Self, ApplicationError> {
        let geocoding = NominatimGeocodingClient::new(geocoding)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        let directions = OrsDirectionsClient::new(routing)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;

        Ok(Self {
            geocoding,
            directions,
        })
    }

    const fn map_profile(profile: TravelProfile) -> OrsProfile {
        match profile {
            TravelProfile::Driving => OrsProfile::DrivingCar,
            TravelProfile::Cycling => OrsProfile::CyclingRegular,
            TravelProfile::Walking => OrsProfile::FootWalking,
        }
    }

    fn map_geocoding_error(err: GeocodingError) -> GeocodeFailure {
        match err {
            GeocodingError::PlaceNotFound(place) => GeocodeFailure::NotFound(place),
            other => GeocodeFailure::Unavailable(other.to_string()),
        }
    }

    fn map_directions_error(err: RoutingError) -> DirectionsFailure {
        if err.is_auth_failure() {
            return DirectionsFailure::Unauthorized(err.to_string());
        }
        match err {
            RoutingError::NoRoute { .. } => DirectionsFailure::NoRoute,
            other => DirectionsFailure::Unavailable(other.to_string()),
        }
    }
}

#[async_trait]
impl GeocodingPort for RoutingAdapter {
    async fn geocode(&self, place: &str) -> Result<Coordinate, GeocodeFailure> {
        self.geocoding
            .geocode(place)
            .await
            .map_err(Self::map_geocoding_error)
    }
}

#[async_trait]
impl DirectionsPort for RoutingAdapter {
    async fn directions(
        &self,
        from: Coordinate,
        to: Coordinate,
        profile: TravelProfile,
    ) -> Result<RouteLeg, DirectionsFailure> {
        let summary = self
            .directions
            .route(from, to, Self::map_profile(profile))
            .await
            .map_err(Self::map_directions_error)?;

        Ok(RouteLeg {
            distance_m: summary.distance_m,
            duration_s: summary.duration_s,
        })
    }
}
