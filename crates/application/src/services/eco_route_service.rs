//! Eco route service - comparable transport options for one origin/destination
//!
//! Orchestrates geocoding and per-profile directions lookups into a list of
//! mutually comparable [`RouteOption`]s. Individual profile failures are
//! tolerated; only an unauthorized directions credential, unresolvable place
//! names, or a fully empty result fail the request.

use std::sync::Arc;

use domain::{EmissionFactor, RouteOption, TransportMode, round_to_minutes, round_to_tenth};
use thiserror::Error;
use tracing::{instrument, warn};

use crate::ports::{DirectionsFailure, DirectionsPort, GeocodingPort, RouteLeg, TravelProfile};

const DRIVE_GAS: &str = "Drive (Gas Car)";
const DRIVE_EV: &str = "Drive (Electric Vehicle)";
const BICYCLE: &str = "Bicycle";
const WALK: &str = "Walk";
const PUBLIC_TRANSIT: &str = "Public Transit";

/// Recommend cycling below this distance
const BIKE_RECOMMEND_KM: f64 = 15.0;
/// Walking routes at or above this distance are not comparable and dropped
const WALK_INCLUDE_KM: f64 = 8.0;
/// Recommend walking below this distance
const WALK_RECOMMEND_KM: f64 = 3.0;
/// Recommend transit above this distance
const TRANSIT_RECOMMEND_KM: f64 = 5.0;
/// Transit takes roughly 30% longer than driving the same route
const TRANSIT_DURATION_FACTOR: f64 = 1.3;

/// Failure of a whole route comparison request
#[derive(Debug, Error)]
pub enum EcoRouteError {
    /// Origin or destination missing/empty; rejected before any provider call
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A place name could not be resolved to coordinates
    #[error("Unable to find '{place}'. Please check the name and try again.")]
    LocationNotFound { place: String },

    /// The directions credential is missing or was rejected. Configuration
    /// problem, not a transient one: don't retry, alert.
    #[error("Routing service not configured or unauthorized: {0}")]
    ServiceUnauthorized(String),

    /// Every profile attempt failed for non-fatal reasons
    #[error("No route could be computed between these locations")]
    NoRouteAvailable,
}

/// Builds the comparable transport option set for a route query
pub struct EcoRouteService {
    geocoding: Arc<dyn GeocodingPort>,
    directions: Arc<dyn DirectionsPort>,
}

impl std::fmt::Debug for EcoRouteService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EcoRouteService").finish_non_exhaustive()
    }
}

impl EcoRouteService {
    /// Create a new eco route service
    pub fn new(geocoding: Arc<dyn GeocodingPort>, directions: Arc<dyn DirectionsPort>) -> Self {
        Self {
            geocoding,
            directions,
        }
    }

    /// Compare transport options between two free-text place names
    ///
    /// Returns options in construction order: car options, bicycle, walk,
    /// transit. At least one option carries `recommended = true`; more than
    /// one may.
    ///
    /// # Errors
    ///
    /// Returns [`EcoRouteError`] when validation fails, a place cannot be
    /// resolved, the directions credential is rejected, or no profile
    /// produced a route.
    #[instrument(skip(self))]
    pub async fn compare(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<RouteOption>, EcoRouteError> {
        let origin = origin.trim();
        let destination = destination.trim();
        if origin.is_empty() || destination.is_empty() {
            return Err(EcoRouteError::Validation(
                "origin and destination must not be empty".to_string(),
            ));
        }

        // The two lookups have no dependency on each other
        let (from, to) = tokio::join!(
            self.geocoding.geocode(origin),
            self.geocoding.geocode(destination)
        );
        let from = from.map_err(|err| {
            warn!(place = origin, %err, "Geocoding failed");
            EcoRouteError::LocationNotFound {
                place: origin.to_string(),
            }
        })?;
        let to = to.map_err(|err| {
            warn!(place = destination, %err, "Geocoding failed");
            EcoRouteError::LocationNotFound {
                place: destination.to_string(),
            }
        })?;

        let mut options = Vec::new();

        // Driving goes first: an auth rejection here is fatal and the other
        // profiles would fail identically, so they are never issued.
        match self
            .directions
            .directions(from, to, TravelProfile::Driving)
            .await
        {
            Ok(leg) => push_car_options(&mut options, leg),
            Err(DirectionsFailure::Unauthorized(msg)) => {
                return Err(EcoRouteError::ServiceUnauthorized(msg));
            },
            Err(err) => {
                warn!(profile = %TravelProfile::Driving, %err, "Directions failed, skipping car options");
            },
        }

        let (cycling, walking) = tokio::join!(
            self.directions.directions(from, to, TravelProfile::Cycling),
            self.directions.directions(from, to, TravelProfile::Walking)
        );

        // Auth failures stay local from here on; some providers scope
        // credentials per profile.
        match cycling {
            Ok(leg) => {
                let raw_km = leg.distance_m / 1000.0;
                options.push(RouteOption {
                    name: BICYCLE.to_string(),
                    distance_km: round_to_tenth(raw_km),
                    duration_min: round_to_minutes(leg.duration_s),
                    co2_kg: 0.0,
                    mode: TransportMode::Bike,
                    recommended: raw_km < BIKE_RECOMMEND_KM,
                });
            },
            Err(err) => {
                warn!(profile = %TravelProfile::Cycling, %err, "Directions failed, skipping bicycle option");
            },
        }

        match walking {
            Ok(leg) => {
                let raw_km = leg.distance_m / 1000.0;
                if raw_km < WALK_INCLUDE_KM {
                    options.push(RouteOption {
                        name: WALK.to_string(),
                        distance_km: round_to_tenth(raw_km),
                        duration_min: round_to_minutes(leg.duration_s),
                        co2_kg: 0.0,
                        mode: TransportMode::Walk,
                        recommended: raw_km < WALK_RECOMMEND_KM,
                    });
                }
            },
            Err(err) => {
                warn!(profile = %TravelProfile::Walking, %err, "Directions failed, skipping walk option");
            },
        }

        if let Some(transit) = derive_transit(&options) {
            options.push(transit);
        }

        if options.is_empty() {
            return Err(EcoRouteError::NoRouteAvailable);
        }

        ensure_recommended(&mut options);
        Ok(options)
    }
}

/// Emit the gas and EV options for one driving leg
///
/// Both share the leg's distance and duration; only the emission figure
/// differs. The EV option is the default recommendation, pending the
/// fixup in [`ensure_recommended`].
fn push_car_options(options: &mut Vec<RouteOption>, leg: RouteLeg) {
    let raw_km = leg.distance_m / 1000.0;
    let distance_km = round_to_tenth(raw_km);
    let duration_min = round_to_minutes(leg.duration_s);

    options.push(RouteOption {
        name: DRIVE_GAS.to_string(),
        distance_km,
        duration_min,
        co2_kg: EmissionFactor::CarGas.co2_kg(raw_km),
        mode: TransportMode::Car,
        recommended: false,
    });
    options.push(RouteOption {
        name: DRIVE_EV.to_string(),
        distance_km,
        duration_min,
        co2_kg: EmissionFactor::CarEv.co2_kg(raw_km),
        mode: TransportMode::Car,
        recommended: true,
    });
}

/// Estimate a public-transit option from the car route, if one exists
///
/// Pure function over the accumulated list: reuses the car distance, scales
/// its duration, and applies the transit emission factor.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn derive_transit(options: &[RouteOption]) -> Option<RouteOption> {
    let car = options.iter().find(|o| o.mode == TransportMode::Car)?;
    Some(RouteOption {
        name: PUBLIC_TRANSIT.to_string(),
        distance_km: car.distance_km,
        duration_min: (f64::from(car.duration_min) * TRANSIT_DURATION_FACTOR).round() as u32,
        co2_kg: EmissionFactor::PublicTransit.co2_kg(car.distance_km),
        mode: TransportMode::PublicTransit,
        recommended: car.distance_km > TRANSIT_RECOMMEND_KM,
    })
}

/// Flag the lowest-CO₂ option when no step recommended anything
///
/// Ties break on first occurrence in construction order. Options already
/// flagged by their own step are left alone, so a response may carry more
/// than one recommendation.
fn ensure_recommended(options: &mut [RouteOption]) {
    if options.is_empty() || options.iter().any(|o| o.recommended) {
        return;
    }
    let mut best = 0;
    for (idx, option) in options.iter().enumerate().skip(1) {
        if option.co2_kg < options[best].co2_kg {
            best = idx;
        }
    }
    options[best].recommended = true;
}
