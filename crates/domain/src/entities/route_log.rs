//! Route log entity
//!
//! Records which option a user picked for a past route query. Written by
//! callers after a route comparison; the comparison pipeline itself never
//! reads or writes these.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted record of a chosen route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLog {
    pub id: Uuid,
    pub user_id: String,
    pub origin: String,
    pub destination: String,
    /// Name of the option the user picked, e.g. "Bicycle"
    pub picked_route: String,
    /// CO₂ saved versus the gas-car baseline, in kg
    pub saved_co2_kg: f64,
    pub distance_km: f64,
    pub duration_min: u32,
    pub timestamp: DateTime<Utc>,
}

/// A route log as submitted by a caller, before id and timestamp are assigned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRouteLog {
    pub user_id: String,
    pub origin: String,
    pub destination: String,
    pub picked_route: String,
    pub saved_co2_kg: f64,
    pub distance_km: f64,
    pub duration_min: u32,
}

impl RouteLog {
    /// Materialize a submitted log with a fresh id and the given timestamp
    #[must_use]
    pub fn from_new(new: NewRouteLog, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: new.user_id,
            origin: new.origin,
            destination: new.destination,
            picked_route: new.picked_route,
            saved_co2_kg: new.saved_co2_kg,
            distance_km: new.distance_km,
            duration_min: new.duration_min,
            timestamp,
        }
    }
}
