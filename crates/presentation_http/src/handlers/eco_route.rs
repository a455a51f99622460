//! Eco route handlers

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use domain::RouteOption;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Route comparison request body
#[derive(Debug, Deserialize)]
pub struct EcoRouteRequest {
    /// Free-text origin place name
    pub origin: String,
    /// Free-text destination place name
    pub destination: String,
}

/// Route comparison response body
#[derive(Debug, Serialize)]
pub struct EcoRouteResponse {
    pub origin: String,
    pub destination: String,
    /// Comparable options in construction order: car, bike, walk, transit
    pub routes: Vec<RouteOption>,
    pub timestamp: DateTime<Utc>,
}

/// Compute comparable transport options between two places
#[instrument(skip(state, request), fields(origin = %request.origin, destination = %request.destination))]
pub async fn compare_routes(
    State(state): State<AppState>,
    Json(request): Json<EcoRouteRequest>,
) -> Result<Json<EcoRouteResponse>, ApiError> {
    let routes = state
        .eco_route_service
        .compare(&request.origin, &request.destination)
        .await?;

    Ok(Json(EcoRouteResponse {
        origin: request.origin,
        destination: request.destination,
        routes,
        timestamp: Utc::now(),
    }))
}
