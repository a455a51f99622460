//! Route history handlers
//!
//! Callers log which option they picked after a comparison; the comparison
//! pipeline itself never writes here.

use axum::{
    Json,
    extract::{Path, State},
};
use domain::{NewRouteLog, RouteLog};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Route history for one user, oldest first
#[instrument(skip(state))]
pub async fn route_history(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<RouteLog>>, ApiError> {
    let logs = state.route_log_store.logs_for(&user_id).await?;
    Ok(Json(logs))
}

/// Record a chosen route
#[instrument(skip(state, log), fields(user_id = %log.user_id))]
pub async fn add_route_log(
    State(state): State<AppState>,
    Json(log): Json<NewRouteLog>,
) -> Result<Json<RouteLog>, ApiError> {
    if log.origin.trim().is_empty() || log.destination.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "origin and destination must not be empty".to_string(),
        ));
    }
    let log = state.route_log_store.add(log).await?;
    Ok(Json(log))
}
