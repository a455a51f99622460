//! Consumption history handlers

use axum::{
    Json,
    extract::{Path, State},
};
use domain::{NewUsageRecord, UsageRecord};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Usage history for one user, oldest first
#[instrument(skip(state))]
pub async fn usage_history(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<UsageRecord>>, ApiError> {
    let records = state.usage_store.records_for(&user_id).await?;
    Ok(Json(records))
}

/// Append a consumption record
#[instrument(skip(state, record), fields(user_id = %record.user_id))]
pub async fn add_usage_record(
    State(state): State<AppState>,
    Json(record): Json<NewUsageRecord>,
) -> Result<Json<UsageRecord>, ApiError> {
    if record.energy_kwh < 0.0 {
        return Err(ApiError::BadRequest(
            "energy_kwh must not be negative".to_string(),
        ));
    }
    let record = state.usage_store.add(record).await?;
    Ok(Json(record))
}
