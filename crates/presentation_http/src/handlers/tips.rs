//! Sustainability tip handlers

use axum::{Json, extract::State};
use domain::SustainabilityTip;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// The daily tip list
#[instrument(skip(state))]
pub async fn daily_tips(
    State(state): State<AppState>,
) -> Result<Json<Vec<SustainabilityTip>>, ApiError> {
    let tips = state.tips.daily_tips().await?;
    Ok(Json(tips))
}
