//! Energy prediction handlers

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Prediction request body
#[derive(Debug, Deserialize)]
pub struct PredictionRequest {
    /// Forecast temperature in °C
    pub temperature: f64,
    /// Day of month (1-31)
    pub day: u32,
    /// Previous day's usage in kWh
    pub usage_prev: f64,
}

/// Prediction response body
#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub predicted_usage: f64,
    pub confidence: f64,
    pub timestamp: DateTime<Utc>,
}

/// Predict tomorrow's energy usage
#[instrument(skip(state))]
pub async fn predict_energy(
    State(state): State<AppState>,
    Json(request): Json<PredictionRequest>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let prediction = state
        .prediction_service
        .predict(request.temperature, request.day, request.usage_prev)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    Ok(Json(PredictionResponse {
        predicted_usage: prediction.predicted_usage,
        confidence: prediction.confidence,
        timestamp: Utc::now(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_deserializes() {
        let json = r#"{"temperature": 18.5, "day": 12, "usage_prev": 42.8}"#;
        let request: PredictionRequest = serde_json::from_str(json).expect("deserialize");
        assert!((request.temperature - 18.5).abs() < f64::EPSILON);
        assert_eq!(request.day, 12);
    }

    #[test]
    fn response_serializes() {
        let response = PredictionResponse {
            predicted_usage: 47.0,
            confidence: 0.92,
            timestamp: Utc::now(),
        };
        let json = serde_json::to_value(&response).expect("serialize");
        assert_eq!(json["predicted_usage"], 47.0);
        assert_eq!(json["confidence"], 0.92);
    }
}
