//! Energy usage prediction service
//!
//! Heuristic next-day prediction from temperature, day of month, and the
//! previous day's usage. Pure computation, no provider calls.

use domain::{DomainError, round_to_tenth};

/// Baseline household draw in kWh, independent of the previous day
const BASELINE_KWH: f64 = 35.0;
/// Weight of the previous day's usage
const TREND_FACTOR: f64 = 0.3;
/// Heating kicks in below this temperature (°C)
const COLD_THRESHOLD: f64 = 10.0;
/// Cooling kicks in above this temperature (°C)
const HOT_THRESHOLD: f64 = 25.0;

/// A predicted energy usage figure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Predicted usage in kWh, rounded to one decimal
    pub predicted_usage: f64,
    /// Fixed model confidence
    pub confidence: f64,
}

/// Heuristic energy usage predictor
#[derive(Debug, Clone, Copy, Default)]
pub struct PredictionService;

impl PredictionService {
    /// Create a new prediction service
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Predict tomorrow's energy usage in kWh
    ///
    /// # Errors
    ///
    /// Returns a validation error when temperature is outside [-50, 60] °C,
    /// day is outside [1, 31], or the previous usage is negative.
    pub fn predict(
        &self,
        temperature: f64,
        day: u32,
        usage_prev: f64,
    ) -> Result<Prediction, DomainError> {
        if !(-50.0..=60.0).contains(&temperature) {
            return Err(DomainError::ValidationError(
                "temperature must be between -50 and 60 °C".to_string(),
            ));
        }
        if !(1..=31).contains(&day) {
            return Err(DomainError::ValidationError(
                "day must be between 1 and 31".to_string(),
            ));
        }
        if usage_prev < 0.0 {
            return Err(DomainError::ValidationError(
                "previous usage must not be negative".to_string(),
            ));
        }

        let temp_factor = if temperature < COLD_THRESHOLD {
            1.3
        } else if temperature > HOT_THRESHOLD {
            1.2
        } else {
            1.0
        };
        // Weekend adjustment
        let day_factor = if day % 7 == 0 || day % 7 == 6 { 0.9 } else { 1.0 };

        let predicted = (usage_prev.mul_add(TREND_FACTOR, BASELINE_KWH)) * temp_factor * day_factor;

        Ok(Prediction {
            predicted_usage: round_to_tenth(predicted),
            confidence: 0.92,
        })
    }
}
