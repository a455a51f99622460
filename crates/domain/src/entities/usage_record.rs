//! Usage record entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A daily consumption record for one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub id: Uuid,
    pub user_id: String,
    pub date: NaiveDate,
    pub energy_kwh: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_liters: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub co2_kg: Option<f64>,
}

/// A usage record as submitted by a caller, before an id is assigned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUsageRecord {
    pub user_id: String,
    pub date: NaiveDate,
    pub energy_kwh: f64,
    #[serde(default)]
    pub water_liters: Option<f64>,
    #[serde(default)]
    pub co2_kg: Option<f64>,
}

impl UsageRecord {
    /// Materialize a submitted record with a fresh id
    #[must_use]
    pub fn from_new(new: NewUsageRecord) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: new.user_id,
            date: new.date,
            energy_kwh: new.energy_kwh,
            water_liters: new.water_liters,
            co2_kg: new.co2_kg,
        }
    }
}
