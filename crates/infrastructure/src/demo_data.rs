//! Seeded demo dataset
//!
//! A month of realistic household consumption figures plus the curated tip
//! catalogue. New stores are seeded with these so the dashboard has data
//! before the first manual entry.

use chrono::NaiveDate;
use domain::{SustainabilityTip, TipImpact, UsageRecord};
use uuid::Uuid;

/// (day of January 2024, energy kWh, water liters, CO₂ kg)
const CONSUMPTION: [(u32, f64, f64, f64); 30] = [
    (1, 45.2, 250.0, 18.5),
    (2, 42.8, 235.0, 17.2),
    (3, 48.5, 270.0, 19.8),
    (4, 41.3, 220.0, 16.5),
    (5, 39.7, 215.0, 15.9),
    (6, 52.1, 290.0, 21.3),
    (7, 50.4, 280.0, 20.6),
    (8, 44.6, 245.0, 18.1),
    (9, 43.2, 240.0, 17.6),
    (10, 46.8, 255.0, 19.1),
    (11, 40.5, 225.0, 16.4),
    (12, 38.9, 210.0, 15.6),
    (13, 47.3, 260.0, 19.3),
    (14, 49.7, 275.0, 20.3),
    (15, 45.8, 250.0, 18.7),
    (16, 42.4, 230.0, 17.3),
    (17, 44.1, 242.0, 18.0),
    (18, 41.8, 228.0, 17.0),
    (19, 39.2, 212.0, 15.8),
    (20, 51.6, 285.0, 21.1),
    (21, 48.9, 268.0, 20.0),
    (22, 43.7, 238.0, 17.8),
    (23, 42.1, 232.0, 17.2),
    (24, 46.2, 252.0, 18.9),
    (25, 40.8, 223.0, 16.6),
    (26, 38.4, 208.0, 15.5),
    (27, 50.2, 278.0, 20.5),
    (28, 49.1, 272.0, 20.1),
    (29, 44.9, 246.0, 18.3),
    (30, 43.5, 240.0, 17.7),
];

/// A month of demo usage records for one user
#[must_use]
pub fn demo_usage_records(user_id: &str) -> Vec<UsageRecord> {
    CONSUMPTION
        .iter()
        .filter_map(|&(day, energy_kwh, water_liters, co2_kg)| {
            NaiveDate::from_ymd_opt(2024, 1, day).map(|date| UsageRecord {
                id: Uuid::new_v4(),
                user_id: user_id.to_string(),
                date,
                energy_kwh,
                water_liters: Some(water_liters),
                co2_kg: Some(co2_kg),
            })
        })
        .collect()
}

/// The curated sustainability tip catalogue
#[must_use]
pub fn sustainability_tips() -> Vec<SustainabilityTip> {
    let tips: [(&str, &str, &str, TipImpact); 10] = [
        (
            "1",
            "Energy",
            "Switch to LED bulbs to reduce energy consumption by up to 75% compared to incandescent bulbs.",
            TipImpact::High,
        ),
        (
            "2",
            "Water",
            "Fix leaky faucets immediately - a dripping faucet can waste up to 3,000 gallons per year.",
            TipImpact::Medium,
        ),
        (
            "3",
            "Transportation",
            "Carpool or use public transit once a week to reduce your carbon footprint by 20%.",
            TipImpact::High,
        ),
        (
            "4",
            "Energy",
            "Unplug electronics when not in use - phantom power can account for 10% of home energy use.",
            TipImpact::Medium,
        ),
        (
            "5",
            "Water",
            "Take shorter showers - reducing shower time by 2 minutes saves 10 gallons of water.",
            TipImpact::Medium,
        ),
        (
            "6",
            "Recycling",
            "Compost food waste to reduce landfill methane emissions and create nutrient-rich soil.",
            TipImpact::High,
        ),
        (
            "7",
            "Energy",
            "Use a programmable thermostat to automatically adjust temperature and save 10-30% on heating/cooling.",
            TipImpact::High,
        ),
        (
            "8",
            "Transportation",
            "Maintain proper tire pressure to improve fuel efficiency by up to 3%.",
            TipImpact::Low,
        ),
        (
            "9",
            "Water",
            "Install low-flow showerheads to reduce water usage by 40% without sacrificing pressure.",
            TipImpact::High,
        ),
        (
            "10",
            "Energy",
            "Air dry dishes instead of using the dishwasher's drying cycle to save energy.",
            TipImpact::Low,
        ),
    ];

    tips.into_iter()
        .map(|(id, category, tip, impact)| SustainabilityTip {
            id: id.to_string(),
            category: category.to_string(),
            tip: tip.to_string(),
            impact,
        })
        .collect()
}
