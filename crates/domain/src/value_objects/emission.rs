//! CO₂ emission factors and display rounding
//!
//! The factor table is process-wide constant configuration. Values are
//! kg CO₂ per km, averaged per vehicle class (grid average for EVs).

/// Emission factor for a vehicle class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmissionFactor {
    /// Average gasoline car
    CarGas,
    /// Average diesel car
    CarDiesel,
    /// Electric vehicle (grid average)
    CarEv,
    /// Bus/train average
    PublicTransit,
    /// Zero emissions
    Bike,
    /// Zero emissions
    Walk,
}

impl EmissionFactor {
    /// Emission factor in kg CO₂ per km
    #[must_use]
    pub const fn kg_per_km(self) -> f64 {
        match self {
            Self::CarGas => 0.192,
            Self::CarDiesel => 0.171,
            Self::CarEv => 0.053,
            Self::PublicTransit => 0.041,
            Self::Bike | Self::Walk => 0.0,
        }
    }

    /// CO₂ emitted over a distance, rounded to one decimal for display
    #[must_use]
    pub fn co2_kg(self, distance_km: f64) -> f64 {
        round_to_tenth(distance_km * self.kg_per_km())
    }
}

/// Round a value to one decimal place
///
/// Rounding is half-away-from-zero, so repeated rounding of the same input
/// is deterministic.
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round a duration in seconds to whole minutes
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn round_to_minutes(duration_secs: f64) -> u32 {
    (duration_secs.max(0.0) / 60.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factor_table_values() {
        assert!((EmissionFactor::CarGas.kg_per_km() - 0.192).abs() < f64::EPSILON);
        assert!((EmissionFactor::CarDiesel.kg_per_km() - 0.171).abs() < f64::EPSILON);
        assert!((EmissionFactor::CarEv.kg_per_km() - 0.053).abs() < f64::EPSILON);
        assert!((EmissionFactor::PublicTransit.kg_per_km() - 0.041).abs() < f64::EPSILON);
        assert!(EmissionFactor::Bike.kg_per_km().abs() < f64::EPSILON);
        assert!(EmissionFactor::Walk.kg_per_km().abs() < f64::EPSILON);
    }

    #[test]
    fn co2_for_346_km() {
        // New York → Boston driving distance
        assert!((EmissionFactor::CarGas.co2_kg(346.0) - 66.4).abs() < f64::EPSILON);
        assert!((EmissionFactor::CarEv.co2_kg(346.0) - 18.3).abs() < f64::EPSILON);
        assert!((EmissionFactor::PublicTransit.co2_kg(346.0) - 14.2).abs() < f64::EPSILON);
    }

    #[test]
    fn gas_emits_more_than_ev() {
        for km in [0.5, 1.0, 12.3, 346.0] {
            assert!(EmissionFactor::CarGas.co2_kg(km) > EmissionFactor::CarEv.co2_kg(km));
        }
    }

    #[test]
    fn zero_distance_is_zero_co2() {
        assert!(EmissionFactor::CarGas.co2_kg(0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn round_to_tenth_half_up() {
        assert!((round_to_tenth(66.432) - 66.4).abs() < f64::EPSILON);
        assert!((round_to_tenth(18.338) - 18.3).abs() < f64::EPSILON);
        assert!((round_to_tenth(14.186) - 14.2).abs() < f64::EPSILON);
        assert!((round_to_tenth(0.05) - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn round_to_minutes_from_seconds() {
        assert_eq!(round_to_minutes(14_400.0), 240);
        assert_eq!(round_to_minutes(89.9), 1);
        assert_eq!(round_to_minutes(30.0), 1);
        assert_eq!(round_to_minutes(29.0), 0);
        assert_eq!(round_to_minutes(-5.0), 0);
    }
}
