//! Sustainability tip entity

use serde::{Deserialize, Serialize};

/// Estimated impact of following a tip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipImpact {
    Low,
    Medium,
    High,
}

/// An actionable sustainability tip shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SustainabilityTip {
    pub id: String,
    pub category: String,
    pub tip: String,
    pub impact: TipImpact,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impact_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TipImpact::High).expect("serialize"),
            r#""high""#
        );
    }

    #[test]
    fn tip_roundtrip() {
        let tip = SustainabilityTip {
            id: "1".to_string(),
            category: "Energy".to_string(),
            tip: "Switch to LED bulbs.".to_string(),
            impact: TipImpact::High,
        };
        let json = serde_json::to_string(&tip).expect("serialize");
        let back: SustainabilityTip = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(tip, back);
    }
}
