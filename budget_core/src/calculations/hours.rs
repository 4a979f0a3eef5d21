//! # Phase Hours Breakdown
//!
//! Spreads a professional fee across the standard design phases and
//! converts each phase's fee share to staff hours at a blended hourly
//! rate. Phase percentages are a fixed table applied over the fee, in the
//! same shape as the discipline share splits of the budget.
//!
//! ## Example
//!
//! ```rust
//! use budget_core::calculations::hours::distribute_hours;
//!
//! let breakdown = distribute_hours(120_000.0, 150.0).unwrap();
//! assert!((breakdown.total_hours - 800.0).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{EstimateError, EstimateResult};

/// Standard design phases with their share of the total fee (0-100 scale)
const PHASE_SPLITS: [(DesignPhase, f64); 5] = [
    (DesignPhase::SchematicDesign, 15.0),
    (DesignPhase::DesignDevelopment, 20.0),
    (DesignPhase::ConstructionDocuments, 40.0),
    (DesignPhase::Bidding, 5.0),
    (DesignPhase::ConstructionAdministration, 20.0),
];

/// Standard project delivery phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DesignPhase {
    /// Schematic Design
    #[serde(rename = "Schematic Design")]
    SchematicDesign,
    /// Design Development
    #[serde(rename = "Design Development")]
    DesignDevelopment,
    /// Construction Documents
    #[serde(rename = "Construction Documents")]
    ConstructionDocuments,
    /// Bidding and negotiation
    Bidding,
    /// Construction Administration
    #[serde(rename = "Construction Administration")]
    ConstructionAdministration,
}

impl DesignPhase {
    /// All phases in delivery order
    pub const ALL: [DesignPhase; 5] = [
        DesignPhase::SchematicDesign,
        DesignPhase::DesignDevelopment,
        DesignPhase::ConstructionDocuments,
        DesignPhase::Bidding,
        DesignPhase::ConstructionAdministration,
    ];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            DesignPhase::SchematicDesign => "Schematic Design",
            DesignPhase::DesignDevelopment => "Design Development",
            DesignPhase::ConstructionDocuments => "Construction Documents",
            DesignPhase::Bidding => "Bidding",
            DesignPhase::ConstructionAdministration => "Construction Administration",
        }
    }

    /// Standard share of the total fee for this phase (0-100 scale)
    pub fn standard_percent(&self) -> f64 {
        PHASE_SPLITS
            .iter()
            .find(|(phase, _)| phase == self)
            .map(|(_, percent)| *percent)
            .unwrap_or(0.0)
    }
}

impl std::fmt::Display for DesignPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Fee share and hours for one phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseHours {
    /// Delivery phase
    pub phase: DesignPhase,
    /// Phase share of the total fee (0-100 scale)
    pub percent: f64,
    /// Fee allocated to this phase ($)
    pub fee_share: f64,
    /// Staff hours at the blended rate
    pub hours: f64,
}

/// Complete hours breakdown for one fee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoursBreakdown {
    /// Per-phase fee shares and hours, in delivery order
    pub phases: Vec<PhaseHours>,
    /// The fee distributed ($)
    pub total_fee: f64,
    /// Blended hourly rate used ($/hr)
    pub hourly_rate: f64,
    /// Sum of phase hours
    pub total_hours: f64,
}

/// Distribute a fee across the standard phases and convert to hours.
///
/// # Arguments
///
/// * `fee` - Total professional fee to distribute ($)
/// * `hourly_rate` - Blended staff rate ($/hr), must be positive
///
/// # Returns
///
/// * `Ok(HoursBreakdown)` - Per-phase fee shares and hours
/// * `Err(EstimateError)` - Structured error if inputs are invalid
pub fn distribute_hours(fee: f64, hourly_rate: f64) -> EstimateResult<HoursBreakdown> {
    if !fee.is_finite() || fee < 0.0 {
        return Err(EstimateError::invalid_input(
            "fee",
            fee.to_string(),
            "Fee must be a non-negative finite number",
        ));
    }
    if !hourly_rate.is_finite() || hourly_rate <= 0.0 {
        return Err(EstimateError::invalid_input(
            "hourly_rate",
            hourly_rate.to_string(),
            "Hourly rate must be a positive finite number",
        ));
    }

    let phases: Vec<PhaseHours> = PHASE_SPLITS
        .iter()
        .map(|&(phase, percent)| {
            let fee_share = fee * percent / 100.0;
            PhaseHours {
                phase,
                percent,
                fee_share,
                hours: fee_share / hourly_rate,
            }
        })
        .collect();

    let total_hours = phases.iter().map(|line| line.hours).sum();

    Ok(HoursBreakdown {
        phases,
        total_fee: fee,
        hourly_rate,
        total_hours,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_splits_sum_to_100() {
        let sum: f64 = PHASE_SPLITS.iter().map(|(_, pct)| pct).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_fee_shares_reconstruct_fee() {
        let breakdown = distribute_hours(250_000.0, 165.0).unwrap();
        let sum: f64 = breakdown.phases.iter().map(|line| line.fee_share).sum();
        assert!((sum - 250_000.0).abs() < 0.01);
    }

    #[test]
    fn test_hours_arithmetic() {
        let breakdown = distribute_hours(120_000.0, 150.0).unwrap();

        // 120,000 / 150 = 800 hours in total
        assert!((breakdown.total_hours - 800.0).abs() < 0.01);

        // CD carries 40%: 48,000 / 150 = 320 hours
        let cd = breakdown
            .phases
            .iter()
            .find(|line| line.phase == DesignPhase::ConstructionDocuments)
            .unwrap();
        assert!((cd.hours - 320.0).abs() < 0.01);
    }

    #[test]
    fn test_phases_in_delivery_order() {
        let breakdown = distribute_hours(10_000.0, 100.0).unwrap();
        let order: Vec<DesignPhase> = breakdown.phases.iter().map(|line| line.phase).collect();
        assert_eq!(order, DesignPhase::ALL.to_vec());
    }

    #[test]
    fn test_zero_fee() {
        let breakdown = distribute_hours(0.0, 150.0).unwrap();
        assert_eq!(breakdown.total_hours, 0.0);
        assert!(breakdown.phases.iter().all(|line| line.hours == 0.0));
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert!(distribute_hours(-1.0, 150.0).is_err());
        assert!(distribute_hours(f64::NAN, 150.0).is_err());
        assert!(distribute_hours(10_000.0, 0.0).is_err());
        assert!(distribute_hours(10_000.0, -150.0).is_err());
    }

    #[test]
    fn test_phase_serialization() {
        let json = serde_json::to_string(&DesignPhase::SchematicDesign).unwrap();
        assert_eq!(json, "\"Schematic Design\"");
    }

    #[test]
    fn test_breakdown_serialization_roundtrip() {
        let breakdown = distribute_hours(85_000.0, 140.0).unwrap();
        let json = serde_json::to_string_pretty(&breakdown).unwrap();
        let roundtrip: HoursBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(breakdown, roundtrip);
    }
}
