//! Engineering Cost Percentages
//!
//! Consulting engineering costs expressed as a percentage of the working
//! budget, one row per discipline category. The low/high columns bound the
//! typical range observed across comparable projects; the average column
//! is the figure carried into discipline allocations and consultant fees.

use serde::{Deserialize, Serialize};

use crate::costs::building::{BuildingType, Tier};
use crate::errors::{EstimateError, EstimateResult};
use crate::units::{Dollars, Percent};

/// Consulting engineering discipline categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineeringCategory {
    /// Civil and site engineering (grading, drainage, utilities)
    #[serde(rename = "Civil & Site")]
    CivilSite,
    /// Structural engineering
    Structural,
    /// Mechanical (HVAC) engineering
    Mechanical,
    /// Electrical engineering
    Electrical,
    /// Plumbing engineering
    Plumbing,
}

impl EngineeringCategory {
    /// All categories for iteration and UI selection
    pub const ALL: [EngineeringCategory; 5] = [
        EngineeringCategory::CivilSite,
        EngineeringCategory::Structural,
        EngineeringCategory::Mechanical,
        EngineeringCategory::Electrical,
        EngineeringCategory::Plumbing,
    ];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            EngineeringCategory::CivilSite => "Civil & Site",
            EngineeringCategory::Structural => "Structural",
            EngineeringCategory::Mechanical => "Mechanical",
            EngineeringCategory::Electrical => "Electrical",
            EngineeringCategory::Plumbing => "Plumbing",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> EstimateResult<Self> {
        match s.to_uppercase().replace([' ', '&', '-', '_'], "").as_str() {
            "CIVILSITE" | "CIVIL" | "SITE" => Ok(EngineeringCategory::CivilSite),
            "STRUCTURAL" => Ok(EngineeringCategory::Structural),
            "MECHANICAL" | "HVAC" => Ok(EngineeringCategory::Mechanical),
            "ELECTRICAL" => Ok(EngineeringCategory::Electrical),
            "PLUMBING" => Ok(EngineeringCategory::Plumbing),
            _ => Err(EstimateError::invalid_input(
                "category",
                s,
                "Unknown engineering category",
            )),
        }
    }
}

impl std::fmt::Display for EngineeringCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One engineering cost row, keyed by `(building_type, tier, category)`.
///
/// Percentages are on the 0-100 scale and apply against the working
/// budget. Rows are validated once when a catalog is loaded; the
/// calculator trusts them as-is.
///
/// ## JSON Example
///
/// ```json
/// {
///   "building_type": "Mid-Range Standard Residential",
///   "tier": 1,
///   "category": "Structural",
///   "percent_low": 2.5,
///   "percent_avg": 3.0,
///   "percent_high": 3.5
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineeringCost {
    /// Building classification this row applies to
    pub building_type: BuildingType,
    /// Quality tier this row applies to
    pub tier: Tier,
    /// Engineering discipline
    pub category: EngineeringCategory,
    /// Low end of the typical percentage range
    pub percent_low: f64,
    /// Average percentage, used for discipline allocations
    pub percent_avg: f64,
    /// High end of the typical percentage range
    pub percent_high: f64,
}

impl EngineeringCost {
    /// Validate row figures at the catalog load boundary.
    pub fn validate(&self) -> EstimateResult<()> {
        let entry = format!("{} {} {}", self.building_type, self.tier, self.category);
        for (name, value) in [
            ("percent_low", self.percent_low),
            ("percent_avg", self.percent_avg),
            ("percent_high", self.percent_high),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(EstimateError::invalid_catalog_data(
                    entry.as_str(),
                    format!("{} must be a non-negative finite number", name),
                ));
            }
        }
        if self.percent_low > self.percent_high {
            return Err(EstimateError::invalid_catalog_data(
                entry.as_str(),
                "percent_low exceeds percent_high",
            ));
        }
        Ok(())
    }

    /// Average percentage as a typed unit
    pub fn percent_avg(&self) -> Percent {
        Percent(self.percent_avg)
    }

    /// Allocate this discipline's average share of a working budget
    pub fn allocate(&self, working_budget: Dollars) -> Dollars {
        self.percent_avg().of(working_budget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn structural_row() -> EngineeringCost {
        EngineeringCost {
            building_type: BuildingType::MidRangeStandardResidential,
            tier: Tier::One,
            category: EngineeringCategory::Structural,
            percent_low: 2.5,
            percent_avg: 3.0,
            percent_high: 3.5,
        }
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!(
            EngineeringCategory::from_str_flexible("civil & site").unwrap(),
            EngineeringCategory::CivilSite
        );
        assert_eq!(
            EngineeringCategory::from_str_flexible("HVAC").unwrap(),
            EngineeringCategory::Mechanical
        );
        assert!(EngineeringCategory::from_str_flexible("acoustical").is_err());
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&EngineeringCategory::CivilSite).unwrap();
        assert_eq!(json, "\"Civil & Site\"");
    }

    #[test]
    fn test_allocation() {
        let row = structural_row();
        let allocated = row.allocate(Dollars(1_676_170.0));
        assert!((allocated.0 - 50_285.1).abs() < 0.01);
    }

    #[test]
    fn test_validate_accepts_good_row() {
        assert!(structural_row().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let mut row = structural_row();
        row.percent_low = 5.0;
        assert!(row.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let mut row = structural_row();
        row.percent_avg = f64::NAN;
        assert!(row.validate().is_err());
    }

    #[test]
    fn test_row_serialization_roundtrip() {
        let row = structural_row();
        let json = serde_json::to_string(&row).unwrap();
        let roundtrip: EngineeringCost = serde_json::from_str(&json).unwrap();
        assert_eq!(row, roundtrip);
    }
}
