//! Building Classifications
//!
//! Building types and quality tiers used to key cost guide lookups.
//! Each `(BuildingType, Tier)` pair selects one all-in cost range and a
//! set of engineering cost percentages from the catalog.

use serde::{Deserialize, Serialize};

use crate::errors::{EstimateError, EstimateResult};

/// Building classification per the firm's cost guide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingType {
    /// Entry-level residential construction
    #[serde(rename = "Budget Residential")]
    BudgetResidential,
    /// Standard single-family residential, mid-range finishes
    #[serde(rename = "Mid-Range Standard Residential")]
    MidRangeStandardResidential,
    /// Custom single-family residential, high-end finishes
    #[serde(rename = "High-End Custom Residential")]
    HighEndCustomResidential,
    /// Multi-family residential (townhomes, small apartment buildings)
    #[serde(rename = "Multi-Family Residential")]
    MultiFamilyResidential,
}

impl BuildingType {
    /// All building types for UI selection
    pub const ALL: [BuildingType; 4] = [
        BuildingType::BudgetResidential,
        BuildingType::MidRangeStandardResidential,
        BuildingType::HighEndCustomResidential,
        BuildingType::MultiFamilyResidential,
    ];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            BuildingType::BudgetResidential => "Budget Residential",
            BuildingType::MidRangeStandardResidential => "Mid-Range Standard Residential",
            BuildingType::HighEndCustomResidential => "High-End Custom Residential",
            BuildingType::MultiFamilyResidential => "Multi-Family Residential",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> EstimateResult<Self> {
        match s.to_uppercase().replace([' ', '_'], "-").as_str() {
            "BUDGET-RESIDENTIAL" | "BUDGET" => Ok(BuildingType::BudgetResidential),
            "MID-RANGE-STANDARD-RESIDENTIAL" | "MID-RANGE" | "MIDRANGE" | "STANDARD" => {
                Ok(BuildingType::MidRangeStandardResidential)
            }
            "HIGH-END-CUSTOM-RESIDENTIAL" | "HIGH-END" | "HIGHEND" | "CUSTOM" => {
                Ok(BuildingType::HighEndCustomResidential)
            }
            "MULTI-FAMILY-RESIDENTIAL" | "MULTI-FAMILY" | "MULTIFAMILY" => {
                Ok(BuildingType::MultiFamilyResidential)
            }
            _ => Err(EstimateError::invalid_input(
                "building_type",
                s,
                "Unknown building type",
            )),
        }
    }
}

impl std::fmt::Display for BuildingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Quality/cost tier within a building type.
///
/// Serializes as a plain integer so project files read naturally
/// (`"tier": 1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Tier {
    /// Standard quality level
    One,
    /// Upgraded quality level
    Two,
    /// Premium quality level
    Three,
}

impl Tier {
    /// All tiers for UI selection
    pub const ALL: [Tier; 3] = [Tier::One, Tier::Two, Tier::Three];

    /// Numeric tier value used in catalog keys and serialized files
    pub fn as_u8(&self) -> u8 {
        match self {
            Tier::One => 1,
            Tier::Two => 2,
            Tier::Three => 3,
        }
    }

    /// Parse from a numeric tier value
    pub fn from_u8(value: u8) -> EstimateResult<Self> {
        match value {
            1 => Ok(Tier::One),
            2 => Ok(Tier::Two),
            3 => Ok(Tier::Three),
            _ => Err(EstimateError::invalid_input(
                "tier",
                value.to_string(),
                "Tier must be 1, 2, or 3",
            )),
        }
    }
}

impl Default for Tier {
    fn default() -> Self {
        Tier::One
    }
}

impl TryFrom<u8> for Tier {
    type Error = EstimateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Tier::from_u8(value)
    }
}

impl From<Tier> for u8 {
    fn from(tier: Tier) -> u8 {
        tier.as_u8()
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tier {}", self.as_u8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_building_type_parsing() {
        assert_eq!(
            BuildingType::from_str_flexible("mid-range standard residential").unwrap(),
            BuildingType::MidRangeStandardResidential
        );
        assert_eq!(
            BuildingType::from_str_flexible("high-end").unwrap(),
            BuildingType::HighEndCustomResidential
        );
        assert!(BuildingType::from_str_flexible("warehouse").is_err());
    }

    #[test]
    fn test_building_type_serialization() {
        let bt = BuildingType::MidRangeStandardResidential;
        let json = serde_json::to_string(&bt).unwrap();
        assert_eq!(json, "\"Mid-Range Standard Residential\"");

        let roundtrip: BuildingType = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, bt);
    }

    #[test]
    fn test_tier_serialization() {
        let tier = Tier::Two;
        let json = serde_json::to_string(&tier).unwrap();
        assert_eq!(json, "2");

        let roundtrip: Tier = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, Tier::Two);
    }

    #[test]
    fn test_tier_rejects_out_of_range() {
        let result: Result<Tier, _> = serde_json::from_str("9");
        assert!(result.is_err());
    }

    #[test]
    fn test_tier_display() {
        assert_eq!(Tier::One.to_string(), "Tier 1");
        assert_eq!(Tier::from_u8(3).unwrap(), Tier::Three);
    }
}
