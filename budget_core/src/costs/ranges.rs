//! Building Cost Ranges
//!
//! All-in construction cost ranges ($/ft²) with discipline share splits,
//! one row per `(building_type, tier)`. The arch/interior/landscape shares
//! describe how a total construction budget divides across the three
//! top-level discipline-spend categories and must sum to 1.0.

use serde::{Deserialize, Serialize};

use crate::costs::building::{BuildingType, Tier};
use crate::errors::{EstimateError, EstimateResult};
use crate::units::{DollarsPerSqFt, Share};

/// Tolerance for the share-sum check when validating catalog rows
const SHARE_SUM_TOLERANCE: f64 = 1e-3;

/// One cost range row, keyed by `(building_type, tier)`.
///
/// `allin_min`/`allin_max` are all-in construction costs per square foot.
/// Shares are fractional (0-1) and sum to 1.0; this is enforced when a
/// catalog is loaded from external data, never re-checked per computation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "building_type": "Mid-Range Standard Residential",
///   "tier": 1,
///   "allin_min": 300.0,
///   "allin_max": 320.0,
///   "arch_share": 0.66,
///   "interior_share": 0.22,
///   "landscape_share": 0.12
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildingCostRange {
    /// Building classification this row applies to
    pub building_type: BuildingType,
    /// Quality tier this row applies to
    pub tier: Tier,
    /// Minimum all-in construction cost ($/ft²)
    pub allin_min: f64,
    /// Maximum all-in construction cost ($/ft²)
    pub allin_max: f64,
    /// Shell (architecture) share of total cost
    pub arch_share: f64,
    /// Interior share of total cost
    pub interior_share: f64,
    /// Landscape share of total cost
    pub landscape_share: f64,
}

impl BuildingCostRange {
    /// Validate row figures at the catalog load boundary.
    ///
    /// Checks finiteness, non-negative costs, `allin_min <= allin_max`,
    /// and that the share triple sums to 1.0 within tolerance.
    pub fn validate(&self) -> EstimateResult<()> {
        let entry = format!("{} {}", self.building_type, self.tier);
        for (name, value) in [
            ("allin_min", self.allin_min),
            ("allin_max", self.allin_max),
            ("arch_share", self.arch_share),
            ("interior_share", self.interior_share),
            ("landscape_share", self.landscape_share),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(EstimateError::invalid_catalog_data(
                    entry.as_str(),
                    format!("{} must be a non-negative finite number", name),
                ));
            }
        }
        if self.allin_min > self.allin_max {
            return Err(EstimateError::invalid_catalog_data(
                entry.as_str(),
                "allin_min exceeds allin_max",
            ));
        }
        let share_sum = self.arch_share + self.interior_share + self.landscape_share;
        if (share_sum - 1.0).abs() > SHARE_SUM_TOLERANCE {
            return Err(EstimateError::invalid_catalog_data(
                entry.as_str(),
                format!("discipline shares sum to {:.4}, expected 1.0", share_sum),
            ));
        }
        Ok(())
    }

    /// Minimum unit cost as a typed unit
    pub fn allin_min(&self) -> DollarsPerSqFt {
        DollarsPerSqFt(self.allin_min)
    }

    /// Maximum unit cost as a typed unit
    pub fn allin_max(&self) -> DollarsPerSqFt {
        DollarsPerSqFt(self.allin_max)
    }

    /// Shell share as a typed unit
    pub fn arch_share(&self) -> Share {
        Share(self.arch_share)
    }

    /// Interior share as a typed unit
    pub fn interior_share(&self) -> Share {
        Share(self.interior_share)
    }

    /// Landscape share as a typed unit
    pub fn landscape_share(&self) -> Share {
        Share(self.landscape_share)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mid_range_t1() -> BuildingCostRange {
        BuildingCostRange {
            building_type: BuildingType::MidRangeStandardResidential,
            tier: Tier::One,
            allin_min: 300.0,
            allin_max: 320.0,
            arch_share: 0.66,
            interior_share: 0.22,
            landscape_share: 0.12,
        }
    }

    #[test]
    fn test_validate_accepts_good_row() {
        assert!(mid_range_t1().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_share_sum() {
        let mut row = mid_range_t1();
        row.landscape_share = 0.20;
        let err = row.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CATALOG_DATA");
    }

    #[test]
    fn test_validate_rejects_inverted_costs() {
        let mut row = mid_range_t1();
        row.allin_min = 400.0;
        assert!(row.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_share() {
        let mut row = mid_range_t1();
        row.arch_share = -0.66;
        assert!(row.validate().is_err());
    }

    #[test]
    fn test_typed_accessors() {
        let row = mid_range_t1();
        assert_eq!(row.allin_min().0, 300.0);
        assert_eq!(row.arch_share().0, 0.66);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let row = mid_range_t1();
        let json = serde_json::to_string_pretty(&row).unwrap();
        assert!(json.contains("Mid-Range Standard Residential"));

        let roundtrip: BuildingCostRange = serde_json::from_str(&json).unwrap();
        assert_eq!(row, roundtrip);
    }
}
