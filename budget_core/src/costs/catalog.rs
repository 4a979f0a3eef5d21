//! Cost Catalog
//!
//! The catalog resolves `(building_type, tier)` to at most one cost range
//! row and a list of engineering cost rows. A built-in cost guide covers
//! every supported building type; custom catalogs load from JSON and are
//! validated once at the boundary, so downstream calculations never
//! re-check figures.
//!
//! ## Example
//!
//! ```rust
//! use budget_core::costs::{BuildingType, CostCatalog, Tier};
//!
//! let catalog = CostCatalog::builtin();
//! let range = catalog
//!     .cost_range(BuildingType::MidRangeStandardResidential, Tier::One)
//!     .unwrap();
//! assert_eq!(range.allin_min, 300.0);
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::costs::building::{BuildingType, Tier};
use crate::costs::engineering::{EngineeringCategory, EngineeringCost};
use crate::costs::ranges::BuildingCostRange;
use crate::errors::{EstimateError, EstimateResult};

/// Built-in cost guide, constructed once on first use
static BUILTIN: Lazy<CostCatalog> = Lazy::new(builtin_catalog);

/// A set of cost ranges and engineering percentages keyed by building
/// type and tier.
///
/// Lookup contract: at most one `BuildingCostRange` per key (enforced by
/// [`CostCatalog::validate`]); engineering lookups return an empty list
/// for unmatched keys rather than an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostCatalog {
    /// Catalog label (e.g., cost guide edition)
    pub name: String,

    /// All-in cost ranges with discipline shares
    pub cost_ranges: Vec<BuildingCostRange>,

    /// Engineering percentages per discipline category
    pub engineering_costs: Vec<EngineeringCost>,
}

impl CostCatalog {
    /// The built-in cost guide shipped with the library.
    pub fn builtin() -> &'static CostCatalog {
        &BUILTIN
    }

    /// Resolve the single cost range for a building type and tier.
    ///
    /// A miss means the catalog carries no data for the pair; callers
    /// surface this as "no cost data for this building type/tier".
    pub fn cost_range(&self, building_type: BuildingType, tier: Tier) -> EstimateResult<&BuildingCostRange> {
        self.cost_ranges
            .iter()
            .find(|row| row.building_type == building_type && row.tier == tier)
            .ok_or_else(|| {
                EstimateError::cost_data_not_found(building_type.display_name(), tier.as_u8())
            })
    }

    /// All engineering cost rows for a building type and tier.
    ///
    /// Returns an empty list when no categories match.
    pub fn engineering_costs(&self, building_type: BuildingType, tier: Tier) -> Vec<&EngineeringCost> {
        self.engineering_costs
            .iter()
            .filter(|row| row.building_type == building_type && row.tier == tier)
            .collect()
    }

    /// Tiers with cost data for a building type, in ascending order.
    pub fn available_tiers(&self, building_type: BuildingType) -> Vec<Tier> {
        let mut tiers: Vec<Tier> = self
            .cost_ranges
            .iter()
            .filter(|row| row.building_type == building_type)
            .map(|row| row.tier)
            .collect();
        tiers.sort_by_key(|t| t.as_u8());
        tiers
    }

    /// Validate every row and the uniqueness of lookup keys.
    ///
    /// Called when loading a catalog from external data. The built-in
    /// catalog is constructed to satisfy these checks.
    pub fn validate(&self) -> EstimateResult<()> {
        let mut range_keys = HashSet::new();
        for row in &self.cost_ranges {
            row.validate()?;
            if !range_keys.insert((row.building_type, row.tier)) {
                return Err(EstimateError::invalid_catalog_data(
                    format!("{} {}", row.building_type, row.tier),
                    "duplicate cost range row",
                ));
            }
        }

        let mut engineering_keys = HashSet::new();
        for row in &self.engineering_costs {
            row.validate()?;
            if !engineering_keys.insert((row.building_type, row.tier, row.category)) {
                return Err(EstimateError::invalid_catalog_data(
                    format!("{} {} {}", row.building_type, row.tier, row.category),
                    "duplicate engineering cost row",
                ));
            }
        }

        Ok(())
    }

    /// Parse and validate a catalog from a JSON string.
    pub fn from_json_str(json: &str) -> EstimateResult<CostCatalog> {
        let catalog: CostCatalog =
            serde_json::from_str(json).map_err(|e| EstimateError::SerializationError {
                reason: e.to_string(),
            })?;
        catalog.validate()?;
        Ok(catalog)
    }
}

/// Shorthand for building a cost range row in the builtin table
fn range(
    building_type: BuildingType,
    tier: Tier,
    allin_min: f64,
    allin_max: f64,
    arch_share: f64,
    interior_share: f64,
    landscape_share: f64,
) -> BuildingCostRange {
    BuildingCostRange {
        building_type,
        tier,
        allin_min,
        allin_max,
        arch_share,
        interior_share,
        landscape_share,
    }
}

/// Typical engineering percentages by discipline (low, avg, high).
///
/// Applied uniformly across building types and tiers in the builtin
/// guide; a custom catalog can carry per-key figures.
const ENGINEERING_PERCENTS: [(EngineeringCategory, f64, f64, f64); 5] = [
    (EngineeringCategory::CivilSite, 1.5, 2.0, 2.5),
    (EngineeringCategory::Structural, 2.5, 3.0, 3.5),
    (EngineeringCategory::Mechanical, 4.0, 5.0, 6.0),
    (EngineeringCategory::Electrical, 3.0, 3.5, 4.0),
    (EngineeringCategory::Plumbing, 2.0, 2.5, 3.0),
];

fn builtin_catalog() -> CostCatalog {
    use BuildingType::*;
    use Tier::*;

    let cost_ranges = vec![
        range(BudgetResidential, One, 220.0, 250.0, 0.70, 0.20, 0.10),
        range(BudgetResidential, Two, 250.0, 280.0, 0.68, 0.22, 0.10),
        range(MidRangeStandardResidential, One, 300.0, 320.0, 0.66, 0.22, 0.12),
        range(MidRangeStandardResidential, Two, 340.0, 380.0, 0.64, 0.24, 0.12),
        range(MidRangeStandardResidential, Three, 390.0, 450.0, 0.62, 0.26, 0.12),
        range(HighEndCustomResidential, One, 450.0, 520.0, 0.60, 0.28, 0.12),
        range(HighEndCustomResidential, Two, 520.0, 600.0, 0.58, 0.30, 0.12),
        range(HighEndCustomResidential, Three, 600.0, 750.0, 0.55, 0.32, 0.13),
        range(MultiFamilyResidential, One, 260.0, 300.0, 0.68, 0.24, 0.08),
        range(MultiFamilyResidential, Two, 300.0, 350.0, 0.66, 0.26, 0.08),
    ];

    // One engineering row per discipline for every (type, tier) pair
    // that has a cost range.
    let engineering_costs = cost_ranges
        .iter()
        .flat_map(|row| {
            ENGINEERING_PERCENTS
                .iter()
                .map(move |&(category, percent_low, percent_avg, percent_high)| EngineeringCost {
                    building_type: row.building_type,
                    tier: row.tier,
                    category,
                    percent_low,
                    percent_avg,
                    percent_high,
                })
        })
        .collect();

    CostCatalog {
        name: "Proforma Cost Guide 2026".to_string(),
        cost_ranges,
        engineering_costs,
    }
}
