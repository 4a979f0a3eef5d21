//! # Minimum Budget Calculation
//!
//! Derives a complete construction cost breakdown for one project from
//! its floor areas and the matching cost guide rows.
//!
//! ## Assumptions
//!
//! - New and existing floor area carry the same all-in unit cost
//! - Discipline shares in the cost range row sum to 1.0 (validated at the
//!   catalog boundary, trusted here)
//! - The proposed cost is the midpoint of the low/high bounds
//! - Minimum discipline budgets split the working budget, which defaults
//!   to the proposed cost unless the input carries an override
//!
//! ## Example
//!
//! ```rust
//! use budget_core::calculations::budget::{calculate, BudgetInput};
//! use budget_core::costs::{BuildingType, CostCatalog, Tier};
//!
//! let input = BudgetInput {
//!     label: "Hillside Residence".to_string(),
//!     building_type: BuildingType::MidRangeStandardResidential,
//!     tier: Tier::One,
//!     new_area_ft2: 1000.0,
//!     existing_area_ft2: 4407.0,
//!     site_area_m2: 972.98,
//!     working_budget_override: None,
//! };
//!
//! let catalog = CostCatalog::builtin();
//! let range = catalog.cost_range(input.building_type, input.tier).unwrap();
//! let engineering = catalog.engineering_costs(input.building_type, input.tier);
//!
//! let result = calculate(&input, range, &engineering).unwrap();
//! assert_eq!(result.area.total_ft2, 5407.0);
//! assert_eq!(result.total_cost.low, 1_622_100.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::costs::building::{BuildingType, Tier};
use crate::costs::engineering::{EngineeringCategory, EngineeringCost};
use crate::costs::ranges::BuildingCostRange;
use crate::errors::{EstimateError, EstimateResult};
use crate::units::{Dollars, SqFt, SqM};

/// Weight of the high bound in the proposed cost blend.
///
/// 0.5 puts the proposed cost at the midpoint of the low/high range.
const PROPOSED_HIGH_WEIGHT: f64 = 0.5;

/// Input parameters for a budget estimate.
///
/// Floor areas are in square feet to match US cost guides; the site area
/// arrives in square meters from survey data and is converted in the
/// result.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Hillside Residence",
///   "building_type": "Mid-Range Standard Residential",
///   "tier": 1,
///   "new_area_ft2": 1000.0,
///   "existing_area_ft2": 4407.0,
///   "site_area_m2": 972.98
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetInput {
    /// User label for this estimate (e.g., "Hillside Residence")
    pub label: String,

    /// Building classification, used to select cost guide rows
    pub building_type: BuildingType,

    /// Quality tier, used to select cost guide rows
    pub tier: Tier,

    /// New construction floor area (ft²)
    pub new_area_ft2: f64,

    /// Existing/renovated floor area (ft²)
    pub existing_area_ft2: f64,

    /// Site area (m²), converted to ft² in the result
    pub site_area_m2: f64,

    /// Optional replacement for the working budget.
    ///
    /// When absent, the working budget is the proposed total cost.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_budget_override: Option<f64>,
}

impl BudgetInput {
    /// Validate input parameters.
    pub fn validate(&self) -> EstimateResult<()> {
        for (field, value) in [
            ("new_area_ft2", self.new_area_ft2),
            ("existing_area_ft2", self.existing_area_ft2),
            ("site_area_m2", self.site_area_m2),
        ] {
            if !value.is_finite() {
                return Err(EstimateError::invalid_input(
                    field,
                    value.to_string(),
                    "Area must be a finite number",
                ));
            }
            if value < 0.0 {
                return Err(EstimateError::invalid_input(
                    field,
                    value.to_string(),
                    "Area must be non-negative",
                ));
            }
        }
        if let Some(override_value) = self.working_budget_override {
            if !override_value.is_finite() || override_value < 0.0 {
                return Err(EstimateError::invalid_input(
                    "working_budget_override",
                    override_value.to_string(),
                    "Working budget override must be a non-negative finite number",
                ));
            }
        }
        Ok(())
    }

    /// Total floor area: new plus existing (ft²)
    pub fn total_area_ft2(&self) -> f64 {
        self.new_area_ft2 + self.existing_area_ft2
    }

    /// Site area converted to square feet
    pub fn site_area_ft2(&self) -> f64 {
        SqFt::from(SqM(self.site_area_m2)).0
    }
}

/// Floor and site areas carried into the result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaSummary {
    /// New construction floor area (ft²)
    pub new_ft2: f64,
    /// Existing/renovated floor area (ft²)
    pub existing_ft2: f64,
    /// Total floor area: new + existing (ft²)
    pub total_ft2: f64,
    /// Site area converted from the m² input (ft²)
    pub site_ft2: f64,
}

/// Total construction cost bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBounds {
    /// Total area × minimum all-in cost ($)
    pub low: f64,
    /// Total area × maximum all-in cost ($)
    pub high: f64,
    /// Midpoint blend of low and high ($)
    pub proposed: f64,
}

/// Minimum discipline budgets: the working budget split across the three
/// top-level spend categories.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinimumBudgets {
    /// Shell (architecture) budget ($)
    pub shell: f64,
    /// Interior budget ($)
    pub interior: f64,
    /// Landscape budget ($)
    pub landscape: f64,
}

impl MinimumBudgets {
    /// Sum of the three discipline budgets.
    ///
    /// Reconstructs the working budget when shares sum to 1.0.
    pub fn total(&self) -> f64 {
        self.shell + self.interior + self.landscape
    }
}

/// Informational allocation of the working budget to one engineering
/// discipline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisciplineBudget {
    /// Engineering discipline
    pub category: EngineeringCategory,
    /// Average percentage applied (0-100 scale)
    pub percent_avg: f64,
    /// Working budget × percent_avg / 100 ($)
    pub budget: f64,
}

/// Results from budget calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "area": { "new_ft2": 1000.0, "existing_ft2": 4407.0, "total_ft2": 5407.0, "site_ft2": 10473.07 },
///   "total_cost": { "low": 1622100.0, "high": 1730240.0, "proposed": 1676170.0 },
///   "minimum_budgets": { "shell": 1106272.2, "interior": 368757.4, "landscape": 201140.4 },
///   "working_budget": 1676170.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetResult {
    // === Areas ===
    /// Floor and site areas
    pub area: AreaSummary,

    // === Total Cost ===
    /// Construction cost bounds derived from the cost range
    pub total_cost: CostBounds,

    // === Discipline Splits ===
    /// Working budget split across shell/interior/landscape
    pub minimum_budgets: MinimumBudgets,

    /// Basis for all downstream fee calculations ($).
    ///
    /// The proposed cost, unless the input carried an override.
    pub working_budget: f64,

    // === Basis (for reference) ===
    /// The cost range row the estimate was computed from
    pub cost_basis: BuildingCostRange,

    /// Engineering discipline allocations against the working budget
    pub disciplines: Vec<DisciplineBudget>,
}

impl BudgetResult {
    /// Proposed cost per square foot of floor area ($/ft²)
    pub fn proposed_per_ft2(&self) -> f64 {
        if self.area.total_ft2 > 0.0 {
            self.total_cost.proposed / self.area.total_ft2
        } else {
            0.0
        }
    }

    /// Working budget as a typed unit
    pub fn working_budget(&self) -> Dollars {
        Dollars(self.working_budget)
    }
}

/// Calculate the minimum budget breakdown for one project.
///
/// This is a pure function: no I/O, no mutation of inputs, and identical
/// inputs always produce identical output. The cost range and engineering
/// rows are trusted as pre-validated catalog data; resolving them (and
/// surfacing a miss) is the caller's job.
///
/// # Arguments
///
/// * `input` - Project areas, building type, and tier
/// * `cost_range` - The matching cost range row for `(building_type, tier)`
/// * `engineering_costs` - Engineering rows for the same key (may be empty)
///
/// # Returns
///
/// * `Ok(BudgetResult)` - Complete, internally consistent breakdown
/// * `Err(EstimateError)` - Structured error if inputs are invalid
///
/// # Example
///
/// ```rust
/// use budget_core::calculations::budget::{calculate, BudgetInput};
/// use budget_core::costs::{BuildingType, CostCatalog, Tier};
///
/// let input = BudgetInput {
///     label: "Addition".to_string(),
///     building_type: BuildingType::BudgetResidential,
///     tier: Tier::One,
///     new_area_ft2: 800.0,
///     existing_area_ft2: 0.0,
///     site_area_m2: 400.0,
///     working_budget_override: None,
/// };
///
/// let catalog = CostCatalog::builtin();
/// let range = catalog.cost_range(input.building_type, input.tier).unwrap();
/// let result = calculate(&input, range, &[]).expect("valid input");
/// assert!(result.total_cost.low <= result.total_cost.proposed);
/// ```
pub fn calculate(
    input: &BudgetInput,
    cost_range: &BuildingCostRange,
    engineering_costs: &[&EngineeringCost],
) -> EstimateResult<BudgetResult> {
    // Validate inputs
    input.validate()?;

    // === Areas ===
    let total_ft2 = input.total_area_ft2();
    let area = AreaSummary {
        new_ft2: input.new_area_ft2,
        existing_ft2: input.existing_area_ft2,
        total_ft2,
        site_ft2: input.site_area_ft2(),
    };

    // === Total Cost Bounds ===
    let low = cost_range.allin_min().over(SqFt(total_ft2)).0;
    let high = cost_range.allin_max().over(SqFt(total_ft2)).0;
    let proposed = low + (high - low) * PROPOSED_HIGH_WEIGHT;
    let total_cost = CostBounds { low, high, proposed };

    // === Working Budget ===
    let working_budget = input.working_budget_override.unwrap_or(proposed);

    // === Minimum Discipline Budgets ===
    let working = Dollars(working_budget);
    let minimum_budgets = MinimumBudgets {
        shell: cost_range.arch_share().of(working).0,
        interior: cost_range.interior_share().of(working).0,
        landscape: cost_range.landscape_share().of(working).0,
    };

    // === Engineering Allocations ===
    let disciplines = engineering_costs
        .iter()
        .map(|row| DisciplineBudget {
            category: row.category,
            percent_avg: row.percent_avg,
            budget: row.allocate(working).0,
        })
        .collect();

    Ok(BudgetResult {
        area,
        total_cost,
        minimum_budgets,
        working_budget,
        cost_basis: *cost_range,
        disciplines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::costs::CostCatalog;
    use proptest::prelude::*;

    /// The mid-range tier 1 acceptance case
    fn fixture_input() -> BudgetInput {
        BudgetInput {
            label: "Fixture".to_string(),
            building_type: BuildingType::MidRangeStandardResidential,
            tier: Tier::One,
            new_area_ft2: 1000.0,
            existing_area_ft2: 4407.0,
            site_area_m2: 972.98,
            working_budget_override: None,
        }
    }

    fn fixture_range() -> BuildingCostRange {
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

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 0.01,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_acceptance_fixture() {
        let input = fixture_input();
        let range = fixture_range();
        let result = calculate(&input, &range, &[]).unwrap();

        assert_close(result.area.total_ft2, 5407.0);
        assert_close(result.total_cost.low, 1_622_100.0);
        assert_close(result.total_cost.high, 1_730_240.0);
        assert_close(result.total_cost.proposed, 1_676_170.0);
        assert_close(result.minimum_budgets.shell, 1_106_272.20);
        assert_close(result.minimum_budgets.interior, 368_757.40);
        assert_close(result.minimum_budgets.landscape, 201_140.40);
        assert_close(result.working_budget, 1_676_170.0);
    }

    #[test]
    fn test_area_additivity() {
        let result = calculate(&fixture_input(), &fixture_range(), &[]).unwrap();
        assert_eq!(
            result.area.total_ft2,
            result.area.new_ft2 + result.area.existing_ft2
        );
    }

    #[test]
    fn test_share_reconstruction() {
        let result = calculate(&fixture_input(), &fixture_range(), &[]).unwrap();
        assert_close(result.minimum_budgets.total(), result.working_budget);
    }

    #[test]
    fn test_bound_ordering() {
        let result = calculate(&fixture_input(), &fixture_range(), &[]).unwrap();
        assert!(result.total_cost.low <= result.total_cost.proposed);
        assert!(result.total_cost.proposed <= result.total_cost.high);
    }

    #[test]
    fn test_idempotence() {
        let input = fixture_input();
        let range = fixture_range();
        let first = calculate(&input, &range, &[]).unwrap();
        let second = calculate(&input, &range, &[]).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_area_boundary() {
        let mut input = fixture_input();
        input.new_area_ft2 = 0.0;
        input.existing_area_ft2 = 0.0;
        let result = calculate(&input, &fixture_range(), &[]).unwrap();

        assert_eq!(result.area.total_ft2, 0.0);
        assert_eq!(result.total_cost.low, 0.0);
        assert_eq!(result.total_cost.high, 0.0);
        assert_eq!(result.total_cost.proposed, 0.0);
        assert_eq!(result.minimum_budgets.shell, 0.0);
        assert_eq!(result.minimum_budgets.interior, 0.0);
        assert_eq!(result.minimum_budgets.landscape, 0.0);
        assert_eq!(result.working_budget, 0.0);
    }

    #[test]
    fn test_scaling_linearity() {
        let input = fixture_input();
        let range = fixture_range();
        let base = calculate(&input, &range, &[]).unwrap();

        let mut doubled = input.clone();
        doubled.new_area_ft2 *= 2.0;
        doubled.existing_area_ft2 *= 2.0;
        let scaled = calculate(&doubled, &range, &[]).unwrap();

        assert_eq!(scaled.area.total_ft2, base.area.total_ft2 * 2.0);
        assert_eq!(scaled.total_cost.low, base.total_cost.low * 2.0);
        assert_eq!(scaled.total_cost.high, base.total_cost.high * 2.0);
        assert_eq!(scaled.total_cost.proposed, base.total_cost.proposed * 2.0);
        assert_eq!(scaled.minimum_budgets.shell, base.minimum_budgets.shell * 2.0);
        assert_eq!(scaled.minimum_budgets.interior, base.minimum_budgets.interior * 2.0);
        assert_eq!(
            scaled.minimum_budgets.landscape,
            base.minimum_budgets.landscape * 2.0
        );
    }

    #[test]
    fn test_working_budget_override() {
        let mut input = fixture_input();
        input.working_budget_override = Some(1_500_000.0);
        let result = calculate(&input, &fixture_range(), &[]).unwrap();

        assert_eq!(result.working_budget, 1_500_000.0);
        assert_close(result.minimum_budgets.shell, 1_500_000.0 * 0.66);
        // Cost bounds are unaffected by the override
        assert_close(result.total_cost.proposed, 1_676_170.0);
    }

    #[test]
    fn test_engineering_allocations() {
        let catalog = CostCatalog::builtin();
        let input = fixture_input();
        let range = catalog.cost_range(input.building_type, input.tier).unwrap();
        let engineering = catalog.engineering_costs(input.building_type, input.tier);
        let result = calculate(&input, range, &engineering).unwrap();

        assert_eq!(result.disciplines.len(), engineering.len());
        let structural = result
            .disciplines
            .iter()
            .find(|d| d.category == EngineeringCategory::Structural)
            .unwrap();
        assert_close(structural.budget, result.working_budget * structural.percent_avg / 100.0);
    }

    #[test]
    fn test_site_area_conversion() {
        let result = calculate(&fixture_input(), &fixture_range(), &[]).unwrap();
        // 972.98 m² × 10.76391 ft²/m²
        assert_close(result.area.site_ft2, 10_473.07);
    }

    #[test]
    fn test_negative_area_rejected() {
        let mut input = fixture_input();
        input.new_area_ft2 = -100.0;
        let err = calculate(&input, &fixture_range(), &[]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_non_finite_area_rejected() {
        let mut input = fixture_input();
        input.existing_area_ft2 = f64::NAN;
        assert!(calculate(&input, &fixture_range(), &[]).is_err());

        let mut input = fixture_input();
        input.site_area_m2 = f64::INFINITY;
        assert!(calculate(&input, &fixture_range(), &[]).is_err());
    }

    #[test]
    fn test_negative_override_rejected() {
        let mut input = fixture_input();
        input.working_budget_override = Some(-1.0);
        assert!(calculate(&input, &fixture_range(), &[]).is_err());
    }

    #[test]
    fn test_input_serialization_roundtrip() {
        let input = fixture_input();
        let json = serde_json::to_string_pretty(&input).unwrap();
        assert!(json.contains("Mid-Range Standard Residential"));
        assert!(json.contains("\"tier\": 1"));

        let roundtrip: BudgetInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate(&fixture_input(), &fixture_range(), &[]).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();

        assert!(json.contains("total_cost"));
        assert!(json.contains("minimum_budgets"));
        assert!(json.contains("working_budget"));

        let roundtrip: BudgetResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }

    proptest! {
        #[test]
        fn prop_bound_ordering(
            new in 0.0..500_000.0f64,
            existing in 0.0..500_000.0f64,
            allin_min in 1.0..1_000.0f64,
            spread in 0.0..500.0f64,
        ) {
            let input = BudgetInput {
                new_area_ft2: new,
                existing_area_ft2: existing,
                ..fixture_input()
            };
            let range = BuildingCostRange {
                allin_min,
                allin_max: allin_min + spread,
                ..fixture_range()
            };
            let result = calculate(&input, &range, &[]).unwrap();
            prop_assert!(result.total_cost.low <= result.total_cost.proposed);
            prop_assert!(result.total_cost.proposed <= result.total_cost.high);
        }

        #[test]
        fn prop_area_additivity(
            new in 0.0..500_000.0f64,
            existing in 0.0..500_000.0f64,
        ) {
            let input = BudgetInput {
                new_area_ft2: new,
                existing_area_ft2: existing,
                ..fixture_input()
            };
            let result = calculate(&input, &fixture_range(), &[]).unwrap();
            prop_assert_eq!(result.area.total_ft2, new + existing);
        }

        #[test]
        fn prop_share_reconstruction(
            new in 0.0..100_000.0f64,
            arch in 0.1..0.8f64,
            interior_fraction in 0.0..1.0f64,
        ) {
            // Build a valid share triple summing to exactly 1.0
            let remainder = 1.0 - arch;
            let interior = remainder * interior_fraction;
            let landscape = remainder - interior;

            let input = BudgetInput {
                new_area_ft2: new,
                existing_area_ft2: 0.0,
                ..fixture_input()
            };
            let range = BuildingCostRange {
                arch_share: arch,
                interior_share: interior,
                landscape_share: landscape,
                ..fixture_range()
            };
            let result = calculate(&input, &range, &[]).unwrap();
            prop_assert!((result.minimum_budgets.total() - result.working_budget).abs() < 0.01);
        }

        #[test]
        fn prop_results_non_negative(
            new in 0.0..500_000.0f64,
            existing in 0.0..500_000.0f64,
            site in 0.0..1_000_000.0f64,
        ) {
            let input = BudgetInput {
                new_area_ft2: new,
                existing_area_ft2: existing,
                site_area_m2: site,
                ..fixture_input()
            };
            let result = calculate(&input, &fixture_range(), &[]).unwrap();
            prop_assert!(result.total_cost.low >= 0.0);
            prop_assert!(result.total_cost.high.is_finite());
            prop_assert!(result.minimum_budgets.shell >= 0.0);
            prop_assert!(result.minimum_budgets.interior >= 0.0);
            prop_assert!(result.minimum_budgets.landscape >= 0.0);
            prop_assert!(result.working_budget >= 0.0);
        }
    }
}
