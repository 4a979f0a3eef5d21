//! # Fee Schedule Calculation
//!
//! Turns a computed budget into professional fees: per-scope market and
//! internal fees over the discipline splits, plus consultant fees for the
//! engineering disciplines. Consumes only a fully computed
//! [`BudgetResult`], never partial figures.
//!
//! ## Example
//!
//! ```rust
//! use budget_core::calculations::budget::{calculate, BudgetInput};
//! use budget_core::calculations::fees::{calculate_fees, FeeRateSet};
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
//! let budget = calculate(&input, range, &engineering).unwrap();
//!
//! let fees = calculate_fees(&budget, &FeeRateSet::default()).unwrap();
//! assert!(fees.total_market_fee > 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::budget::BudgetResult;
use crate::costs::engineering::EngineeringCategory;
use crate::errors::{EstimateError, EstimateResult};

/// Top-level professional service scopes, matching the discipline splits
/// of the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeeScope {
    /// Shell design (architecture)
    Architecture,
    /// Interior design
    Interiors,
    /// Landscape design
    Landscape,
}

impl FeeScope {
    /// All scopes for iteration and UI selection
    pub const ALL: [FeeScope; 3] = [FeeScope::Architecture, FeeScope::Interiors, FeeScope::Landscape];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            FeeScope::Architecture => "Architecture",
            FeeScope::Interiors => "Interiors",
            FeeScope::Landscape => "Landscape",
        }
    }
}

impl std::fmt::Display for FeeScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Market fee percentages per scope plus the internal delivery ratio.
///
/// Market fees are the rates quoted to clients; the internal fee is the
/// in-house delivery target derived from the market fee.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeeRateSet {
    /// Architecture market fee (% of shell budget)
    pub architecture_percent: f64,
    /// Interiors market fee (% of interior budget)
    pub interiors_percent: f64,
    /// Landscape market fee (% of landscape budget)
    pub landscape_percent: f64,
    /// Internal fee as a fraction of the market fee (0-1)
    pub internal_ratio: f64,
}

impl Default for FeeRateSet {
    fn default() -> Self {
        FeeRateSet {
            architecture_percent: 10.0,
            interiors_percent: 12.0,
            landscape_percent: 15.0,
            internal_ratio: 0.85,
        }
    }
}

impl FeeRateSet {
    /// Validate rate figures.
    pub fn validate(&self) -> EstimateResult<()> {
        for (field, value) in [
            ("architecture_percent", self.architecture_percent),
            ("interiors_percent", self.interiors_percent),
            ("landscape_percent", self.landscape_percent),
            ("internal_ratio", self.internal_ratio),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(EstimateError::invalid_input(
                    field,
                    value.to_string(),
                    "Rate must be a non-negative finite number",
                ));
            }
        }
        Ok(())
    }

    /// Market percentage for a scope
    pub fn market_percent(&self, scope: FeeScope) -> f64 {
        match scope {
            FeeScope::Architecture => self.architecture_percent,
            FeeScope::Interiors => self.interiors_percent,
            FeeScope::Landscape => self.landscape_percent,
        }
    }
}

/// Fee line for one professional service scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeFee {
    /// Service scope
    pub scope: FeeScope,
    /// Scope budget the fee applies against ($)
    pub basis: f64,
    /// Market percentage applied (0-100 scale)
    pub market_percent: f64,
    /// Market fee: basis × market_percent / 100 ($)
    pub market_fee: f64,
    /// Internal fee: market fee × internal ratio ($)
    pub internal_fee: f64,
}

/// Fee line for one consulting engineering discipline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsultantFee {
    /// Engineering discipline
    pub category: EngineeringCategory,
    /// Average percentage applied against the working budget (0-100 scale)
    pub percent_avg: f64,
    /// Consultant fee ($)
    pub fee: f64,
}

/// Complete fee schedule for one estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeSchedule {
    /// Per-scope market/internal fees
    pub scope_fees: Vec<ScopeFee>,
    /// Per-discipline consultant fees
    pub consultant_fees: Vec<ConsultantFee>,
    /// Sum of market fees across scopes ($)
    pub total_market_fee: f64,
    /// Sum of internal fees across scopes ($)
    pub total_internal_fee: f64,
    /// Sum of consultant fees across disciplines ($)
    pub total_consultant_fee: f64,
}

impl FeeSchedule {
    /// Total professional fees: market fees plus consultant fees ($)
    pub fn total_professional_fee(&self) -> f64 {
        self.total_market_fee + self.total_consultant_fee
    }

    /// Fee line for a specific scope, if present
    pub fn scope_fee(&self, scope: FeeScope) -> Option<&ScopeFee> {
        self.scope_fees.iter().find(|line| line.scope == scope)
    }
}

/// Calculate the fee schedule from a computed budget.
///
/// Scope fees apply the market rates against the minimum discipline
/// budgets (the working budget split by share); consultant fees carry the
/// engineering allocations already computed in the budget result.
///
/// # Arguments
///
/// * `budget` - A fully computed budget result
/// * `rates` - Market fee percentages and internal ratio
///
/// # Returns
///
/// * `Ok(FeeSchedule)` - Complete fee breakdown
/// * `Err(EstimateError)` - Structured error if rates are invalid
pub fn calculate_fees(budget: &BudgetResult, rates: &FeeRateSet) -> EstimateResult<FeeSchedule> {
    rates.validate()?;

    let scope_bases = [
        (FeeScope::Architecture, budget.minimum_budgets.shell),
        (FeeScope::Interiors, budget.minimum_budgets.interior),
        (FeeScope::Landscape, budget.minimum_budgets.landscape),
    ];

    let scope_fees: Vec<ScopeFee> = scope_bases
        .into_iter()
        .map(|(scope, basis)| {
            let market_percent = rates.market_percent(scope);
            let market_fee = basis * market_percent / 100.0;
            ScopeFee {
                scope,
                basis,
                market_percent,
                market_fee,
                internal_fee: market_fee * rates.internal_ratio,
            }
        })
        .collect();

    let consultant_fees: Vec<ConsultantFee> = budget
        .disciplines
        .iter()
        .map(|allocation| ConsultantFee {
            category: allocation.category,
            percent_avg: allocation.percent_avg,
            fee: allocation.budget,
        })
        .collect();

    let total_market_fee = scope_fees.iter().map(|line| line.market_fee).sum();
    let total_internal_fee = scope_fees.iter().map(|line| line.internal_fee).sum();
    let total_consultant_fee = consultant_fees.iter().map(|line| line.fee).sum();

    Ok(FeeSchedule {
        scope_fees,
        consultant_fees,
        total_market_fee,
        total_internal_fee,
        total_consultant_fee,
    })
}
