//! # Project Data Structures
//!
//! The `Project` struct is the root container for all estimate data.
//! Projects serialize to `.aeb` (A/E budget) files as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, firm, job info, timestamps)
//! ├── settings: GlobalSettings (hourly rate, fee rates, defaults)
//! └── estimates: HashMap<Uuid, Estimate> (inputs + cached results)
//! ```
//!
//! An [`Estimate`] pairs one budget input with the artifacts computed from
//! it (budget calculation, fee schedule, hours breakdown).
//! [`Project::recompute`] runs the full pipeline for one estimate and only
//! stores results once every stage has succeeded.
//!
//! ## Example
//!
//! ```rust
//! use budget_core::project::Project;
//!
//! let mut project = Project::new("Atelier North", "26-014", "Calder Family");
//!
//! // Serialize to JSON
//! let json = serde_json::to_string_pretty(&project).unwrap();
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::budget::{calculate, BudgetInput, BudgetResult};
use crate::calculations::fees::{calculate_fees, FeeRateSet, FeeSchedule};
use crate::calculations::hours::{distribute_hours, HoursBreakdown};
use crate::costs::building::{BuildingType, Tier};
use crate::costs::catalog::CostCatalog;
use crate::errors::{EstimateError, EstimateResult};

/// Current schema version for .aeb files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
///
/// This is the top-level struct that gets serialized to `.aeb` files.
/// Estimates are stored in a flat UUID-keyed map for O(1) lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, firm, job info)
    pub meta: ProjectMetadata,

    /// Global settings (hourly rate, fee rates, defaults)
    pub settings: GlobalSettings,

    /// All estimates, keyed by UUID
    pub estimates: HashMap<Uuid, Estimate>,
}

impl Project {
    /// Create a new empty project.
    ///
    /// # Arguments
    ///
    /// * `firm` - Name of the design firm
    /// * `job_id` - Job/project number (e.g., "26-014")
    /// * `client` - Client name
    ///
    /// # Example
    ///
    /// ```rust
    /// use budget_core::project::Project;
    ///
    /// let project = Project::new("Atelier North", "26-014", "Calder Family");
    /// assert_eq!(project.meta.firm, "Atelier North");
    /// ```
    pub fn new(firm: impl Into<String>, job_id: impl Into<String>, client: impl Into<String>) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                firm: firm.into(),
                job_id: job_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            settings: GlobalSettings::default(),
            estimates: HashMap::new(),
        }
    }

    /// Add an estimate to the project.
    ///
    /// Returns the UUID assigned to the estimate. Results are computed
    /// separately via [`Project::recompute`].
    pub fn add_estimate(&mut self, input: BudgetInput) -> Uuid {
        let id = Uuid::new_v4();
        self.estimates.insert(id, Estimate::new(input));
        self.touch();
        id
    }

    /// Remove an estimate by UUID.
    ///
    /// Returns the removed estimate if it existed.
    pub fn remove_estimate(&mut self, id: &Uuid) -> Option<Estimate> {
        let estimate = self.estimates.remove(id);
        if estimate.is_some() {
            self.touch();
        }
        estimate
    }

    /// Get an estimate by UUID.
    pub fn get_estimate(&self, id: &Uuid) -> Option<&Estimate> {
        self.estimates.get(id)
    }

    /// Get a mutable reference to an estimate by UUID.
    ///
    /// Note: This method updates the modified timestamp when an estimate
    /// is found. The caller should be aware that getting a mutable
    /// reference marks the project as modified.
    pub fn get_estimate_mut(&mut self, id: &Uuid) -> Option<&mut Estimate> {
        if self.estimates.contains_key(id) {
            self.meta.modified = Utc::now();
            self.estimates.get_mut(id)
        } else {
            None
        }
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Number of estimates in the project.
    pub fn estimate_count(&self) -> usize {
        self.estimates.len()
    }

    /// Run the full calculation pipeline for one estimate and store the
    /// results.
    ///
    /// Resolves the estimate's cost data from `catalog`, computes the
    /// budget, the fee schedule, and the hours breakdown for the firm's
    /// market fee. Results are stored only after every stage succeeds, so
    /// a stored estimate never carries partial artifacts.
    ///
    /// # Errors
    ///
    /// * `CostDataNotFound` - the catalog has no row for the estimate's
    ///   building type and tier
    /// * `InvalidInput` - the estimate's input fails validation
    pub fn recompute(&mut self, id: &Uuid, catalog: &CostCatalog) -> EstimateResult<()> {
        let input = self
            .estimates
            .get(id)
            .map(|estimate| estimate.input.clone())
            .ok_or_else(|| EstimateError::missing_field(format!("estimate {}", id)))?;

        let cost_range = catalog.cost_range(input.building_type, input.tier)?;
        let engineering = catalog.engineering_costs(input.building_type, input.tier);

        let calculation = calculate(&input, cost_range, &engineering)?;
        let fees = calculate_fees(&calculation, &self.settings.fee_rates)?;
        let hours = distribute_hours(fees.total_market_fee, self.settings.blended_hourly_rate)?;

        // All stages succeeded; store the complete set.
        let estimate = self
            .estimates
            .get_mut(id)
            .ok_or_else(|| EstimateError::Internal {
                message: format!("estimate {} disappeared during recompute", id),
            })?;
        estimate.calculation = Some(calculation);
        estimate.fees = Some(fees);
        estimate.hours = Some(hours);
        self.meta.modified = Utc::now();

        Ok(())
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

/// One budget estimate with its cached calculation artifacts.
///
/// The optional fields are `None` until [`Project::recompute`] runs, and
/// always updated together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Estimate {
    /// The budget input
    pub input: BudgetInput,

    /// Computed budget breakdown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculation: Option<BudgetResult>,

    /// Computed fee schedule
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees: Option<FeeSchedule>,

    /// Computed hours breakdown for the firm's market fee
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<HoursBreakdown>,
}

impl Estimate {
    /// Create an estimate with no computed results.
    pub fn new(input: BudgetInput) -> Self {
        Estimate {
            input,
            calculation: None,
            fees: None,
            hours: None,
        }
    }

    /// Whether the full pipeline has been computed for this estimate.
    pub fn is_computed(&self) -> bool {
        self.calculation.is_some() && self.fees.is_some() && self.hours.is_some()
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the design firm
    pub firm: String,

    /// Job/project number
    pub job_id: String,

    /// Client name
    pub client: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

/// Global project settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Blended staff rate for hours breakdowns ($/hr)
    pub blended_hourly_rate: f64,

    /// Fee rates used when computing fee schedules
    pub fee_rates: FeeRateSet,

    /// Default building type for new estimates
    pub default_building_type: BuildingType,

    /// Default tier for new estimates
    pub default_tier: Tier,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        GlobalSettings {
            blended_hourly_rate: 150.0,
            fee_rates: FeeRateSet::default(),
            default_building_type: BuildingType::MidRangeStandardResidential,
            default_tier: Tier::One,
        }
    }
}
