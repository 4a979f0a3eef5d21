//! # budget_core - A/E Budget & Fee Estimation Engine
//!
//! `budget_core` is the computational heart of Proforma, deriving
//! construction budgets and professional fee schedules for architecture
//! and engineering projects. All inputs and outputs are JSON-serializable,
//! making it easy to drive from APIs, tools, and scripts.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Typed at the Boundary**: Cost guide data is validated once when
//!   loaded; calculations never re-parse or re-check figures
//!
//! ## Quick Start
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
//! println!("Proposed cost: ${:.0}", result.total_cost.proposed);
//! ```
//!
//! ## Modules
//!
//! - [`project`] - Project container, metadata, and settings
//! - [`calculations`] - Budget, fee, and hours calculation stages
//! - [`costs`] - Cost guide lookup tables (ranges, engineering percentages)
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - File operations with atomic saves and locking

pub mod calculations;
pub mod costs;
pub mod errors;
pub mod file_io;
pub mod project;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{EstimateError, EstimateResult};
pub use file_io::{load_project, save_project, FileLock};
pub use project::{Estimate, GlobalSettings, Project, ProjectMetadata};
