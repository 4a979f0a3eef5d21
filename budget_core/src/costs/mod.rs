//! # Cost Data
//!
//! Lookup tables that drive budget estimation:
//!
//! - [`building`] - Building types and quality tiers (lookup keys)
//! - [`ranges`] - All-in cost ranges with discipline share splits
//! - [`engineering`] - Engineering percentages per discipline
//! - [`catalog`] - The catalog resolving keys to rows, with a built-in
//!   cost guide and JSON loading for custom guides

pub mod building;
pub mod catalog;
pub mod engineering;
pub mod ranges;

// Re-export commonly used types
pub use building::{BuildingType, Tier};
pub use catalog::CostCatalog;
pub use engineering::{EngineeringCategory, EngineeringCost};
pub use ranges::BuildingCostRange;
