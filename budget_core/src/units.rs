//! # Unit Types
//!
//! Type-safe wrappers for estimation units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64
//! wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Budget estimation uses a small, consistent set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## Units
//!
//! Floor areas are tracked in square feet to match US cost guides; site
//! areas arrive in square meters from survey data and convert at the
//! boundary:
//! - Area: square feet (ft²), square meters (m²)
//! - Money: US dollars
//! - Rates: percent (0-100), fractional share (0-1)
//!
//! ## Example
//!
//! ```rust
//! use budget_core::units::{SqFt, SqM};
//!
//! let site = SqM(972.98);
//! let site_ft2: SqFt = site.into();
//! assert!((site_ft2.0 - 10473.07).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Square feet per square meter
pub const SQFT_PER_SQM: f64 = 10.763_910_416_709_7;

// ============================================================================
// Area Units
// ============================================================================

/// Area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqFt(pub f64);

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqM(pub f64);

impl From<SqM> for SqFt {
    fn from(m2: SqM) -> Self {
        SqFt(m2.0 * SQFT_PER_SQM)
    }
}

impl From<SqFt> for SqM {
    fn from(ft2: SqFt) -> Self {
        SqM(ft2.0 / SQFT_PER_SQM)
    }
}

// ============================================================================
// Money Units
// ============================================================================

/// Amount in US dollars
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dollars(pub f64);

/// Unit cost in dollars per square foot
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DollarsPerSqFt(pub f64);

impl DollarsPerSqFt {
    /// Extend a unit cost over an area
    pub fn over(self, area: SqFt) -> Dollars {
        Dollars(self.0 * area.0)
    }
}

// ============================================================================
// Rate Units
// ============================================================================

/// Percentage (0-100 scale)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percent(pub f64);

/// Fractional share (0-1 scale)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Share(pub f64);

impl From<Percent> for Share {
    fn from(pct: Percent) -> Self {
        Share(pct.0 / 100.0)
    }
}

impl From<Share> for Percent {
    fn from(share: Share) -> Self {
        Percent(share.0 * 100.0)
    }
}

impl Percent {
    /// Apply this percentage to a dollar amount
    pub fn of(self, amount: Dollars) -> Dollars {
        Dollars(amount.0 * self.0 / 100.0)
    }
}

impl Share {
    /// Apply this share to a dollar amount
    pub fn of(self, amount: Dollars) -> Dollars {
        Dollars(amount.0 * self.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(SqFt);
impl_arithmetic!(SqM);
impl_arithmetic!(Dollars);
impl_arithmetic!(DollarsPerSqFt);
impl_arithmetic!(Percent);
impl_arithmetic!(Share);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqm_to_sqft() {
        let m2 = SqM(100.0);
        let ft2: SqFt = m2.into();
        assert!((ft2.0 - 1076.391).abs() < 0.001);
    }

    #[test]
    fn test_sqft_roundtrip() {
        let ft2 = SqFt(5407.0);
        let back: SqFt = SqM::from(ft2).into();
        assert!((back.0 - 5407.0).abs() < 1e-9);
    }

    #[test]
    fn test_unit_cost_over_area() {
        let cost = DollarsPerSqFt(300.0).over(SqFt(5407.0));
        assert_eq!(cost.0, 1_622_100.0);
    }

    #[test]
    fn test_share_of_amount() {
        let shell = Share(0.66).of(Dollars(1_676_170.0));
        assert!((shell.0 - 1_106_272.2).abs() < 0.01);
    }

    #[test]
    fn test_percent_share_conversion() {
        let pct = Percent(3.5);
        let share: Share = pct.into();
        assert!((share.0 - 0.035).abs() < 1e-12);
    }

    #[test]
    fn test_arithmetic() {
        let a = SqFt(1000.0);
        let b = SqFt(4407.0);
        assert_eq!((a + b).0, 5407.0);
        assert_eq!((b - a).0, 3407.0);
        assert_eq!((a * 2.0).0, 2000.0);
        assert_eq!((a / 2.0).0, 500.0);
    }

    #[test]
    fn test_serialization() {
        let amount = Dollars(1_622_100.0);
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "1622100.0");

        let roundtrip: Dollars = serde_json::from_str(&json).unwrap();
        assert_eq!(amount, roundtrip);
    }
}
