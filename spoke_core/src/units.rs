//! # Unit Types
//!
//! Lightweight newtype wrappers for the units wheel geometry works in.
//! All lengths are millimeters, matching how rims and hubs are measured
//! and how spokes are sold. Angles are computed in radians and reported
//! in degrees.
//!
//! ## Example
//!
//! ```rust
//! use spoke_core::units::{Degrees, Radians};
//!
//! let half_turn = Radians(std::f64::consts::PI);
//! let degrees: Degrees = half_turn.into();
//! assert!((degrees.0 - 180.0).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::Add;

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl Millimeters {
    /// Half of this length (diameter to radius)
    pub fn half(self) -> Millimeters {
        Millimeters(self.0 / 2.0)
    }
}

impl Add for Millimeters {
    type Output = Millimeters;
    fn add(self, rhs: Self) -> Self::Output {
        Millimeters(self.0 + rhs.0)
    }
}

// ============================================================================
// Angle Units
// ============================================================================

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Degrees(rad.0.to_degrees())
    }
}
