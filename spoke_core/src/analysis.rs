//! # Wheel Analysis
//!
//! The engine's single entry point: [`full_analysis`] takes a flat set of
//! rim and hub measurements plus the lacing choice and returns every
//! per-side metric a wheel builder needs.
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use spoke_core::analysis::{full_analysis, WheelSpec};
//!
//! let spec: WheelSpec = serde_json::from_str(r#"{
//!     "erd": 600.0,
//!     "flange_diameter_left": 45.0,
//!     "flange_diameter_right": 45.0,
//!     "flange_offset_left": 35.0,
//!     "flange_offset_right": 35.0,
//!     "spoke_count": 32,
//!     "cross_pattern_left": 3,
//!     "cross_pattern_right": 3
//! }"#).unwrap();
//!
//! // Absent hole diameter and rim offset take their defaults
//! assert_eq!(spec.spoke_hole_diameter, 2.6);
//! assert_eq!(spec.rim_offset, 0.0);
//!
//! let result = full_analysis(&spec).unwrap();
//! assert_eq!(result.spoke_length_left, 292.9);
//! assert_eq!(result.spoke_length_left_rounded, 292.0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::SpokeResult;
use crate::geometry::{
    bracing_angle, require_positive, round_one_decimal, round_to_available_length, spoke_length,
    spokes_per_side, tension_distribution, theta_angle, wrap_angle,
};

/// Typical J-bend hub flange hole diameter (mm)
pub const DEFAULT_SPOKE_HOLE_DIAMETER_MM: f64 = 2.6;

fn default_spoke_hole_diameter() -> f64 {
    DEFAULT_SPOKE_HOLE_DIAMETER_MM
}

/// Measurements and lacing for one wheel.
///
/// All lengths in millimeters.
///
/// ## JSON Example
///
/// ```json
/// {
///   "erd": 600.0,
///   "flange_diameter_left": 45.0,
///   "flange_diameter_right": 45.0,
///   "flange_offset_left": 20.5,
///   "flange_offset_right": 37.5,
///   "spoke_count": 32,
///   "cross_pattern_left": 3,
///   "cross_pattern_right": 3,
///   "spoke_hole_diameter": 2.6,
///   "rim_offset": 0.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelSpec {
    /// Effective rim diameter
    pub erd: f64,

    /// Left flange pitch-circle diameter
    pub flange_diameter_left: f64,

    /// Right flange pitch-circle diameter
    pub flange_diameter_right: f64,

    /// Hub center to left flange
    pub flange_offset_left: f64,

    /// Hub center to right flange
    pub flange_offset_right: f64,

    /// Total spokes in the wheel (half per flange)
    pub spoke_count: u32,

    /// Crosses on the left side (0 = radial)
    pub cross_pattern_left: u32,

    /// Crosses on the right side (0 = radial)
    pub cross_pattern_right: u32,

    /// Hub flange spoke-hole diameter
    #[serde(default = "default_spoke_hole_diameter")]
    pub spoke_hole_diameter: f64,

    /// Rim drilling offset. Positive moves the rim holes toward the left flange
    /// plane as seen by the left spokes, and away from it for the right.
    #[serde(default)]
    pub rim_offset: f64,
}

impl WheelSpec {
    /// Validate the dimensions the geometry divides by or takes radii of.
    ///
    /// Offsets, cross counts and hole diameter are accepted as given.
    pub fn validate(&self) -> SpokeResult<()> {
        require_positive("erd", self.erd)?;
        require_positive("flange_diameter_left", self.flange_diameter_left)?;
        require_positive("flange_diameter_right", self.flange_diameter_right)?;
        spokes_per_side(self.spoke_count)?;
        Ok(())
    }
}

/// Results of a full wheel analysis.
///
/// Lengths in mm, angles in degrees, tension as percent of the higher
/// side. Values are already rounded for display and must be carried
/// through any transport unchanged.
///
/// ## JSON Example
///
/// ```json
/// {
///   "spoke_length_left": 291.5,
///   "spoke_length_right": 293.2,
///   "spoke_length_left_rounded": 292.0,
///   "spoke_length_right_rounded": 294.0,
///   "tension_percent_left": 100.0,
///   "tension_percent_right": 54.7,
///   "bracing_angle_left": 3.9,
///   "bracing_angle_right": 7.1,
///   "wrap_angle_left": 33.8,
///   "wrap_angle_right": 33.8,
///   "total_angle_left": 37.7,
///   "total_angle_right": 40.9,
///   "theta_angle_left": 67.5,
///   "theta_angle_right": 67.5
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub spoke_length_left: f64,
    pub spoke_length_right: f64,

    /// Nearest stocked length (2 mm steps)
    pub spoke_length_left_rounded: f64,
    pub spoke_length_right_rounded: f64,

    pub tension_percent_left: f64,
    pub tension_percent_right: f64,

    pub bracing_angle_left: f64,
    pub bracing_angle_right: f64,

    pub wrap_angle_left: f64,
    pub wrap_angle_right: f64,

    /// Bracing + wrap
    pub total_angle_left: f64,
    pub total_angle_right: f64,

    /// Hub angle
    pub theta_angle_left: f64,
    pub theta_angle_right: f64,
}

impl AnalysisResult {
    /// Whether one stocked spoke length serves both sides.
    pub fn same_length_both_sides(&self) -> bool {
        self.spoke_length_left_rounded == self.spoke_length_right_rounded
    }
}

/// Spoke lengths for both sides as `(left, right)`, unrounded.
///
/// The rim drilling offset moves the rim hole circle toward one flange and
/// away from the other, so the right side sees it negated.
pub fn calculate_both_sides(spec: &WheelSpec) -> SpokeResult<(f64, f64)> {
    let left = spoke_length(
        spec.erd,
        spec.flange_diameter_left,
        spec.flange_offset_left,
        spec.spoke_count,
        spec.cross_pattern_left,
        spec.spoke_hole_diameter,
        spec.rim_offset,
    )
    .map_err(|e| e.on_side("left"))?;

    let right = spoke_length(
        spec.erd,
        spec.flange_diameter_right,
        spec.flange_offset_right,
        spec.spoke_count,
        spec.cross_pattern_right,
        spec.spoke_hole_diameter,
        -spec.rim_offset,
    )
    .map_err(|e| e.on_side("right"))?;

    Ok((left, right))
}

/// Run the complete analysis for one wheel.
///
/// # Errors
///
/// * `InvalidDimension` - non-positive ERD or flange diameter, zero or odd spoke count
/// * `DegenerateTriangle` - a side's spoke triangle has no real length
pub fn full_analysis(spec: &WheelSpec) -> SpokeResult<AnalysisResult> {
    spec.validate()?;

    let (left_length, right_length) = calculate_both_sides(spec)?;

    let bracing_left = bracing_angle(spec.erd, spec.flange_offset_left)?;
    let bracing_right = bracing_angle(spec.erd, spec.flange_offset_right)?;

    let (tension_left, tension_right) =
        tension_distribution(spec.flange_offset_left, spec.flange_offset_right);

    let wrap_left = wrap_angle(
        spec.flange_diameter_left,
        spec.spoke_hole_diameter,
        spec.spoke_count,
        spec.cross_pattern_left,
    )?;
    let wrap_right = wrap_angle(
        spec.flange_diameter_right,
        spec.spoke_hole_diameter,
        spec.spoke_count,
        spec.cross_pattern_right,
    )?;

    let theta_left = theta_angle(
        spec.erd,
        spec.flange_diameter_left,
        spec.spoke_count,
        spec.cross_pattern_left,
    )?;
    let theta_right = theta_angle(
        spec.erd,
        spec.flange_diameter_right,
        spec.spoke_count,
        spec.cross_pattern_right,
    )?;

    debug!(
        erd = spec.erd,
        spoke_count = spec.spoke_count,
        left_length,
        right_length,
        "computed spoke lengths"
    );

    Ok(AnalysisResult {
        spoke_length_left: round_one_decimal(left_length),
        spoke_length_right: round_one_decimal(right_length),
        spoke_length_left_rounded: round_to_available_length(left_length),
        spoke_length_right_rounded: round_to_available_length(right_length),
        tension_percent_left: tension_left,
        tension_percent_right: tension_right,
        // Total uses the unrounded bracing angle
        total_angle_left: round_one_decimal(bracing_left + wrap_left),
        total_angle_right: round_one_decimal(bracing_right + wrap_right),
        bracing_angle_left: round_one_decimal(bracing_left),
        bracing_angle_right: round_one_decimal(bracing_right),
        wrap_angle_left: wrap_left,
        wrap_angle_right: wrap_right,
        theta_angle_left: theta_left,
        theta_angle_right: theta_right,
    })
}
