//! # Wheel Geometry
//!
//! Per-side primitives behind [`crate::analysis::full_analysis`]. Each
//! function is a single pass over plain numbers: no state, no I/O.
//!
//! ## Spoke Length
//!
//! A spoke runs from a hole on the hub flange to a nipple seat on the rim.
//! Projected onto the wheel plane, the hub hole, the rim seat and the axle
//! form a triangle with sides `R = erd/2` and `F = flange_diameter/2` and
//! the lacing angle `A` between them. The axial distance from the wheel's
//! center plane to the flange (`O`) is the third dimension:
//!
//! ```text
//! L = sqrt(R² + F² + O² - 2·R·F·cos(A)) - d/2
//! ```
//!
//! where `d` is the flange spoke-hole diameter (the spoke elbow sits
//! partway into the hole).
//!
//! ## Example
//!
//! ```rust
//! use spoke_core::geometry::{spoke_length, round_to_available_length};
//!
//! // 32 hole, 3-cross, symmetric front hub on a 600 mm ERD rim
//! let length = spoke_length(600.0, 45.0, 35.0, 32, 3, 2.6, 0.0).unwrap();
//! assert!((length - 292.9).abs() < 0.05);
//! assert_eq!(round_to_available_length(length), 292.0);
//! ```

use std::f64::consts::PI;

use crate::errors::{SpokeError, SpokeResult};
use crate::units::{Degrees, Millimeters, Radians};

/// Increment spokes are commonly stocked in (mm)
pub const SPOKE_LENGTH_INCREMENT_MM: f64 = 2.0;

/// Reject zero, negative and non-finite dimensions.
pub(crate) fn require_positive(field: &str, value: f64) -> SpokeResult<()> {
    if !(value.is_finite() && value > 0.0) {
        return Err(SpokeError::invalid_dimension(
            field,
            value.to_string(),
            "Must be a positive, finite measurement in mm",
        ));
    }
    Ok(())
}

/// Spokes laced to one flange. The count must split evenly between sides.
pub(crate) fn spokes_per_side(spoke_count: u32) -> SpokeResult<f64> {
    if spoke_count == 0 {
        return Err(SpokeError::invalid_dimension(
            "spoke_count",
            spoke_count.to_string(),
            "Spoke count must be positive",
        ));
    }
    if spoke_count % 2 != 0 {
        return Err(SpokeError::invalid_dimension(
            "spoke_count",
            spoke_count.to_string(),
            "Spoke count must be even (half per flange)",
        ));
    }
    Ok(f64::from(spoke_count) / 2.0)
}

/// Angle at the axle between a spoke's hub hole and its rim seat.
///
/// Zero for radial lacing; otherwise each cross advances the spoke by one
/// hub-hole spacing on its side.
fn lacing_angle(spoke_count: u32, cross_pattern: u32) -> SpokeResult<Radians> {
    let per_side = spokes_per_side(spoke_count)?;
    if cross_pattern == 0 {
        return Ok(Radians(0.0));
    }
    Ok(Radians(2.0 * PI * f64::from(cross_pattern) / per_side))
}

/// Round to one decimal place, the precision all reported angles and
/// lengths carry. Ties go to the even digit (11.25 -> 11.2, 33.75 -> 33.8).
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// Calculate the length of one side's spokes in mm.
///
/// `rim_offset` is added to `flange_offset` as given; callers handling a
/// full wheel negate it for the right side (see
/// [`crate::analysis::calculate_both_sides`]).
///
/// # Errors
///
/// * `InvalidDimension` - `erd` or `flange_diameter` not positive,
///   `spoke_hole_diameter` not finite, or `spoke_count` zero or odd
/// * `DegenerateTriangle` - the radicand is negative, or the hole
///   allowance leaves no positive length
pub fn spoke_length(
    erd: f64,
    flange_diameter: f64,
    flange_offset: f64,
    spoke_count: u32,
    cross_pattern: u32,
    spoke_hole_diameter: f64,
    rim_offset: f64,
) -> SpokeResult<f64> {
    require_positive("erd", erd)?;
    require_positive("flange_diameter", flange_diameter)?;
    if !spoke_hole_diameter.is_finite() {
        return Err(SpokeError::invalid_dimension(
            "spoke_hole_diameter",
            spoke_hole_diameter.to_string(),
            "Must be a finite measurement in mm",
        ));
    }
    let angle = lacing_angle(spoke_count, cross_pattern)?;

    let r = Millimeters(erd).half().0;
    let f = Millimeters(flange_diameter).half().0;
    let o = (Millimeters(flange_offset) + Millimeters(rim_offset)).0;

    let radicand = r.powi(2) + f.powi(2) + o.powi(2) - 2.0 * r * f * angle.0.cos();
    if !(radicand >= 0.0) {
        return Err(SpokeError::degenerate_triangle("unspecified", radicand));
    }

    let length = radicand.sqrt() - spoke_hole_diameter / 2.0;
    if !(length > 0.0) {
        return Err(SpokeError::degenerate_triangle("unspecified", radicand));
    }
    Ok(length)
}

/// Round a spoke length to the nearest stocked size (2 mm steps).
///
/// Exact halfway lengths go to the even multiple (e.g. 297.0 → 296.0,
/// 299.0 → 300.0). Display only; derived metrics use the precise length.
pub fn round_to_available_length(length: f64) -> f64 {
    (length / SPOKE_LENGTH_INCREMENT_MM).round_ties_even() * SPOKE_LENGTH_INCREMENT_MM
}

/// Bracing angle in degrees: angle between the spoke and the wheel plane.
///
/// Larger angles give a laterally stiffer wheel.
pub fn bracing_angle(erd: f64, flange_offset: f64) -> SpokeResult<f64> {
    require_positive("erd", erd)?;
    let rim_radius = Millimeters(erd).half();
    let angle: Degrees = Radians((flange_offset / rim_radius.0).atan()).into();
    Ok(angle.0)
}

/// Relative spoke tension per side as `(left_pct, right_pct)`.
///
/// Tension is inversely proportional to flange offset for equal lateral
/// pull, so the side with the smaller offset carries the higher figure.
/// The higher side reads 100.0, the other its fraction of that, both to
/// one decimal. A non-dished wheel reads `(100.0, 100.0)`.
pub fn tension_distribution(flange_offset_left: f64, flange_offset_right: f64) -> (f64, f64) {
    if flange_offset_left == 0.0 && flange_offset_right == 0.0 {
        return (100.0, 100.0);
    }

    let total = flange_offset_left + flange_offset_right;
    if total == 0.0 {
        return (100.0, 100.0);
    }

    let left_raw = flange_offset_right / total * 200.0;
    let right_raw = flange_offset_left / total * 200.0;

    let max_raw = left_raw.max(right_raw);
    if !(max_raw > 0.0) {
        return (100.0, 100.0);
    }

    (
        round_one_decimal(left_raw / max_raw * 100.0),
        round_one_decimal(right_raw / max_raw * 100.0),
    )
}

/// Wrap angle in degrees for crossed lacing; 0.0 for radial.
///
/// Half the hub-hole spacing times the cross count.
///
/// `flange_diameter` and `spoke_hole_diameter` are accepted but do not
/// enter the result. Open question: the formula may be incomplete, or the
/// simplification may be intended. Keep both parameters until that is
/// settled.
pub fn wrap_angle(
    flange_diameter: f64,
    spoke_hole_diameter: f64,
    spoke_count: u32,
    cross_pattern: u32,
) -> SpokeResult<f64> {
    let _ = (flange_diameter, spoke_hole_diameter);
    let per_side = spokes_per_side(spoke_count)?;
    if cross_pattern == 0 {
        return Ok(0.0);
    }

    let hole_angle = 360.0 / per_side;
    let wrap = f64::from(cross_pattern) * hole_angle / 2.0;
    Ok(round_one_decimal(wrap))
}

/// Theta angle in degrees: angle at the hub between the radial line and
/// the spoke; 0.0 for radial.
///
/// `erd` and `flange_diameter` are accepted but unused, with the same open
/// question as [`wrap_angle`].
pub fn theta_angle(
    erd: f64,
    flange_diameter: f64,
    spoke_count: u32,
    cross_pattern: u32,
) -> SpokeResult<f64> {
    let _ = (erd, flange_diameter);
    let theta: Degrees = lacing_angle(spoke_count, cross_pattern)?.into();
    Ok(round_one_decimal(theta.0))
}
