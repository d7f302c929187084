//! # Build Sheet
//!
//! Bundles the components, lacing and analysis for one wheel build and
//! renders them as a plain-text sheet for the workshop bench.
//!
//! ## Example
//!
//! ```rust
//! use spoke_core::build_sheet::{BuildSheet, BuildSheetRequest};
//! use spoke_core::components::{Hub, HubPosition, Lacing, Rim};
//!
//! let request = BuildSheetRequest {
//!     customer_name: "A. Rider".to_string(),
//!     rim: Rim::new("DT Swiss", "RR 411", 600.0),
//!     hub: Hub::new("Novatec", "F482SB", HubPosition::Front)
//!         .with_flanges(45.0, 45.0)
//!         .with_offsets(35.0, 35.0),
//!     lacing: Lacing::crossed(32, 3),
//!     customer_notes: None,
//! };
//!
//! let sheet = BuildSheet::prepare(request).unwrap();
//! assert!(sheet.render_text().contains("292 mm"));
//! ```

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::analysis::{full_analysis, AnalysisResult, WheelSpec};
use crate::components::{describe_cross, Hub, Lacing, Rim};
use crate::errors::{SpokeError, SpokeResult};

/// Everything needed to prepare a build sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildSheetRequest {
    pub customer_name: String,
    pub rim: Rim,
    pub hub: Hub,
    pub lacing: Lacing,
    #[serde(default)]
    pub customer_notes: Option<String>,
}

/// A prepared build: the request plus its analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildSheet {
    #[serde(flatten)]
    pub request: BuildSheetRequest,
    pub result: AnalysisResult,
}

impl BuildSheet {
    /// Run the analysis for the requested components.
    ///
    /// A hub with a known drilling must match the lacing's spoke count.
    pub fn prepare(request: BuildSheetRequest) -> SpokeResult<Self> {
        if let Some(drilled) = request.hub.spoke_count {
            if drilled != request.lacing.spoke_count {
                return Err(SpokeError::invalid_dimension(
                    "spoke_count",
                    request.lacing.spoke_count.to_string(),
                    format!("{} is drilled {}h", request.hub.label(), drilled),
                ));
            }
        }
        let spec = WheelSpec::from_components(&request.rim, &request.hub, &request.lacing);
        let result = full_analysis(&spec)?;
        Ok(BuildSheet { request, result })
    }

    /// Render as plain text.
    pub fn render_text(&self) -> String {
        let req = &self.request;
        let r = &self.result;
        let mut out = String::new();

        // Writing to a String cannot fail
        let _ = writeln!(out, "WHEEL BUILD SHEET");
        let _ = writeln!(out, "=================");
        let _ = writeln!(out, "Customer: {}", req.customer_name);
        let _ = writeln!(out);

        let _ = writeln!(out, "Components");
        let iso = req
            .rim
            .iso_size
            .map(|iso| format!(", ISO {}", iso))
            .unwrap_or_default();
        let _ = writeln!(out, "  Rim:    {} (ERD {:.1} mm{})", req.rim.label(), req.rim.erd, iso);
        if req.rim.drilling_offset != 0.0 {
            let _ = writeln!(out, "          drilling offset {:.1} mm", req.rim.drilling_offset);
        }
        let _ = writeln!(
            out,
            "  Hub:    {} ({})",
            req.hub.label(),
            req.hub.position.display_name()
        );
        let _ = writeln!(
            out,
            "  Lacing: {} spokes, left {}, right {}",
            req.lacing.spoke_count,
            describe_cross(req.lacing.cross_pattern_left),
            describe_cross(req.lacing.cross_pattern_right)
        );
        let _ = writeln!(out);

        let _ = writeln!(out, "Spoke Lengths to Order");
        if r.same_length_both_sides() {
            let _ = writeln!(
                out,
                "  Both:   {:.0} mm x {}",
                r.spoke_length_left_rounded, req.lacing.spoke_count
            );
        } else {
            let per_side = req.lacing.spoke_count / 2;
            let _ = writeln!(out, "  Left:   {:.0} mm x {}", r.spoke_length_left_rounded, per_side);
            let _ = writeln!(out, "  Right:  {:.0} mm x {}", r.spoke_length_right_rounded, per_side);
        }
        let _ = writeln!(
            out,
            "  (calculated {:.1} / {:.1} mm)",
            r.spoke_length_left, r.spoke_length_right
        );
        let _ = writeln!(out);

        let _ = writeln!(out, "{:<22}{:>8}{:>8}", "Analysis", "Left", "Right");
        for (label, left, right) in analysis_rows(r) {
            let _ = writeln!(out, "  {:<20}{:>8.1}{:>8.1}", label, left, right);
        }

        if let Some(notes) = req.customer_notes.as_deref().filter(|n| !n.trim().is_empty()) {
            let _ = writeln!(out);
            let _ = writeln!(out, "Notes");
            for line in notes.lines() {
                let _ = writeln!(out, "  {}", line);
            }
        }

        out
    }
}

fn analysis_rows(r: &AnalysisResult) -> [(&'static str, f64, f64); 5] {
    [
        ("Tension (%)", r.tension_percent_left, r.tension_percent_right),
        ("Bracing angle (deg)", r.bracing_angle_left, r.bracing_angle_right),
        ("Wrap angle (deg)", r.wrap_angle_left, r.wrap_angle_right),
        ("Total angle (deg)", r.total_angle_left, r.total_angle_right),
        ("Theta angle (deg)", r.theta_angle_left, r.theta_angle_right),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::HubPosition;

    fn rear_request() -> BuildSheetRequest {
        BuildSheetRequest {
            customer_name: "Sam Example".to_string(),
            rim: Rim::new("DT Swiss", "RR 411", 600.0).with_iso_size(622),
            hub: Hub::new("Shimano", "FH-R7000", HubPosition::Rear)
                .with_flanges(45.0, 45.0)
                .with_offsets(20.5, 37.5),
            lacing: Lacing::crossed(32, 3),
            customer_notes: Some("Tubeless tape installed".to_string()),
        }
    }

    #[test]
    fn test_prepare_runs_analysis() {
        let sheet = BuildSheet::prepare(rear_request()).unwrap();
        assert_eq!(sheet.result.spoke_length_left_rounded, 292.0);
        assert_eq!(sheet.result.spoke_length_right_rounded, 294.0);
    }

    #[test]
    fn test_render_dished_wheel() {
        let text = BuildSheet::prepare(rear_request()).unwrap().render_text();
        assert!(text.contains("Customer: Sam Example"));
        assert!(text.contains("DT Swiss RR 411 (ERD 600.0 mm, ISO 622)"));
        assert!(text.contains("Shimano FH-R7000 (Rear)"));
        assert!(text.contains("left 3-cross, right 3-cross"));
        assert!(text.contains("Left:   292 mm x 16"));
        assert!(text.contains("Right:  294 mm x 16"));
        assert!(text.contains("54.7"));
        assert!(text.contains("Tubeless tape installed"));
    }

    #[test]
    fn test_render_symmetric_wheel_orders_one_length() {
        let mut request = rear_request();
        request.hub = request.hub.with_offsets(35.0, 35.0);
        request.customer_notes = None;

        let text = BuildSheet::prepare(request).unwrap().render_text();
        assert!(text.contains("Both:   292 mm x 32"));
        assert!(!text.contains("Notes"));
    }

    #[test]
    fn test_prepare_propagates_faults() {
        let mut request = rear_request();
        request.lacing = Lacing::crossed(0, 3);
        let err = BuildSheet::prepare(request).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DIMENSION");
    }

    #[test]
    fn test_prepare_checks_hub_drilling() {
        let mut request = rear_request();
        request.hub = request.hub.with_spoke_count(28);
        let err = BuildSheet::prepare(request).unwrap_err();
        assert!(matches!(
            err,
            SpokeError::InvalidDimension { ref field, ref reason, .. }
                if field == "spoke_count" && reason == "Shimano FH-R7000 is drilled 28h"
        ));

        let mut request = rear_request();
        request.hub = request.hub.with_spoke_count(32);
        assert!(BuildSheet::prepare(request).is_ok());
    }

    #[test]
    fn test_request_from_json() {
        let json = r#"{
            "customer_name": "Walk-in",
            "rim": { "manufacturer": "Mavic", "model": "Open Pro", "erd": 602.0 },
            "hub": {
                "manufacturer": "Shimano",
                "model": "HB-RS470",
                "flange_diameter_left": 44.0,
                "flange_diameter_right": 44.0,
                "flange_offset_left": 35.0,
                "flange_offset_right": 35.0
            },
            "lacing": { "spoke_count": 32, "cross_pattern_left": 3, "cross_pattern_right": 3 }
        }"#;
        let request: BuildSheetRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.customer_notes, None);
        assert!(BuildSheet::prepare(request).is_ok());
    }
}
