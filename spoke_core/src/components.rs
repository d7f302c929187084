//! # Components
//!
//! Rim and hub measurement records, shaped like catalog entries, and the
//! lacing choice for a build. These carry only what the geometry needs
//! plus enough identity to label a build sheet.
//!
//! ## Example
//!
//! ```rust
//! use spoke_core::components::{Hub, HubPosition, Lacing, Rim};
//! use spoke_core::analysis::{full_analysis, WheelSpec};
//!
//! let rim = Rim::new("Velocity", "A23", 578.0).with_iso_size(622);
//! let hub = Hub::new("Shimano", "FH-R7000", HubPosition::Rear)
//!     .with_flanges(45.0, 45.0)
//!     .with_offsets(19.5, 37.0);
//!
//! let spec = WheelSpec::from_components(&rim, &hub, &Lacing::crossed(32, 3));
//! let result = full_analysis(&spec).unwrap();
//! assert!(hub.is_dished());
//! assert!(result.spoke_length_left < result.spoke_length_right);
//! ```

use serde::{Deserialize, Serialize};

use crate::analysis::{WheelSpec, DEFAULT_SPOKE_HOLE_DIAMETER_MM};

fn default_spoke_hole_diameter() -> f64 {
    DEFAULT_SPOKE_HOLE_DIAMETER_MM
}

/// A rim as measured or taken from a reference database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rim {
    pub manufacturer: String,
    pub model: String,

    /// ISO bead seat diameter (e.g., 622 for 700c)
    #[serde(default)]
    pub iso_size: Option<u32>,

    /// Effective rim diameter (mm)
    pub erd: f64,

    /// Asymmetric drilling offset (mm)
    #[serde(default)]
    pub drilling_offset: f64,
}

impl Rim {
    pub fn new(manufacturer: impl Into<String>, model: impl Into<String>, erd: f64) -> Self {
        Rim {
            manufacturer: manufacturer.into(),
            model: model.into(),
            iso_size: None,
            erd,
            drilling_offset: 0.0,
        }
    }

    pub fn with_iso_size(mut self, iso_size: u32) -> Self {
        self.iso_size = Some(iso_size);
        self
    }

    pub fn with_drilling_offset(mut self, drilling_offset: f64) -> Self {
        self.drilling_offset = drilling_offset;
        self
    }

    /// "Manufacturer Model"
    pub fn label(&self) -> String {
        format!("{} {}", self.manufacturer, self.model)
    }
}

/// Which end of the bike a hub belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HubPosition {
    #[default]
    Front,
    Rear,
}

impl HubPosition {
    pub fn display_name(&self) -> &'static str {
        match self {
            HubPosition::Front => "Front",
            HubPosition::Rear => "Rear",
        }
    }
}

/// A hub's flange measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hub {
    pub manufacturer: String,
    pub model: String,

    #[serde(default)]
    pub position: HubPosition,

    /// Flange pitch-circle diameters (mm)
    pub flange_diameter_left: f64,
    pub flange_diameter_right: f64,

    /// Hub center to flange (mm)
    pub flange_offset_left: f64,
    pub flange_offset_right: f64,

    /// Flange hole diameter (mm), usually 2.4 or 2.6
    #[serde(default = "default_spoke_hole_diameter")]
    pub spoke_hole_diameter: f64,

    /// Drilled hole count, when known
    #[serde(default)]
    pub spoke_count: Option<u32>,
}

impl Hub {
    /// New hub with zeroed flange measurements; fill them with the `with_*` builders.
    pub fn new(
        manufacturer: impl Into<String>,
        model: impl Into<String>,
        position: HubPosition,
    ) -> Self {
        Hub {
            manufacturer: manufacturer.into(),
            model: model.into(),
            position,
            flange_diameter_left: 0.0,
            flange_diameter_right: 0.0,
            flange_offset_left: 0.0,
            flange_offset_right: 0.0,
            spoke_hole_diameter: DEFAULT_SPOKE_HOLE_DIAMETER_MM,
            spoke_count: None,
        }
    }

    pub fn with_flanges(mut self, left: f64, right: f64) -> Self {
        self.flange_diameter_left = left;
        self.flange_diameter_right = right;
        self
    }

    pub fn with_offsets(mut self, left: f64, right: f64) -> Self {
        self.flange_offset_left = left;
        self.flange_offset_right = right;
        self
    }

    pub fn with_spoke_hole_diameter(mut self, diameter: f64) -> Self {
        self.spoke_hole_diameter = diameter;
        self
    }

    pub fn with_spoke_count(mut self, count: u32) -> Self {
        self.spoke_count = Some(count);
        self
    }

    /// "Manufacturer Model"
    pub fn label(&self) -> String {
        format!("{} {}", self.manufacturer, self.model)
    }

    /// Right minus left flange offset (mm). Positive for a typical
    /// drive-side-right rear hub.
    pub fn dish_mm(&self) -> f64 {
        self.flange_offset_right - self.flange_offset_left
    }

    pub fn is_dished(&self) -> bool {
        self.dish_mm().abs() > f64::EPSILON
    }
}

/// Spoke count and cross pattern per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lacing {
    pub spoke_count: u32,
    pub cross_pattern_left: u32,
    pub cross_pattern_right: u32,
}

impl Lacing {
    /// Same cross count on both sides.
    pub fn crossed(spoke_count: u32, cross_pattern: u32) -> Self {
        Lacing {
            spoke_count,
            cross_pattern_left: cross_pattern,
            cross_pattern_right: cross_pattern,
        }
    }

    /// Different cross counts per side (e.g., radial left, 2-cross right).
    pub fn mixed(spoke_count: u32, cross_pattern_left: u32, cross_pattern_right: u32) -> Self {
        Lacing {
            spoke_count,
            cross_pattern_left,
            cross_pattern_right,
        }
    }
}

/// Human label for a cross count: "radial" or "3-cross".
pub fn describe_cross(cross_pattern: u32) -> String {
    match cross_pattern {
        0 => "radial".to_string(),
        n => format!("{}-cross", n),
    }
}

impl WheelSpec {
    /// Assemble a wheel from catalog components and a lacing choice.
    pub fn from_components(rim: &Rim, hub: &Hub, lacing: &Lacing) -> Self {
        WheelSpec {
            erd: rim.erd,
            flange_diameter_left: hub.flange_diameter_left,
            flange_diameter_right: hub.flange_diameter_right,
            flange_offset_left: hub.flange_offset_left,
            flange_offset_right: hub.flange_offset_right,
            spoke_count: lacing.spoke_count,
            cross_pattern_left: lacing.cross_pattern_left,
            cross_pattern_right: lacing.cross_pattern_right,
            spoke_hole_diameter: hub.spoke_hole_diameter,
            rim_offset: rim.drilling_offset,
        }
    }
}
