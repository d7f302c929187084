//! # spoke_core - Wheel Geometry Calculation Engine
//!
//! `spoke_core` derives spoke lengths and the secondary geometry of a
//! laced bicycle wheel (bracing, wrap and hub angles, tension split) from
//! rim and hub measurements. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions, safe to call from any number of threads
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Faults are reported, never silently corrected
//!
//! ## Quick Start
//!
//! ```rust
//! use spoke_core::{full_analysis, WheelSpec};
//!
//! let spec = WheelSpec {
//!     erd: 600.0,
//!     flange_diameter_left: 45.0,
//!     flange_diameter_right: 45.0,
//!     flange_offset_left: 20.5,
//!     flange_offset_right: 37.5,
//!     spoke_count: 32,
//!     cross_pattern_left: 3,
//!     cross_pattern_right: 3,
//!     spoke_hole_diameter: 2.6,
//!     rim_offset: 0.0,
//! };
//!
//! let result = full_analysis(&spec).unwrap();
//! assert_eq!(result.spoke_length_left_rounded, 292.0);
//! assert_eq!(result.spoke_length_right_rounded, 294.0);
//! ```
//!
//! ## Modules
//!
//! - [`analysis`] - `WheelSpec`, `AnalysisResult` and the `full_analysis` entry point
//! - [`geometry`] - Per-side formulas (spoke length, angles, tension)
//! - [`components`] - Rim, hub and lacing records
//! - [`build_sheet`] - Printable build summary
//! - [`units`] - Unit newtypes
//! - [`errors`] - Structured error types
//! - [`file_io`] - JSON load and atomic save helpers

pub mod analysis;
pub mod build_sheet;
pub mod components;
pub mod errors;
pub mod file_io;
pub mod geometry;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use analysis::{full_analysis, AnalysisResult, WheelSpec};
pub use errors::{SpokeError, SpokeResult};
