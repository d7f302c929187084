//! # Error Types
//!
//! Structured error types for spoke_core. The geometry engine only ever
//! reports two kinds of fault (bad dimensions and impossible triangles);
//! the remaining variants belong to the JSON file helpers.
//!
//! ## Example
//!
//! ```rust
//! use spoke_core::errors::{SpokeError, SpokeResult};
//!
//! fn validate_erd(erd: f64) -> SpokeResult<()> {
//!     if erd <= 0.0 {
//!         return Err(SpokeError::invalid_dimension(
//!             "erd",
//!             erd.to_string(),
//!             "ERD must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_erd(0.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for spoke_core operations
pub type SpokeResult<T> = Result<T, SpokeError>;

/// Structured error type for wheel calculations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum SpokeError {
    /// A dimension the geometry depends on is zero, negative, non-finite,
    /// or (for spoke counts) not evenly divisible between the two sides.
    #[error("Invalid dimension for '{field}': {value} - {reason}")]
    InvalidDimension {
        field: String,
        value: String,
        reason: String,
    },

    /// The hub/rim triangle has no real solution for the given offsets.
    #[error("Degenerate spoke triangle on {side} side (radicand {radicand})")]
    DegenerateTriangle { side: String, radicand: f64 },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl SpokeError {
    /// Create an InvalidDimension error
    pub fn invalid_dimension(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        SpokeError::InvalidDimension {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a DegenerateTriangle error
    pub fn degenerate_triangle(side: impl Into<String>, radicand: f64) -> Self {
        SpokeError::DegenerateTriangle {
            side: side.into(),
            radicand,
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        SpokeError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        SpokeError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Attribute a triangle fault to a wheel side. Other variants pass through.
    pub fn on_side(self, side: impl Into<String>) -> Self {
        match self {
            SpokeError::DegenerateTriangle { radicand, .. } => {
                SpokeError::degenerate_triangle(side, radicand)
            }
            other => other,
        }
    }

    /// Whether the fault comes from the measurements rather than the environment.
    /// The CLI uses this to point the user back at their inputs.
    pub fn is_input_fault(&self) -> bool {
        matches!(
            self,
            SpokeError::InvalidDimension { .. } | SpokeError::DegenerateTriangle { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            SpokeError::InvalidDimension { .. } => "INVALID_DIMENSION",
            SpokeError::DegenerateTriangle { .. } => "DEGENERATE_TRIANGLE",
            SpokeError::FileError { .. } => "FILE_ERROR",
            SpokeError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for SpokeError {
    fn from(err: serde_json::Error) -> Self {
        SpokeError::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = SpokeError::invalid_dimension("erd", "0", "ERD must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidDimension\""));
        let roundtrip: SpokeError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            SpokeError::degenerate_triangle("left", -4.0).error_code(),
            "DEGENERATE_TRIANGLE"
        );
        assert_eq!(
            SpokeError::file_error("read", "wheel.json", "not found").error_code(),
            "FILE_ERROR"
        );
    }

    #[test]
    fn test_on_side_relabels_triangle_only() {
        let err = SpokeError::degenerate_triangle("unspecified", -1.5).on_side("right");
        assert_eq!(err, SpokeError::degenerate_triangle("right", -1.5));

        let err = SpokeError::serialization("eof").on_side("left");
        assert_eq!(err, SpokeError::serialization("eof"));
    }

    #[test]
    fn test_input_faults() {
        assert!(SpokeError::invalid_dimension("spoke_count", "0", "zero").is_input_fault());
        assert!(!SpokeError::serialization("eof").is_input_fault());
    }

    #[test]
    fn test_display_names_field() {
        let error = SpokeError::invalid_dimension("flange_diameter_left", "-1", "must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid dimension for 'flange_diameter_left': -1 - must be positive"
        );
    }
}
