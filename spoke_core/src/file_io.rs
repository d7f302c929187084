//! # File I/O Module
//!
//! JSON helpers for reading wheel measurements and writing analysis
//! results. The engine itself never touches the filesystem; these exist
//! for callers such as the CLI.
//!
//! Saves are atomic: write to `<name>.tmp`, sync, then rename over the
//! target so an interrupted write never leaves a truncated file.
//!
//! ## Example
//!
//! ```rust,no_run
//! use spoke_core::analysis::full_analysis;
//! use spoke_core::file_io::{load_wheel_spec, save_json};
//! use std::path::Path;
//!
//! let spec = load_wheel_spec(Path::new("rear_wheel.json"))?;
//! let result = full_analysis(&spec)?;
//! save_json(&result, Path::new("rear_wheel.result.json"))?;
//! # Ok::<(), spoke_core::errors::SpokeError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::analysis::WheelSpec;
use crate::errors::{SpokeError, SpokeResult};

/// Read and parse any JSON document.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> SpokeResult<T> {
    let contents = fs::read_to_string(path)
        .map_err(|e| SpokeError::file_error("read", path.display().to_string(), e.to_string()))?;

    serde_json::from_str(&contents)
        .map_err(|e| SpokeError::serialization(format!("Invalid JSON in {}: {}", path.display(), e)))
}

/// Load a [`WheelSpec`], applying the hole-diameter and rim-offset defaults
/// for absent fields.
pub fn load_wheel_spec(path: &Path) -> SpokeResult<WheelSpec> {
    let spec: WheelSpec = load_json(path)?;
    debug!(path = %path.display(), "loaded wheel spec");
    Ok(spec)
}

/// Write a value as pretty JSON with atomic write semantics.
pub fn save_json<T: Serialize>(value: &T, path: &Path) -> SpokeResult<()> {
    let json = serde_json::to_string_pretty(value)?;

    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        SpokeError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        SpokeError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        SpokeError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;
    drop(tmp_file);

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        SpokeError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    debug!(path = %path.display(), "saved json");
    Ok(())
}

/// `result.json` -> `result.json.tmp`
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp_path = path.to_path_buf();
    let extension = path
        .extension()
        .map(|e| format!("{}.tmp", e.to_string_lossy()))
        .unwrap_or_else(|| "tmp".to_string());
    tmp_path.set_extension(extension);
    tmp_path
}
