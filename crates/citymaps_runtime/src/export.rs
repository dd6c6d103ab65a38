//! Route manifest export.
//!
//! Writes a table's manifest as JSON for the front end's build, and reads
//! one back for inspection.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use citymaps_foundation::{Error, ErrorKind, Result};
use citymaps_router::RouteTable;
use citymaps_router::manifest::{self, RouteManifest};
use tracing::info;

/// Saves the manifest of `table` to a JSON file.
///
/// Creates the file if it doesn't exist, or overwrites it if it does.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to,
/// or if serialization fails.
pub fn save_manifest<P: AsRef<Path>>(table: &RouteTable, path: P) -> Result<()> {
    let path = path.as_ref();
    let json = manifest::to_json(table)?;

    let file = File::create(path).map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to create file '{}': {e}",
            path.display()
        )))
    })?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(json.as_bytes())
        .and_then(|()| writer.write_all(b"\n"))
        .and_then(|()| writer.flush())
        .map_err(|e| {
            Error::new(ErrorKind::IoError(format!(
                "failed to write to file '{}': {e}",
                path.display()
            )))
        })?;

    info!(path = %path.display(), routes = table.len(), "saved route manifest");
    Ok(())
}

/// Loads a manifest from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not hold a manifest.
pub fn load_manifest<P: AsRef<Path>>(path: P) -> Result<Vec<RouteManifest>> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to read file '{}': {e}",
            path.display()
        )))
    })?;
    manifest::from_json(&json).map_err(|e| e.with_context(path.display().to_string()))
}
