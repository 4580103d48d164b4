//! Inventory snapshot loading.
//!
//! Snapshots are YAML or JSON; `.json` files go through `serde_json`,
//! everything else through `serde_yaml`.

use crate::error::{Result, ShotcheckError};
use crate::inventory::types::Inventory;
use std::fs;
use std::path::Path;

/// Load an inventory snapshot from disk.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `InventoryParseError` if the snapshot is malformed.
pub fn load_inventory(path: &Path) -> Result<Inventory> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ShotcheckError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ShotcheckError::Io(e)
        }
    })?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let inventory = if is_json {
        parse_inventory_json(&content, path)?
    } else {
        parse_inventory_yaml(&content, path)?
    };

    tracing::debug!(
        "Loaded inventory from {}: {} devices, {} emulators, {} simulators",
        path.display(),
        inventory.devices.len(),
        inventory.emulators.len(),
        inventory.simulators.len()
    );
    Ok(inventory)
}

/// Parse a YAML inventory snapshot.
pub fn parse_inventory_yaml(content: &str, source_path: &Path) -> Result<Inventory> {
    if content.trim().is_empty() {
        return Ok(Inventory::default());
    }
    serde_yaml::from_str(content).map_err(|e| ShotcheckError::InventoryParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Parse a JSON inventory snapshot.
pub fn parse_inventory_json(content: &str, source_path: &Path) -> Result<Inventory> {
    serde_json::from_str(content).map_err(|e| ShotcheckError::InventoryParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
