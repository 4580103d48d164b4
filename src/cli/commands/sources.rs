//! Loading the screen catalog and device inventory for a command.

use std::path::Path;

use crate::cli::args::SourceArgs;
use crate::error::Result;
use crate::inventory::{load_inventory, Inventory};
use crate::screens::ScreenCatalog;

/// Load `--screens`, or the built-in catalog.
pub fn load_catalog(project_root: &Path, args: &SourceArgs) -> Result<ScreenCatalog> {
    match &args.screens {
        Some(path) => ScreenCatalog::load(&project_root.join(path)),
        None => ScreenCatalog::embedded(),
    }
}

/// Load `--inventory`, or an empty inventory when none was given.
pub fn load_device_inventory(project_root: &Path, args: &SourceArgs) -> Result<Inventory> {
    match &args.inventory {
        Some(path) => load_inventory(&project_root.join(path)),
        None => {
            tracing::debug!("No inventory given, assuming no devices");
            Ok(Inventory::default())
        }
    }
}
