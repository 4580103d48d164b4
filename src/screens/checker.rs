//! Screen availability check for devices that will be framed.

use std::path::Path;

use crate::error::{Result, ShotcheckError};
use crate::screens::catalog::ScreenCatalog;

/// Check that a device has a display-capable screen in the catalog.
///
/// Only called for devices that need framing.
///
/// # Errors
///
/// Returns `ScreenUnavailable` if the device is not in the catalog, or is
/// only listed under a model-identification record.
pub fn check_screen_available(
    catalog: &ScreenCatalog,
    device_name: &str,
    config_path: &Path,
) -> Result<()> {
    match catalog.screen_for(device_name) {
        Some(hit) if hit.properties.is_display() => {
            tracing::debug!(
                "Device '{}' uses {} screen '{}'",
                device_name,
                hit.platform,
                hit.screen_id
            );
            Ok(())
        }
        _ => Err(ShotcheckError::ScreenUnavailable {
            device: device_name.to_string(),
            config_path: config_path.to_path_buf(),
        }),
    }
}
