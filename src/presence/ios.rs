//! iOS device presence.

use crate::config::Platform;
use crate::error::{Result, ShotcheckError};
use crate::host::HostPlatform;
use crate::inventory::{highest_version, Inventory};

use super::{DevicePresence, Resolution};

/// Resolve an iOS device against attached devices and installed simulators.
///
/// An attached real device wins. Otherwise, on macOS, the simulator with
/// the highest iOS version is used, taking the first instance at that
/// version. More than one version, or more than one instance at the chosen
/// version, produces a warning.
pub fn resolve_ios(device_name: &str, inventory: &Inventory, host: HostPlatform) -> Result<DevicePresence> {
    if inventory.is_attached(device_name) {
        tracing::debug!("iOS device '{}' is attached", device_name);
        return Ok(DevicePresence::found(Resolution::Attached));
    }

    let unavailable = || ShotcheckError::DeviceUnavailable {
        platform: Platform::Ios,
        device: device_name.to_string(),
    };

    if !host.is_macos() {
        return Err(unavailable());
    }

    let versions = inventory.simulators.get(device_name).ok_or_else(unavailable)?;
    let version = highest_version(versions.keys().map(String::as_str)).ok_or_else(unavailable)?;
    let instances = &versions[version];
    let simulator = instances.first().ok_or_else(unavailable)?;

    let warning = (versions.len() > 1 || instances.len() > 1).then(|| {
        format!(
            "'{}' has multiple simulators, using {} with udid {}",
            device_name, version, simulator.udid
        )
    });

    tracing::debug!(
        "iOS device '{}' resolved to simulator {} ({})",
        device_name,
        simulator.udid,
        version
    );
    Ok(DevicePresence {
        resolution: Resolution::Simulator {
            version: version.to_string(),
            udid: simulator.udid.clone(),
        },
        warning,
    })
}
