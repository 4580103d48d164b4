//! Device presence resolution.
//!
//! A configured device is usable if a real device with that name is
//! attached, or a matching emulator (Android) or simulator (iOS) is
//! installed. Ambiguous emulator/simulator matches are resolved with a
//! fixed tie-break and reported as warnings, never as failures.

pub mod android;
pub mod ios;

pub use android::resolve_android;
pub use ios::resolve_ios;

use crate::config::Platform;
use crate::error::Result;
use crate::host::HostPlatform;
use crate::inventory::Inventory;

/// How a configured device was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A real device with this name is attached.
    Attached,
    /// An installed AVD will be started.
    Emulator { id: String },
    /// An installed simulator will be booted.
    Simulator { version: String, udid: String },
}

/// Result of resolving one device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevicePresence {
    pub resolution: Resolution,
    /// Set when the match was ambiguous and a tie-break was applied
    pub warning: Option<String>,
}

impl DevicePresence {
    fn found(resolution: Resolution) -> Self {
        Self {
            resolution,
            warning: None,
        }
    }
}

/// Resolve a device on its platform.
///
/// # Errors
///
/// Returns `DeviceUnavailable` when nothing on the host matches the name.
pub fn resolve(
    platform: Platform,
    device_name: &str,
    inventory: &Inventory,
    host: HostPlatform,
) -> Result<DevicePresence> {
    match platform {
        Platform::Android => resolve_android(device_name, inventory),
        Platform::Ios => resolve_ios(device_name, inventory, host),
    }
}
