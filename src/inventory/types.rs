//! Inventory snapshot types.
//!
//! Gathered by collaborators (`flutter devices`, `emulator -list-avds`,
//! `xcrun simctl list`) before validation starts and never mutated here.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::Platform;

/// A device currently attached to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachedDevice {
    /// Device name as reported by the device list
    pub name: String,
    /// Platform the device runs
    pub platform: Platform,
    /// Whether this entry is a running emulator or simulator
    #[serde(default)]
    pub emulator: bool,
    /// Hardware model (e.g. `iPhone 7`)
    #[serde(default)]
    pub model: String,
}

impl AttachedDevice {
    /// Whether this is a real device rather than a running emulator.
    pub fn is_physical(&self) -> bool {
        !self.emulator
    }

    /// Name to show in the guide: the model for iOS devices, the name otherwise.
    pub fn display_name(&self) -> &str {
        match self.platform {
            Platform::Ios if !self.model.is_empty() => &self.model,
            _ => &self.name,
        }
    }
}

/// An installed Android Virtual Device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AndroidEmulator {
    /// Device name the AVD emulates (e.g. `Nexus 6P`)
    pub name: String,
    /// AVD id (e.g. `Nexus_6P_API_28`)
    pub id: String,
}

/// One installed simulator instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatorInstance {
    pub udid: String,
}

/// Installed simulators: device name -> iOS version -> instances.
pub type SimulatorInventory = IndexMap<String, IndexMap<String, Vec<SimulatorInstance>>>;

/// Everything known about the host's devices for one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Inventory {
    /// Attached devices, including running emulators
    pub devices: Vec<AttachedDevice>,
    /// Installed AVDs
    pub emulators: Vec<AndroidEmulator>,
    /// Installed simulators (macOS only)
    pub simulators: SimulatorInventory,
}

impl Inventory {
    /// Physically attached devices, in inventory order.
    pub fn physical_devices(&self) -> impl Iterator<Item = &AttachedDevice> {
        self.devices.iter().filter(|d| d.is_physical())
    }

    /// Whether a real device with this name is attached.
    pub fn is_attached(&self, name: &str) -> bool {
        self.physical_devices().any(|d| d.name == name)
    }

    /// Installed AVDs emulating this device, in inventory order.
    pub fn emulators_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a AndroidEmulator> {
        self.emulators.iter().filter(move |e| e.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(name: &str, platform: Platform, emulator: bool, model: &str) -> AttachedDevice {
        AttachedDevice {
            name: name.to_string(),
            platform,
            emulator,
            model: model.to_string(),
        }
    }

    #[test]
    fn running_emulator_is_not_attached() {
        let inventory = Inventory {
            devices: vec![device("Pixel 4", Platform::Android, true, "")],
            ..Default::default()
        };
        assert!(!inventory.is_attached("Pixel 4"));
        assert_eq!(inventory.physical_devices().count(), 0);
    }

    #[test]
    fn physical_device_is_attached() {
        let inventory = Inventory {
            devices: vec![device("Pixel 4", Platform::Android, false, "Pixel 4")],
            ..Default::default()
        };
        assert!(inventory.is_attached("Pixel 4"));
        assert!(!inventory.is_attached("Pixel 3"));
    }

    #[test]
    fn display_name_uses_model_for_ios() {
        let ios = device("Bob's phone", Platform::Ios, false, "iPhone 7");
        let android = device("Nexus 5X", Platform::Android, false, "LGE Nexus 5X");
        assert_eq!(ios.display_name(), "iPhone 7");
        assert_eq!(android.display_name(), "Nexus 5X");
    }

    #[test]
    fn emulators_named_keeps_order() {
        let inventory = Inventory {
            emulators: vec![
                AndroidEmulator {
                    name: "Nexus 6P".into(),
                    id: "Nexus_6P_API_28".into(),
                },
                AndroidEmulator {
                    name: "Pixel 4".into(),
                    id: "Pixel_4_API_30".into(),
                },
                AndroidEmulator {
                    name: "Nexus 6P".into(),
                    id: "Nexus_6P_API_30".into(),
                },
            ],
            ..Default::default()
        };
        let ids: Vec<_> = inventory
            .emulators_named("Nexus 6P")
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["Nexus_6P_API_28", "Nexus_6P_API_30"]);
    }
}
