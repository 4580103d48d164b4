//! Android device presence.

use crate::config::Platform;
use crate::error::{Result, ShotcheckError};
use crate::inventory::Inventory;

use super::{DevicePresence, Resolution};

/// Resolve an Android device against attached devices and installed AVDs.
///
/// An attached real device wins. Otherwise the first AVD with a matching
/// name is used; more than one matching AVD produces a warning.
pub fn resolve_android(device_name: &str, inventory: &Inventory) -> Result<DevicePresence> {
    if inventory.is_attached(device_name) {
        tracing::debug!("Android device '{}' is attached", device_name);
        return Ok(DevicePresence::found(Resolution::Attached));
    }

    let mut avds = inventory.emulators_named(device_name);
    let Some(first) = avds.next() else {
        return Err(ShotcheckError::DeviceUnavailable {
            platform: Platform::Android,
            device: device_name.to_string(),
        });
    };

    let warning = avds.next().is_some().then(|| {
        format!(
            "'{}' has multiple avd versions, using id {}",
            device_name, first.id
        )
    });

    tracing::debug!("Android device '{}' resolved to avd {}", device_name, first.id);
    Ok(DevicePresence {
        resolution: Resolution::Emulator {
            id: first.id.clone(),
        },
        warning,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{AndroidEmulator, AttachedDevice};

    fn avd(name: &str, id: &str) -> AndroidEmulator {
        AndroidEmulator {
            name: name.to_string(),
            id: id.to_string(),
        }
    }

    fn attached(name: &str, emulator: bool) -> AttachedDevice {
        AttachedDevice {
            name: name.to_string(),
            platform: Platform::Android,
            emulator,
            model: String::new(),
        }
    }

    #[test]
    fn attached_device_is_present() {
        let inventory = Inventory {
            devices: vec![attached("Nexus 5X", false)],
            ..Default::default()
        };
        let presence = resolve_android("Nexus 5X", &inventory).unwrap();
        assert_eq!(presence.resolution, Resolution::Attached);
        assert!(presence.warning.is_none());
    }

    #[test]
    fn running_emulator_does_not_count_as_attached() {
        let inventory = Inventory {
            devices: vec![attached("Nexus 5X", true)],
            ..Default::default()
        };
        let err = resolve_android("Nexus 5X", &inventory).unwrap_err();
        assert!(matches!(err, ShotcheckError::DeviceUnavailable { .. }));
    }

    #[test]
    fn single_avd_is_present_without_warning() {
        let inventory = Inventory {
            emulators: vec![avd("Nexus 6P", "Nexus_6P_API_28")],
            ..Default::default()
        };
        let presence = resolve_android("Nexus 6P", &inventory).unwrap();
        assert_eq!(
            presence.resolution,
            Resolution::Emulator {
                id: "Nexus_6P_API_28".into()
            }
        );
        assert!(presence.warning.is_none());
    }

    #[test]
    fn multiple_avds_warn_with_first_id() {
        let inventory = Inventory {
            emulators: vec![
                avd("Nexus 6P", "Nexus_6P_API_28"),
                avd("Nexus 6P", "Nexus_6P_API_30"),
            ],
            ..Default::default()
        };
        let presence = resolve_android("Nexus 6P", &inventory).unwrap();
        assert_eq!(
            presence.resolution,
            Resolution::Emulator {
                id: "Nexus_6P_API_28".into()
            }
        );
        let warning = presence.warning.unwrap();
        assert!(warning.contains("Nexus 6P"));
        assert!(warning.contains("multiple avd versions"));
        assert!(warning.contains("Nexus_6P_API_28"));
        assert!(!warning.contains("Nexus_6P_API_30"));
    }

    #[test]
    fn attached_device_skips_avd_ambiguity() {
        let inventory = Inventory {
            devices: vec![attached("Nexus 6P", false)],
            emulators: vec![avd("Nexus 6P", "a"), avd("Nexus 6P", "b")],
            ..Default::default()
        };
        let presence = resolve_android("Nexus 6P", &inventory).unwrap();
        assert_eq!(presence.resolution, Resolution::Attached);
        assert!(presence.warning.is_none());
    }

    #[test]
    fn missing_device_is_unavailable() {
        let inventory = Inventory {
            emulators: vec![avd("Pixel 4", "Pixel_4_API_30")],
            ..Default::default()
        };
        match resolve_android("Nexus 9", &inventory).unwrap_err() {
            ShotcheckError::DeviceUnavailable { platform, device } => {
                assert_eq!(platform, Platform::Android);
                assert_eq!(device, "Nexus 9");
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
