//! Configuration schema definitions for shotcheck.
//!
//! This module contains the struct definitions that map to the
//! `screenshots.yaml` file format.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Root configuration structure for screenshots.yaml
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScreenshotsConfig {
    /// Test invocations, run in declaration order
    pub tests: Vec<String>,

    /// Devices to capture on, per platform
    pub devices: DevicesConfig,

    /// Global framing default, overridden per device by `frame`
    pub frame: bool,

    /// Staging directory used by the capture pipeline
    pub staging: Option<PathBuf>,

    /// Locales to capture
    pub locales: Vec<String>,
}

impl Default for ScreenshotsConfig {
    fn default() -> Self {
        Self {
            tests: Vec::new(),
            devices: DevicesConfig::default(),
            frame: true,
            staging: None,
            locales: Vec::new(),
        }
    }
}

impl ScreenshotsConfig {
    /// Iterate over every configured device, android first, in declaration order.
    pub fn all_devices(&self) -> impl Iterator<Item = (Platform, &str, &DeviceEntry)> {
        Platform::ALL.into_iter().flat_map(move |platform| {
            self.devices
                .section(platform)
                .iter()
                .map(move |(name, entry)| (platform, name.as_str(), entry))
        })
    }
}

/// Per-platform device sections.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DevicesConfig {
    pub android: IndexMap<String, DeviceEntry>,
    pub ios: IndexMap<String, DeviceEntry>,
}

impl DevicesConfig {
    /// Device section for a platform.
    pub fn section(&self, platform: Platform) -> &IndexMap<String, DeviceEntry> {
        match platform {
            Platform::Android => &self.android,
            Platform::Ios => &self.ios,
        }
    }
}

/// Mobile platform a device belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Ios,
}

impl Platform {
    /// All platforms in validation order.
    pub const ALL: [Platform; 2] = [Platform::Android, Platform::Ios];

    /// What a virtual device is called on this platform.
    pub fn virtual_kind(&self) -> &'static str {
        match self {
            Platform::Android => "emulator",
            Platform::Ios => "simulator",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Android => write!(f, "android"),
            Platform::Ios => write!(f, "ios"),
        }
    }
}

/// A raw YAML field that may be missing, present with a value, or present but null.
///
/// `Option<serde_yaml::Value>` cannot express the difference between a
/// missing key and `key:` with no value, which the field validator needs.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FieldValue {
    #[default]
    Absent,
    Present(serde_yaml::Value),
}

impl FieldValue {
    /// Whether the key was written in the config at all.
    pub fn is_present(&self) -> bool {
        matches!(self, FieldValue::Present(_))
    }

    /// Render the raw value for diagnostics.
    pub fn display_value(&self) -> String {
        match self {
            FieldValue::Absent => String::new(),
            FieldValue::Present(serde_yaml::Value::String(s)) => s.clone(),
            FieldValue::Present(serde_yaml::Value::Null) => "null".to_string(),
            FieldValue::Present(other) => serde_yaml::to_string(other)
                .map(|s| s.trim().to_string())
                .unwrap_or_default(),
        }
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_yaml::Value::deserialize(deserializer).map(FieldValue::Present)
    }
}

/// Settings for a single configured device, as written in the config.
///
/// A device key with no body (`Nexus 5X:`) deserializes to an entry with
/// every field absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Option<DeviceBody>")]
pub struct DeviceEntry {
    /// Raw `orientation` value
    pub orientation: FieldValue,
    /// Raw `frame` value
    pub frame: FieldValue,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DeviceBody {
    orientation: FieldValue,
    frame: FieldValue,
}

impl From<Option<DeviceBody>> for DeviceEntry {
    fn from(body: Option<DeviceBody>) -> Self {
        let body = body.unwrap_or_default();
        Self {
            orientation: body.orientation,
            frame: body.frame,
        }
    }
}

/// Validated device settings produced by the field validator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeviceSettings {
    pub orientation: Option<Orientation>,
    pub frame: Option<bool>,
}

/// Screen orientation a device can be rotated to before capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    LandscapeLeft,
    LandscapeRight,
    PortraitUpsideDown,
}

impl Orientation {
    /// Every orientation, in declared order.
    pub const ALL: [Orientation; 4] = [
        Orientation::Portrait,
        Orientation::LandscapeLeft,
        Orientation::LandscapeRight,
        Orientation::PortraitUpsideDown,
    ];

    /// Canonical config spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::LandscapeLeft => "landscapeLeft",
            Orientation::LandscapeRight => "landscapeRight",
            Orientation::PortraitUpsideDown => "portraitUpsideDown",
        }
    }

    /// Canonical names of every orientation, in declared order.
    pub fn names() -> Vec<String> {
        Self::ALL.iter().map(|o| o.as_str().to_string()).collect()
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| format!("unknown orientation: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let yaml = r#"
tests:
  - --driver test_driver/main.dart --target test/main_test.dart
  - integration_test/app_test.dart
staging: /tmp/screenshots
locales: [en-US, de-DE]
frame: false
devices:
  android:
    Nexus 6P:
      orientation: landscapeRight
    Pixel 4:
      frame: true
  ios:
    iPhone X:
"#;
        let config: ScreenshotsConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.tests.len(), 2);
        assert!(!config.frame);
        assert_eq!(config.locales, vec!["en-US", "de-DE"]);
        assert_eq!(config.staging, Some(PathBuf::from("/tmp/screenshots")));

        let android: Vec<_> = config.devices.android.keys().cloned().collect();
        assert_eq!(android, vec!["Nexus 6P", "Pixel 4"]);
        assert_eq!(
            config.devices.android["Nexus 6P"].orientation,
            FieldValue::Present(serde_yaml::Value::String("landscapeRight".into()))
        );
        assert_eq!(config.devices.ios["iPhone X"], DeviceEntry::default());
    }

    #[test]
    fn frame_defaults_to_true() {
        let config: ScreenshotsConfig = serde_yaml::from_str("tests: []").unwrap();
        assert!(config.frame);
        assert!(config.devices.android.is_empty());
        assert!(config.devices.ios.is_empty());
    }

    #[test]
    fn distinguishes_absent_from_null() {
        let yaml = "devices:\n  android:\n    Pixel 4:\n      frame:\n";
        let config: ScreenshotsConfig = serde_yaml::from_str(yaml).unwrap();
        let entry = &config.devices.android["Pixel 4"];
        assert_eq!(entry.frame, FieldValue::Present(serde_yaml::Value::Null));
        assert_eq!(entry.orientation, FieldValue::Absent);
    }

    #[test]
    fn all_devices_preserves_declaration_order() {
        let yaml = r#"
devices:
  ios:
    iPhone 8: {}
  android:
    Pixel 4: {}
    Nexus 5X: {}
"#;
        let config: ScreenshotsConfig = serde_yaml::from_str(yaml).unwrap();
        let names: Vec<_> = config
            .all_devices()
            .map(|(platform, name, _)| format!("{}:{}", platform, name))
            .collect();
        assert_eq!(names, vec!["android:Pixel 4", "android:Nexus 5X", "ios:iPhone 8"]);
    }

    #[test]
    fn orientation_names_in_declared_order() {
        assert_eq!(
            Orientation::names(),
            vec![
                "portrait",
                "landscapeLeft",
                "landscapeRight",
                "portraitUpsideDown"
            ]
        );
    }

    #[test]
    fn orientation_from_str_is_case_sensitive() {
        assert_eq!(
            "landscapeLeft".parse::<Orientation>(),
            Ok(Orientation::LandscapeLeft)
        );
        assert!("LandscapeLeft".parse::<Orientation>().is_err());
        assert!("portrait ".parse::<Orientation>().is_err());
    }

    #[test]
    fn display_value_renders_non_strings() {
        assert_eq!(
            FieldValue::Present(serde_yaml::Value::from(42)).display_value(),
            "42"
        );
        assert_eq!(
            FieldValue::Present(serde_yaml::Value::Null).display_value(),
            "null"
        );
        assert_eq!(
            FieldValue::Present(serde_yaml::Value::String("yes".into())).display_value(),
            "yes"
        );
    }

    #[test]
    fn platform_display() {
        assert_eq!(Platform::Android.to_string(), "android");
        assert_eq!(Platform::Ios.to_string(), "ios");
    }
}
