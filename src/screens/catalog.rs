//! Screen catalog: the screens shotcheck knows how to frame.

use crate::config::Platform;
use crate::error::{Result, ShotcheckError};
use include_dir::{include_dir, Dir};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Embedded resources directory.
static RESOURCES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/resources");

const EMBEDDED_CATALOG: &str = "resources/screens.yaml";

/// Properties of a single screen definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScreenProperties {
    /// Screen size (e.g. `1080x1920`); absent for model-identification records
    pub size: Option<String>,

    /// Device names sharing this screen
    pub devices: Vec<String>,
}

impl ScreenProperties {
    /// Whether this record describes an actual display that can be framed.
    pub fn is_display(&self) -> bool {
        self.size.is_some()
    }
}

/// A screen matched for a device name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenMatch<'a> {
    pub platform: Platform,
    pub screen_id: &'a str,
    pub properties: &'a ScreenProperties,
}

/// All known screens, per platform, in catalog order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ScreenCatalog {
    screens: IndexMap<Platform, IndexMap<String, ScreenProperties>>,
}

impl ScreenCatalog {
    /// The catalog compiled into the binary.
    pub fn embedded() -> Result<Self> {
        let file = RESOURCES_DIR.get_file("screens.yaml").ok_or_else(|| {
            ShotcheckError::ConfigNotFound {
                path: EMBEDDED_CATALOG.into(),
            }
        })?;

        let content = file.contents_utf8().ok_or_else(|| ShotcheckError::InventoryParseError {
            path: EMBEDDED_CATALOG.into(),
            message: "Invalid UTF-8".to_string(),
        })?;

        Self::parse(content, Path::new(EMBEDDED_CATALOG))
    }

    /// Load a catalog from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ShotcheckError::ConfigNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ShotcheckError::Io(e)
            }
        })?;
        Self::parse(&content, path)
    }

    /// Parse a catalog from YAML content.
    pub fn parse(content: &str, source_path: &Path) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| ShotcheckError::InventoryParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Screens defined for a platform.
    pub fn platform_screens(
        &self,
        platform: Platform,
    ) -> impl Iterator<Item = (&str, &ScreenProperties)> {
        self.screens
            .get(&platform)
            .into_iter()
            .flat_map(|screens| screens.iter().map(|(id, props)| (id.as_str(), props)))
    }

    /// Find the screen a device belongs to, searching every platform.
    pub fn screen_for(&self, device_name: &str) -> Option<ScreenMatch<'_>> {
        self.screens.iter().find_map(|(platform, screens)| {
            screens.iter().find_map(|(id, props)| {
                props
                    .devices
                    .iter()
                    .any(|d| d == device_name)
                    .then_some(ScreenMatch {
                        platform: *platform,
                        screen_id: id.as_str(),
                        properties: props,
                    })
            })
        })
    }

    /// Device names with a display-capable screen on a platform.
    pub fn supported_devices(&self, platform: Platform) -> Vec<&str> {
        self.platform_screens(platform)
            .filter(|(_, props)| props.is_display())
            .flat_map(|(_, props)| props.devices.iter().map(String::as_str))
            .collect()
    }
}
