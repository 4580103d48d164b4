//! Preflight validation.
//!
//! Runs every check over the config before any device session starts,
//! stopping at the first failure:
//!
//! 1. For each device, in declaration order (android, then ios):
//!    field values, then the screen check if the device will be framed,
//!    then device presence.
//! 2. For each test invocation, in declaration order: test paths.
//!
//! # Example
//!
//! ```
//! use shotcheck::config::parse_config;
//! use shotcheck::host::HostPlatform;
//! use shotcheck::inventory::{AndroidEmulator, Inventory};
//! use shotcheck::preflight::Preflight;
//! use shotcheck::screens::ScreenCatalog;
//! use shotcheck::ui::MockUI;
//! use std::path::Path;
//!
//! let config = parse_config(
//!     "devices:\n  android:\n    Nexus 6P:\n",
//!     Path::new("screenshots.yaml"),
//! ).unwrap();
//! let catalog = ScreenCatalog::embedded().unwrap();
//! let inventory = Inventory {
//!     emulators: vec![AndroidEmulator { name: "Nexus 6P".into(), id: "Nexus_6P_API_28".into() }],
//!     ..Default::default()
//! };
//!
//! let mut ui = MockUI::new();
//! let report = Preflight::new(&config, &catalog, &inventory)
//!     .with_host(HostPlatform::Linux)
//!     .validate(&mut ui)
//!     .unwrap();
//! assert_eq!(report.devices.len(), 1);
//! ```

use std::path::{Path, PathBuf};

use crate::config::{
    validate_device, DeviceEntry, DeviceSettings, Platform, ScreenshotsConfig, DEFAULT_CONFIG_FILE,
};
use crate::error::{Result, ShotcheckError};
use crate::framing::{ConfigFramePolicy, FramePolicy};
use crate::guide::Guide;
use crate::host::HostPlatform;
use crate::invocation::missing_test_paths;
use crate::inventory::Inventory;
use crate::presence::{self, Resolution};
use crate::screens::{check_screen_available, ScreenCatalog};
use crate::ui::UserInterface;

/// Outcome of validating one device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceReport {
    pub platform: Platform,
    pub name: String,
    pub settings: DeviceSettings,
    pub framed: bool,
    pub resolution: Resolution,
}

/// Outcome of a successful preflight run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Devices in validation order
    pub devices: Vec<DeviceReport>,
    /// Number of test invocations checked
    pub tests_checked: usize,
    /// Warnings emitted during the run
    pub warnings: Vec<String>,
}

/// Validates a config against the host's devices and the screen catalog.
pub struct Preflight<'a> {
    config: &'a ScreenshotsConfig,
    catalog: &'a ScreenCatalog,
    inventory: &'a Inventory,
    host: HostPlatform,
    config_path: PathBuf,
    project_root: PathBuf,
    frame_policy: Box<dyn FramePolicy + 'a>,
}

impl<'a> Preflight<'a> {
    /// Create a preflight run for the current host, framing per the config.
    pub fn new(
        config: &'a ScreenshotsConfig,
        catalog: &'a ScreenCatalog,
        inventory: &'a Inventory,
    ) -> Self {
        Self {
            config,
            catalog,
            inventory,
            host: HostPlatform::current(),
            config_path: PathBuf::from(DEFAULT_CONFIG_FILE),
            project_root: PathBuf::from("."),
            frame_policy: Box::new(ConfigFramePolicy::new(config.frame)),
        }
    }

    /// Override the host platform.
    pub fn with_host(mut self, host: HostPlatform) -> Self {
        self.host = host;
        self
    }

    /// Config path shown in diagnostics.
    pub fn with_config_path(mut self, path: &Path) -> Self {
        self.config_path = path.to_path_buf();
        self
    }

    /// Directory test paths are resolved against.
    pub fn with_project_root(mut self, root: &Path) -> Self {
        self.project_root = root.to_path_buf();
        self
    }

    /// Replace the framing predicate.
    pub fn with_frame_policy(mut self, policy: impl FramePolicy + 'a) -> Self {
        self.frame_policy = Box::new(policy);
        self
    }

    /// The configuration guide for this run's inventory and catalog.
    pub fn guide(&self) -> Guide<'a> {
        Guide::new(self.inventory, self.catalog, self.host)
    }

    /// Run every check, stopping at the first failure.
    ///
    /// Warnings for ambiguous emulator/simulator matches are sent to `ui`
    /// and do not fail the run.
    ///
    /// # Errors
    ///
    /// - `InvalidFieldValue` for a bad `orientation` or `frame`
    /// - `ScreenUnavailable` for a framed device without a screen
    /// - `DeviceUnavailable` for a device that is neither attached nor installed
    /// - `InvalidTestPath` for a test invocation referencing missing files
    pub fn validate(&self, ui: &mut dyn UserInterface) -> Result<ValidationReport> {
        let mut report = ValidationReport::default();

        for (platform, name, entry) in self.config.all_devices() {
            let device = self.validate_device(platform, name, entry, ui, &mut report.warnings)?;
            report.devices.push(device);
        }

        for invocation in &self.config.tests {
            self.validate_test(invocation)?;
            report.tests_checked += 1;
        }

        tracing::debug!(
            "Preflight passed: {} devices, {} tests",
            report.devices.len(),
            report.tests_checked
        );
        Ok(report)
    }

    fn validate_device(
        &self,
        platform: Platform,
        name: &str,
        entry: &DeviceEntry,
        ui: &mut dyn UserInterface,
        warnings: &mut Vec<String>,
    ) -> Result<DeviceReport> {
        tracing::debug!("Validating {} device '{}'", platform, name);
        let settings = validate_device(name, entry)?;

        let framed = self.frame_policy.frame_required(platform, name, &settings);
        if framed {
            check_screen_available(self.catalog, name, &self.config_path)?;
        }

        let presence = presence::resolve(platform, name, self.inventory, self.host)?;
        if let Some(warning) = presence.warning {
            tracing::warn!("{}", warning);
            ui.warning(&warning);
            warnings.push(warning);
        }

        ui.detail(&format!(
            "{} '{}': {}",
            platform,
            name,
            describe(&presence.resolution)
        ));

        Ok(DeviceReport {
            platform,
            name: name.to_string(),
            settings,
            framed,
            resolution: presence.resolution,
        })
    }

    fn validate_test(&self, invocation: &str) -> Result<()> {
        let missing = missing_test_paths(invocation, &self.project_root);
        if missing.is_empty() {
            tracing::debug!("Test '{}' is valid", invocation);
            return Ok(());
        }

        Err(ShotcheckError::InvalidTestPath {
            paths: missing,
            invocation: invocation.to_string(),
            config_path: self.config_path.clone(),
        })
    }
}

fn describe(resolution: &Resolution) -> String {
    match resolution {
        Resolution::Attached => "attached".to_string(),
        Resolution::Emulator { id } => format!("emulator {}", id),
        Resolution::Simulator { version, udid } => format!("simulator {} ({})", udid, version),
    }
}
