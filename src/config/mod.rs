//! Configuration loading, parsing, and field validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Per-device field validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use shotcheck::config::{parse_config, validate_device, Orientation};
//! use std::path::Path;
//!
//! let yaml = "devices:\n  android:\n    Pixel 4:\n      orientation: landscapeLeft\n";
//! let config = parse_config(yaml, Path::new("screenshots.yaml")).unwrap();
//! let settings = validate_device("Pixel 4", &config.devices.android["Pixel 4"]).unwrap();
//! assert_eq!(settings.orientation, Some(Orientation::LandscapeLeft));
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

// Schema re-exports
pub use schema::{
    DeviceEntry, DeviceSettings, DevicesConfig, FieldValue, Orientation, Platform,
    ScreenshotsConfig,
};

// Loader re-exports
pub use loader::{load_config, load_config_file, parse_config, ConfigPaths, DEFAULT_CONFIG_FILE};

// Validator re-exports
pub use validator::validate_device;
