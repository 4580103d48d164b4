//! Error types for shotcheck operations.
//!
//! This module defines [`ShotcheckError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every preflight failure is a `ShotcheckError` returned up to `main`,
//!   which is the only place the process exits
//! - Use `anyhow::Error` (via `ShotcheckError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

use crate::config::Platform;

/// Core error type for shotcheck operations.
#[derive(Debug, Error)]
pub enum ShotcheckError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Failed to parse an inventory snapshot or screen catalog.
    #[error("Failed to parse inventory at {path}: {message}")]
    InventoryParseError { path: PathBuf, message: String },

    /// A device field holds a value outside its allowed set.
    #[error(
        "Invalid value for '{field}' for device '{device}': {value}\nValid values:\n  {}",
        .valid.join("\n  ")
    )]
    InvalidFieldValue {
        device: String,
        field: String,
        value: String,
        valid: Vec<String>,
    },

    /// A device needs framing but has no usable screen definition.
    #[error(
        "Screen not available for device '{device}' in {config_path}.\n\n\
         Use a device with a supported screen or set 'frame: false' for '{device}'."
    )]
    ScreenUnavailable { device: String, config_path: PathBuf },

    /// No attached device, emulator or simulator matches a configured device.
    #[error("No attached device or {} found for {platform} device '{device}'", .platform.virtual_kind())]
    DeviceUnavailable { platform: Platform, device: String },

    /// A test invocation references files that do not exist.
    #[error(
        "Invalid test {} in test '{invocation}' in {config_path}",
        quoted_paths(.paths)
    )]
    InvalidTestPath {
        paths: Vec<PathBuf>,
        invocation: String,
        config_path: PathBuf,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShotcheckError {
    /// Whether the configuration guide should be shown with this error.
    pub fn needs_guide(&self) -> bool {
        matches!(
            self,
            Self::ScreenUnavailable { .. } | Self::DeviceUnavailable { .. }
        )
    }
}

fn quoted_paths(paths: &[PathBuf]) -> String {
    let quoted: Vec<_> = paths
        .iter()
        .map(|p| format!("'{}'", p.display()))
        .collect();
    let noun = if quoted.len() == 1 { "path" } else { "paths" };
    format!("{} {}", noun, quoted.join(", "))
}

/// Result type alias for shotcheck operations.
pub type Result<T> = std::result::Result<T, ShotcheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = ShotcheckError::ConfigNotFound {
            path: PathBuf::from("/foo/screenshots.yaml"),
        };
        assert!(err.to_string().contains("/foo/screenshots.yaml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = ShotcheckError::ConfigParseError {
            path: PathBuf::from("/screenshots.yaml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/screenshots.yaml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn invalid_field_value_lists_valid_values() {
        let err = ShotcheckError::InvalidFieldValue {
            device: "Nexus 5X".into(),
            field: "orientation".into(),
            value: "Sideways".into(),
            valid: vec!["portrait".into(), "landscapeLeft".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("Nexus 5X"));
        assert!(msg.contains("Sideways"));
        assert!(msg.contains("  portrait\n  landscapeLeft"));
    }

    #[test]
    fn screen_unavailable_displays_device_and_path() {
        let err = ShotcheckError::ScreenUnavailable {
            device: "Galaxy Fold".into(),
            config_path: PathBuf::from("screenshots.yaml"),
        };
        let msg = err.to_string();
        assert!(msg.contains("Galaxy Fold"));
        assert!(msg.contains("screenshots.yaml"));
        assert!(msg.contains("frame: false"));
    }

    #[test]
    fn device_unavailable_names_virtual_device_kind() {
        let android = ShotcheckError::DeviceUnavailable {
            platform: Platform::Android,
            device: "Pixel 4".into(),
        };
        assert!(android.to_string().contains("emulator"));

        let ios = ShotcheckError::DeviceUnavailable {
            platform: Platform::Ios,
            device: "iPhone X".into(),
        };
        assert!(ios.to_string().contains("simulator"));
        assert!(ios.to_string().contains("iPhone X"));
    }

    #[test]
    fn invalid_test_path_displays_path_and_invocation() {
        let err = ShotcheckError::InvalidTestPath {
            paths: vec![PathBuf::from("test_driver/main.dart")],
            invocation: "--driver test_driver/main.dart".into(),
            config_path: PathBuf::from("screenshots.yaml"),
        };
        let msg = err.to_string();
        assert!(msg.contains("path 'test_driver/main.dart'"));
        assert!(msg.contains("--driver test_driver/main.dart"));
    }

    #[test]
    fn invalid_test_path_lists_every_missing_path() {
        let err = ShotcheckError::InvalidTestPath {
            paths: vec![PathBuf::from("a.dart"), PathBuf::from("b.dart")],
            invocation: "--driver a.dart --target b.dart".into(),
            config_path: PathBuf::from("screenshots.yaml"),
        };
        assert!(err.to_string().contains("paths 'a.dart', 'b.dart'"));
    }

    #[test]
    fn only_device_and_screen_errors_need_guide() {
        let screen = ShotcheckError::ScreenUnavailable {
            device: "x".into(),
            config_path: PathBuf::from("c"),
        };
        let device = ShotcheckError::DeviceUnavailable {
            platform: Platform::Android,
            device: "x".into(),
        };
        let path = ShotcheckError::InvalidTestPath {
            paths: vec![PathBuf::from("p")],
            invocation: "p".into(),
            config_path: PathBuf::from("c"),
        };
        assert!(screen.needs_guide());
        assert!(device.needs_guide());
        assert!(!path.needs_guide());
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ShotcheckError = io_err.into();
        assert!(matches!(err, ShotcheckError::Io(_)));
    }
}
