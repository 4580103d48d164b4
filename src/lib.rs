//! Shotcheck - Preflight checks for mobile screenshot runs.
//!
//! Before a screenshot run starts any device, shotcheck checks the run's
//! `screenshots.yaml` against what the host actually has: every device
//! must have valid field values, a supported screen if it will be framed,
//! and an attached device, emulator or simulator to run on. Every test
//! invocation must point at files that exist.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and field validation
//! - [`error`] - Error types and result aliases
//! - [`framing`] - Whether a device's screenshots will be framed
//! - [`guide`] - The configuration guide shown on failure
//! - [`host`] - Host platform detection
//! - [`invocation`] - Test invocation parsing and path checks
//! - [`inventory`] - Attached devices, emulators and simulators
//! - [`preflight`] - The validation run
//! - [`presence`] - Device presence resolution
//! - [`screens`] - Supported screens catalog
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use shotcheck::invocation::TestInvocation;
//!
//! let test = TestInvocation::parse("--driver test_driver/main.dart --target test/app_test.dart");
//! assert_eq!(test.target.as_deref(), Some(std::path::Path::new("test/app_test.dart")));
//! ```
//!
//! For file-based validation, see the integration tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod framing;
pub mod guide;
pub mod host;
pub mod invocation;
pub mod inventory;
pub mod preflight;
pub mod presence;
pub mod screens;
pub mod ui;

pub use error::{Result, ShotcheckError};
