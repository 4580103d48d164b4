//! Supported screens and the screen availability check.
//!
//! The default catalog is embedded at compile time from
//! `resources/screens.yaml`; a different catalog can be loaded from disk.

pub mod catalog;
pub mod checker;

pub use catalog::{ScreenCatalog, ScreenMatch, ScreenProperties};
pub use checker::check_screen_available;
