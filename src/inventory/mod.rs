//! Device inventories: attached devices, installed emulators and simulators.
//!
//! - Snapshot types in [`types`]
//! - Snapshot loading in [`loader`]
//! - iOS version ordering in [`version`]

pub mod loader;
pub mod types;
pub mod version;

pub use loader::{load_inventory, parse_inventory_json, parse_inventory_yaml};
pub use types::{AndroidEmulator, AttachedDevice, Inventory, SimulatorInstance, SimulatorInventory};
pub use version::{highest_version, IosVersion};
