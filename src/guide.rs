//! Configuration guide.
//!
//! Shown when a device or screen check fails: everything the user could
//! put in the config instead, taken from the same inventory and screen
//! catalog the checks used.

use crate::config::Platform;
use crate::host::HostPlatform;
use crate::inventory::Inventory;
use crate::screens::ScreenCatalog;

const INDENT: &str = "    ";

/// Renders the configuration guide.
pub struct Guide<'a> {
    inventory: &'a Inventory,
    catalog: &'a ScreenCatalog,
    host: HostPlatform,
}

impl<'a> Guide<'a> {
    /// Create a guide for an inventory and screen catalog.
    pub fn new(inventory: &'a Inventory, catalog: &'a ScreenCatalog, host: HostPlatform) -> Self {
        Self {
            inventory,
            catalog,
            host,
        }
    }

    /// Render the full guide as plain text.
    pub fn render(&self) -> String {
        let mut output = String::new();

        let attached: Vec<&str> = self
            .inventory
            .physical_devices()
            .map(|d| d.display_name())
            .collect();
        render_list(&mut output, "Attached devices:", &attached);

        let mut emulators: Vec<&str> = Vec::new();
        for emulator in &self.inventory.emulators {
            if !emulators.contains(&emulator.name.as_str()) {
                emulators.push(&emulator.name);
            }
        }
        render_list(&mut output, "Installed emulators:", &emulators);

        if self.host.is_macos() {
            let simulators: Vec<&str> =
                self.inventory.simulators.keys().map(String::as_str).collect();
            render_list(&mut output, "Installed simulators:", &simulators);
        }

        output.push_str("Supported screens:\n");
        for platform in Platform::ALL {
            if platform == Platform::Ios && !self.host.is_macos() {
                continue;
            }
            self.render_screens(&mut output, platform);
        }

        output.push('\n');
        output.push_str(REMEDIATION);
        output
    }

    fn render_screens(&self, output: &mut String, platform: Platform) {
        output.push_str(&format!("  {}:\n", platform));
        for device in self.catalog.supported_devices(platform) {
            output.push_str(&format!("{}{}\n", INDENT, device));
        }
    }
}

const REMEDIATION: &str = "\
Each device in the config must:
  1. have a supported screen, and
  2. be attached, or be installed as an emulator (android) or simulator (ios).

To use a device without a supported screen, set 'frame: false' for that
device in the config. Screenshots from it will not be framed.
";

fn render_list(output: &mut String, title: &str, items: &[&str]) {
    output.push_str(title);
    output.push('\n');
    if items.is_empty() {
        output.push_str(&format!("{}none\n", INDENT));
    }
    for item in items {
        output.push_str(&format!("{}{}\n", INDENT, item));
    }
}
