//! Guide command implementation.
//!
//! `shotcheck guide` prints the configuration guide without validating.

use std::path::{Path, PathBuf};

use crate::cli::args::GuideArgs;
use crate::error::Result;
use crate::guide::Guide;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::sources::{load_catalog, load_device_inventory};

/// The guide command implementation.
pub struct GuideCommand {
    project_root: PathBuf,
    args: GuideArgs,
}

impl GuideCommand {
    /// Create a new guide command.
    pub fn new(project_root: &Path, args: GuideArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for GuideCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let catalog = load_catalog(&self.project_root, &self.args.source)?;
        let inventory = load_device_inventory(&self.project_root, &self.args.source)?;
        let host = self.args.source.host();

        ui.show_header("Configuration guide");
        ui.message(&Guide::new(&inventory, &catalog, host).render());
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::SourceArgs;
    use crate::host::HostPlatform;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn prints_guide_for_host() {
        let temp = TempDir::new().unwrap();
        let args = GuideArgs {
            source: SourceArgs {
                host: Some(HostPlatform::Linux),
                ..Default::default()
            },
        };
        let mut ui = MockUI::new();

        let result = GuideCommand::new(temp.path(), args).execute(&mut ui).unwrap();
        assert!(result.success);
        assert_eq!(ui.headers().to_vec(), vec!["Configuration guide".to_string()]);
        assert!(ui.has_message("Supported screens:"));
        assert!(ui.has_message("Nexus 6P"));
        assert!(!ui.has_message("iPhone X"));
    }

    #[test]
    fn missing_inventory_is_an_error() {
        let temp = TempDir::new().unwrap();
        let args = GuideArgs {
            source: SourceArgs {
                inventory: Some(PathBuf::from("nope.yaml")),
                ..Default::default()
            },
        };
        let mut ui = MockUI::new();
        assert!(GuideCommand::new(temp.path(), args).execute(&mut ui).is_err());
    }
}
