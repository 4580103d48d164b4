//! Validate command implementation.
//!
//! The `shotcheck validate` command runs every preflight check over the
//! project's config. Devices and screens that can't be used are followed
//! by the configuration guide.

use std::path::{Path, PathBuf};

use crate::cli::args::ValidateArgs;
use crate::config::{load_config, ConfigPaths};
use crate::error::{Result, ShotcheckError};
use crate::preflight::Preflight;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::sources::{load_catalog, load_device_inventory};

/// The validate command implementation.
pub struct ValidateCommand {
    project_root: PathBuf,
    config: Option<PathBuf>,
    args: ValidateArgs,
}

impl ValidateCommand {
    /// Create a new validate command.
    pub fn new(project_root: &Path, config: Option<&Path>, args: ValidateArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config: config.map(Path::to_path_buf),
            args,
        }
    }

    fn config_paths(&self) -> ConfigPaths {
        match &self.config {
            Some(path) => ConfigPaths::explicit(&self.project_root, path),
            None => ConfigPaths::discover(&self.project_root),
        }
    }
}

impl Command for ValidateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !self.config_paths().has_config() {
            ui.error("No configuration found. Expected screenshots.yaml in the project root.");
            return Ok(CommandResult::failure(2));
        }

        let (config_path, config) = match load_config(&self.project_root, self.config.as_deref()) {
            Ok(loaded) => loaded,
            Err(ShotcheckError::ConfigParseError { path, message }) => {
                ui.error(&format!("Parse error in {}: {}", path.display(), message));
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        let catalog = load_catalog(&self.project_root, &self.args.source)?;
        let inventory = load_device_inventory(&self.project_root, &self.args.source)?;

        let preflight = Preflight::new(&config, &catalog, &inventory)
            .with_host(self.args.source.host())
            .with_config_path(&config_path)
            .with_project_root(&self.project_root);

        match preflight.validate(ui) {
            Ok(report) => {
                ui.detail(&format!(
                    "Checked {} devices and {} tests",
                    report.devices.len(),
                    report.tests_checked
                ));
                ui.success("Configuration is valid");
                Ok(CommandResult::success())
            }
            Err(e) => {
                tracing::debug!("Preflight failed: {:?}", e);
                ui.error(&e.to_string());
                if e.needs_guide() {
                    ui.show_header("Configuration guide");
                    ui.message(&preflight.guide().render());
                }
                Ok(CommandResult::failure(1))
            }
        }
    }
}
