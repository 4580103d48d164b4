//! Configuration file discovery and loading.

use crate::config::schema::ScreenshotsConfig;
use crate::error::{Result, ShotcheckError};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the project root.
pub const DEFAULT_CONFIG_FILE: &str = "screenshots.yaml";

/// Location of the configuration file for a project.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Explicit config path from `--config`, if any
    pub explicit: Option<PathBuf>,

    /// Project config: screenshots.yaml
    pub project: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover the config file for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            explicit: None,
            project: Self::find_project_config(project_root),
        }
    }

    /// Use an explicit config path instead of discovery.
    ///
    /// Relative paths are resolved against the project root.
    pub fn explicit(project_root: &Path, path: &Path) -> Self {
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            project_root.join(path)
        };
        Self {
            explicit: Some(path),
            project: None,
        }
    }

    fn find_project_config(project_root: &Path) -> Option<PathBuf> {
        let path = project_root.join(DEFAULT_CONFIG_FILE);
        if path.exists() {
            Some(path)
        } else {
            None
        }
    }

    /// The config file that will be loaded, explicit path first.
    pub fn resolved(&self) -> Option<&PathBuf> {
        self.explicit.as_ref().or(self.project.as_ref())
    }

    /// Check if any config exists.
    pub fn has_config(&self) -> bool {
        self.resolved().is_some_and(|p| p.exists())
    }
}

/// Load a single config file and parse it into ScreenshotsConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ScreenshotsConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ShotcheckError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ShotcheckError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into ScreenshotsConfig.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<ScreenshotsConfig> {
    // An empty file is a config with every default.
    if content.trim().is_empty() {
        return Ok(ScreenshotsConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| ShotcheckError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the config for a project, honouring an explicit path.
///
/// # Errors
///
/// Returns `ConfigNotFound` if no config exists.
/// Returns `ConfigParseError` if the config file is invalid.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<(PathBuf, ScreenshotsConfig)> {
    let paths = match explicit {
        Some(path) => ConfigPaths::explicit(project_root, path),
        None => ConfigPaths::discover(project_root),
    };

    let path = paths
        .resolved()
        .cloned()
        .unwrap_or_else(|| project_root.join(DEFAULT_CONFIG_FILE));

    tracing::debug!("Loading config from {}", path.display());
    let config = load_config_file(&path)?;
    Ok((path, config))
}
