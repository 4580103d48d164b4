//! Test invocation parsing and path validation.
//!
//! A test entry in the config is free-form, e.g.
//! `--driver test_driver/main.dart --target test/main_test.dart` or just
//! `integration_test/app_test.dart`. Only the driver and target paths are
//! of interest here.

use std::path::{Path, PathBuf};

const DRIVER_FLAG: &str = "--driver";
const TARGET_FLAG: &str = "--target";

/// Driver and target paths found in a test invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestInvocation {
    pub driver: Option<PathBuf>,
    pub target: Option<PathBuf>,
}

impl TestInvocation {
    /// Extract the first `--driver` and first `--target` value.
    ///
    /// `--flag value`, `--flag=value` and `--flag= value` are recognised.
    /// A flag is never taken as another flag's value.
    pub fn parse(raw: &str) -> Self {
        let mut invocation = Self::default();
        let mut tokens = raw.split_whitespace().peekable();

        while let Some(token) = tokens.next() {
            let Some((flag, inline)) = split_flag(token) else {
                continue;
            };

            let value = match inline {
                Some(value) if !value.is_empty() => Some(value),
                _ => tokens.next_if(|next| split_flag(next).is_none()),
            };

            let slot = if flag == DRIVER_FLAG {
                &mut invocation.driver
            } else {
                &mut invocation.target
            };
            if slot.is_none() {
                *slot = value.map(PathBuf::from);
            }
        }

        invocation
    }

    /// Whether any flag was found.
    pub fn has_flags(&self) -> bool {
        self.driver.is_some() || self.target.is_some()
    }

    /// Paths found in flag order: driver, then target.
    pub fn flagged_paths(&self) -> impl Iterator<Item = &Path> {
        self.driver.iter().chain(self.target.iter()).map(PathBuf::as_path)
    }
}

/// Match a `--driver`/`--target` token, returning the flag and any `=` value.
fn split_flag(token: &str) -> Option<(&'static str, Option<&str>)> {
    [DRIVER_FLAG, TARGET_FLAG].into_iter().find_map(|flag| {
        if token == flag {
            Some((flag, None))
        } else {
            token
                .strip_prefix(flag)
                .and_then(|rest| rest.strip_prefix('='))
                .map(|value| (flag, Some(value)))
        }
    })
}

/// Return the paths referenced by a test invocation that don't exist.
///
/// 1. Every `--driver` / `--target` path found must exist.
/// 2. If at least one flag was found and all its paths exist, the
///    invocation is valid whatever else it contains.
/// 3. If no flag was found, the whole (trimmed) string is the path.
///
/// Relative paths are resolved against `project_root`. An empty result
/// means the invocation is valid.
pub fn missing_test_paths(raw: &str, project_root: &Path) -> Vec<PathBuf> {
    let invocation = TestInvocation::parse(raw);

    let candidates: Vec<&Path> = if invocation.has_flags() {
        invocation.flagged_paths().collect()
    } else {
        vec![Path::new(raw.trim())]
    };

    candidates
        .into_iter()
        .filter(|path| path.as_os_str().is_empty() || !project_root.join(path).exists())
        .map(Path::to_path_buf)
        .collect()
}
