//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::host::HostPlatform;

/// Shotcheck - Preflight validation for mobile screenshot automation.
#[derive(Debug, Parser)]
#[command(name = "shotcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default screenshots.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate the configuration (default if no command specified)
    Validate(ValidateArgs),

    /// Show devices and screens that can be configured
    Guide(GuideArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Where device and screen information comes from.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SourceArgs {
    /// Device inventory snapshot (YAML or JSON)
    #[arg(short, long, value_name = "FILE", env = "SHOTCHECK_INVENTORY")]
    pub inventory: Option<PathBuf>,

    /// Screen catalog to use instead of the built-in one
    #[arg(long, value_name = "FILE")]
    pub screens: Option<PathBuf>,

    /// Host platform to validate for (defaults to the current one)
    #[arg(long, value_enum)]
    pub host: Option<HostPlatform>,
}

impl SourceArgs {
    /// The host platform, falling back to the current one.
    pub fn host(&self) -> HostPlatform {
        self.host.unwrap_or_else(HostPlatform::current)
    }
}

/// Arguments for the `validate` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

/// Arguments for the `guide` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct GuideArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
