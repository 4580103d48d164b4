//! Command-line interface for shotcheck.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, GuideArgs, SourceArgs, ValidateArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
