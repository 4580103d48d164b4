//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`]. Running `shotcheck` without a subcommand is the
//! same as `shotcheck validate`.

pub mod completions;
pub mod dispatcher;
pub mod guide;
pub mod sources;
pub mod validate;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
