//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which loads the
//! manifest, binds it to the status store named by `--sequence-id` and
//! routes the subcommand to its implementation.

pub mod completions;
pub mod dispatcher;
pub mod display;
pub mod list;
pub mod mark;
pub mod reset;
pub mod run;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, EXIT_USAGE};
