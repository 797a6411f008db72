//! Command-line interface for idemseq.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, LogLevel, MarkArgs, ResetArgs, RunArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
