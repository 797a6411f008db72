//! Shell command execution for manifest steps.

pub mod command;

pub use command::{execute, CommandOptions, CommandResult};
