//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::manifest::load_manifest;
use crate::sequence::Sequence;
use crate::state::StoreIdentity;
use crate::ui::UserInterface;

use super::completions::CompletionsCommand;
use super::list::ListCommand;
use super::mark::MarkCommand;
use super::reset::ResetCommand;
use super::run::RunCommand;

/// Exit code for an unknown step name or selector.
pub const EXIT_USAGE: i32 = 2;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
#[derive(Debug)]
pub struct CommandDispatcher {
    manifest: PathBuf,
    identity: StoreIdentity,
}

impl CommandDispatcher {
    pub fn new(manifest: impl Into<PathBuf>, identity: impl Into<StoreIdentity>) -> Self {
        Self {
            manifest: manifest.into(),
            identity: identity.into(),
        }
    }

    pub fn manifest(&self) -> &Path {
        &self.manifest
    }

    pub fn identity(&self) -> &StoreIdentity {
        &self.identity
    }

    /// Load the manifest and bind it to the status store.
    pub fn load_sequence(&self) -> Result<Sequence> {
        let manifest = load_manifest(&self.manifest)?;
        let registry = manifest.build_registry(&self.manifest)?;
        let context = manifest.base_context(&self.manifest)?;
        debug!(
            "Sequence '{}' with {} step(s)",
            self.identity,
            registry.len()
        );
        Ok(Sequence::new(registry, self.identity.clone()).with_context(context))
    }

    /// Dispatch and execute a command.
    ///
    /// Unknown step names and selectors are reported here and exit with
    /// [`EXIT_USAGE`]; other errors are returned to the caller.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let result = match &cli.command {
            Some(Commands::Completions(args)) => {
                CompletionsCommand::new(args.clone()).execute(ui)
            }
            Some(Commands::Run(args)) => {
                let sequence = self.load_sequence()?;
                let command = RunCommand::new(&sequence, args.clone());
                command.execute(ui)
            }
            Some(Commands::Reset(args)) => {
                let sequence = self.load_sequence()?;
                let command = ResetCommand::new(&sequence, args.clone());
                command.execute(ui)
            }
            Some(Commands::Mark(args)) => {
                let sequence = self.load_sequence()?;
                let command = MarkCommand::new(&sequence, args.clone());
                command.execute(ui)
            }
            Some(Commands::List) | None => {
                let sequence = self.load_sequence()?;
                let command = ListCommand::new(&sequence);
                command.execute(ui)
            }
        };

        match result {
            Err(e) if e.is_selector_error() => {
                ui.error(&e.to_string());
                Ok(CommandResult::failure(EXIT_USAGE))
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IdemseqError;
    use crate::ui::MockUI;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn write_manifest(temp: &TempDir) -> PathBuf {
        let path = temp.path().join("idemseq.yml");
        fs::write(
            &path,
            "steps:\n  - name: a\n    command: \"true\"\n  - name: b\n    command: \"true\"\n",
        )
        .unwrap();
        path
    }

    #[test]
    fn command_result_constructors() {
        assert_eq!(
            CommandResult::success(),
            CommandResult {
                success: true,
                exit_code: 0
            }
        );
        assert_eq!(CommandResult::failure(3).exit_code, 3);
        assert!(!CommandResult::failure(3).success);
    }

    #[test]
    fn load_sequence_uses_manifest() {
        let temp = TempDir::new().unwrap();
        let dispatcher = CommandDispatcher::new(write_manifest(&temp), StoreIdentity::Memory);

        let sequence = dispatcher.load_sequence().unwrap();
        assert_eq!(sequence.len(), 2);
    }

    #[test]
    fn missing_manifest_is_an_error() {
        let temp = TempDir::new().unwrap();
        let dispatcher = CommandDispatcher::new(temp.path().join("nope.yml"), StoreIdentity::Memory);
        let cli = Cli::parse_from(["idemseq", "list"]);

        let err = dispatcher.dispatch(&cli, &mut MockUI::new()).unwrap_err();
        assert!(matches!(err, IdemseqError::Manifest { .. }));
    }

    #[test]
    fn defaults_to_list() {
        let temp = TempDir::new().unwrap();
        let dispatcher = CommandDispatcher::new(write_manifest(&temp), StoreIdentity::Memory);
        let cli = Cli::parse_from(["idemseq"]);
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();
        assert!(result.success);
        assert_eq!(ui.messages(), [" * a (unknown)", " * b (unknown)"]);
    }

    #[test]
    fn unknown_step_exits_with_usage_code() {
        let temp = TempDir::new().unwrap();
        let dispatcher = CommandDispatcher::new(write_manifest(&temp), StoreIdentity::Memory);
        let cli = Cli::parse_from(["idemseq", "run", "nope"]);
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();
        assert_eq!(result.exit_code, EXIT_USAGE);
        assert!(ui.errors()[0].contains("nope"));
    }

    #[test]
    fn unknown_selector_exits_with_usage_code() {
        let temp = TempDir::new().unwrap();
        let dispatcher = CommandDispatcher::new(write_manifest(&temp), StoreIdentity::Memory);
        let cli = Cli::parse_from(["idemseq", "run", "--start-at", "zzz"]);

        let result = dispatcher.dispatch(&cli, &mut MockUI::new()).unwrap();
        assert_eq!(result.exit_code, EXIT_USAGE);
    }
}
