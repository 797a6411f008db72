//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde_json::Value;

use crate::scope::{Context, RunOptions, Scope};
use crate::sequence::ALL_STEPS;
use crate::state::{StepStatus, StoreIdentity};

/// idemseq - Resumable, idempotent step sequences.
#[derive(Debug, Parser)]
#[command(name = "idemseq")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Where step statuses are stored: a database file or `:memory:`
    #[arg(short = 's', long, global = true, env = "IDEMSEQ_SEQUENCE_ID", default_value = StoreIdentity::MEMORY)]
    pub sequence_id: String,

    /// Manifest file describing the steps
    #[arg(short, long, global = true, env = "IDEMSEQ_MANIFEST", default_value = "idemseq.yml")]
    pub manifest: PathBuf,

    /// Log level
    #[arg(long, global = true, env = "IDEMSEQ_LOG_LEVEL", value_enum)]
    pub log_level: Option<LogLevel>,

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

impl Cli {
    pub fn store_identity(&self) -> StoreIdentity {
        StoreIdentity::from(self.sequence_id.as_str())
    }
}

/// Log levels accepted by `--log-level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List steps with their status (default if no command specified)
    List,

    /// Run the sequence, or a single step
    Run(RunArgs),

    /// Reset one step, or all of them, to unknown
    Reset(ResetArgs),

    /// Set a step's status without running it
    Mark(MarkArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, Args)]
pub struct RunArgs {
    /// Run only this step
    pub step: Option<String>,

    /// Simulate without running commands or saving statuses
    #[arg(long)]
    pub dry_run: bool,

    /// Run even if earlier steps are not finished
    #[arg(long)]
    pub force: bool,

    /// Warn and stop on failure instead of exiting with an error
    #[arg(long)]
    pub warn_only: bool,

    /// First step to run
    #[arg(long, value_name = "STEP")]
    pub start_at: Option<String>,

    /// Step to stop at (not run)
    #[arg(long, value_name = "STEP")]
    pub stop_before: Option<String>,

    /// Context value for this run (VALUE is parsed as JSON, else taken as a string)
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub set: Vec<(String, Value)>,
}

impl RunArgs {
    /// Options for the scope this run executes in. Flags left off fall
    /// through to the enclosing scopes.
    pub fn run_options(&self) -> RunOptions {
        let mut options = RunOptions::new();
        if self.dry_run {
            options = options.dry_run(true);
        }
        if self.force {
            options = options.force(true);
        }
        if self.warn_only {
            options = options.warn_only(true);
        }
        options.start_at = self.start_at.clone();
        options.stop_before = self.stop_before.clone();
        options
    }

    pub fn context(&self) -> Context {
        self.set.iter().cloned().collect()
    }

    pub fn scope(&self) -> Scope {
        Scope::new(self.run_options(), self.context())
    }
}

/// Arguments for the `reset` command.
#[derive(Debug, Clone, Args)]
pub struct ResetArgs {
    /// Step to reset, or `all`
    #[arg(default_value = ALL_STEPS)]
    pub selector: String,
}

/// Arguments for the `mark` command.
#[derive(Debug, Clone, Args)]
pub struct MarkArgs {
    /// Step to mark
    pub step: String,

    /// New status (unknown, failed, finished)
    pub status: StepStatus,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Parse `KEY=VALUE`. The value is JSON when it parses as JSON,
/// otherwise the raw text.
pub fn parse_key_value(s: &str) -> Result<(String, Value), String> {
    let (key, raw) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in '{}'", s));
    }
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}
