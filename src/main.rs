//! idemseq CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use idemseq::cli::{Cli, CommandDispatcher, LogLevel};
use idemseq::ui::{create_ui, should_use_colors, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `--log-level` / `IDEMSEQ_LOG_LEVEL`
/// 3. `RUST_LOG` environment variable (if set)
/// 4. Default is INFO
fn init_tracing(debug: bool, level: Option<LogLevel>) {
    let filter = if debug {
        EnvFilter::new("idemseq=debug")
    } else if let Some(level) = level {
        EnvFilter::new(format!("idemseq={}", level.as_str()))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("idemseq=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug, cli.log_level);

    tracing::debug!("idemseq starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }
    let mut ui = create_ui(output_mode, !cli.no_color && should_use_colors());

    let dispatcher = CommandDispatcher::new(cli.manifest.clone(), cli.store_identity());

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
