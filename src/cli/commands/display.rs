//! Shared display helpers for command output.

use crate::sequence::{RunReport, SkipReason, StepListing, StepOutcome};
use crate::ui::UserInterface;

/// One ` * name (status)` line per step.
pub fn show_listing(ui: &mut dyn UserInterface, listing: &[StepListing]) {
    if listing.is_empty() {
        ui.message("No steps defined");
        return;
    }
    for row in listing {
        let line = format!(" * {} ({})", row.name, ui.theme().format_status(row.status));
        ui.message(&line);
    }
}

/// Summarize a whole-sequence run.
pub fn show_report(ui: &mut dyn UserInterface, report: &RunReport) {
    for name in &report.executed {
        ui.success(&format!("Finished {}", name));
    }
    for name in &report.simulated {
        ui.message(&format!("[dry run] Would run {}", name));
    }
    for name in &report.skipped {
        let line = ui.theme().format_skipped(&format!("{} already finished", name));
        ui.message(&line);
    }
    if let Some(reason) = &report.stopped {
        ui.warning(&format!("Stopped early: {}", reason));
    } else if report.is_noop() {
        ui.message("Nothing to do");
    }
}

/// Describe what happened to a single step.
pub fn show_outcome(ui: &mut dyn UserInterface, name: &str, outcome: StepOutcome) {
    match outcome {
        StepOutcome::Executed => ui.success(&format!("Finished {}", name)),
        StepOutcome::Simulated => ui.message(&format!("[dry run] Would run {}", name)),
        StepOutcome::Skipped(SkipReason::AlreadyFinished) => {
            ui.message(&format!("Step '{}' has already completed", name))
        }
        StepOutcome::Skipped(SkipReason::SequenceFinished) => {
            ui.message(&format!("Sequence already finished, skipped '{}'", name))
        }
    }
}
