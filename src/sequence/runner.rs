//! Whole-sequence execution.

use std::ops::Range;

use tracing::{debug, info, warn};

use crate::error::{IdemseqError, Result};
use crate::scope::{ResolvedOptions, Scope};

use super::{RunReport, Sequence, SequenceStep, StepOutcome};

/// Selector accepted by [`Sequence::reset`] for every step.
pub const ALL_STEPS: &str = "all";

impl Sequence {
    /// Run every step in the `start_at..stop_before` window.
    ///
    /// The given scope is layered over the active one for the duration of
    /// the call. Steps that are already complete are skipped. With
    /// `warn_only`, the first failure is logged and stops the run without
    /// being returned.
    pub fn run(&self, scope: impl Into<Scope>) -> Result<RunReport> {
        let _scope = self.env(scope);
        let options = self.options();
        let window = self.window(&options)?;
        let mut report = RunReport::default();

        if self.is_finished()? {
            let always: Vec<SequenceStep<'_>> = self
                .steps()
                .filter(|step| window.contains(&step.index()) && step.options().run_always)
                .collect();

            if always.is_empty() {
                info!("All steps already finished, nothing to do");
                return Ok(report);
            }

            debug!(
                "Sequence finished, running {} run_always step(s)",
                always.len()
            );
            self.drive(always, options.warn_only, &mut report)?;
            return Ok(report);
        }

        let steps = self
            .steps()
            .filter(|step| window.contains(&step.index()));
        self.drive(steps, options.warn_only, &mut report)?;
        Ok(report)
    }

    /// Reset one step, or every step when the selector is omitted or `all`.
    ///
    /// Always writes to the durable store.
    pub fn reset(&self, selector: Option<&str>) -> Result<()> {
        match selector {
            None | Some(ALL_STEPS) => {
                debug!("Resetting all steps");
                for step in self.steps() {
                    step.reset()?;
                }
                Ok(())
            }
            Some(name) => {
                let step = self
                    .step(name)
                    .map_err(|_| IdemseqError::InvalidSelector {
                        selector: name.to_string(),
                    })?;
                step.reset()
            }
        }
    }

    fn window(&self, options: &ResolvedOptions) -> Result<Range<usize>> {
        let start = match &options.start_at {
            Some(name) => self.selector_index(name)?,
            None => 0,
        };
        let stop = match &options.stop_before {
            Some(name) => self.selector_index(name)?,
            None => self.len(),
        };
        Ok(start..stop)
    }

    fn selector_index(&self, name: &str) -> Result<usize> {
        self.index_of(name)
            .ok_or_else(|| IdemseqError::InvalidSelector {
                selector: name.to_string(),
            })
    }

    fn drive<'a>(
        &'a self,
        steps: impl IntoIterator<Item = SequenceStep<'a>>,
        warn_only: bool,
        report: &mut RunReport,
    ) -> Result<()> {
        for step in steps {
            let name = step.name().to_string();
            match step.attempt() {
                Ok(StepOutcome::Executed) => report.executed.push(name),
                Ok(StepOutcome::Simulated) => report.simulated.push(name),
                Ok(StepOutcome::Skipped(reason)) => {
                    debug!("Skipped '{}': {}", name, reason);
                    report.skipped.push(name);
                }
                Err(e) if warn_only => {
                    warn!("Step '{}' errored: {}", name, e);
                    report.stopped = Some(e.to_string());
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}
