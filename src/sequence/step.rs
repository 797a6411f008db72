//! Per-step state machine.

use std::fmt;

use tracing::{debug, error};

use crate::error::{IdemseqError, Result};
use crate::registry::{StepDefinition, StepOptions};
use crate::state::StepStatus;

use super::Sequence;

/// Why a step did not run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The step itself is finished.
    AlreadyFinished,
    /// The whole sequence is finished.
    SequenceFinished,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::AlreadyFinished => f.write_str("already finished"),
            SkipReason::SequenceFinished => f.write_str("sequence already finished"),
        }
    }
}

/// Result of attempting a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Body ran and the step is now finished.
    Executed,
    /// Dry run: marked finished in the shadow store without running.
    Simulated,
    /// Preconditions said there is nothing to do.
    Skipped(SkipReason),
}

/// A step bound to its sequence.
#[derive(Clone, Copy)]
pub struct SequenceStep<'a> {
    sequence: &'a Sequence,
    definition: &'a StepDefinition,
    index: usize,
}

impl<'a> SequenceStep<'a> {
    pub(super) fn new(sequence: &'a Sequence, definition: &'a StepDefinition, index: usize) -> Self {
        Self {
            sequence,
            definition,
            index,
        }
    }

    pub fn name(&self) -> &'a str {
        self.definition.name()
    }

    /// Position in execution order.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn options(&self) -> &'a StepOptions {
        self.definition.options()
    }

    pub fn definition(&self) -> &'a StepDefinition {
        self.definition
    }

    /// Status in the active store.
    pub fn status(&self) -> Result<StepStatus> {
        self.sequence
            .with_active_store(|store| store.get_status(self.name()))
    }

    pub fn is_finished(&self) -> Result<bool> {
        Ok(self.status()?.is_finished())
    }

    /// Run the step, reporting a skip as [`IdemseqError::AlreadyCompleted`].
    pub fn run(&self) -> Result<()> {
        match self.attempt()? {
            StepOutcome::Skipped(_) => Err(IdemseqError::AlreadyCompleted {
                step: self.name().to_string(),
            }),
            StepOutcome::Executed | StepOutcome::Simulated => Ok(()),
        }
    }

    /// Check preconditions and run the step if they pass.
    ///
    /// Preconditions, in order:
    /// 1. a finished sequence skips every step that is not `run_always`
    /// 2. a finished step skips unless `run_always` or `run_until_finished`
    /// 3. without `force`, every earlier step must be finished
    ///
    /// A failing body leaves the status untouched.
    pub fn attempt(&self) -> Result<StepOutcome> {
        let options = self.options();

        if !options.run_always && self.sequence.is_finished()? {
            debug!("Skipping '{}': sequence already finished", self.name());
            return Ok(StepOutcome::Skipped(SkipReason::SequenceFinished));
        }

        if self.is_finished()? && !options.run_always && !options.run_until_finished {
            debug!("Skipping '{}': already finished", self.name());
            return Ok(StepOutcome::Skipped(SkipReason::AlreadyFinished));
        }

        let run = self.sequence.options();
        if !run.force {
            if let Some(pending) = self.sequence.first_unfinished_before(self.index)? {
                return Err(IdemseqError::PreviousStepsNotFinished {
                    step: self.name().to_string(),
                    pending,
                });
            }
        }

        if run.dry_run {
            debug!("[dry run] Would run '{}'", self.name());
            self.write_active(StepStatus::Finished)?;
            return Ok(StepOutcome::Simulated);
        }

        let args = self.sequence.resolve_args(self.name(), self.definition.parameters())?;

        debug!("Running step '{}'", self.name());
        self.definition.call(&args).map_err(|source| {
            error!("Step '{}' failed: {:#}", self.name(), source);
            IdemseqError::StepFailed {
                step: self.name().to_string(),
                source,
            }
        })?;

        self.write_active(StepStatus::Finished)?;
        debug!("Finished step '{}'", self.name());
        Ok(StepOutcome::Executed)
    }

    /// Set the status to unknown in the durable store, bypassing all
    /// preconditions. An active dry-run overlay is updated to match.
    pub fn reset(&self) -> Result<()> {
        debug!("Resetting step '{}'", self.name());
        self.sequence.reset_durable(self.name())
    }

    /// Overwrite the status in the active store, bypassing preconditions.
    pub fn mark(&self, status: StepStatus) -> Result<()> {
        debug!("Marking step '{}' as {}", self.name(), status);
        self.write_active(status)
    }

    fn write_active(&self, status: StepStatus) -> Result<()> {
        self.sequence
            .with_active_store(|store| store.update_status(self.name(), status))
    }
}

impl fmt::Debug for SequenceStep<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceStep")
            .field("name", &self.name())
            .field("index", &self.index)
            .field("options", self.options())
            .finish()
    }
}
