//! Mark command implementation.

use crate::cli::args::MarkArgs;
use crate::error::Result;
use crate::sequence::Sequence;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// `idemseq mark STEP STATUS` overwrites a status without running anything.
pub struct MarkCommand<'a> {
    sequence: &'a Sequence,
    args: MarkArgs,
}

impl<'a> MarkCommand<'a> {
    pub fn new(sequence: &'a Sequence, args: MarkArgs) -> Self {
        Self { sequence, args }
    }
}

impl Command for MarkCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.sequence.step(&self.args.step)?.mark(self.args.status)?;
        let status = ui.theme().format_status(self.args.status);
        ui.success(&format!("Marked {} as {}", self.args.step, status));
        Ok(CommandResult::success())
    }
}
