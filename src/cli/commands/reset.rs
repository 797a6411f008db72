//! Reset command implementation.

use crate::cli::args::ResetArgs;
use crate::error::Result;
use crate::sequence::Sequence;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// `idemseq reset [STEP|all]`
pub struct ResetCommand<'a> {
    sequence: &'a Sequence,
    args: ResetArgs,
}

impl<'a> ResetCommand<'a> {
    pub fn new(sequence: &'a Sequence, args: ResetArgs) -> Self {
        Self { sequence, args }
    }
}

impl Command for ResetCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.sequence.reset(Some(&self.args.selector))?;
        ui.success(&format!("Reset {}", self.args.selector));
        Ok(CommandResult::success())
    }
}
