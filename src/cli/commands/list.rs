//! List command implementation.
//!
//! The `idemseq list` command shows each step with its status.

use crate::error::Result;
use crate::sequence::Sequence;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::show_listing;

/// The list command implementation.
pub struct ListCommand<'a> {
    sequence: &'a Sequence,
}

impl<'a> ListCommand<'a> {
    pub fn new(sequence: &'a Sequence) -> Self {
        Self { sequence }
    }
}

impl Command for ListCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let listing = self.sequence.list()?;
        show_listing(ui, &listing);
        Ok(CommandResult::success())
    }
}
