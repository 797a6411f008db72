//! Run command implementation.
//!
//! `idemseq run` drives the whole sequence; `idemseq run STEP` attempts a
//! single step under the same options.

use tracing::debug;

use crate::cli::args::RunArgs;
use crate::error::Result;
use crate::sequence::Sequence;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::{show_outcome, show_report};

/// The run command implementation.
pub struct RunCommand<'a> {
    sequence: &'a Sequence,
    args: RunArgs,
}

impl<'a> RunCommand<'a> {
    pub fn new(sequence: &'a Sequence, args: RunArgs) -> Self {
        Self { sequence, args }
    }

    pub fn args(&self) -> &RunArgs {
        &self.args
    }

    fn run_all(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = self.sequence.run(self.args.scope())?;
        show_report(ui, &report);
        Ok(CommandResult::success())
    }

    fn run_one(&self, name: &str, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let step = self.sequence.step(name)?;
        let _scope = self.sequence.env(self.args.scope());
        debug!("Running single step '{}'", name);

        match step.attempt() {
            Ok(outcome) => {
                show_outcome(ui, name, outcome);
                Ok(CommandResult::success())
            }
            Err(e) if self.args.warn_only && !e.is_selector_error() => {
                ui.warning(&e.to_string());
                Ok(CommandResult::success())
            }
            Err(e) => Err(e),
        }
    }
}

impl Command for RunCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &self.args.step {
            Some(name) => self.run_one(name, ui),
            None => self.run_all(ui),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IdemseqError;
    use crate::registry::{Param, Registry, StepDefinition};
    use crate::state::StepStatus;
    use crate::ui::MockUI;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn sequence(log: &Rc<RefCell<Vec<String>>>) -> Sequence {
        let step = |name: &'static str| {
            let log = Rc::clone(log);
            StepDefinition::new(name, move |_| {
                log.borrow_mut().push(name.to_string());
                Ok(())
            })
        };
        Sequence::new(
            Registry::from_steps([step("a"), step("b"), step("c")]).unwrap(),
            ":memory:",
        )
    }

    #[test]
    fn runs_whole_sequence() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sequence = sequence(&log);
        let mut ui = MockUI::new();

        let result = RunCommand::new(&sequence, RunArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(*log.borrow(), ["a", "b", "c"]);
        assert_eq!(ui.successes(), ["Finished a", "Finished b", "Finished c"]);
    }

    #[test]
    fn single_step_requires_previous_steps() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sequence = sequence(&log);
        let args = RunArgs {
            step: Some("b".to_string()),
            ..Default::default()
        };

        let err = RunCommand::new(&sequence, args)
            .execute(&mut MockUI::new())
            .unwrap_err();
        assert!(matches!(err, IdemseqError::PreviousStepsNotFinished { .. }));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn single_step_with_force() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sequence = sequence(&log);
        let args = RunArgs {
            step: Some("b".to_string()),
            force: true,
            ..Default::default()
        };

        RunCommand::new(&sequence, args)
            .execute(&mut MockUI::new())
            .unwrap();
        assert_eq!(*log.borrow(), ["b"]);
        assert!(!sequence.options().force);
    }

    #[test]
    fn already_completed_step_is_a_notice() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sequence = sequence(&log);
        sequence.step("a").unwrap().mark(StepStatus::Finished).unwrap();
        let args = RunArgs {
            step: Some("a".to_string()),
            ..Default::default()
        };
        let mut ui = MockUI::new();

        let result = RunCommand::new(&sequence, args).execute(&mut ui).unwrap();
        assert!(result.success);
        assert!(ui.has_output("already completed"));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn dry_run_leaves_statuses_alone() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sequence = sequence(&log);
        let args = RunArgs {
            dry_run: true,
            ..Default::default()
        };
        let mut ui = MockUI::new();

        RunCommand::new(&sequence, args).execute(&mut ui).unwrap();
        assert!(log.borrow().is_empty());
        assert_eq!(ui.messages().len(), 3);
        assert!(sequence.get_known_statuses().unwrap().is_empty());
    }

    #[test]
    fn set_values_reach_step_params() {
        let seen = Rc::new(RefCell::new(None));
        let captured = Rc::clone(&seen);
        let registry = Registry::from_steps([StepDefinition::new("greet", move |args| {
            *captured.borrow_mut() = args.get("who").cloned();
            Ok(())
        })
        .param(Param::required("who"))])
        .unwrap();
        let sequence = Sequence::new(registry, ":memory:");
        let args = RunArgs {
            set: vec![("who".to_string(), json!("world"))],
            ..Default::default()
        };

        RunCommand::new(&sequence, args)
            .execute(&mut MockUI::new())
            .unwrap();
        assert_eq!(*seen.borrow(), Some(json!("world")));
    }

    #[test]
    fn warn_only_single_step_failure_is_a_warning() {
        let registry = Registry::from_steps([StepDefinition::new("bad", |_| {
            anyhow::bail!("boom")
        })])
        .unwrap();
        let sequence = Sequence::new(registry, ":memory:");
        let args = RunArgs {
            step: Some("bad".to_string()),
            warn_only: true,
            ..Default::default()
        };
        let mut ui = MockUI::new();

        let result = RunCommand::new(&sequence, args).execute(&mut ui).unwrap();
        assert!(result.success);
        assert!(ui.warnings()[0].contains("boom"));
    }
}
