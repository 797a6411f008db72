//! idemseq - Resumable, idempotent sequences of named steps.
//!
//! Steps run in a fixed order and each finished step is recorded in a
//! status store, so an interrupted sequence picks up where it stopped and
//! a finished one does nothing when run again.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`manifest`] - YAML manifests of shell-command steps
//! - [`registry`] - Step definitions, parameters and providers
//! - [`scope`] - Layered run options and context values
//! - [`sequence`] - Binding a registry to a status store and running it
//! - [`shell`] - Shell command execution
//! - [`state`] - Step statuses and the stores that persist them
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use idemseq::registry::{Param, Registry, StepDefinition};
//! use idemseq::scope::{RunOptions, Scope};
//! use idemseq::sequence::Sequence;
//!
//! let registry = Registry::from_steps([
//!     StepDefinition::new("fetch", |args| {
//!         assert_eq!(args.str("url")?, "https://example.com");
//!         Ok(())
//!     })
//!     .param(Param::required("url")),
//!     StepDefinition::new("unpack", |_| Ok(())),
//! ])
//! .unwrap();
//!
//! let sequence = Sequence::new(registry, ":memory:");
//! let scope = Scope::from(RunOptions::new()).with_value("url", "https://example.com");
//! let report = sequence.run(scope).unwrap();
//!
//! assert_eq!(report.executed, vec!["fetch", "unpack"]);
//! assert!(sequence.is_finished().unwrap());
//! ```

pub mod cli;
pub mod error;
pub mod manifest;
pub mod registry;
pub mod scope;
pub mod sequence;
pub mod shell;
pub mod state;
pub mod ui;

pub use error::{IdemseqError, Result};
pub use registry::{Param, Provider, Registry, StepArgs, StepDefinition, StepOptions};
pub use scope::{Context, RunOptions, Scope};
pub use sequence::{RunReport, Sequence, SequenceStep, StepOutcome};
pub use state::{StepStatus, StoreIdentity};
