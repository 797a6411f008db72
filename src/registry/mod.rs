//! Step registry for idemseq.
//!
//! This module holds the static definition of a sequence:
//! - [`StepDefinition`] - a named body plus its parameters and options
//! - [`Provider`] - a named value source for missing context
//! - [`Registry`] - the ordered, name-unique collection of both
//!
//! # Example
//!
//! ```
//! use idemseq::registry::{Registry, StepDefinition};
//!
//! let registry = Registry::from_steps([
//!     StepDefinition::new("migrate", |_| Ok(())).with_order(20),
//!     StepDefinition::new("create_db", |_| Ok(())).with_order(10),
//! ])
//! .unwrap();
//!
//! assert_eq!(registry.names(), vec!["create_db", "migrate"]);
//! ```

pub mod args;
pub mod provider;
pub mod resolver;
pub mod step;

pub use args::StepArgs;
pub use provider::{Provider, ProviderFn};
pub use resolver::Registry;
pub use step::{Param, StepDefinition, StepFn, StepOptions};
