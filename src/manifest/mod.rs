//! YAML manifest front-end.
//!
//! A manifest declares shell-command steps and a base context. Loading
//! one yields a [`Registry`](crate::registry::Registry) the CLI can bind
//! to a status store.

pub mod interpolation;
pub mod loader;
pub mod schema;

pub use loader::{load_manifest, parse_manifest};
pub use schema::{Manifest, ParamSpec, StepSpec};
