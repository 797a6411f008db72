//! Execution scopes.
//!
//! A scope layers [`RunOptions`] and a [`Context`] over the scopes below
//! it. [`ScopeStack`] resolves both by walking from the innermost scope
//! outward.

pub mod options;
pub mod stack;

pub use options::{ResolvedOptions, RunOptions};
pub use stack::{Context, Frame, Scope, ScopeId, ScopeStack};
