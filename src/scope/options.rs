//! Run options carried by execution scopes.

/// One layer of run options.
///
/// Unset fields fall through to the enclosing scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Simulate: no bodies run, no durable writes.
    pub dry_run: Option<bool>,

    /// Skip the previous-steps-finished check.
    pub force: Option<bool>,

    /// Log step failures and stop instead of returning them.
    pub warn_only: Option<bool>,

    /// First step to run (inclusive).
    pub start_at: Option<String>,

    /// Step to stop at (exclusive).
    pub stop_before: Option<String>,
}

impl RunOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = Some(dry_run);
        self
    }

    pub fn force(mut self, force: bool) -> Self {
        self.force = Some(force);
        self
    }

    pub fn warn_only(mut self, warn_only: bool) -> Self {
        self.warn_only = Some(warn_only);
        self
    }

    pub fn start_at(mut self, step: impl Into<String>) -> Self {
        self.start_at = Some(step.into());
        self
    }

    pub fn stop_before(mut self, step: impl Into<String>) -> Self {
        self.stop_before = Some(step.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Effective options after walking the whole scope chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub dry_run: bool,
    pub force: bool,
    pub warn_only: bool,
    pub start_at: Option<String>,
    pub stop_before: Option<String>,
}
