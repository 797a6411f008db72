//! Run results and status listings.

use serde::Serialize;

use crate::state::StepStatus;

/// What a call to [`Sequence::run`](super::Sequence::run) did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Steps whose bodies ran and succeeded.
    pub executed: Vec<String>,

    /// Steps marked finished in the shadow store without running.
    pub simulated: Vec<String>,

    /// In-window steps skipped because they were already complete.
    pub skipped: Vec<String>,

    /// Set when `warn_only` swallowed a failure and stopped the run.
    pub stopped: Option<String>,
}

impl RunReport {
    /// Whether the run went through without a swallowed failure.
    pub fn is_clean(&self) -> bool {
        self.stopped.is_none()
    }

    /// Whether no step did anything.
    pub fn is_noop(&self) -> bool {
        self.executed.is_empty() && self.simulated.is_empty() && self.stopped.is_none()
    }
}

/// One row of [`Sequence::list`](super::Sequence::list).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepListing {
    pub name: String,
    pub status: StepStatus,
}
