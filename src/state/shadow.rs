//! In-memory status overlay used while a dry-run scope is active.

use std::collections::BTreeMap;

use crate::error::Result;

use super::{StatusStore, StepStatus};

/// Status store that never touches disk.
///
/// Seeded from the durable store when a dry run begins so reads reflect
/// real progress; writes stay here and are discarded with the overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShadowStatusStore {
    statuses: BTreeMap<String, StepStatus>,
}

impl ShadowStatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a snapshot of another store's known statuses.
    pub fn seeded(known: BTreeMap<String, StepStatus>) -> Self {
        let statuses = known
            .into_iter()
            .filter(|(_, status)| *status != StepStatus::Unknown)
            .collect();
        Self { statuses }
    }
}

impl StatusStore for ShadowStatusStore {
    fn get_status(&mut self, step: &str) -> Result<StepStatus> {
        Ok(self.statuses.get(step).copied().unwrap_or_default())
    }

    fn update_status(&mut self, step: &str, status: StepStatus) -> Result<()> {
        match status {
            StepStatus::Unknown => {
                self.statuses.remove(step);
            }
            _ => {
                self.statuses.insert(step.to_string(), status);
            }
        }
        Ok(())
    }

    fn get_known_statuses(&mut self) -> Result<BTreeMap<String, StepStatus>> {
        Ok(self.statuses.clone())
    }
}
