//! Per-step status values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::IdemseqError;

/// Persisted status of a single step.
///
/// A step with no stored record is [`StepStatus::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    /// Never run, or reset.
    #[default]
    Unknown,

    /// Marked failed by an operator.
    Failed,

    /// Completed successfully.
    Finished,
}

impl StepStatus {
    /// Every valid status, in display order.
    pub const ALL: [StepStatus; 3] = [StepStatus::Unknown, StepStatus::Failed, StepStatus::Finished];

    /// Text stored in the status table.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepStatus::Unknown => "unknown",
            StepStatus::Failed => "failed",
            StepStatus::Finished => "finished",
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, StepStatus::Finished)
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StepStatus {
    type Err = IdemseqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unknown" => Ok(StepStatus::Unknown),
            "failed" => Ok(StepStatus::Failed),
            "finished" => Ok(StepStatus::Finished),
            other => Err(IdemseqError::InvalidStatus {
                value: other.to_string(),
            }),
        }
    }
}
