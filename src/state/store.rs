//! Status store contract and store identities.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::StepStatus;

/// Name → status table.
///
/// Absent keys read as [`StepStatus::Unknown`]; writing `Unknown` removes
/// the key. Methods take `&mut self` so backends can open connections
/// lazily on first access.
pub trait StatusStore {
    /// Status of one step.
    fn get_status(&mut self, step: &str) -> Result<StepStatus>;

    /// Set the status of one step.
    fn update_status(&mut self, step: &str, status: StepStatus) -> Result<()>;

    /// Every step this store has a record for.
    fn get_known_statuses(&mut self) -> Result<BTreeMap<String, StepStatus>>;
}

/// Where a sequence keeps its durable statuses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum StoreIdentity {
    /// Private in-process database, gone when the sequence is dropped.
    #[default]
    Memory,

    /// Database file on disk.
    Path(PathBuf),
}

impl StoreIdentity {
    /// Literal accepted wherever an identity is parsed from text.
    pub const MEMORY: &'static str = ":memory:";

    pub fn is_memory(&self) -> bool {
        matches!(self, StoreIdentity::Memory)
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            StoreIdentity::Memory => None,
            StoreIdentity::Path(path) => Some(path),
        }
    }
}

impl From<&str> for StoreIdentity {
    fn from(value: &str) -> Self {
        if value == Self::MEMORY {
            StoreIdentity::Memory
        } else {
            StoreIdentity::Path(PathBuf::from(value))
        }
    }
}

impl From<String> for StoreIdentity {
    fn from(value: String) -> Self {
        StoreIdentity::from(value.as_str())
    }
}

impl From<&Path> for StoreIdentity {
    fn from(value: &Path) -> Self {
        StoreIdentity::Path(value.to_path_buf())
    }
}

impl From<PathBuf> for StoreIdentity {
    fn from(value: PathBuf) -> Self {
        StoreIdentity::Path(value)
    }
}

impl fmt::Display for StoreIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreIdentity::Memory => f.write_str(Self::MEMORY),
            StoreIdentity::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_literal_parses_to_memory() {
        assert_eq!(StoreIdentity::from(":memory:"), StoreIdentity::Memory);
        assert!(StoreIdentity::from(":memory:").is_memory());
    }

    #[test]
    fn other_strings_are_paths() {
        let identity = StoreIdentity::from("/tmp/install.db");
        assert_eq!(identity.path(), Some(Path::new("/tmp/install.db")));
    }

    #[test]
    fn display_round_trips_memory_literal() {
        assert_eq!(StoreIdentity::Memory.to_string(), ":memory:");
    }
}
