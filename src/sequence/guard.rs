//! Scope handle that removes its scope on drop.

use tracing::warn;

use crate::scope::{ResolvedOptions, ScopeId};

use super::Sequence;

/// Handle for a scope pushed with [`Sequence::env`].
///
/// Dropping the guard removes exactly the scope it pushed, whichever way
/// the enclosing block exits and in whatever order guards are dropped.
#[must_use = "the scope is removed as soon as the guard is dropped"]
#[derive(Debug)]
pub struct ScopeGuard<'a> {
    sequence: &'a Sequence,
    id: ScopeId,
    depth: usize,
}

impl<'a> ScopeGuard<'a> {
    pub(super) fn new(sequence: &'a Sequence, id: ScopeId, depth: usize) -> Self {
        Self {
            sequence,
            id,
            depth,
        }
    }

    pub fn sequence(&self) -> &'a Sequence {
        self.sequence
    }

    pub fn id(&self) -> ScopeId {
        self.id
    }

    /// Stack depth right after this scope was pushed.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn options(&self) -> ResolvedOptions {
        self.sequence.options()
    }
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        if !self.sequence.remove_scope(self.id) {
            warn!("Execution scope was already removed");
        }
    }
}
