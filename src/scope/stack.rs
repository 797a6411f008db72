//! Execution scope stack.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::{IdemseqError, Result};

use super::options::{ResolvedOptions, RunOptions};

/// Name → value mapping visible to step parameters.
pub type Context = BTreeMap<String, Value>;

/// One execution scope: a layer of run options plus a layer of context.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scope {
    pub options: RunOptions,
    pub context: Context,
}

impl Scope {
    pub fn new(options: RunOptions, context: Context) -> Self {
        Self { options, context }
    }

    pub fn with_options(mut self, options: RunOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    /// Add a single context value.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }
}

impl From<RunOptions> for Scope {
    fn from(options: RunOptions) -> Self {
        Scope {
            options,
            context: Context::new(),
        }
    }
}

impl From<Context> for Scope {
    fn from(context: Context) -> Self {
        Scope {
            options: RunOptions::default(),
            context,
        }
    }
}

impl From<(Context, RunOptions)> for Scope {
    fn from((context, options): (Context, RunOptions)) -> Self {
        Scope { options, context }
    }
}

/// Identifies one pushed frame for as long as it stays on the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(u64);

/// A pushed scope.
#[derive(Debug, Clone)]
pub struct Frame {
    pub id: ScopeId,
    pub scope: Scope,
}

/// Nested scopes, innermost last.
///
/// There is always a baseline frame, so reads never fail for lack of a
/// scope. Lookups walk from the innermost frame outward. `dry_run` is
/// sticky: once any frame on the stack sets it, the stack is dry.
#[derive(Debug, Clone)]
pub struct ScopeStack {
    frames: Vec<Frame>,
    next_id: u64,
}

const BASELINE: ScopeId = ScopeId(0);

impl ScopeStack {
    pub fn new() -> Self {
        Self::with_baseline(Scope::default())
    }

    pub fn with_baseline(baseline: Scope) -> Self {
        Self {
            frames: vec![Frame {
                id: BASELINE,
                scope: baseline,
            }],
            next_id: 1,
        }
    }

    pub fn baseline(&self) -> &Scope {
        &self.frames[0].scope
    }

    pub fn baseline_mut(&mut self) -> &mut Scope {
        &mut self.frames[0].scope
    }

    /// Layer a scope on top of the stack.
    pub fn push(&mut self, scope: impl Into<Scope>) -> ScopeId {
        let id = ScopeId(self.next_id);
        self.next_id += 1;
        self.frames.push(Frame {
            id,
            scope: scope.into(),
        });
        id
    }

    /// Remove the innermost scope. The baseline cannot be popped.
    pub fn pop(&mut self) -> Result<Frame> {
        if self.frames.len() <= 1 {
            return Err(IdemseqError::ScopeUnderflow);
        }
        self.frames.pop().ok_or(IdemseqError::ScopeUnderflow)
    }

    /// Remove the frame pushed as `id`, wherever it sits. Frames pushed
    /// after it stay in place. `None` if it is already gone.
    pub fn remove(&mut self, id: ScopeId) -> Option<Frame> {
        if id == BASELINE {
            return None;
        }
        let position = self.frames.iter().position(|frame| frame.id == id)?;
        Some(self.frames.remove(position))
    }

    pub fn contains_scope(&self, id: ScopeId) -> bool {
        self.frames.iter().any(|frame| frame.id == id)
    }

    /// Number of frames, baseline included.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_dry_run(&self) -> bool {
        self.frames
            .iter()
            .any(|frame| frame.scope.options.dry_run == Some(true))
    }

    /// Effective run options.
    pub fn options(&self) -> ResolvedOptions {
        ResolvedOptions {
            dry_run: self.is_dry_run(),
            force: self.lookup(|o| o.force).unwrap_or(false),
            warn_only: self.lookup(|o| o.warn_only).unwrap_or(false),
            start_at: self.lookup(|o| o.start_at.clone()),
            stop_before: self.lookup(|o| o.stop_before.clone()),
        }
    }

    fn lookup<T>(&self, field: impl Fn(&RunOptions) -> Option<T>) -> Option<T> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| field(&frame.scope.options))
    }

    /// Innermost value for a context key.
    pub fn context_get(&self, key: &str) -> Option<&Value> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.scope.context.get(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.context_get(key).is_some()
    }

    /// All visible context, inner values shadowing outer ones.
    pub fn context(&self) -> Context {
        let mut result = Context::new();
        for frame in &self.frames {
            result.extend(frame.scope.context.clone());
        }
        result
    }
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}
