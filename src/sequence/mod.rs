//! Sequences: a registry bound to a status store.
//!
//! A [`Sequence`] owns its durable status store, the dry-run overlay and
//! the execution scope stack. Steps are reached through
//! [`SequenceStep`] handles; the whole sequence is driven by
//! [`Sequence::run`].
//!
//! # Example
//!
//! ```
//! use idemseq::registry::{Registry, StepDefinition};
//! use idemseq::scope::RunOptions;
//! use idemseq::sequence::Sequence;
//!
//! let registry = Registry::from_steps([
//!     StepDefinition::new("download", |_| Ok(())),
//!     StepDefinition::new("install", |_| Ok(())),
//! ])
//! .unwrap();
//!
//! let sequence = Sequence::new(registry, ":memory:");
//! let report = sequence.run(RunOptions::new()).unwrap();
//! assert_eq!(report.executed, vec!["download", "install"]);
//!
//! // Nothing left to do on the second run.
//! assert!(sequence.run(RunOptions::new()).unwrap().is_noop());
//! ```
//!
//! A `Sequence` is single-threaded: it uses interior mutability and is
//! neither `Send` nor `Sync`.

pub mod guard;
pub mod report;
pub mod runner;
pub mod step;

pub use guard::ScopeGuard;
pub use report::{RunReport, StepListing};
pub use runner::ALL_STEPS;
pub use step::{SequenceStep, SkipReason, StepOutcome};

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;
use tracing::debug;

use crate::error::{IdemseqError, Result};
use crate::registry::{Param, Provider, Registry, StepArgs};
use crate::scope::{Context, ResolvedOptions, Scope, ScopeId, ScopeStack};
use crate::state::{ShadowStatusStore, SqliteStatusStore, StatusStore, StepStatus, StoreIdentity};

/// A registry bound to a status store identity.
pub struct Sequence {
    registry: Registry,
    identity: StoreIdentity,
    store: RefCell<Box<dyn StatusStore>>,
    shadow: RefCell<Option<ShadowStatusStore>>,
    scopes: RefCell<ScopeStack>,
    /// Provider results, computed at most once per sequence.
    provided: RefCell<BTreeMap<String, Value>>,
}

impl Sequence {
    /// Bind a registry to a store identity. The store opens on first use.
    pub fn new(registry: Registry, identity: impl Into<StoreIdentity>) -> Self {
        let identity = identity.into();
        let store = SqliteStatusStore::new(identity.clone());
        Self {
            registry,
            identity,
            store: RefCell::new(Box::new(store)),
            shadow: RefCell::new(None),
            scopes: RefCell::new(ScopeStack::new()),
            provided: RefCell::new(BTreeMap::new()),
        }
    }

    /// Seed the baseline scope with context values.
    pub fn with_context(mut self, context: Context) -> Self {
        self.scopes
            .get_mut()
            .baseline_mut()
            .context
            .extend(context);
        self
    }

    /// Replace the durable store backend.
    pub fn with_store(mut self, store: impl StatusStore + 'static) -> Self {
        self.store = RefCell::new(Box::new(store));
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn identity(&self) -> &StoreIdentity {
        &self.identity
    }

    // --- scopes ---

    /// Push a scope for the lifetime of the returned guard.
    pub fn env(&self, scope: impl Into<Scope>) -> ScopeGuard<'_> {
        let id = self.push_scope(scope);
        let depth = self.scopes.borrow().depth();
        ScopeGuard::new(self, id, depth)
    }

    /// Push a scope. Pair with [`Sequence::pop_scope`] or
    /// [`Sequence::remove_scope`].
    pub fn push_scope(&self, scope: impl Into<Scope>) -> ScopeId {
        self.scopes.borrow_mut().push(scope)
    }

    /// Pop the innermost scope.
    pub fn pop_scope(&self) -> Result<()> {
        self.scopes.borrow_mut().pop()?;
        self.release_overlay();
        Ok(())
    }

    /// Remove the scope pushed as `id`, leaving scopes pushed after it in
    /// place. Returns `false` if it was already removed.
    pub fn remove_scope(&self, id: ScopeId) -> bool {
        let removed = self.scopes.borrow_mut().remove(id).is_some();
        if removed {
            self.release_overlay();
        }
        removed
    }

    /// Drop the dry-run overlay once no scope on the stack is dry.
    fn release_overlay(&self) {
        if !self.is_dry_run() && self.shadow.borrow_mut().take().is_some() {
            debug!("Discarded dry-run status overlay");
        }
    }

    pub fn options(&self) -> ResolvedOptions {
        self.scopes.borrow().options()
    }

    pub fn is_dry_run(&self) -> bool {
        self.scopes.borrow().is_dry_run()
    }

    pub fn context_value(&self, key: &str) -> Option<Value> {
        self.scopes.borrow().context_get(key).cloned()
    }

    /// All context visible from the innermost scope.
    pub fn context(&self) -> Context {
        self.scopes.borrow().context()
    }

    // --- steps ---

    pub fn step(&self, name: &str) -> Result<SequenceStep<'_>> {
        let definition = self.registry.lookup(name)?;
        let index = self
            .registry
            .index_of(name)
            .ok_or_else(|| IdemseqError::NotFound {
                name: name.to_string(),
            })?;
        Ok(SequenceStep::new(self, definition, index))
    }

    /// Steps in execution order.
    pub fn steps(&self) -> impl Iterator<Item = SequenceStep<'_>> + '_ {
        self.registry
            .order()
            .enumerate()
            .map(move |(index, definition)| SequenceStep::new(self, definition, index))
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.registry.index_of(name)
    }

    // --- statuses ---

    /// Known statuses in the active store.
    pub fn get_known_statuses(&self) -> Result<BTreeMap<String, StepStatus>> {
        self.with_active_store(|store| store.get_known_statuses())
    }

    /// Whether every step is finished in the active store.
    pub fn is_finished(&self) -> Result<bool> {
        let known = self.get_known_statuses()?;
        Ok(self
            .registry
            .order()
            .all(|step| is_finished_in(&known, step.name())))
    }

    /// Every step with its status, in execution order.
    pub fn list(&self) -> Result<Vec<StepListing>> {
        let known = self.get_known_statuses()?;
        Ok(self
            .registry
            .order()
            .map(|step| StepListing {
                name: step.name().to_string(),
                status: known.get(step.name()).copied().unwrap_or_default(),
            })
            .collect())
    }

    pub(crate) fn first_unfinished_before(&self, index: usize) -> Result<Option<String>> {
        let known = self.get_known_statuses()?;
        Ok(self
            .registry
            .order()
            .take(index)
            .find(|step| !is_finished_in(&known, step.name()))
            .map(|step| step.name().to_string()))
    }

    /// Run `f` against the store the current scope writes to: the durable
    /// store normally, the overlay while dry-running.
    pub(crate) fn with_active_store<T>(
        &self,
        f: impl FnOnce(&mut dyn StatusStore) -> Result<T>,
    ) -> Result<T> {
        if !self.is_dry_run() {
            let mut store = self.store.borrow_mut();
            return f(store.as_mut());
        }

        let mut shadow = self.shadow.borrow_mut();
        let overlay = match shadow.take() {
            Some(overlay) => overlay,
            None => {
                let known = self.store.borrow_mut().get_known_statuses()?;
                debug!("Opened dry-run status overlay with {} known statuses", known.len());
                ShadowStatusStore::seeded(known)
            }
        };
        let active: &mut dyn StatusStore = shadow.insert(overlay);
        f(active)
    }

    pub(crate) fn reset_durable(&self, step: &str) -> Result<()> {
        self.store
            .borrow_mut()
            .update_status(step, StepStatus::Unknown)?;
        if let Some(overlay) = self.shadow.borrow_mut().as_mut() {
            overlay.update_status(step, StepStatus::Unknown)?;
        }
        Ok(())
    }

    // --- parameter resolution ---

    /// Resolve declared parameters: scope context, then provider, then
    /// the declared default.
    pub(crate) fn resolve_args(&self, owner: &str, params: &[Param]) -> Result<StepArgs> {
        let mut resolving = Vec::new();
        self.resolve_params(owner, params, &mut resolving)
    }

    fn resolve_params(
        &self,
        owner: &str,
        params: &[Param],
        resolving: &mut Vec<String>,
    ) -> Result<StepArgs> {
        let mut values = BTreeMap::new();
        for param in params {
            let value = self.resolve_value(owner, param, resolving)?;
            values.insert(param.name.clone(), value);
        }
        Ok(StepArgs::new(owner, values))
    }

    fn resolve_value(
        &self,
        owner: &str,
        param: &Param,
        resolving: &mut Vec<String>,
    ) -> Result<Value> {
        if let Some(value) = self.context_value(&param.name) {
            return Ok(value);
        }
        if let Some(provider) = self.registry.provider(&param.name) {
            return self.provide(provider, resolving);
        }
        if let Some(default) = &param.default {
            return Ok(default.clone());
        }
        Err(IdemseqError::MissingContext {
            step: owner.to_string(),
            param: param.name.clone(),
        })
    }

    fn provide(&self, provider: &Provider, resolving: &mut Vec<String>) -> Result<Value> {
        let name = provider.name();
        if let Some(value) = self.provided.borrow().get(name) {
            return Ok(value.clone());
        }

        if resolving.iter().any(|n| n == name) {
            let mut chain = resolving.clone();
            chain.push(name.to_string());
            return Err(IdemseqError::ProviderCycle {
                chain: chain.join(" -> "),
            });
        }

        resolving.push(name.to_string());
        let args = self.resolve_params(name, provider.parameters(), resolving);
        resolving.pop();
        let args = args?;

        debug!("Calling provider '{}'", name);
        let value = provider
            .call(&args)
            .map_err(|source| IdemseqError::ProviderFailed {
                provider: name.to_string(),
                source,
            })?;

        self.provided
            .borrow_mut()
            .insert(name.to_string(), value.clone());
        Ok(value)
    }
}

fn is_finished_in(known: &BTreeMap<String, StepStatus>, name: &str) -> bool {
    known.get(name).is_some_and(StepStatus::is_finished)
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("identity", &self.identity)
            .field("steps", &self.registry.names())
            .field("depth", &self.scopes.borrow().depth())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::StepDefinition;
    use crate::scope::RunOptions;
    use serde_json::json;
    use std::cell::Cell;
    use std::rc::Rc;

    fn noop(name: &str) -> StepDefinition {
        StepDefinition::new(name, |_| Ok(()))
    }

    fn sequence(steps: Vec<StepDefinition>) -> Sequence {
        Sequence::new(Registry::from_steps(steps).unwrap(), ":memory:")
    }

    #[test]
    fn fresh_sequence_knows_nothing() {
        let seq = sequence(vec![noop("a"), noop("b")]);
        assert!(seq.get_known_statuses().unwrap().is_empty());
        assert!(!seq.is_finished().unwrap());
        assert_eq!(
            seq.list().unwrap(),
            vec![
                StepListing {
                    name: "a".into(),
                    status: StepStatus::Unknown
                },
                StepListing {
                    name: "b".into(),
                    status: StepStatus::Unknown
                },
            ]
        );
    }

    #[test]
    fn empty_sequence_is_finished() {
        let seq = sequence(vec![]);
        assert!(seq.is_empty());
        assert!(seq.is_finished().unwrap());
    }

    #[test]
    fn step_lookup() {
        let seq = sequence(vec![noop("a"), noop("b").with_order(-1)]);
        assert_eq!(seq.step("a").unwrap().index(), 1);
        assert_eq!(seq.step("b").unwrap().index(), 0);
        let b = seq.step("b").unwrap();
        assert_eq!(b.definition().name(), "b");
        assert_eq!(b.definition().options().order, Some(-1));
        assert!(matches!(seq.step("c"), Err(IdemseqError::NotFound { .. })));
        assert!(seq.contains("a"));
        assert_eq!(seq.len(), 2);
    }

    #[test]
    fn step_run_requires_previous_steps() {
        let seq = sequence(vec![noop("a"), noop("b")]);

        let err = seq.step("b").unwrap().run().unwrap_err();
        assert!(matches!(
            err,
            IdemseqError::PreviousStepsNotFinished { ref pending, .. } if pending == "a"
        ));

        {
            let _force = seq.env(RunOptions::new().force(true));
            seq.step("b").unwrap().run().unwrap();
        }
        assert!(seq.step("b").unwrap().is_finished().unwrap());
        assert!(!seq.step("a").unwrap().is_finished().unwrap());
    }

    #[test]
    fn step_run_twice_reports_already_completed() {
        let seq = sequence(vec![noop("a"), noop("b")]);
        let a = seq.step("a").unwrap();

        a.run().unwrap();
        assert!(a.run().unwrap_err().is_already_completed());
        assert_eq!(
            a.attempt().unwrap(),
            StepOutcome::Skipped(SkipReason::AlreadyFinished)
        );
    }

    #[test]
    fn force_does_not_rerun_finished_step() {
        let seq = sequence(vec![noop("a"), noop("b")]);
        seq.step("a").unwrap().run().unwrap();

        let _force = seq.env(RunOptions::new().force(true));
        assert!(seq.step("a").unwrap().run().unwrap_err().is_already_completed());
    }

    #[test]
    fn finished_sequence_skips_with_sequence_reason() {
        let seq = sequence(vec![noop("a")]);
        seq.step("a").unwrap().run().unwrap();
        assert_eq!(
            seq.step("a").unwrap().attempt().unwrap(),
            StepOutcome::Skipped(SkipReason::SequenceFinished)
        );
    }

    #[test]
    fn failing_body_leaves_status_untouched() {
        let seq = sequence(vec![StepDefinition::new("boom", |_| {
            anyhow::bail!("exploded")
        })]);

        let err = seq.step("boom").unwrap().run().unwrap_err();
        assert!(matches!(err, IdemseqError::StepFailed { ref step, .. } if step == "boom"));
        assert_eq!(seq.step("boom").unwrap().status().unwrap(), StepStatus::Unknown);
    }

    #[test]
    fn mark_overrides_status() {
        let seq = sequence(vec![noop("a"), noop("b")]);
        let b = seq.step("b").unwrap();

        b.mark(StepStatus::Failed).unwrap();
        assert_eq!(b.status().unwrap(), StepStatus::Failed);

        b.mark(StepStatus::Finished).unwrap();
        assert!(b.is_finished().unwrap());

        b.mark(StepStatus::Unknown).unwrap();
        assert!(seq.get_known_statuses().unwrap().is_empty());
    }

    #[test]
    fn pop_past_baseline_underflows() {
        let seq = sequence(vec![noop("a")]);
        assert!(matches!(seq.pop_scope(), Err(IdemseqError::ScopeUnderflow)));

        {
            let guard = seq.env(RunOptions::new().force(true));
            assert_eq!(guard.depth(), 2);
            assert!(seq.options().force);
        }
        assert!(!seq.options().force);
        assert!(matches!(seq.pop_scope(), Err(IdemseqError::ScopeUnderflow)));
    }

    #[test]
    fn dropping_outer_guard_first_keeps_inner_scope() {
        let seq = sequence(vec![noop("a")]);

        let dry = seq.env(RunOptions::new().dry_run(true));
        let force = seq.env(RunOptions::new().force(true));
        drop(dry);

        assert!(!seq.is_dry_run());
        assert!(seq.options().force);

        seq.step("a").unwrap().run().unwrap();
        drop(force);

        assert!(!seq.options().force);
        assert!(seq.is_finished().unwrap());
        assert_eq!(
            seq.get_known_statuses().unwrap()["a"],
            StepStatus::Finished
        );
    }

    #[test]
    fn out_of_order_drop_inside_dry_run_keeps_overlay() {
        let seq = sequence(vec![noop("a"), noop("b")]);

        let outer = seq.env(RunOptions::new().dry_run(true));
        let inner = seq.env(RunOptions::new().dry_run(true));
        seq.step("a").unwrap().run().unwrap();

        drop(outer);
        assert!(seq.is_dry_run());
        assert!(seq.step("a").unwrap().is_finished().unwrap());

        drop(inner);
        assert!(!seq.is_dry_run());
        assert!(seq.get_known_statuses().unwrap().is_empty());
    }

    #[test]
    fn remove_scope_is_idempotent() {
        let seq = sequence(vec![noop("a")]);
        let id = seq.push_scope(RunOptions::new().warn_only(true));

        assert!(seq.remove_scope(id));
        assert!(!seq.remove_scope(id));
        assert!(!seq.options().warn_only);
    }

    #[test]
    fn nested_env_shadows_and_restores() {
        let seq = sequence(vec![noop("a")])
            .with_context(Context::from([("x".to_string(), json!(1))]));

        assert_eq!(seq.context_value("x"), Some(json!(1)));
        {
            let _outer = seq.env(Scope::default().with_value("y", 2));
            {
                let _inner = seq.env(Scope::default().with_value("x", 3));
                assert_eq!(seq.context_value("x"), Some(json!(3)));
                assert_eq!(seq.context_value("y"), Some(json!(2)));
            }
            assert_eq!(seq.context_value("x"), Some(json!(1)));
        }
        assert_eq!(seq.context_value("y"), None);
    }

    #[test]
    fn context_is_injected_into_parameters() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let x_seen = seen.clone();
        let y_seen = seen.clone();
        let seq = sequence(vec![
            StepDefinition::new("needs_x", move |args| {
                x_seen.borrow_mut().push(args.value::<i64>("x")?);
                Ok(())
            })
            .param("x"),
            StepDefinition::new("needs_y", move |args| {
                y_seen.borrow_mut().push(args.value::<i64>("y")?);
                Ok(())
            })
            .param("y"),
        ]);

        seq.run(Scope::default().with_value("x", 1).with_value("y", 2))
            .unwrap();
        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn missing_parameter_is_reported() {
        let seq = sequence(vec![noop("needs_y").param("y")]);

        let err = seq.run(RunOptions::new()).unwrap_err();
        assert!(matches!(
            err,
            IdemseqError::MissingContext { ref step, ref param } if step == "needs_y" && param == "y"
        ));
        assert!(!seq.is_finished().unwrap());
    }

    #[test]
    fn declared_default_is_used_last() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let seq = sequence(vec![StepDefinition::new("greet", move |args| {
            sink.borrow_mut().push(args.str("name")?.to_string());
            Ok(())
        })
        .param(Param::with_default("name", "world"))]);

        seq.run(RunOptions::new()).unwrap();
        seq.reset(None).unwrap();
        seq.run(Scope::default().with_value("name", "operator"))
            .unwrap();

        assert_eq!(*seen.borrow(), vec!["world", "operator"]);
    }

    #[test]
    fn providers_run_once_and_feed_each_other() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let first = seen.clone();
        let second = seen.clone();

        let mut registry = Registry::from_steps([
            StepDefinition::new("first", move |args| {
                first.borrow_mut().push(args.str("url")?.to_string());
                Ok(())
            })
            .param("url"),
            StepDefinition::new("second", move |args| {
                second.borrow_mut().push(args.str("url")?.to_string());
                Ok(())
            })
            .param("url"),
        ])
        .unwrap();
        registry
            .register_provider(Provider::new("host", |_| Ok(json!("db.internal"))))
            .unwrap();
        registry
            .register_provider(
                Provider::new("url", move |args| {
                    counter.set(counter.get() + 1);
                    Ok(json!(format!("pg://{}", args.str("host")?)))
                })
                .param("host"),
            )
            .unwrap();

        let seq = Sequence::new(registry, ":memory:");
        seq.run(RunOptions::new()).unwrap();

        assert_eq!(calls.get(), 1);
        assert_eq!(*seen.borrow(), vec!["pg://db.internal", "pg://db.internal"]);
    }

    #[test]
    fn context_overrides_provider() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let mut registry = Registry::from_steps([noop("a").param("x")]).unwrap();
        registry
            .register_provider(Provider::new("x", move |_| {
                counter.set(counter.get() + 1);
                Ok(json!(0))
            }))
            .unwrap();

        let seq = Sequence::new(registry, ":memory:");
        seq.run(Scope::default().with_value("x", 1)).unwrap();
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn provider_cycle_is_detected() {
        let mut registry = Registry::from_steps([noop("a").param("x")]).unwrap();
        registry
            .register_provider(Provider::new("x", |_| Ok(json!(1))).param("y"))
            .unwrap();
        registry
            .register_provider(Provider::new("y", |_| Ok(json!(2))).param("x"))
            .unwrap();

        let seq = Sequence::new(registry, ":memory:");
        let err = seq.run(RunOptions::new()).unwrap_err();
        assert!(matches!(
            err,
            IdemseqError::ProviderCycle { ref chain } if chain == "x -> y -> x"
        ));
    }

    #[test]
    fn provider_failure_is_wrapped() {
        let mut registry = Registry::from_steps([noop("a").param("x")]).unwrap();
        registry
            .register_provider(Provider::new("x", |_| anyhow::bail!("no network")))
            .unwrap();

        let seq = Sequence::new(registry, ":memory:");
        let err = seq.run(RunOptions::new()).unwrap_err();
        assert!(matches!(err, IdemseqError::ProviderFailed { ref provider, .. } if provider == "x"));
    }

    #[test]
    fn dry_run_does_not_resolve_parameters() {
        let seq = sequence(vec![noop("needs_y").param("y")]);

        let report = seq.run(RunOptions::new().dry_run(true)).unwrap();
        assert_eq!(report.simulated, vec!["needs_y"]);
    }

    #[test]
    fn dry_run_overlay_is_seeded_and_discarded() {
        let seq = sequence(vec![noop("a"), noop("b")]);
        seq.step("a").unwrap().run().unwrap();

        {
            let _dry = seq.env(RunOptions::new().dry_run(true));
            assert!(seq.step("a").unwrap().is_finished().unwrap());

            seq.step("b").unwrap().run().unwrap();
            assert!(seq.is_finished().unwrap());
        }

        assert!(!seq.is_finished().unwrap());
        assert_eq!(seq.step("b").unwrap().status().unwrap(), StepStatus::Unknown);
    }

    #[test]
    fn mark_inside_dry_run_stays_in_overlay() {
        let seq = sequence(vec![noop("a")]);
        {
            let _dry = seq.env(RunOptions::new().dry_run(true));
            seq.step("a").unwrap().mark(StepStatus::Failed).unwrap();
            assert_eq!(seq.step("a").unwrap().status().unwrap(), StepStatus::Failed);
        }
        assert_eq!(seq.step("a").unwrap().status().unwrap(), StepStatus::Unknown);
    }

    #[test]
    fn reset_inside_dry_run_hits_durable_store() {
        let seq = sequence(vec![noop("a")]);
        seq.step("a").unwrap().run().unwrap();

        {
            let _dry = seq.env(RunOptions::new().dry_run(true));
            seq.step("a").unwrap().reset().unwrap();
            assert_eq!(seq.step("a").unwrap().status().unwrap(), StepStatus::Unknown);
        }
        assert_eq!(seq.step("a").unwrap().status().unwrap(), StepStatus::Unknown);
    }

    struct BrokenStore;

    impl StatusStore for BrokenStore {
        fn get_status(&mut self, _step: &str) -> Result<StepStatus> {
            Err(anyhow::anyhow!("disk gone").into())
        }

        fn update_status(&mut self, _step: &str, _status: StepStatus) -> Result<()> {
            Err(anyhow::anyhow!("disk gone").into())
        }

        fn get_known_statuses(&mut self) -> Result<BTreeMap<String, StepStatus>> {
            Err(anyhow::anyhow!("disk gone").into())
        }
    }

    #[test]
    fn store_errors_propagate() {
        let seq = sequence(vec![noop("a")]).with_store(BrokenStore);
        let err = seq.run(RunOptions::new()).unwrap_err();
        assert!(err.to_string().contains("disk gone"));
        assert_eq!(seq.options(), ResolvedOptions::default());
    }
}
