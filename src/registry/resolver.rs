//! Ordered step registry.
//!
//! Steps are kept in declaration order and exposed sorted by
//! `(order, declaration index)`, where `order` defaults to the
//! declaration index.

use std::collections::{BTreeMap, HashMap};

use crate::error::{IdemseqError, Result};

use super::provider::Provider;
use super::step::StepDefinition;

/// Insertion-ordered collection of step definitions and providers.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<StepDefinition>,
    index: HashMap<String, usize>,
    /// Entry indices in execution order.
    ordered: Vec<usize>,
    providers: BTreeMap<String, Provider>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from steps in declaration order.
    pub fn from_steps<I>(steps: I) -> Result<Self>
    where
        I: IntoIterator<Item = StepDefinition>,
    {
        let mut registry = Self::new();
        for step in steps {
            registry.register(step)?;
        }
        Ok(registry)
    }

    /// Add a step. Fails if the name is taken.
    pub fn register(&mut self, step: StepDefinition) -> Result<()> {
        if self.index.contains_key(step.name()) {
            return Err(IdemseqError::DuplicateName {
                name: step.name().to_string(),
            });
        }

        let position = self.entries.len();
        self.index.insert(step.name().to_string(), position);
        self.entries.push(step);
        self.reorder();
        Ok(())
    }

    /// Add a context provider. Fails if a provider with the name exists.
    pub fn register_provider(&mut self, provider: Provider) -> Result<()> {
        if self.providers.contains_key(provider.name()) {
            return Err(IdemseqError::DuplicateName {
                name: provider.name().to_string(),
            });
        }
        self.providers.insert(provider.name().to_string(), provider);
        Ok(())
    }

    fn reorder(&mut self) {
        let entries = &self.entries;
        let mut ordered: Vec<usize> = (0..entries.len()).collect();
        ordered.sort_by_key(|&i| (entries[i].options().order.unwrap_or(i as i64), i));
        self.ordered = ordered;
    }

    /// Steps in execution order. The iterator can be cloned to restart.
    pub fn order(&self) -> impl Iterator<Item = &StepDefinition> + Clone + '_ {
        self.ordered.iter().map(move |&i| &self.entries[i])
    }

    pub fn lookup(&self, name: &str) -> Result<&StepDefinition> {
        self.index
            .get(name)
            .map(|&i| &self.entries[i])
            .ok_or_else(|| IdemseqError::NotFound {
                name: name.to_string(),
            })
    }

    /// Position of a step in execution order.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        let entry = *self.index.get(name)?;
        self.ordered.iter().position(|&i| i == entry)
    }

    /// Step at a position in execution order.
    pub fn get(&self, position: usize) -> Option<&StepDefinition> {
        self.ordered.get(position).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Step names in execution order.
    pub fn names(&self) -> Vec<&str> {
        self.order().map(|s| s.name()).collect()
    }

    pub fn provider(&self, name: &str) -> Option<&Provider> {
        self.providers.get(name)
    }

    pub fn providers(&self) -> impl Iterator<Item = &Provider> {
        self.providers.values()
    }
}
