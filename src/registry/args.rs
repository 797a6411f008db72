//! Resolved arguments handed to step and provider bodies.

use std::collections::BTreeMap;

use anyhow::{anyhow, Context as _};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parameter values resolved for one invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepArgs {
    owner: String,
    values: BTreeMap<String, Value>,
}

impl StepArgs {
    pub fn new(owner: impl Into<String>, values: BTreeMap<String, Value>) -> Self {
        Self {
            owner: owner.into(),
            values,
        }
    }

    pub fn empty(owner: impl Into<String>) -> Self {
        Self::new(owner, BTreeMap::new())
    }

    /// Name of the step or provider these arguments were resolved for.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Deserialize a parameter into a concrete type.
    pub fn value<T: DeserializeOwned>(&self, name: &str) -> anyhow::Result<T> {
        let value = self.require(name)?;
        serde_json::from_value(value.clone())
            .with_context(|| format!("Parameter '{}' of '{}' has the wrong type", name, self.owner))
    }

    /// Borrow a string parameter.
    pub fn str(&self, name: &str) -> anyhow::Result<&str> {
        self.require(name)?
            .as_str()
            .ok_or_else(|| anyhow!("Parameter '{}' of '{}' is not a string", name, self.owner))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn require(&self, name: &str) -> anyhow::Result<&Value> {
        self.values
            .get(name)
            .ok_or_else(|| anyhow!("'{}' did not declare parameter '{}'", self.owner, name))
    }
}
