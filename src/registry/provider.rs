//! Context providers.
//!
//! A provider computes a context value on demand when a step parameter of
//! the same name is not present in any active scope.

use std::fmt;
use std::rc::Rc;

use serde_json::Value;

use super::args::StepArgs;
use super::step::Param;

/// Callable body of a provider.
pub type ProviderFn = Rc<dyn Fn(&StepArgs) -> anyhow::Result<Value>>;

/// A named value source.
#[derive(Clone)]
pub struct Provider {
    name: String,
    params: Vec<Param>,
    body: ProviderFn,
}

impl Provider {
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&StepArgs) -> anyhow::Result<Value> + 'static,
    {
        Self {
            name: name.into(),
            params: Vec::new(),
            body: Rc::new(body),
        }
    }

    pub fn param(mut self, param: impl Into<Param>) -> Self {
        self.params.push(param.into());
        self
    }

    pub fn params<I, P>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Param>,
    {
        self.params.extend(params.into_iter().map(Into::into));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[Param] {
        &self.params
    }

    pub fn call(&self, args: &StepArgs) -> anyhow::Result<Value> {
        (self.body)(args)
    }
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}
