//! Step definitions.
//!
//! A [`StepDefinition`] is a name, a callable body, the parameters the
//! body needs from the execution context, and its [`StepOptions`].

use std::fmt;
use std::rc::Rc;

use serde_json::Value;

use super::args::StepArgs;

/// Callable body of a step.
pub type StepFn = Rc<dyn Fn(&StepArgs) -> anyhow::Result<()>>;

/// Per-step execution options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepOptions {
    /// Sort key. Defaults to the declaration index.
    pub order: Option<i64>,

    /// Re-execute on every run regardless of status.
    pub run_always: bool,

    /// Re-execute on every run until the whole sequence has finished.
    pub run_until_finished: bool,
}

impl StepOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }

    pub fn run_always(mut self, run_always: bool) -> Self {
        self.run_always = run_always;
        self
    }

    pub fn run_until_finished(mut self, run_until_finished: bool) -> Self {
        self.run_until_finished = run_until_finished;
        self
    }
}

/// A named data dependency of a step or provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,

    /// Used when neither the context nor a provider supplies a value.
    pub default: Option<Value>,
}

impl Param {
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
        }
    }

    pub fn with_default(name: impl Into<String>, default: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            default: Some(default.into()),
        }
    }

    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

impl From<&str> for Param {
    fn from(name: &str) -> Self {
        Param::required(name)
    }
}

impl From<String> for Param {
    fn from(name: String) -> Self {
        Param::required(name)
    }
}

/// A registered step.
#[derive(Clone)]
pub struct StepDefinition {
    name: String,
    params: Vec<Param>,
    options: StepOptions,
    body: StepFn,
}

impl StepDefinition {
    /// Create a step with no parameters and default options.
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&StepArgs) -> anyhow::Result<()> + 'static,
    {
        Self {
            name: name.into(),
            params: Vec::new(),
            options: StepOptions::default(),
            body: Rc::new(body),
        }
    }

    /// Declare one parameter.
    pub fn param(mut self, param: impl Into<Param>) -> Self {
        self.params.push(param.into());
        self
    }

    /// Declare several parameters, in order.
    pub fn params<I, P>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Param>,
    {
        self.params.extend(params.into_iter().map(Into::into));
        self
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.options.order = Some(order);
        self
    }

    pub fn run_always(mut self) -> Self {
        self.options.run_always = true;
        self
    }

    pub fn run_until_finished(mut self) -> Self {
        self.options.run_until_finished = true;
        self
    }

    /// Replace all options at once.
    pub fn with_options(mut self, options: StepOptions) -> Self {
        self.options = options;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[Param] {
        &self.params
    }

    pub fn options(&self) -> &StepOptions {
        &self.options
    }

    /// Invoke the body with already-resolved arguments.
    pub fn call(&self, args: &StepArgs) -> anyhow::Result<()> {
        (self.body)(args)
    }
}

impl fmt::Debug for StepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepDefinition")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::Cell;

    #[test]
    fn defaults() {
        let step = StepDefinition::new("install", |_| Ok(()));
        assert_eq!(step.name(), "install");
        assert!(step.parameters().is_empty());
        assert_eq!(step.options(), &StepOptions::default());
    }

    #[test]
    fn builder_sets_options() {
        let step = StepDefinition::new("install", |_| Ok(()))
            .with_order(5)
            .run_always()
            .run_until_finished();

        assert_eq!(step.options().order, Some(5));
        assert!(step.options().run_always);
        assert!(step.options().run_until_finished);
    }

    #[test]
    fn with_options_replaces_previous() {
        let step = StepDefinition::new("install", |_| Ok(()))
            .run_always()
            .with_options(StepOptions::new().order(3));

        assert_eq!(step.options().order, Some(3));
        assert!(!step.options().run_always);
    }

    #[test]
    fn params_keep_declaration_order() {
        let step = StepDefinition::new("deploy", |_| Ok(()))
            .param("host")
            .params([Param::with_default("port", 22), Param::required("user")]);

        let names: Vec<_> = step.parameters().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["host", "port", "user"]);
        assert!(step.parameters()[0].is_required());
        assert_eq!(step.parameters()[1].default, Some(json!(22)));
    }

    #[test]
    fn call_invokes_body() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let step = StepDefinition::new("count", move |_| {
            counter.set(counter.get() + 1);
            Ok(())
        });

        step.call(&StepArgs::empty("count")).unwrap();
        step.call(&StepArgs::empty("count")).unwrap();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn debug_omits_body() {
        let step = StepDefinition::new("install", |_| Ok(()));
        let debug = format!("{:?}", step);
        assert!(debug.contains("install"));
    }
}
