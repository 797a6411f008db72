//! Manifest file schema.
//!
//! ```yaml
//! context:
//!   target: ./app
//! steps:
//!   - name: install_deps
//!     command: "npm install --prefix ${target}"
//!     params: [target]
//!   - name: build
//!     command: "npm run build"
//!     order: 20
//!     params:
//!       mode: production
//!       target: ~
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Top-level manifest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    /// Base context available to every step.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub context: BTreeMap<String, serde_yaml::Value>,

    /// Steps in declaration order.
    pub steps: Vec<StepSpec>,
}

/// One shell-command step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StepSpec {
    pub name: String,

    /// Shell command; `${param}` is substituted before running.
    pub command: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub run_always: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub run_until_finished: bool,

    #[serde(default, skip_serializing_if = "ParamSpec::is_empty")]
    pub params: ParamSpec,

    /// Static environment variables for the command.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
}

/// Declared parameters: a list of required names, or a map of name to
/// default where `~` means required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamSpec {
    Names(Vec<String>),
    WithDefaults(BTreeMap<String, Option<serde_yaml::Value>>),
}

impl ParamSpec {
    pub fn is_empty(&self) -> bool {
        match self {
            ParamSpec::Names(names) => names.is_empty(),
            ParamSpec::WithDefaults(map) => map.is_empty(),
        }
    }

    /// Parameter names with their optional defaults, in declaration
    /// order for lists and name order for maps.
    pub fn entries(&self) -> Vec<(&str, Option<&serde_yaml::Value>)> {
        match self {
            ParamSpec::Names(names) => names.iter().map(|n| (n.as_str(), None)).collect(),
            ParamSpec::WithDefaults(map) => map
                .iter()
                .map(|(n, default)| (n.as_str(), default.as_ref()))
                .collect(),
        }
    }
}

impl Default for ParamSpec {
    fn default() -> Self {
        ParamSpec::Names(Vec::new())
    }
}

fn is_false(v: &bool) -> bool {
    !v
}
