//! Manifest loading and registry construction.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{IdemseqError, Result};
use crate::registry::{Param, Registry, StepArgs, StepDefinition, StepOptions};
use crate::scope::Context;
use crate::shell::{self, CommandOptions};

use super::interpolation::{extract_variables, render, value_to_string};
use super::schema::{Manifest, StepSpec};

/// Prefix for parameters exported to step commands.
pub const ENV_PREFIX: &str = "IDEMSEQ_";

/// Load and parse a manifest file.
///
/// # Errors
///
/// Returns `Manifest` if the file is missing or the YAML is invalid.
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IdemseqError::Manifest {
                path: path.to_path_buf(),
                message: "file not found".to_string(),
            }
        } else {
            IdemseqError::Io(e)
        }
    })?;

    parse_manifest(&content, path)
}

/// Parse YAML content into a [`Manifest`].
///
/// `source_path` is used for error reporting only.
pub fn parse_manifest(content: &str, source_path: &Path) -> Result<Manifest> {
    serde_yaml::from_str(content).map_err(|e| IdemseqError::Manifest {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

impl Manifest {
    /// Build a registry of shell-command steps.
    pub fn build_registry(&self, source_path: &Path) -> Result<Registry> {
        let mut registry = Registry::new();
        for spec in &self.steps {
            registry.register(command_step(spec, source_path)?)?;
        }
        debug!(
            "Loaded {} step(s) from {}",
            registry.len(),
            source_path.display()
        );
        Ok(registry)
    }

    /// The manifest's `context:` block as context values.
    pub fn base_context(&self, source_path: &Path) -> Result<Context> {
        let mut context = Context::new();
        for (key, value) in &self.context {
            context.insert(key.clone(), yaml_to_json(value, source_path)?);
        }
        Ok(context)
    }
}

fn command_step(spec: &StepSpec, source_path: &Path) -> Result<StepDefinition> {
    let invalid = |message: String| IdemseqError::Manifest {
        path: source_path.to_path_buf(),
        message,
    };

    if spec.name.trim().is_empty() {
        return Err(invalid("step name cannot be empty".to_string()));
    }
    if spec.command.trim().is_empty() {
        return Err(invalid(format!("step '{}' has an empty command", spec.name)));
    }

    let mut params = Vec::new();
    for (name, default) in spec.params.entries() {
        let param = match default {
            Some(value) => Param::with_default(name, yaml_to_json(value, source_path)?),
            None => Param::required(name),
        };
        params.push(param);
    }

    let declared: HashSet<&str> = params.iter().map(|p| p.name.as_str()).collect();
    for variable in extract_variables(&spec.command) {
        if !declared.contains(variable.as_str()) {
            return Err(invalid(format!(
                "step '{}' uses ${{{}}} but does not declare it in params",
                spec.name, variable
            )));
        }
    }

    let options = StepOptions {
        order: spec.order,
        run_always: spec.run_always,
        run_until_finished: spec.run_until_finished,
    };

    let template = spec.command.clone();
    let static_env = spec.env.clone();
    Ok(StepDefinition::new(spec.name.clone(), move |args| {
        let command = render(&template, args)?;
        let mut env = static_env.clone();
        env.extend(parameter_env(args));

        let options = CommandOptions {
            env,
            ..Default::default()
        };
        shell::execute(&command, &options)?.check(&command)?;
        Ok(())
    })
    .params(params)
    .with_options(options))
}

/// Environment variables exported for a step's parameters.
pub fn parameter_env(args: &StepArgs) -> BTreeMap<String, String> {
    args.iter()
        .map(|(name, value)| (env_name(name), value_to_string(value)))
        .collect()
}

/// `IDEMSEQ_` plus the upper-cased name, non-alphanumerics as `_`.
pub fn env_name(param: &str) -> String {
    let suffix: String = param
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{}{}", ENV_PREFIX, suffix)
}

fn yaml_to_json(value: &serde_yaml::Value, source_path: &Path) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| IdemseqError::Manifest {
        path: source_path.to_path_buf(),
        message: format!("unsupported value: {}", e),
    })
}
