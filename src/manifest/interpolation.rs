//! `${param}` substitution in manifest commands.
//!
//! - `${name}` is replaced with the value of parameter `name`, quoted
//!   for the shell so it always stays a single word
//! - `$${name}` produces a literal `${name}`
//! - any other `$` is left alone, so shell syntax like `$HOME` or `$$`
//!   passes through untouched

use std::collections::BTreeSet;

use anyhow::anyhow;
use serde_json::Value;

use crate::registry::StepArgs;

/// A segment of a command template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    /// `${name}`
    Variable(String),
}

/// Split a command template into literal and variable segments.
pub fn parse_interpolation(input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut rest = input;

    while let Some(pos) = rest.find('$') {
        literal.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if let Some(escaped) = tail.strip_prefix("$${") {
            // Literal `${...}`; copy through the closing brace.
            let end = escaped.find('}').map(|i| i + 1).unwrap_or(escaped.len());
            literal.push_str("${");
            literal.push_str(&escaped[..end]);
            rest = &escaped[end..];
        } else if let Some(open) = tail.strip_prefix("${") {
            match open.find('}') {
                Some(end) => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Variable(open[..end].trim().to_string()));
                    rest = &open[end + 1..];
                }
                None => {
                    // Unterminated: keep as text.
                    literal.push_str(tail);
                    rest = "";
                }
            }
        } else {
            literal.push('$');
            rest = &tail[1..];
        }
    }
    literal.push_str(rest);

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    segments
}

/// Unique variable names referenced by a template.
pub fn extract_variables(input: &str) -> BTreeSet<String> {
    parse_interpolation(input)
        .into_iter()
        .filter_map(|seg| match seg {
            Segment::Variable(name) => Some(name),
            Segment::Literal(_) => None,
        })
        .collect()
}

/// Substitute shell-quoted parameter values into a template.
pub fn render(input: &str, args: &StepArgs) -> anyhow::Result<String> {
    let mut result = String::new();
    for segment in parse_interpolation(input) {
        match segment {
            Segment::Literal(text) => result.push_str(&text),
            Segment::Variable(name) => {
                let value = args
                    .get(&name)
                    .ok_or_else(|| anyhow!("Unresolved variable: ${{{}}}", name))?;
                result.push_str(&shell_quote(&value_to_string(value)));
            }
        }
    }
    Ok(result)
}

/// Text form of a context value: strings verbatim, `null` empty,
/// everything else as JSON.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Quote `text` as one shell word. Plain words are left as they are.
pub fn shell_quote(text: &str) -> String {
    let plain = !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=@,+%".contains(c));
    if plain {
        return text.to_string();
    }

    if cfg!(target_os = "windows") {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        format!("'{}'", text.replace('\'', "'\\''"))
    }
}
