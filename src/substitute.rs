//! The substitution engine: recursive placeholder resolution over a YAML tree
//!
//! Two placeholder contexts exist. An inline `${NAME}` anywhere inside a
//! string value is replaced by the variable's value. A mapping key that is
//! entirely `${NAME}` pulls the variable in as a YAML fragment: the fragment
//! is parsed, substituted, and merged into the enclosing mapping, with keys
//! already present in the result winning over fragment keys.

use std::sync::LazyLock;

use regex::Regex;
use serde_yaml::{Mapping, Value};

use crate::env::EnvSnapshot;
use crate::error::{Result, yaml_fragment};

/// `${NAME}` anywhere inside a string value.
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([a-zA-Z][a-zA-Z0-9_]*)\}").expect("valid regex"));

/// A mapping key that is, in its entirety, a single `${NAME}` reference.
static KEY_PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$\{([a-zA-Z][a-zA-Z0-9_]*)\}$").expect("valid regex"));

/// Substitute all placeholders in a value tree, returning a new tree.
pub fn substitute(value: &Value, env: &EnvSnapshot) -> Result<Value> {
    match value {
        Value::Sequence(items) => {
            let items = items
                .iter()
                .map(|item| substitute(item, env))
                .collect::<Result<Vec<_>>>()?;
            Ok(Value::Sequence(items))
        }
        Value::String(s) => Ok(Value::String(substitute_str(s, env)?)),
        Value::Mapping(mapping) => substitute_mapping(mapping, env).map(Value::Mapping),
        other => Ok(other.clone()),
    }
}

/// Parse one YAML document, treating blank text as an explicit null.
///
/// `serde_yaml` rejects empty input outright, but an empty document block
/// (or an empty fragment variable) must substitute to null.
pub fn parse_document(text: &str) -> serde_yaml::Result<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_yaml::from_str(text)
}

/// Replace every inline placeholder in `s`, left to right.
///
/// The resolved variable value is itself substituted before splicing, so a
/// variable whose value contains further placeholders is expanded one level.
fn substitute_str(s: &str, env: &EnvSnapshot) -> Result<String> {
    let mut result = String::with_capacity(s.len());
    let mut last_end = 0;
    for caps in PLACEHOLDER_RE.captures_iter(s) {
        let m = caps.get(0).expect("match group 0 always present");
        result.push_str(&s[last_end..m.start()]);
        let resolved = env.resolve(&caps[1])?;
        result.push_str(&substitute_str(&resolved, env)?);
        last_end = m.end();
    }
    result.push_str(&s[last_end..]);
    Ok(result)
}

/// Rebuild a mapping entry by entry, expanding key placeholders as fragments.
fn substitute_mapping(mapping: &Mapping, env: &EnvSnapshot) -> Result<Mapping> {
    let mut result = Mapping::new();
    for (key, value) in mapping {
        let fragment_var = key
            .as_str()
            .and_then(|k| KEY_PLACEHOLDER_RE.captures(k))
            .map(|caps| caps[1].to_string());
        match fragment_var {
            Some(name) => {
                let raw = env.resolve(&name)?;
                let fragment =
                    parse_document(&raw).map_err(|e| yaml_fragment(&name, e.to_string()))?;
                let fragment = substitute(&fragment, env)?;
                merge_fragment(&mut result, fragment);
            }
            None => {
                result.insert(key.clone(), substitute(value, env)?);
            }
        }
    }
    Ok(result)
}

/// Merge fragment keys into the result mapping; keys already present win.
///
/// A fragment that is not a mapping (a scalar, a sequence, or null from an
/// empty variable) contributes no keys.
fn merge_fragment(result: &mut Mapping, fragment: Value) {
    if let Value::Mapping(fragment_map) = fragment {
        for (key, value) in fragment_map {
            if !result.contains_key(&key) {
                result.insert(key, value);
            }
        }
    }
}
