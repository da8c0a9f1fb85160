//! Environment snapshot and variable resolution
//!
//! The engine never reads the process environment directly; it resolves
//! names against a snapshot captured once per run, so tests can inject
//! variables without mutating process-wide state.

use std::collections::HashMap;

use console::Style;

use crate::error::{Result, missing_env_var};

/// What to do when a referenced environment variable is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingVarMode {
    /// Abort the run with an error.
    Fail,
    /// Warn on stderr and substitute the empty string.
    WarnEmpty,
}

/// Immutable view of the environment variables for one run.
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
    mode: MissingVarMode,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    pub fn from_process(mode: MissingVarMode) -> Self {
        Self {
            vars: std::env::vars().collect(),
            mode,
        }
    }

    /// Build a snapshot from explicit name/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I, mode: MissingVarMode) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            mode,
        }
    }

    /// Resolve a variable by name, applying the missing-variable mode.
    pub fn resolve(&self, name: &str) -> Result<String> {
        match self.vars.get(name) {
            Some(value) => Ok(value.clone()),
            None => match self.mode {
                MissingVarMode::Fail => Err(missing_env_var(name)),
                MissingVarMode::WarnEmpty => {
                    eprintln!(
                        "{} Environment variable {} is not defined, using empty value instead.",
                        Style::new().yellow().bold().apply_to("[warn]"),
                        name
                    );
                    Ok(String::new())
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_resolve_present_variable() {
        let env = EnvSnapshot::from_pairs([("NAME", "demo")], MissingVarMode::Fail);
        assert_eq!(env.resolve("NAME").unwrap(), "demo");
    }

    #[test]
    fn test_resolve_missing_fails_in_strict_mode() {
        let env = EnvSnapshot::from_pairs::<[(&str, &str); 0], _, _>([], MissingVarMode::Fail);
        let err = env.resolve("ABSENT").unwrap_err();
        assert!(matches!(
            err,
            crate::error::EnvsubstError::MissingEnvVar { .. }
        ));
        assert!(err.to_string().contains("ABSENT"));
    }

    #[test]
    fn test_resolve_missing_is_empty_in_ignore_mode() {
        let env = EnvSnapshot::from_pairs::<[(&str, &str); 0], _, _>([], MissingVarMode::WarnEmpty);
        assert_eq!(env.resolve("ABSENT").unwrap(), "");
    }

    #[test]
    #[serial]
    fn test_from_process_sees_process_environment() {
        unsafe {
            std::env::set_var("YAML_ENVSUBST_TEST_VAR", "from-process");
        }
        let env = EnvSnapshot::from_process(MissingVarMode::Fail);
        assert_eq!(
            env.resolve("YAML_ENVSUBST_TEST_VAR").unwrap(),
            "from-process"
        );
        unsafe {
            std::env::remove_var("YAML_ENVSUBST_TEST_VAR");
        }
    }

    #[test]
    #[serial]
    fn test_snapshot_is_immutable_after_capture() {
        unsafe {
            std::env::set_var("YAML_ENVSUBST_SNAPSHOT_VAR", "before");
        }
        let env = EnvSnapshot::from_process(MissingVarMode::Fail);
        unsafe {
            std::env::set_var("YAML_ENVSUBST_SNAPSHOT_VAR", "after");
        }
        assert_eq!(env.resolve("YAML_ENVSUBST_SNAPSHOT_VAR").unwrap(), "before");
        unsafe {
            std::env::remove_var("YAML_ENVSUBST_SNAPSHOT_VAR");
        }
    }
}
