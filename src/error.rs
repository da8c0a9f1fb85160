//! Error types and handling for yaml-envsubst
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for yaml-envsubst operations
#[derive(Error, Diagnostic, Debug)]
pub enum EnvsubstError {
    #[error("Environment variable {name} is not defined")]
    #[diagnostic(
        code(yaml_envsubst::env::missing_variable),
        help(
            "Define the variable, or pass --ignore-missing-variables to substitute an empty value"
        )
    )]
    MissingEnvVar { name: String },

    #[error("Input file does not exist: {path}")]
    #[diagnostic(
        code(yaml_envsubst::input::missing_file),
        help("Check the path, or pass --ignore-missing-input-file to treat the input as empty")
    )]
    MissingInputFile { path: String },

    #[error("Output file argument is not specified")]
    #[diagnostic(
        code(yaml_envsubst::output::missing_argument),
        help("Usage: yaml-envsubst <input file> <output file>")
    )]
    MissingOutputFile,

    #[error("Failed to parse YAML document {index}: {reason}")]
    #[diagnostic(code(yaml_envsubst::yaml::parse_failed))]
    YamlParse { index: usize, reason: String },

    #[error("Failed to parse YAML fragment in environment variable {name}: {reason}")]
    #[diagnostic(
        code(yaml_envsubst::yaml::fragment_parse_failed),
        help("A key of the form ${{NAME}} expects the variable to hold a YAML mapping")
    )]
    YamlFragment { name: String, reason: String },

    #[error("Failed to serialize YAML document {index}: {reason}")]
    #[diagnostic(code(yaml_envsubst::yaml::serialize_failed))]
    YamlSerialize { index: usize, reason: String },

    #[error("Failed to read file {path}: {reason}")]
    #[diagnostic(code(yaml_envsubst::fs::read_failed))]
    FileRead { path: String, reason: String },

    #[error("Failed to write file {path}: {reason}")]
    #[diagnostic(code(yaml_envsubst::fs::write_failed))]
    FileWrite { path: String, reason: String },
}

/// Result type alias using [`EnvsubstError`]
pub type Result<T> = std::result::Result<T, EnvsubstError>;

/// Creates a missing environment variable error
pub fn missing_env_var(name: impl Into<String>) -> EnvsubstError {
    EnvsubstError::MissingEnvVar { name: name.into() }
}

/// Creates a missing input file error
pub fn missing_input_file(path: impl Into<String>) -> EnvsubstError {
    EnvsubstError::MissingInputFile { path: path.into() }
}

/// Creates a YAML parse error for a document block
pub fn yaml_parse(index: usize, reason: impl Into<String>) -> EnvsubstError {
    EnvsubstError::YamlParse {
        index,
        reason: reason.into(),
    }
}

/// Creates a YAML fragment parse error
pub fn yaml_fragment(name: impl Into<String>, reason: impl Into<String>) -> EnvsubstError {
    EnvsubstError::YamlFragment {
        name: name.into(),
        reason: reason.into(),
    }
}

/// Creates a YAML serialize error for a document block
pub fn yaml_serialize(index: usize, reason: impl Into<String>) -> EnvsubstError {
    EnvsubstError::YamlSerialize {
        index,
        reason: reason.into(),
    }
}

/// Creates a file read failed error
pub fn file_read(path: impl Into<String>, reason: impl Into<String>) -> EnvsubstError {
    EnvsubstError::FileRead {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn file_write(path: impl Into<String>, reason: impl Into<String>) -> EnvsubstError {
    EnvsubstError::FileWrite {
        path: path.into(),
        reason: reason.into(),
    }
}
