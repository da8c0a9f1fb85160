//! Run orchestration: read input, substitute each document block, write output
//!
//! All blocks are transformed in memory before the output file is touched,
//! so a failing run never leaves a partially substituted output behind.

use std::fs;
use std::path::Path;

use crate::cli::Cli;
use crate::env::{EnvSnapshot, MissingVarMode};
use crate::error::{
    EnvsubstError, Result, file_read, file_write, missing_input_file, yaml_parse, yaml_serialize,
};
use crate::stream;
use crate::substitute;

/// Execute one substitution run described by the parsed CLI arguments.
pub fn run(cli: &Cli) -> Result<()> {
    let output = cli
        .output
        .as_deref()
        .ok_or(EnvsubstError::MissingOutputFile)?;

    let mode = if cli.ignore || cli.ignore_missing_variables {
        MissingVarMode::WarnEmpty
    } else {
        MissingVarMode::Fail
    };
    let ignore_missing_input = cli.ignore || cli.ignore_missing_input_file;

    let text = read_input(cli.input.as_deref(), ignore_missing_input)?;
    let env = EnvSnapshot::from_process(mode);
    let rendered = render_blocks(&text, &env, cli.verbose)?;

    write_output(output, &stream::join(&rendered))
}

/// Read the input file, or produce empty text when a missing input is tolerated.
fn read_input(input: Option<&Path>, ignore_missing: bool) -> Result<String> {
    if let Some(path) = input {
        if path.exists() {
            return fs::read_to_string(path)
                .map_err(|e| file_read(path.display().to_string(), e.to_string()));
        }
    }
    if ignore_missing {
        Ok(String::new())
    } else {
        let shown = input.map_or_else(|| "(not specified)".to_string(), |p| p.display().to_string());
        Err(missing_input_file(shown))
    }
}

/// Parse, substitute, and re-serialize every document block.
fn render_blocks(text: &str, env: &EnvSnapshot, verbose: bool) -> Result<Vec<String>> {
    let blocks = stream::split(text);
    let mut rendered = Vec::with_capacity(blocks.len());
    for (index, block) in blocks.iter().enumerate() {
        let tree =
            substitute::parse_document(block).map_err(|e| yaml_parse(index, e.to_string()))?;
        let substituted = substitute::substitute(&tree, env)?;
        let serialized = serde_yaml::to_string(&substituted)
            .map_err(|e| yaml_serialize(index, e.to_string()))?;
        if verbose {
            eprintln!(
                "Substituted document {} of {} ({} bytes)",
                index + 1,
                blocks.len(),
                serialized.len()
            );
        }
        rendered.push(serialized);
    }
    Ok(rendered)
}

/// Replace the output file with the rendered stream.
fn write_output(output: &Path, content: &str) -> Result<()> {
    if output.exists() {
        fs::remove_file(output)
            .map_err(|e| file_write(output.display().to_string(), e.to_string()))?;
    }
    fs::write(output, content).map_err(|e| file_write(output.display().to_string(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MissingVarMode;
    use tempfile::TempDir;

    fn strict_env(pairs: &[(&str, &str)]) -> EnvSnapshot {
        EnvSnapshot::from_pairs(pairs.iter().copied(), MissingVarMode::Fail)
    }

    #[test]
    fn read_input_missing_file_fails_by_default() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.yaml");
        let err = read_input(Some(&path), false).unwrap_err();
        assert!(matches!(err, EnvsubstError::MissingInputFile { .. }));
    }

    #[test]
    fn read_input_missing_file_is_empty_when_ignored() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.yaml");
        assert_eq!(read_input(Some(&path), true).unwrap(), "");
    }

    #[test]
    fn read_input_missing_argument_fails_by_default() {
        let err = read_input(None, false).unwrap_err();
        assert!(matches!(err, EnvsubstError::MissingInputFile { .. }));
    }

    #[test]
    fn render_blocks_substitutes_each_document() {
        let env = strict_env(&[("A", "1"), ("B", "2")]);
        let rendered = render_blocks("a: ${A}\n---\nb: ${B}", &env, false).unwrap();
        assert_eq!(rendered, vec!["a: '1'\n", "b: '2'\n"]);
    }

    #[test]
    fn render_blocks_reports_failing_block_index() {
        let env = strict_env(&[]);
        let err = render_blocks("a: 1\n---\nb: [unclosed", &env, false).unwrap_err();
        match err {
            EnvsubstError::YamlParse { index, .. } => assert_eq!(index, 1),
            other => panic!("expected YamlParse error, got {other:?}"),
        }
    }

    #[test]
    fn render_blocks_empty_input_yields_null_document() {
        let env = strict_env(&[]);
        let rendered = render_blocks("", &env, false).unwrap();
        assert_eq!(rendered, vec!["null\n"]);
    }

    #[test]
    fn write_output_replaces_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.yaml");
        fs::write(&path, "stale content").unwrap();
        write_output(&path, "a: 1\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a: 1\n");
    }
}
