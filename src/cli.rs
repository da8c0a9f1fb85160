//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

/// yaml-envsubst - environment-variable substitution for YAML manifests
#[derive(Parser, Debug)]
#[command(
    name = "yaml-envsubst",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Substitute environment variables into YAML manifests",
    long_about = "yaml-envsubst reads a YAML file (or a `---`-separated multi-document stream), \
                  replaces ${NAME} placeholders in string values with environment variable \
                  values, merges mapping keys of the form ${NAME} as YAML fragments held in \
                  the named variable, and writes the result to the output file.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  yaml-envsubst values.yaml out.yaml                            \x1b[90m# Substitute ${VARS} from the environment\x1b[0m\n   \
                  yaml-envsubst values.yaml out.yaml --ignore                   \x1b[90m# Tolerate missing input file and variables\x1b[0m\n   \
                  yaml-envsubst values.yaml out.yaml --ignore-missing-variables \x1b[90m# Missing variables become empty strings\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Input yaml file
    #[arg(value_name = "input file")]
    pub input: Option<PathBuf>,

    /// Output yaml file
    #[arg(value_name = "output file")]
    pub output: Option<PathBuf>,

    /// Ignore missing environment variables and ignore missing input file
    #[arg(long)]
    pub ignore: bool,

    /// Ignore missing environment variables
    #[arg(long)]
    pub ignore_missing_variables: bool,

    /// Ignore missing input file
    #[arg(long)]
    pub ignore_missing_input_file: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
