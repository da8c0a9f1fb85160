//! yaml-envsubst - environment-variable substitution for YAML manifests
//!
//! Reads a YAML document (or a `---`-separated multi-document stream),
//! resolves `${NAME}` placeholders from the process environment, and writes
//! the substituted stream to an output file.

use clap::Parser;

mod cli;
mod env;
mod error;
mod render;
mod stream;
mod substitute;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = render::run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
