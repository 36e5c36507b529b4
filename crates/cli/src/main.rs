//! linkhub command-line entry point.
//!
//! Results go to stdout; logs go to stderr.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use crate::cli::Cli;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match cli::run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("linkhub error: {err:#}");
            ExitCode::from(2)
        }
    }
}
