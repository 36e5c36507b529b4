//! CLI for linkhub.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use linkhub_core::{AppConfig, ContentType, Error, detect_content_type, normalize_url};
use serde::Serialize;

/// Top-level CLI for linkhub.
#[derive(Debug, Parser)]
#[command(name = "linkhub")]
#[command(about = "Canonicalize http(s) URLs and compute their dedup hash", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Normalize URLs and print one JSON object per input.
    Normalize {
        /// URLs to normalize. Read one per line from stdin when omitted.
        urls: Vec<String>,

        /// Report this content type instead of detecting one.
        #[arg(long, value_name = "TYPE")]
        content_type: Option<ContentType>,
    },

    /// Print the dedup hash of a URL.
    Hash {
        /// URL to hash.
        url: String,
    },

    /// Print whether two URLs name the same resource. Exits 1 when they differ.
    Same {
        /// First URL.
        a: String,
        /// Second URL.
        b: String,
    },
}

/// One line of `normalize` output.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Line<'a> {
    Normalized {
        input: &'a str,
        normalized_url: String,
        url_hash: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        content_type: Option<ContentType>,
    },
    Rejected {
        input: &'a str,
        error: String,
    },
}

fn normalize_line<'a>(config: &AppConfig, input: &'a str, content_type: Option<ContentType>) -> Line<'a> {
    let result = config
        .check_url_length(input)
        .and_then(|()| normalize_url(input).map_err(Error::from));

    match result {
        Ok(normalized) => {
            let (normalized_url, url_hash) = normalized.into_parts();
            let content_type = if config.detect_content_type {
                Some(detect_content_type(&normalized_url, content_type))
            } else {
                content_type
            };
            Line::Normalized { input, normalized_url, url_hash, content_type }
        }
        Err(Error::InvalidUrl(e)) => Line::Rejected { input, error: e.message().to_string() },
        Err(e) => Line::Rejected { input, error: e.to_string() },
    }
}

/// Write one JSON line per input. Returns whether any input was rejected.
fn write_lines<I, W>(config: &AppConfig, inputs: I, content_type: Option<ContentType>, out: &mut W) -> Result<bool>
where
    I: IntoIterator<Item = io::Result<String>>,
    W: Write,
{
    let mut any_rejected = false;

    for input in inputs {
        let input = input.context("reading input")?;
        let line = normalize_line(config, &input, content_type);
        if matches!(line, Line::Rejected { .. }) {
            tracing::debug!(input = %input, "Rejected URL");
            any_rejected = true;
        }
        serde_json::to_writer(&mut *out, &line)?;
        writeln!(out)?;
    }

    Ok(any_rejected)
}

/// Normalize `url` under the configured limits.
fn normalize_checked(config: &AppConfig, url: &str) -> Result<linkhub_core::NormalizedUrl> {
    config.check_url_length(url)?;
    normalize_url(url).with_context(|| format!("normalizing {url}"))
}

/// Write the dedup hash of `url`.
fn write_hash<W: Write>(config: &AppConfig, url: &str, out: &mut W) -> Result<()> {
    let normalized = normalize_checked(config, url)?;
    writeln!(out, "{}", normalized.url_hash())?;
    Ok(())
}

/// Write whether `a` and `b` share a dedup hash. Returns the comparison.
fn write_same<W: Write>(config: &AppConfig, a: &str, b: &str, out: &mut W) -> Result<bool> {
    let a = normalize_checked(config, a)?;
    let b = normalize_checked(config, b)?;
    let same = a.url_hash() == b.url_hash();
    tracing::debug!(a = a.normalized_url(), b = b.normalized_url(), same, "Compared URLs");
    writeln!(out, "{same}")?;
    Ok(same)
}

fn exit_code(success: bool) -> ExitCode {
    if success { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

/// Dispatch a parsed command.
pub fn run(cli: Cli) -> Result<ExitCode> {
    let config = AppConfig::load().context("loading configuration")?;

    match cli.command {
        Command::Normalize { urls, content_type } => {
            let mut out = io::stdout().lock();
            let any_rejected = if urls.is_empty() {
                let lines = io::stdin()
                    .lock()
                    .lines()
                    .filter(|line| line.as_ref().map_or(true, |l| !l.trim().is_empty()));
                write_lines(&config, lines, content_type, &mut out)?
            } else {
                write_lines(&config, urls.into_iter().map(Ok), content_type, &mut out)?
            };
            Ok(exit_code(!any_rejected))
        }
        Command::Hash { url } => {
            write_hash(&config, &url, &mut io::stdout().lock())?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Same { a, b } => {
            let same = write_same(&config, &a, &b, &mut io::stdout().lock())?;
            Ok(exit_code(same))
        }
    }
}
