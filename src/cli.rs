//! Command line interface
//!
//! Every subcommand parses its arguments into [`Version`]s or a
//! [`VersionRange`] and prints the result to the given writer.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use crate::config::Config;
use crate::version::{Version, VersionRange};

#[derive(Debug, Parser)]
#[command(name = "verange")]
#[command(version, about = "Dotted version comparison and range enumeration")]
pub struct Cli {
    /// Path to a JSON config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the canonical form of a version
    Normalize { version: String },

    /// Print the components of a version
    Components {
        version: String,
        /// Return exactly this many components, truncating or padding with zeros
        #[arg(long, short = 'n')]
        count: Option<usize>,
        /// Print a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Compare two versions, printing -1, 0 or 1
    Compare { a: String, b: String },

    /// Check whether a version lies in [LOWER, UPPER)
    Contains {
        lower: String,
        upper: String,
        candidate: String,
    },

    /// Print every version in [LOWER, UPPER)
    List {
        lower: String,
        upper: String,
        /// Stop after this many versions
        #[arg(long)]
        limit: Option<usize>,
        /// Print a JSON array
        #[arg(long)]
        json: bool,
    },
}

/// Execute a parsed command line, writing results to `out`.
pub fn run(cli: Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Command::Normalize { version } => {
            let version = parse(&version)?;
            writeln!(out, "{version}")?;
        }
        Command::Components {
            version,
            count,
            json,
        } => {
            let version = parse(&version)?;
            let components = match count {
                Some(count) => version.components_padded(count),
                None => version.components(),
            };
            if json || config.output.json {
                writeln!(out, "{}", serde_json::to_string(&components)?)?;
            } else {
                let line = components
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(",");
                writeln!(out, "{line}")?;
            }
        }
        Command::Compare { a, b } => {
            let a = parse(&a)?;
            let b = parse(&b)?;
            writeln!(out, "{}", a.compare(&b))?;
        }
        Command::Contains {
            lower,
            upper,
            candidate,
        } => {
            let range = VersionRange::new(&lower, &upper)
                .with_context(|| format!("Invalid range bounds '{lower}'..'{upper}'"))?;
            let contained = range.contains(&candidate)?;
            writeln!(out, "{contained}")?;
        }
        Command::List {
            lower,
            upper,
            limit,
            json,
        } => {
            let range = VersionRange::new(&lower, &upper)
                .with_context(|| format!("Invalid range bounds '{lower}'..'{upper}'"))?;
            let limit = limit.unwrap_or(config.enumeration.max_versions);

            let mut versions = range.iter();
            let listed: Vec<String> = versions.by_ref().take(limit).collect();
            if versions.next().is_some() {
                warn!(
                    "Range '{}'..'{}' truncated after {} versions",
                    lower, upper, limit
                );
            }
            info!("Listed {} versions", listed.len());

            if json || config.output.json {
                writeln!(out, "{}", serde_json::to_string(&listed)?)?;
            } else {
                for version in &listed {
                    writeln!(out, "{version}")?;
                }
            }
        }
    }

    Ok(())
}

fn parse(input: &str) -> anyhow::Result<Version> {
    Version::parse(input).with_context(|| format!("Cannot parse version argument '{input}'"))
}
