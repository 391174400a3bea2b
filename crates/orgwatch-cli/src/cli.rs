// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for Orgwatch.
//!
//! Uses clap's derive API for declarative CLI parsing.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for CLI results.
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with colors (default)
    #[default]
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// YAML output for programmatic consumption
    Yaml,
}

/// Global output configuration passed to commands.
#[derive(Clone)]
pub struct OutputContext {
    /// Output format (text, json, yaml)
    pub format: OutputFormat,
    /// Enable verbose output (debug-level logging)
    pub verbose: bool,
    /// Whether stdout is a terminal (TTY)
    pub is_tty: bool,
}

impl OutputContext {
    /// Creates an `OutputContext` from CLI arguments.
    pub fn from_cli(format: OutputFormat, verbose: bool) -> Self {
        Self {
            format,
            verbose,
            is_tty: std::io::stdout().is_terminal(),
        }
    }

    /// Returns true if interactive elements (spinners, colors) should be shown.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && !self.verbose && matches!(self.format, OutputFormat::Text)
    }
}

/// Orgwatch - windowed activity reports for GitHub organizations.
///
/// Collects recent pull requests, releases and labeled issues across the
/// repositories of configured organizations and writes JSON and HTML reports.
#[derive(Parser)]
#[command(name = "orgwatch")]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Path to the YAML configuration file
    #[arg(long, short = 'c', global = true, env = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Output format (text, json, yaml)
    #[arg(long, short = 'o', global = true, default_value = "text", value_enum)]
    pub output: OutputFormat,

    /// Enable verbose output (debug-level logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Collect activity for every configured organization and write the reports
    Run,

    /// List the repositories of one organization
    Repos {
        /// GitHub organization slug (e.g., hyperledger)
        org: String,
    },
}
