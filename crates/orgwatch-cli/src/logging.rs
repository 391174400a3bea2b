// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the Orgwatch CLI.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging. Logs go
//! to stderr so stdout stays clean for JSON and YAML output.
//!
//! # Examples
//!
//! ```bash
//! # Default: info level for orgwatch, errors only for dependencies
//! orgwatch run
//!
//! # Page-by-page progress
//! orgwatch -v run
//!
//! # Explicit filter wins over the flag
//! RUST_LOG=orgwatch_core=trace orgwatch run
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::OutputFormat;

/// Filter used without `RUST_LOG` and without `-v`.
const DEFAULT_FILTER: &str = "orgwatch=info,orgwatch_core=info,octocrab=error,reqwest=error";

/// Filter used with `-v`.
const VERBOSE_FILTER: &str = "orgwatch=debug,orgwatch_core=debug,octocrab=error,reqwest=error";

/// Filter used for structured output formats.
const QUIET_FILTER: &str = "orgwatch=warn,orgwatch_core=warn,octocrab=error,reqwest=error";

/// Picks the default directives for the given flags.
fn default_filter(format: OutputFormat, verbose: bool) -> &'static str {
    match (verbose, format) {
        (true, _) => VERBOSE_FILTER,
        (false, OutputFormat::Text) => DEFAULT_FILTER,
        (false, OutputFormat::Json | OutputFormat::Yaml) => QUIET_FILTER,
    }
}

/// Initialize the logging subsystem.
///
/// `RUST_LOG` takes precedence. Otherwise `verbose` selects debug output for
/// Orgwatch crates and structured formats keep info events off the terminal.
pub fn init_logging(format: OutputFormat, verbose: bool) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(format, verbose)));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
