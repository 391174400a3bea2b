// SPDX-License-Identifier: Apache-2.0

//! Orgwatch - windowed activity reports for GitHub organizations.
//!
//! Walks the repositories of configured organizations and reports recent
//! pull requests, releases and labeled issues as JSON and HTML.

mod cli;
mod commands;
mod errors;
mod logging;
mod output;
mod report;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::{Cli, OutputContext};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.output, cli.verbose);

    let output_ctx = OutputContext::from_cli(cli.output, cli.verbose);

    match commands::run(cli.command, output_ctx, cli.config.as_deref()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let formatted = errors::format_error(&e);
            eprintln!("Error: {formatted}");
            ExitCode::FAILURE
        }
    }
}
