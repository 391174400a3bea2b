// SPDX-License-Identifier: Apache-2.0

//! Command handlers for the Orgwatch CLI.

pub mod repos;
pub mod run;
pub mod types;

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::{Commands, OutputContext};
use crate::output;

/// Creates a styled spinner (only if interactive).
fn maybe_spinner(ctx: &OutputContext, message: &str) -> Option<ProgressBar> {
    if !ctx.is_interactive() {
        return None;
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    Some(spinner)
}

/// Dispatch to the appropriate command handler.
pub async fn run(command: Commands, ctx: OutputContext, config: Option<&Path>) -> Result<()> {
    match command {
        Commands::Run => {
            let spinner = maybe_spinner(&ctx, "Collecting organization activity...");
            let result = run::run(config).await;
            if let Some(s) = spinner {
                s.finish_and_clear();
            }
            output::render(&result?, &ctx)
        }

        Commands::Repos { org } => {
            let spinner = maybe_spinner(&ctx, &format!("Listing repositories of {org}..."));
            let result = repos::run(org).await;
            if let Some(s) = spinner {
                s.finish_and_clear();
            }
            result?.render_with_context(&ctx)
        }
    }
}
