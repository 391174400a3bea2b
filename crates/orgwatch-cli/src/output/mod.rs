// SPDX-License-Identifier: Apache-2.0

//! Output rendering for CLI commands.
//!
//! Supports text, JSON and YAML. Command handlers return data; this module
//! handles presentation.

use std::io::{self, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::{OutputContext, OutputFormat};

/// Trait for types that can be rendered in multiple output formats.
pub trait Renderable: Serialize {
    /// Render as human-readable text to the given writer.
    fn render_text(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()>;
}

/// Generic render function - handles JSON/YAML via serde, delegates text to the trait.
pub fn render<T: Renderable>(result: &T, ctx: &OutputContext) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => print_json(result),
        OutputFormat::Yaml => print_yaml(result),
        OutputFormat::Text => result
            .render_text(&mut io::stdout(), ctx)
            .context("Failed to render text"),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
    println!("{json}");
    Ok(())
}

fn print_yaml<T: Serialize>(value: &T) -> Result<()> {
    let yaml = serde_saphyr::to_string(value).context("Failed to serialize to YAML")?;
    println!("{yaml}");
    Ok(())
}

mod repos;
mod run;
