// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};

use anyhow::Result;
use console::style;

use crate::cli::{OutputContext, OutputFormat};
use crate::commands::types::ReposResult;

use super::{Renderable, print_json, print_yaml, render};

impl Renderable for ReposResult {
    fn render_text(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        for repo in &self.repositories {
            writeln!(w, "{repo}")?;
        }
        writeln!(
            w,
            "{}",
            style(format!(
                "{} repositories in {}",
                self.repositories.len(),
                self.organization
            ))
            .dim()
        )
    }
}

impl ReposResult {
    /// Structured formats print the bare repository list.
    pub fn render_with_context(&self, ctx: &OutputContext) -> Result<()> {
        match ctx.format {
            OutputFormat::Json => print_json(&self.repositories),
            OutputFormat::Yaml => print_yaml(&self.repositories),
            OutputFormat::Text => render(self, ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_lists_one_repository_per_line() {
        let result = ReposResult {
            organization: "acme".to_string(),
            repositories: vec!["widgets".to_string(), "gadgets".to_string()],
        };
        let ctx = OutputContext {
            format: OutputFormat::Text,
            verbose: false,
            is_tty: false,
        };

        let mut out = Vec::new();
        result.render_text(&mut out, &ctx).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "widgets");
        assert_eq!(lines[1], "gadgets");
        assert!(lines[2].contains("2 repositories in acme"));
    }
}
