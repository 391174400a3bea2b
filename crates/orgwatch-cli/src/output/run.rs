// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};

use console::style;

use crate::cli::OutputContext;
use crate::commands::types::RunSummary;

use super::Renderable;

impl Renderable for RunSummary {
    fn render_text(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        if self.reports.is_empty() {
            writeln!(
                w,
                "{}",
                style("No report category is enabled; nothing was written.").yellow()
            )?;
            return Ok(());
        }

        writeln!(w)?;
        writeln!(
            w,
            "{} {} organizations",
            style("Collected").bold(),
            self.organizations
        )?;
        writeln!(w)?;

        for report in &self.reports {
            writeln!(
                w,
                "  {:<15} {} records in {} repositories",
                style(report.category.slug()).cyan(),
                report.records,
                report.repositories
            )?;
            writeln!(w, "    {} {}", style("data:").dim(), report.data_file.display())?;
            writeln!(
                w,
                "    {} {}",
                style("summary:").dim(),
                report.summary_file.display()
            )?;
            if report.external_pages > 0 {
                writeln!(
                    w,
                    "    {} {} pages",
                    style("external:").dim(),
                    report.external_pages
                )?;
            }
        }

        writeln!(w)?;
        Ok(())
    }
}
