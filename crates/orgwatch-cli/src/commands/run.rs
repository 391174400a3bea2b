// SPDX-License-Identifier: Apache-2.0

//! Collect every configured organization and write the reports.

use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use orgwatch_core::{
    GitHubFeed, collect, config_file_path, create_client, external_collection, load_config,
};
use tracing::debug;

use super::types::RunSummary;
use crate::report::write_reports;

/// Runs one full collection.
///
/// The config file is `config`, else `$CONFIG_FILE`, else `config.yaml`.
/// Nothing is written unless every organization was collected.
pub async fn run(config: Option<&Path>) -> Result<RunSummary> {
    let config_file = config_file_path(config);
    let config = load_config(&config_file)?;
    debug!(config_file = %config_file.display(), "Configuration loaded successfully");

    let feed = GitHubFeed::new(create_client()?);
    let started_at = Utc::now();

    let collection = collect(&feed, &config, started_at).await?;
    let external = external_collection(&collection, &config)?;
    let reports = write_reports(&collection, &external, &config, started_at)?;

    Ok(RunSummary {
        config_file,
        started_at,
        organizations: config.global.organizations.len(),
        reports,
    })
}
