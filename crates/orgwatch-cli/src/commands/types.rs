// SPDX-License-Identifier: Apache-2.0

//! Result types returned by command handlers.
//!
//! Handlers return data instead of printing; rendering lives in
//! [`crate::output`].

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::report::CategoryReport;

/// Result from the run command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RunSummary {
    /// Configuration file that was loaded.
    pub config_file: PathBuf,
    /// Anchor of every date window in this run.
    pub started_at: DateTime<Utc>,
    /// Number of configured organizations.
    pub organizations: usize,
    /// One entry per enabled category, in collection order.
    pub reports: Vec<CategoryReport>,
}

/// Result from the repos command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ReposResult {
    /// Organization slug.
    pub organization: String,
    /// Repository names.
    pub repositories: Vec<String>,
}
