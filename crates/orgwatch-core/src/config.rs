// SPDX-License-Identifier: Apache-2.0

//! Configuration management for Orgwatch.
//!
//! Provides layered configuration from a YAML file and environment variables.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Summary path variables (`PR_SUMMARY_FILE_PATH`, `RELEASE_SUMMARY_FILE_PATH`,
//!    `ISSUE_SUMMARY_FILE_PATH`)
//! 2. Environment variables (prefix: `ORGWATCH_`, nesting separator `__`)
//! 3. Config file (`config.yaml` unless told otherwise)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```bash
//! # Widen the pull request and release window to two weeks
//! ORGWATCH_GLOBAL__DAYS=14 orgwatch run
//! ```

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::OrgwatchError;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Environment variable naming an alternative config file.
pub const CONFIG_FILE_ENV: &str = "CONFIG_FILE";

/// Report category produced by a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Open or merged pull requests.
    PullRequests,
    /// Published releases.
    Releases,
    /// Labeled open issues.
    Issues,
}

impl Category {
    /// Every category, in collection order.
    pub const ALL: [Category; 3] = [Category::PullRequests, Category::Releases, Category::Issues];

    /// File-system friendly name, used for default report paths.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Category::PullRequests => "pull-requests",
            Category::Releases => "releases",
            Category::Issues => "issues",
        }
    }

    /// Variable that overrides the summary report path of this category.
    #[must_use]
    pub fn summary_override_env(self) -> &'static str {
        match self {
            Category::PullRequests => "PR_SUMMARY_FILE_PATH",
            Category::Releases => "RELEASE_SUMMARY_FILE_PATH",
            Category::Issues => "ISSUE_SUMMARY_FILE_PATH",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::PullRequests => write!(f, "pull requests"),
            Category::Releases => write!(f, "releases"),
            Category::Issues => write!(f, "issues"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Organizations and shared settings.
    pub global: GlobalConfig,
    /// Pull request reports.
    pub pull_requests: CategoryConfig,
    /// Release reports.
    pub releases: CategoryConfig,
    /// Issue reports.
    pub issues: IssueConfig,
}

impl AppConfig {
    /// Report settings shared by every category.
    #[must_use]
    pub fn category(&self, category: Category) -> &CategoryConfig {
        match category {
            Category::PullRequests => &self.pull_requests,
            Category::Releases => &self.releases,
            Category::Issues => &self.issues.report,
        }
    }

    /// Looks up an organization by its GitHub slug.
    #[must_use]
    pub fn organization(&self, github: &str) -> Option<&OrganizationConfig> {
        self.global.organizations.iter().find(|org| org.github == github)
    }

    fn category_mut(&mut self, category: Category) -> &mut CategoryConfig {
        match category {
            Category::PullRequests => &mut self.pull_requests,
            Category::Releases => &mut self.releases,
            Category::Issues => &mut self.issues.report,
        }
    }
}

/// Settings shared by every category.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Organizations to scan, in report order.
    pub organizations: Vec<OrganizationConfig>,
    /// Trailing window in days for pull requests and releases.
    pub days: i64,
    /// Whether per-repository reports are generated.
    pub external_reports: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            organizations: Vec::new(),
            days: 7,
            external_reports: false,
        }
    }
}

/// One configured organization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OrganizationConfig {
    /// Account slug used for API calls.
    pub github: String,
    /// Display name for reports. Falls back to the slug when empty.
    #[serde(default)]
    pub name: String,
}

impl OrganizationConfig {
    /// Name shown to readers.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.github
        } else {
            &self.name
        }
    }
}

/// Report settings of one category.
///
/// Unset paths resolve to category-specific defaults through [`CategoryConfig::paths`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CategoryConfig {
    /// Whether this category is collected at all.
    pub enabled: bool,
    /// JSON dump of the collected records.
    pub data_file: Option<PathBuf>,
    /// Aggregate HTML report.
    pub summary_file: Option<PathBuf>,
    /// Root directory of per-repository HTML reports.
    pub external_dir: Option<PathBuf>,
}

/// Resolved output locations of one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    /// JSON dump of the collected records.
    pub data_file: PathBuf,
    /// Aggregate HTML report.
    pub summary_file: PathBuf,
    /// Root directory of per-repository HTML reports.
    pub external_dir: PathBuf,
}

impl CategoryConfig {
    /// Output locations, filling unset paths with defaults named after `category`.
    #[must_use]
    pub fn paths(&self, category: Category) -> ReportPaths {
        let slug = category.slug();
        ReportPaths {
            data_file: self
                .data_file
                .clone()
                .unwrap_or_else(|| PathBuf::from(format!("{slug}.json"))),
            summary_file: self
                .summary_file
                .clone()
                .unwrap_or_else(|| PathBuf::from(format!("{slug}.html"))),
            external_dir: self
                .external_dir
                .clone()
                .unwrap_or_else(|| Path::new("external").join(slug)),
        }
    }
}

/// Issue report settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IssueConfig {
    /// Report settings shared with the other categories.
    #[serde(flatten)]
    pub report: CategoryConfig,
    /// An issue is kept when it carries at least one of these labels.
    pub labels: Vec<String>,
    /// Trailing window in days for issues.
    pub created_history_days: i64,
}

impl Default for IssueConfig {
    fn default() -> Self {
        Self {
            report: CategoryConfig::default(),
            labels: Vec::new(),
            created_history_days: 30,
        }
    }
}

/// Returns the config file to load: `explicit`, else `$CONFIG_FILE`, else `config.yaml`.
#[must_use]
pub fn config_file_path(explicit: Option<&Path>) -> PathBuf {
    explicit.map_or_else(
        || {
            std::env::var(CONFIG_FILE_ENV)
                .ok()
                .filter(|path| !path.is_empty())
                .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), PathBuf::from)
        },
        Path::to_path_buf,
    )
}

/// Load application configuration from `path` and the environment.
///
/// The file must exist. Environment variables prefixed `ORGWATCH_` override
/// file values, and the summary path variables override everything.
///
/// # Errors
///
/// Returns [`OrgwatchError::Config`] if the file is missing, unreadable or
/// does not match the expected shape.
pub fn load_config(path: &Path) -> Result<AppConfig, OrgwatchError> {
    debug!(path = %path.display(), "Loading configuration");

    let config = Config::builder()
        .add_source(File::from(path).format(FileFormat::Yaml).required(true))
        .add_source(
            Environment::with_prefix("ORGWATCH")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let mut app_config: AppConfig = config.try_deserialize()?;
    apply_summary_overrides(&mut app_config, |name| {
        std::env::var(name).ok().filter(|value| !value.is_empty())
    });

    Ok(app_config)
}

/// Replaces summary report paths with values found through `lookup`.
fn apply_summary_overrides(config: &mut AppConfig, lookup: impl Fn(&str) -> Option<String>) {
    for category in Category::ALL {
        if let Some(path) = lookup(category.summary_override_env()) {
            debug!(%category, path = %path, "Summary path overridden from environment");
            config.category_mut(category).summary_file = Some(PathBuf::from(path));
        }
    }
}
