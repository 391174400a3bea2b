// SPDX-License-Identifier: Apache-2.0

//! Report persistence.
//!
//! For every enabled category the collected records are written as pretty
//! JSON, rendered into one aggregate HTML page, and, when requested, into one
//! page per repository at `{external_dir}/{org}/{repo}.html`.

mod views;

use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use askama::Template;
use chrono::{DateTime, Utc};
use orgwatch_core::{
    AppConfig, Category, Collection, ExternalCollection, ExternalEntry, OrgEntry, OrgwatchError,
    ReportPaths,
};
use serde::Serialize;
use tracing::{debug, info};

use self::views::{
    ExternalIssuesPage, ExternalPullRequestsPage, ExternalReleasesPage, Header, IssueRow,
    IssuesPage, PullRequestRow, PullRequestsPage, ReleaseRow, ReleasesPage, entry_section,
    org_sections,
};

/// What was written for one category.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryReport {
    pub category: Category,
    pub organizations: usize,
    pub repositories: usize,
    pub records: usize,
    pub data_file: PathBuf,
    pub summary_file: PathBuf,
    pub external_pages: usize,
}

impl CategoryReport {
    fn new<T>(category: Category, orgs: &[OrgEntry<T>], paths: ReportPaths) -> Self {
        Self {
            category,
            organizations: orgs.len(),
            repositories: orgs.iter().map(|org| org.repositories.len()).sum(),
            records: orgs.iter().map(OrgEntry::record_count).sum(),
            data_file: paths.data_file,
            summary_file: paths.summary_file,
            external_pages: 0,
        }
    }
}

/// Writes the reports of every enabled category.
///
/// Returns one [`CategoryReport`] per enabled category, in collection order.
pub fn write_reports(
    collection: &Collection,
    external: &ExternalCollection,
    config: &AppConfig,
    generated_at: DateTime<Utc>,
) -> Result<Vec<CategoryReport>> {
    let mut reports = Vec::new();
    let window = format!("Last {} days", config.global.days);

    if config.pull_requests.enabled {
        let paths = config.pull_requests.paths(Category::PullRequests);
        let header = || Header::new("Pull requests", generated_at, window.clone());
        let summary = PullRequestsPage {
            header: header(),
            organizations: org_sections(&collection.pull_requests, config),
        };
        let mut report = write_category(
            Category::PullRequests,
            &collection.pull_requests,
            &paths,
            &summary,
        )?;
        report.external_pages =
            write_external(&paths.external_dir, &external.pull_requests, |entry| {
                ExternalPullRequestsPage {
                    header: header(),
                    organization: entry.organization.name.clone(),
                    repository: entry_section::<_, PullRequestRow>(entry),
                }
            })?;
        reports.push(report);
    }

    if config.releases.enabled {
        let paths = config.releases.paths(Category::Releases);
        let header = || Header::new("Releases", generated_at, window.clone());
        let summary = ReleasesPage {
            header: header(),
            organizations: org_sections(&collection.releases, config),
        };
        let mut report =
            write_category(Category::Releases, &collection.releases, &paths, &summary)?;
        report.external_pages = write_external(&paths.external_dir, &external.releases, |entry| {
            ExternalReleasesPage {
                header: header(),
                organization: entry.organization.name.clone(),
                repository: entry_section::<_, ReleaseRow>(entry),
            }
        })?;
        reports.push(report);
    }

    if config.issues.report.enabled {
        let paths = config.issues.report.paths(Category::Issues);
        let label_window = issue_window(config.issues.created_history_days, &config.issues.labels);
        let header = || Header::new("Issues", generated_at, label_window.clone());
        let summary = IssuesPage {
            header: header(),
            organizations: org_sections(&collection.issues, config),
        };
        let mut report = write_category(Category::Issues, &collection.issues, &paths, &summary)?;
        report.external_pages = write_external(&paths.external_dir, &external.issues, |entry| {
            ExternalIssuesPage {
                header: header(),
                organization: entry.organization.name.clone(),
                repository: entry_section::<_, IssueRow>(entry),
            }
        })?;
        reports.push(report);
    }

    Ok(reports)
}

/// Header line of the issue reports. The label clause is left out when no label is configured.
fn issue_window(days: i64, labels: &[String]) -> String {
    if labels.is_empty() {
        format!("Created in the last {days} days")
    } else {
        format!("Created in the last {days} days, labeled {}", labels.join(" or "))
    }
}

/// Writes the JSON dump and the aggregate page of one category.
fn write_category<T: Serialize>(
    category: Category,
    orgs: &[OrgEntry<T>],
    paths: &ReportPaths,
    summary: &impl Template,
) -> Result<CategoryReport> {
    let json = serde_json::to_string_pretty(orgs)
        .map_err(|err| report_error(format_args!("cannot serialize {category}"), err))?;
    write_file(&paths.data_file, &json)?;

    let html = summary
        .render()
        .map_err(|err| report_error(format_args!("cannot render {category} summary"), err))?;
    write_file(&paths.summary_file, &html)?;

    info!(
        %category,
        data_file = %paths.data_file.display(),
        summary_file = %paths.summary_file.display(),
        "Wrote report"
    );
    Ok(CategoryReport::new(category, orgs, paths.clone()))
}

/// Renders one page per entry under `{root}/{org}/{repo}.html`.
fn write_external<T, P: Template>(
    root: &Path,
    entries: &[ExternalEntry<T>],
    page: impl Fn(&ExternalEntry<T>) -> P,
) -> Result<usize> {
    for entry in entries {
        let path = root
            .join(&entry.organization.github)
            .join(format!("{}.html", entry.repository.name));
        let html = page(entry).render().map_err(|err| {
            report_error(
                format_args!(
                    "cannot render report for {}/{}",
                    entry.organization.github, entry.repository.name
                ),
                err,
            )
        })?;
        write_file(&path, &html)?;
        debug!(path = %path.display(), "Wrote external report");
    }
    Ok(entries.len())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .map_err(OrgwatchError::Io)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, contents)
        .map_err(OrgwatchError::Io)
        .with_context(|| format!("Failed to write {}", path.display()))
}

fn report_error(what: impl Display, err: impl Display) -> OrgwatchError {
    OrgwatchError::Report {
        message: format!("{what}: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use orgwatch_core::{
        OrganizationConfig, PullRequestRecord, ReleaseRecord, RepoEntry, external_collection,
    };

    use super::*;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap()
    }

    fn config(root: &Path, external: bool) -> AppConfig {
        let mut config = AppConfig::default();
        config.global.external_reports = external;
        config.global.organizations = vec![OrganizationConfig {
            github: "acme".to_string(),
            name: "Acme & Co".to_string(),
        }];
        config.pull_requests.enabled = true;
        config.pull_requests.data_file = Some(root.join("data/prs.json"));
        config.pull_requests.summary_file = Some(root.join("site/prs.html"));
        config.pull_requests.external_dir = Some(root.join("site/external/prs"));
        config.releases.enabled = true;
        config.releases.data_file = Some(root.join("data/releases.json"));
        config.releases.summary_file = Some(root.join("site/releases.html"));
        config.releases.external_dir = Some(root.join("site/external/releases"));
        config
    }

    fn collection() -> Collection {
        Collection {
            pull_requests: vec![OrgEntry {
                organization: "acme".to_string(),
                repositories: vec![RepoEntry {
                    repository: "widgets".to_string(),
                    items: vec![PullRequestRecord {
                        number: 5,
                        title: "Speed up <render>".to_string(),
                        url: "https://github.com/acme/widgets/pull/5".to_string(),
                        author: "octocat".to_string(),
                        created_at: at(),
                        closed_at: None,
                        merged_at: None,
                        labels: vec![],
                    }],
                }],
            }],
            releases: vec![OrgEntry {
                organization: "acme".to_string(),
                repositories: vec![RepoEntry {
                    repository: "gadgets".to_string(),
                    items: vec![ReleaseRecord {
                        tag_name: "v0.3.0".to_string(),
                        name: "v0.3.0".to_string(),
                        url: "https://github.com/acme/gadgets/releases/tag/v0.3.0".to_string(),
                        draft: false,
                        prerelease: false,
                        published_at: Some(at()),
                    }],
                }],
            }],
            issues: vec![],
        }
    }

    #[test]
    fn test_writes_data_and_summary_for_enabled_categories() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path(), false);
        let collection = collection();

        let reports =
            write_reports(&collection, &ExternalCollection::default(), &config, at()).unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].category, Category::PullRequests);
        assert_eq!(reports[0].records, 1);
        assert_eq!(reports[0].external_pages, 0);

        let json = fs::read_to_string(dir.path().join("data/prs.json")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["organization"], "acme");
        assert_eq!(parsed[0]["repositories"][0]["items"][0]["number"], 5);

        let html = fs::read_to_string(dir.path().join("site/prs.html")).unwrap();
        assert!(html.contains("Speed up &lt;render&gt;"));
        assert!(html.contains("Acme &amp; Co"));
        assert!(dir.path().join("site/releases.html").exists());
        assert!(!dir.path().join("site/external").exists());
    }

    #[test]
    fn test_writes_one_external_page_per_repository() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path(), true);
        let collection = collection();
        let external = external_collection(&collection, &config).unwrap();

        let reports = write_reports(&collection, &external, &config, at()).unwrap();

        assert_eq!(reports[0].external_pages, 1);
        assert_eq!(reports[1].external_pages, 1);
        let page = dir.path().join("site/external/prs/acme/widgets.html");
        assert!(page.exists());
        assert!(fs::read_to_string(page).unwrap().contains("Acme &amp; Co"));
        assert!(
            dir.path()
                .join("site/external/releases/acme/gadgets.html")
                .exists()
        );
    }

    #[test]
    fn test_disabled_category_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config(dir.path(), false);
        config.releases.enabled = false;

        let reports =
            write_reports(&collection(), &ExternalCollection::default(), &config, at()).unwrap();

        assert_eq!(reports.len(), 1);
        assert!(!dir.path().join("data/releases.json").exists());
    }

    #[test]
    fn test_issue_window_omits_empty_label_clause() {
        assert_eq!(issue_window(30, &[]), "Created in the last 30 days");
        assert_eq!(
            issue_window(14, &["good first issue".to_string(), "help wanted".to_string()]),
            "Created in the last 14 days, labeled good first issue or help wanted"
        );
    }

    #[test]
    fn test_issue_summary_without_labels_has_no_dangling_clause() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config(dir.path(), false);
        config.pull_requests.enabled = false;
        config.releases.enabled = false;
        config.issues.report.enabled = true;
        config.issues.report.data_file = Some(dir.path().join("data/issues.json"));
        config.issues.report.summary_file = Some(dir.path().join("site/issues.html"));

        write_reports(&collection(), &ExternalCollection::default(), &config, at()).unwrap();

        let html = fs::read_to_string(dir.path().join("site/issues.html")).unwrap();
        assert!(html.contains("Created in the last 30 days"));
        assert!(!html.contains("labeled"));
    }

    #[test]
    fn test_unwritable_path_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file").unwrap();
        let mut config = config(dir.path(), false);
        config.pull_requests.data_file = Some(blocker.join("prs.json"));

        let result = write_reports(&collection(), &ExternalCollection::default(), &config, at());

        let error = result.unwrap_err();
        assert!(format!("{error:#}").contains("Failed to create directory"));
        assert!(matches!(
            error.downcast_ref::<OrgwatchError>(),
            Some(OrgwatchError::Io(_))
        ));
    }
}
