// SPDX-License-Identifier: Apache-2.0

//! Template views.
//!
//! Records are flattened into display strings here so templates stay free of
//! formatting logic.

use askama::Template;
use chrono::{DateTime, Utc};
use orgwatch_core::github::repository_url;
use orgwatch_core::{
    AppConfig, ExternalEntry, IssueRecord, OrgEntry, PullRequestRecord, ReleaseRecord,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Strings shared by every page header.
pub struct Header {
    pub title: String,
    pub generated_at: String,
    pub window: String,
}

impl Header {
    pub fn new(title: impl Into<String>, generated_at: DateTime<Utc>, window: String) -> Self {
        Self {
            title: title.into(),
            generated_at: generated_at.format("%Y-%m-%d %H:%M UTC").to_string(),
            window,
        }
    }
}

pub struct PullRequestRow {
    pub number: u64,
    pub title: String,
    pub url: String,
    pub author: String,
    pub created: String,
    pub state: &'static str,
    pub labels: String,
}

impl From<&PullRequestRecord> for PullRequestRow {
    fn from(pr: &PullRequestRecord) -> Self {
        Self {
            number: pr.number,
            title: pr.title.clone(),
            url: pr.url.clone(),
            author: pr.author.clone(),
            created: pr.created_at.format(DATE_FORMAT).to_string(),
            state: if pr.merged_at.is_some() { "merged" } else { "open" },
            labels: pr.labels.join(", "),
        }
    }
}

pub struct ReleaseRow {
    pub tag: String,
    pub name: String,
    pub url: String,
    pub published: String,
    pub prerelease: bool,
}

impl From<&ReleaseRecord> for ReleaseRow {
    fn from(release: &ReleaseRecord) -> Self {
        Self {
            tag: release.tag_name.clone(),
            name: release.name.clone(),
            url: release.url.clone(),
            published: release
                .published_at
                .map(|at| at.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            prerelease: release.prerelease,
        }
    }
}

pub struct IssueRow {
    pub number: u64,
    pub title: String,
    pub url: String,
    pub author: String,
    pub created: String,
    pub labels: String,
}

impl From<&IssueRecord> for IssueRow {
    fn from(issue: &IssueRecord) -> Self {
        Self {
            number: issue.number,
            title: issue.title.clone(),
            url: issue.url.clone(),
            author: issue.author.clone(),
            created: issue.created_at.format(DATE_FORMAT).to_string(),
            labels: issue.labels.join(", "),
        }
    }
}

/// One repository with its rows.
pub struct RepoSection<R> {
    pub name: String,
    pub link: String,
    pub rows: Vec<R>,
}

/// One organization with its contributing repositories.
pub struct OrgSection<R> {
    pub display_name: String,
    pub total: usize,
    pub repositories: Vec<RepoSection<R>>,
}

/// Builds the aggregate sections, naming organizations from `config`.
///
/// Organizations missing from the table keep their slug.
pub fn org_sections<'a, T, R>(orgs: &'a [OrgEntry<T>], config: &AppConfig) -> Vec<OrgSection<R>>
where
    R: From<&'a T>,
{
    orgs.iter()
        .map(|org| OrgSection {
            display_name: config
                .organization(&org.organization)
                .map_or(org.organization.as_str(), |known| known.display_name())
                .to_string(),
            total: org.record_count(),
            repositories: org
                .repositories
                .iter()
                .map(|repo| RepoSection {
                    name: repo.repository.clone(),
                    link: repository_url(&org.organization, &repo.repository),
                    rows: repo.items.iter().map(R::from).collect(),
                })
                .collect(),
        })
        .collect()
}

/// Builds the section of one per-repository page.
pub fn entry_section<'a, T, R>(entry: &'a ExternalEntry<T>) -> RepoSection<R>
where
    R: From<&'a T>,
{
    RepoSection {
        name: entry.repository.name.clone(),
        link: entry.repository.link.clone(),
        rows: entry.items.iter().map(R::from).collect(),
    }
}

#[derive(Template)]
#[template(path = "pull_requests.html")]
pub struct PullRequestsPage {
    pub header: Header,
    pub organizations: Vec<OrgSection<PullRequestRow>>,
}

#[derive(Template)]
#[template(path = "releases.html")]
pub struct ReleasesPage {
    pub header: Header,
    pub organizations: Vec<OrgSection<ReleaseRow>>,
}

#[derive(Template)]
#[template(path = "issues.html")]
pub struct IssuesPage {
    pub header: Header,
    pub organizations: Vec<OrgSection<IssueRow>>,
}

#[derive(Template)]
#[template(path = "external_pull_requests.html")]
pub struct ExternalPullRequestsPage {
    pub header: Header,
    pub organization: String,
    pub repository: RepoSection<PullRequestRow>,
}

#[derive(Template)]
#[template(path = "external_releases.html")]
pub struct ExternalReleasesPage {
    pub header: Header,
    pub organization: String,
    pub repository: RepoSection<ReleaseRow>,
}

#[derive(Template)]
#[template(path = "external_issues.html")]
pub struct ExternalIssuesPage {
    pub header: Header,
    pub organization: String,
    pub repository: RepoSection<IssueRow>,
}
