// SPDX-License-Identifier: Apache-2.0

//! [`FeedSource`] backed by the GitHub REST API.

use async_trait::async_trait;
use octocrab::models::issues::Issue;
use octocrab::models::pulls::PullRequest;
use octocrab::models::repos::Release;
use octocrab::{Octocrab, Page, params};
use tracing::instrument;

use super::PAGE_SIZE;
use crate::Result;
use crate::feed::{FeedPage, FeedSource};
use crate::models::{IssueRecord, PullRequestRecord, ReleaseRecord};

/// Paged GitHub listings, one request per page.
#[derive(Clone)]
pub struct GitHubFeed {
    client: Octocrab,
}

impl GitHubFeed {
    /// Wraps an existing client.
    #[must_use]
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }
}

/// Page to ask for after `page`, present only when GitHub advertised a next link.
fn next_page_after(page: u32, has_next: bool) -> Option<u32> {
    has_next.then(|| page.saturating_add(1))
}

fn into_feed_page<M, T>(
    page: u32,
    remote: Page<M>,
    convert: impl FnMut(M) -> Option<T>,
) -> FeedPage<T> {
    let next_page = next_page_after(page, remote.next.is_some());
    FeedPage {
        items: remote.items.into_iter().filter_map(convert).collect(),
        next_page,
    }
}

fn pull_request_record(pr: PullRequest) -> Option<PullRequestRecord> {
    let created_at = pr.created_at?;
    Some(PullRequestRecord {
        number: pr.number,
        title: pr.title.unwrap_or_default(),
        url: pr.html_url.map(|u| u.to_string()).unwrap_or_default(),
        author: pr.user.map_or_else(|| "unknown".to_string(), |u| u.login),
        created_at,
        closed_at: pr.closed_at,
        merged_at: pr.merged_at,
        labels: pr
            .labels
            .unwrap_or_default()
            .into_iter()
            .map(|label| label.name)
            .collect(),
    })
}

fn release_record(release: Release) -> ReleaseRecord {
    ReleaseRecord {
        name: release
            .name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| release.tag_name.clone()),
        tag_name: release.tag_name,
        url: release.html_url.to_string(),
        draft: release.draft,
        prerelease: release.prerelease,
        published_at: release.published_at,
    }
}

fn issue_record(issue: Issue) -> IssueRecord {
    IssueRecord {
        number: issue.number,
        title: issue.title,
        url: issue.html_url.to_string(),
        author: issue.user.login,
        created_at: issue.created_at,
        labels: issue.labels.into_iter().map(|label| label.name).collect(),
    }
}

#[async_trait]
impl FeedSource for GitHubFeed {
    #[instrument(skip(self))]
    async fn repositories(&self, org: &str, page: u32) -> Result<FeedPage<String>> {
        let remote = self
            .client
            .orgs(org)
            .list_repos()
            .per_page(PAGE_SIZE)
            .page(page)
            .send()
            .await?;
        Ok(into_feed_page(page, remote, |repo| Some(repo.name)))
    }

    #[instrument(skip(self))]
    async fn pull_requests(
        &self,
        org: &str,
        repo: &str,
        page: u32,
    ) -> Result<FeedPage<PullRequestRecord>> {
        let remote = self
            .client
            .pulls(org, repo)
            .list()
            .state(params::State::All)
            .sort(params::pulls::Sort::Created)
            .direction(params::Direction::Descending)
            .per_page(PAGE_SIZE)
            .page(page)
            .send()
            .await?;
        Ok(into_feed_page(page, remote, pull_request_record))
    }

    #[instrument(skip(self))]
    async fn releases(&self, org: &str, repo: &str, page: u32) -> Result<FeedPage<ReleaseRecord>> {
        let remote = self
            .client
            .repos(org, repo)
            .releases()
            .list()
            .per_page(PAGE_SIZE)
            .page(page)
            .send()
            .await?;
        Ok(into_feed_page(page, remote, |release| Some(release_record(release))))
    }

    #[instrument(skip(self))]
    async fn issues(&self, org: &str, repo: &str, page: u32) -> Result<FeedPage<IssueRecord>> {
        let remote = self
            .client
            .issues(org, repo)
            .list()
            .state(params::State::Open)
            .sort(params::issues::Sort::Created)
            .direction(params::Direction::Descending)
            .per_page(PAGE_SIZE)
            .page(page)
            .send()
            .await?;
        Ok(into_feed_page(page, remote, |issue| Some(issue_record(issue))))
    }
}
