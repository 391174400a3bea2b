// SPDX-License-Identifier: Apache-2.0

//! High-level entry points for the CLI.
//!
//! These functions sequence the collector over every configured
//! organization. They take the feed as a trait object so the CLI can pass a
//! [`crate::github::feed::GitHubFeed`] and tests can pass a scripted one.

use chrono::{DateTime, Utc};
use tracing::{info, instrument};

use crate::collector::{
    collect_issues, collect_pull_requests, collect_releases, list_repositories,
};
use crate::config::AppConfig;
use crate::feed::FeedSource;
use crate::filter::Window;
use crate::models::{Collection, OrgEntry};

/// Collects every enabled category for every configured organization.
///
/// Organizations are processed in configuration order. For each one the
/// repositories are listed once, then pull requests, releases and issues are
/// walked in that order. Both windows are anchored at `now`.
///
/// # Errors
///
/// Returns the first error met. Nothing collected before it is returned.
#[instrument(skip(feed, config), fields(organizations = config.global.organizations.len()))]
pub async fn collect(
    feed: &dyn FeedSource,
    config: &AppConfig,
    now: DateTime<Utc>,
) -> crate::Result<Collection> {
    let window = Window::trailing_days(now, config.global.days);
    let issue_window = Window::trailing_days(now, config.issues.created_history_days);
    let mut collection = Collection::default();

    for org in &config.global.organizations {
        let slug = org.github.as_str();
        let repos = list_repositories(feed, slug).await?;
        info!(organization = slug, repositories = repos.len(), "Scanning organization");

        if config.pull_requests.enabled {
            let repositories = collect_pull_requests(feed, slug, &repos, window).await?;
            info!(organization = slug, contributing = repositories.len(), "Collected pull requests");
            collection.pull_requests.push(OrgEntry {
                organization: slug.to_string(),
                repositories,
            });
        }

        if config.releases.enabled {
            let repositories = collect_releases(feed, slug, &repos, window).await?;
            info!(organization = slug, contributing = repositories.len(), "Collected releases");
            collection.releases.push(OrgEntry {
                organization: slug.to_string(),
                repositories,
            });
        }

        if config.issues.report.enabled {
            let repositories =
                collect_issues(feed, slug, &repos, &config.issues.labels, issue_window).await?;
            info!(organization = slug, contributing = repositories.len(), "Collected issues");
            collection.issues.push(OrgEntry {
                organization: slug.to_string(),
                repositories,
            });
        }
    }

    Ok(collection)
}

/// Lists the repositories of one organization.
///
/// # Errors
///
/// Returns [`crate::OrgwatchError::NoRepositories`] when the organization
/// has none, or the transport error that ended the listing.
#[instrument(skip(feed))]
pub async fn organization_repositories(
    feed: &dyn FeedSource,
    org: &str,
) -> crate::Result<Vec<String>> {
    list_repositories(feed, org).await
}
