// SPDX-License-Identifier: Apache-2.0

//! Remote feed abstraction.
//!
//! The collector never talks to GitHub directly. It asks a [`FeedSource`]
//! for numbered pages and follows the `next_page` cursor until it is `None`.
//! [`crate::github::feed::GitHubFeed`] is the production implementation;
//! tests script their own.

use async_trait::async_trait;

use crate::Result;
use crate::models::{IssueRecord, PullRequestRecord, ReleaseRecord};

/// Number of the first page of every listing.
pub const FIRST_PAGE: u32 = 1;

/// One bounded batch from a remote listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedPage<T> {
    /// Items in the order the remote returned them.
    pub items: Vec<T>,
    /// Page to request next, or `None` when the listing is exhausted.
    pub next_page: Option<u32>,
}

impl<T> FeedPage<T> {
    /// A page after which nothing more can be fetched.
    #[must_use]
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_page: None,
        }
    }
}

/// Paged access to an organization's repositories and their activity.
///
/// Every listing except [`FeedSource::repositories`] must be returned newest
/// first; the collector stops at the first item older than its window and
/// never looks at the rest of that page.
///
/// Any error is treated as fatal by callers: there is no retry at this layer.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Lists repository names of `org`.
    async fn repositories(&self, org: &str, page: u32) -> Result<FeedPage<String>>;

    /// Lists pull requests of `org/repo` in every state, newest first.
    async fn pull_requests(
        &self,
        org: &str,
        repo: &str,
        page: u32,
    ) -> Result<FeedPage<PullRequestRecord>>;

    /// Lists releases of `org/repo`, newest first.
    async fn releases(&self, org: &str, repo: &str, page: u32) -> Result<FeedPage<ReleaseRecord>>;

    /// Lists open issues of `org/repo`, newest first.
    async fn issues(&self, org: &str, repo: &str, page: u32) -> Result<FeedPage<IssueRecord>>;
}
