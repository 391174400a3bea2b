// SPDX-License-Identifier: Apache-2.0

//! Paginated collection over a reverse-chronological remote feed.
//!
//! One generic walker, [`paginate`], serves every listing. It fetches a
//! page, hands each item to a [`Sieve`] in feed order, and stops either at
//! the first item older than the window or when the feed reports no further
//! page. The sieve is what differs between listings: which timestamp is
//! checked and which business rule must hold.
//!
//! # Ordering precondition
//!
//! Listings judged against a window must be newest first. The first item
//! outside the window ends the walk and the rest of its page is never
//! examined, so an out-of-order item earlier in a page hides any in-window
//! items that follow it.

use std::future::Future;

use chrono::{DateTime, Utc};
use tracing::{Instrument, debug, debug_span, instrument};

use crate::Result;
use crate::error::OrgwatchError;
use crate::feed::{FIRST_PAGE, FeedPage, FeedSource};
use crate::filter::{Window, labels_match};
use crate::models::{IssueRecord, PullRequestRecord, ReleaseRecord, RepoEntry};

/// Why a walk ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// An item older than the window was reached.
    Window,
    /// The feed reported no further page.
    Exhausted,
}

/// Outcome of one walk over a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collected<T> {
    /// Retained items in feed order.
    pub items: Vec<T>,
    /// Number of pages fetched.
    pub pages: u32,
    /// Why the walk ended.
    pub stop: StopReason,
}

enum Verdict {
    OutsideWindow,
    Rejected,
    Kept,
}

/// Per-listing rules: which timestamp the window sees and what must hold to keep an item.
pub struct Sieve<'a, T> {
    window: Option<Window>,
    timestamp: fn(&T) -> Option<DateTime<Utc>>,
    accept: Box<dyn Fn(&T) -> bool + Send + Sync + 'a>,
}

impl<'a, T> Sieve<'a, T> {
    /// Builds a sieve bounded by `window`.
    ///
    /// Items whose `timestamp` is `None` cannot be placed in time; they never
    /// end the walk and go straight to `accept`.
    pub fn new(
        window: Window,
        timestamp: fn(&T) -> Option<DateTime<Utc>>,
        accept: impl Fn(&T) -> bool + Send + Sync + 'a,
    ) -> Self {
        Self {
            window: Some(window),
            timestamp,
            accept: Box::new(accept),
        }
    }

    /// Keeps everything and never stops early.
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            window: None,
            timestamp: |_| None,
            accept: Box::new(|_| true),
        }
    }

    fn judge(&self, item: &T) -> Verdict {
        if let Some(window) = &self.window
            && let Some(at) = (self.timestamp)(item)
            && window.should_stop(at)
        {
            return Verdict::OutsideWindow;
        }
        if (self.accept)(item) {
            Verdict::Kept
        } else {
            Verdict::Rejected
        }
    }
}

impl Sieve<'static, PullRequestRecord> {
    /// Pull requests created inside `window` that are still open or were merged.
    #[must_use]
    pub fn pull_requests(window: Window) -> Self {
        Self::new(
            window,
            |pr| Some(pr.created_at),
            PullRequestRecord::is_open_or_merged,
        )
    }
}

impl Sieve<'static, ReleaseRecord> {
    /// Non-draft releases published inside `window`.
    #[must_use]
    pub fn releases(window: Window) -> Self {
        Self::new(window, |release| release.published_at, |release| !release.draft)
    }
}

impl<'a> Sieve<'a, IssueRecord> {
    /// Issues created inside `window` carrying at least one of `labels`.
    #[must_use]
    pub fn issues(window: Window, labels: &'a [String]) -> Self {
        Self::new(
            window,
            |issue| Some(issue.created_at),
            move |issue| labels_match(&issue.labels, labels),
        )
    }
}

/// Runs one page through the sieve, appending survivors to `retained`.
///
/// Returns the accumulator and whether the window boundary was crossed.
fn sift<T>(mut retained: Vec<T>, batch: Vec<T>, sieve: &Sieve<'_, T>) -> (Vec<T>, bool) {
    for item in batch {
        match sieve.judge(&item) {
            Verdict::OutsideWindow => return (retained, true),
            Verdict::Rejected => {}
            Verdict::Kept => retained.push(item),
        }
    }
    (retained, false)
}

/// Walks a paged listing from its first page until the window or the feed ends.
///
/// `fetch` is called with 1-based page numbers, one request at a time. A
/// failed fetch aborts the walk and is returned as is.
pub async fn paginate<T, F, Fut>(mut fetch: F, sieve: &Sieve<'_, T>) -> Result<Collected<T>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<FeedPage<T>>>,
{
    let mut retained = Vec::new();
    let mut pages = 0;
    let mut page = FIRST_PAGE;

    let stop = loop {
        let batch = fetch(page).await?;
        pages += 1;
        debug!(
            page,
            items = batch.items.len(),
            has_next = batch.next_page.is_some(),
            "Fetched page"
        );

        let (kept, crossed) = sift(retained, batch.items, sieve);
        retained = kept;
        if crossed {
            debug!(page, retained = retained.len(), "Reached window boundary");
            break StopReason::Window;
        }
        match batch.next_page {
            Some(next) => page = next,
            None => {
                debug!(page, retained = retained.len(), "Feed exhausted");
                break StopReason::Exhausted;
            }
        }
    };

    Ok(Collected {
        items: retained,
        pages,
        stop,
    })
}

/// Lists every repository of `org`, in the order GitHub returns them.
///
/// An organization without repositories is a configuration mistake and
/// yields [`OrgwatchError::NoRepositories`].
#[instrument(skip(feed))]
pub async fn list_repositories(feed: &dyn FeedSource, org: &str) -> Result<Vec<String>> {
    let collected = paginate(|page| feed.repositories(org, page), &Sieve::unbounded()).await?;
    if collected.items.is_empty() {
        return Err(OrgwatchError::NoRepositories {
            organization: org.to_string(),
        });
    }
    debug!(
        count = collected.items.len(),
        pages = collected.pages,
        "Listed repositories"
    );
    Ok(collected.items)
}

/// Walks each repository in turn and keeps the ones that retained something.
async fn per_repository<'a, T, F, Fut>(repos: &'a [String], mut walk: F) -> Result<Vec<RepoEntry<T>>>
where
    F: FnMut(&'a str) -> Fut,
    Fut: Future<Output = Result<Collected<T>>>,
{
    let mut entries = Vec::new();
    for repo in repos {
        let collected = walk(repo.as_str())
            .instrument(debug_span!("repository", repo = %repo))
            .await?;
        if let Some(entry) = RepoEntry::non_empty(repo, collected.items) {
            entries.push(entry);
        }
    }
    Ok(entries)
}

/// Collects open or merged pull requests created inside `window`, per repository.
#[instrument(skip(feed, repos, window), fields(repos = repos.len()))]
pub async fn collect_pull_requests(
    feed: &dyn FeedSource,
    org: &str,
    repos: &[String],
    window: Window,
) -> Result<Vec<RepoEntry<PullRequestRecord>>> {
    let sieve = &Sieve::pull_requests(window);
    per_repository(repos, move |repo| {
        paginate(move |page| feed.pull_requests(org, repo, page), sieve)
    })
    .await
}

/// Collects non-draft releases published inside `window`, per repository.
#[instrument(skip(feed, repos, window), fields(repos = repos.len()))]
pub async fn collect_releases(
    feed: &dyn FeedSource,
    org: &str,
    repos: &[String],
    window: Window,
) -> Result<Vec<RepoEntry<ReleaseRecord>>> {
    let sieve = &Sieve::releases(window);
    per_repository(repos, move |repo| {
        paginate(move |page| feed.releases(org, repo, page), sieve)
    })
    .await
}

/// Collects issues created inside `window` that carry one of `labels`, per repository.
#[instrument(skip(feed, repos, window), fields(repos = repos.len()))]
pub async fn collect_issues(
    feed: &dyn FeedSource,
    org: &str,
    repos: &[String],
    labels: &[String],
    window: Window,
) -> Result<Vec<RepoEntry<IssueRecord>>> {
    let sieve = &Sieve::issues(window, labels);
    per_repository(repos, move |repo| {
        paginate(move |page| feed.issues(org, repo, page), sieve)
    })
    .await
}
