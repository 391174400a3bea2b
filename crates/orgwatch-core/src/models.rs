// SPDX-License-Identifier: Apache-2.0

//! Records retained from the remote feed and the groupings built from them.
//!
//! Records keep the fields the filters inspect plus the display metadata
//! used by reports. Groupings follow the drop-empty rule: a repository with
//! nothing retained contributes no [`RepoEntry`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A pull request as seen by the collector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestRecord {
    /// Pull request number within its repository.
    pub number: u64,
    /// Title.
    pub title: String,
    /// Browser URL.
    pub url: String,
    /// Login of the author.
    pub author: String,
    /// Creation time; drives the window check.
    pub created_at: DateTime<Utc>,
    /// Close time, if closed.
    pub closed_at: Option<DateTime<Utc>>,
    /// Merge time, if merged.
    pub merged_at: Option<DateTime<Utc>>,
    /// Label names.
    pub labels: Vec<String>,
}

impl PullRequestRecord {
    /// A pull request is kept while open, or once closed only if it was merged.
    #[must_use]
    pub fn is_open_or_merged(&self) -> bool {
        self.closed_at.is_none() || self.merged_at.is_some()
    }
}

/// A repository release as seen by the collector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseRecord {
    /// Git tag of the release.
    pub tag_name: String,
    /// Release title, falling back to the tag name.
    pub name: String,
    /// Browser URL.
    pub url: String,
    /// Draft releases are never reported.
    pub draft: bool,
    /// Pre-release flag, shown in reports.
    pub prerelease: bool,
    /// Publish time; drives the window check. Drafts have none.
    pub published_at: Option<DateTime<Utc>>,
}

/// An issue as seen by the collector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRecord {
    /// Issue number within its repository.
    pub number: u64,
    /// Title.
    pub title: String,
    /// Browser URL.
    pub url: String,
    /// Login of the author.
    pub author: String,
    /// Creation time; drives the window check.
    pub created_at: DateTime<Utc>,
    /// Label names.
    pub labels: Vec<String>,
}

/// Retained records of one category for one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoEntry<T> {
    /// Repository name, scoped to the enclosing organization.
    pub repository: String,
    /// Records in feed order (newest first).
    pub items: Vec<T>,
}

impl<T> RepoEntry<T> {
    /// Wraps `items` for `repository`, or returns `None` when nothing was retained.
    #[must_use]
    pub fn non_empty(repository: &str, items: Vec<T>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self {
                repository: repository.to_string(),
                items,
            })
        }
    }
}

/// Per-organization result of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgEntry<T> {
    /// GitHub account slug of the organization.
    pub organization: String,
    /// Contributing repositories in enumeration order.
    pub repositories: Vec<RepoEntry<T>>,
}

impl<T> OrgEntry<T> {
    /// Total number of records across all repositories.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.repositories.iter().map(|r| r.items.len()).sum()
    }
}

/// Everything one run collected, grouped by category.
///
/// A disabled category is an empty vector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Open or merged pull requests created inside the window.
    pub pull_requests: Vec<OrgEntry<PullRequestRecord>>,
    /// Non-draft releases published inside the window.
    pub releases: Vec<OrgEntry<ReleaseRecord>>,
    /// Labeled issues created inside the issue window.
    pub issues: Vec<OrgEntry<IssueRecord>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn pr(closed: bool, merged: bool) -> PullRequestRecord {
        let at = Utc.with_ymd_and_hms(2024, 1, 5, 10, 0, 0).unwrap();
        PullRequestRecord {
            number: 1,
            title: "Add feature".to_string(),
            url: "https://github.com/acme/a/pull/1".to_string(),
            author: "octocat".to_string(),
            created_at: at,
            closed_at: closed.then_some(at),
            merged_at: merged.then_some(at),
            labels: vec![],
        }
    }

    #[test]
    fn test_open_pr_is_kept() {
        assert!(pr(false, false).is_open_or_merged());
    }

    #[test]
    fn test_merged_pr_is_kept() {
        assert!(pr(true, true).is_open_or_merged());
    }

    #[test]
    fn test_closed_unmerged_pr_is_dropped() {
        assert!(!pr(true, false).is_open_or_merged());
    }

    #[test]
    fn test_non_empty_drops_empty_lists() {
        assert!(RepoEntry::<u8>::non_empty("a", vec![]).is_none());

        let entry = RepoEntry::non_empty("a", vec![1u8, 2]).unwrap();
        assert_eq!(entry.repository, "a");
        assert_eq!(entry.items, vec![1, 2]);
    }

    #[test]
    fn test_record_count_sums_repositories() {
        let org = OrgEntry {
            organization: "acme".to_string(),
            repositories: vec![
                RepoEntry {
                    repository: "a".to_string(),
                    items: vec![1u8, 2],
                },
                RepoEntry {
                    repository: "b".to_string(),
                    items: vec![3u8],
                },
            ],
        };
        assert_eq!(org.record_count(), 3);
    }

    #[test]
    fn test_org_entry_serialization_shape() {
        let org = OrgEntry {
            organization: "acme".to_string(),
            repositories: vec![RepoEntry {
                repository: "a".to_string(),
                items: vec![pr(false, false)],
            }],
        };
        let json = serde_json::to_value(&org).unwrap();

        assert_eq!(json["organization"], "acme");
        assert_eq!(json["repositories"][0]["repository"], "a");
        assert_eq!(json["repositories"][0]["items"][0]["number"], 1);
        assert!(json["repositories"][0]["items"][0]["merged_at"].is_null());
    }
}
