// SPDX-License-Identifier: Apache-2.0

//! Per-repository report entries.
//!
//! Each contributing repository of the collection becomes one
//! [`ExternalEntry`], enriched with the organization's display name and the
//! repository's browser link.

use serde::Serialize;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::error::OrgwatchError;
use crate::github::repository_url;
use crate::models::{Collection, IssueRecord, OrgEntry, PullRequestRecord, ReleaseRecord};

/// Organization as shown on a per-repository report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrganizationLabel {
    /// Account slug.
    pub github: String,
    /// Display name.
    pub name: String,
}

/// Repository as shown on a per-repository report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryLink {
    /// Repository name.
    pub name: String,
    /// Browser link.
    pub link: String,
}

/// Records of one repository, ready for its own report page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalEntry<T> {
    /// Owning organization.
    pub organization: OrganizationLabel,
    /// Repository the records belong to.
    pub repository: RepositoryLink,
    /// Records in feed order.
    pub items: Vec<T>,
}

/// Per-repository entries of every category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExternalCollection {
    /// One entry per repository with pull requests.
    pub pull_requests: Vec<ExternalEntry<PullRequestRecord>>,
    /// One entry per repository with releases.
    pub releases: Vec<ExternalEntry<ReleaseRecord>>,
    /// One entry per repository with issues.
    pub issues: Vec<ExternalEntry<IssueRecord>>,
}

/// Flattens `orgs` into one entry per contributing repository.
///
/// # Errors
///
/// Returns [`OrgwatchError::UnknownOrganization`] when an organization of
/// `orgs` is missing from the configured table.
pub fn external_entries<T: Clone>(
    orgs: &[OrgEntry<T>],
    config: &AppConfig,
) -> crate::Result<Vec<ExternalEntry<T>>> {
    let mut entries = Vec::new();
    for org in orgs {
        let known = config.organization(&org.organization).ok_or_else(|| {
            OrgwatchError::UnknownOrganization {
                organization: org.organization.clone(),
            }
        })?;
        let label = OrganizationLabel {
            github: org.organization.clone(),
            name: known.display_name().to_string(),
        };
        for repo in &org.repositories {
            entries.push(ExternalEntry {
                organization: label.clone(),
                repository: RepositoryLink {
                    name: repo.repository.clone(),
                    link: repository_url(&org.organization, &repo.repository),
                },
                items: repo.items.clone(),
            });
        }
    }
    debug!(entries = entries.len(), "Built external entries");
    Ok(entries)
}

/// Builds the per-repository entries of every category.
///
/// Yields an empty collection when `global.external_reports` is off.
///
/// # Errors
///
/// See [`external_entries`].
pub fn external_collection(
    collection: &Collection,
    config: &AppConfig,
) -> crate::Result<ExternalCollection> {
    if !config.global.external_reports {
        info!("External report generation is not requested");
        return Ok(ExternalCollection::default());
    }
    Ok(ExternalCollection {
        pull_requests: external_entries(&collection.pull_requests, config)?,
        releases: external_entries(&collection.releases, config)?,
        issues: external_entries(&collection.issues, config)?,
    })
}
