// SPDX-License-Identifier: Apache-2.0

//! List the repositories of one organization.

use anyhow::Result;
use orgwatch_core::{GitHubFeed, create_client, organization_repositories};

use super::types::ReposResult;

/// Lists every repository of `org`, in GitHub's listing order.
pub async fn run(org: String) -> Result<ReposResult> {
    let feed = GitHubFeed::new(create_client()?);
    let repositories = organization_repositories(&feed, &org).await?;
    Ok(ReposResult {
        organization: org,
        repositories,
    })
}
