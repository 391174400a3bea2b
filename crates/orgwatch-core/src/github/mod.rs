// SPDX-License-Identifier: Apache-2.0

//! GitHub integration module.
//!
//! Provides token resolution, client construction and the paged feed that
//! backs the collector.

pub mod auth;
pub mod feed;

/// Items requested per page on every listing.
pub const PAGE_SIZE: u8 = 20;

/// Base URL used to build repository links in reports.
pub const WEB_BASE_URL: &str = "https://github.com";

/// Browser link of `org/repo`.
#[must_use]
pub fn repository_url(org: &str, repo: &str) -> String {
    format!("{WEB_BASE_URL}/{org}/{repo}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_url() {
        assert_eq!(
            repository_url("hyperledger", "fabric"),
            "https://github.com/hyperledger/fabric"
        );
    }
}
