// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # Orgwatch Core
//!
//! Core library for Orgwatch - windowed activity reports for GitHub organizations.
//!
//! This crate provides reusable components for:
//! - Walking reverse-chronological GitHub listings until a date window ends
//! - Filtering pull requests, releases and issues by state and labels
//! - GitHub API integration (token resolution, paged feed)
//! - Configuration management
//! - Per-repository report assembly
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use orgwatch_core::{GitHubFeed, collect, create_client, load_config};
//!
//! # async fn example() -> orgwatch_core::Result<()> {
//! let config = load_config(Path::new("config.yaml"))?;
//! let feed = GitHubFeed::new(create_client()?);
//!
//! let collection = collect(&feed, &config, chrono::Utc::now()).await?;
//! println!("{} organizations with pull requests", collection.pull_requests.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`collector`] - Paginated collection and repository listing
//! - [`config`] - Configuration loading
//! - [`error`] - Error types
//! - [`external`] - Per-repository report entries
//! - [`feed`] - Remote feed abstraction
//! - [`filter`] - Date window and label predicates
//! - [`github`] - GitHub API (auth, feed)
//! - [`models`] - Collected records

// ============================================================================
// Error Handling
// ============================================================================

pub use error::OrgwatchError;

/// Convenience Result type for Orgwatch operations.
///
/// This is equivalent to `std::result::Result<T, OrgwatchError>`.
pub type Result<T> = std::result::Result<T, OrgwatchError>;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{
    AppConfig, Category, CategoryConfig, GlobalConfig, IssueConfig, OrganizationConfig,
    ReportPaths, config_file_path, load_config,
};

// ============================================================================
// Collection
// ============================================================================

pub use collector::{Collected, Sieve, StopReason, list_repositories, paginate};
pub use feed::{FeedPage, FeedSource};
pub use filter::{Window, labels_match, should_stop};
pub use models::{Collection, IssueRecord, OrgEntry, PullRequestRecord, ReleaseRecord, RepoEntry};

// ============================================================================
// GitHub Integration
// ============================================================================

pub use github::auth::{TokenSource, create_client};
pub use github::feed::GitHubFeed;

// ============================================================================
// External Reports
// ============================================================================

pub use external::{ExternalCollection, ExternalEntry, external_collection, external_entries};

// ============================================================================
// Platform-Agnostic Facade
// ============================================================================

pub use facade::{collect, organization_repositories};

// ============================================================================
// Modules
// ============================================================================

pub mod collector;
pub mod config;
pub mod error;
pub mod external;
pub mod facade;
pub mod feed;
pub mod filter;
pub mod github;
pub mod models;
