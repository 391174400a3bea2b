// SPDX-License-Identifier: Apache-2.0

//! Error types for Orgwatch.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Every variant is fatal to the run that produced it; nothing in the core
//! retries or downgrades an error. Application code should use
//! `anyhow::Result` for top-level error handling.

use thiserror::Error;

/// Errors that can occur during Orgwatch operations.
#[derive(Error, Debug)]
pub enum OrgwatchError {
    /// A GitHub call failed or answered with a non-success status.
    #[error("GitHub request failed{}: {message}", .status.map(|s| format!(" (HTTP {s})")).unwrap_or_default())]
    Transport {
        /// HTTP status code, when the failure came from GitHub itself.
        status: Option<u16>,
        /// Error message.
        message: String,
    },

    /// Configuration file error.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },

    /// A collected organization is missing from the configured organization table.
    #[error("Organization `{organization}` is not present in the configured organization table")]
    UnknownOrganization {
        /// GitHub account slug of the organization.
        organization: String,
    },

    /// The repository listing of a configured organization came back empty.
    #[error("Organization `{organization}` has no repositories to scan")]
    NoRepositories {
        /// GitHub account slug of the organization.
        organization: String,
    },

    /// Report serialization or rendering error.
    #[error("Report error: {message}")]
    Report {
        /// Error message.
        message: String,
    },

    /// Filesystem error while persisting reports.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<octocrab::Error> for OrgwatchError {
    fn from(err: octocrab::Error) -> Self {
        match err {
            octocrab::Error::GitHub { source, .. } => OrgwatchError::Transport {
                status: Some(source.status_code.as_u16()),
                message: source.message,
            },
            other => OrgwatchError::Transport {
                status: None,
                message: first_line(&other.to_string()),
            },
        }
    }
}

/// Keeps the first line of a message. octocrab appends a captured backtrace after it.
fn first_line(message: &str) -> String {
    message.lines().next().unwrap_or_default().trim_end().to_string()
}

impl From<config::ConfigError> for OrgwatchError {
    fn from(err: config::ConfigError) -> Self {
        OrgwatchError::Config {
            message: err.to_string(),
        }
    }
}
