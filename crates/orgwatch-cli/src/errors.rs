// SPDX-License-Identifier: Apache-2.0

//! CLI-specific error formatting with user-friendly hints.
//!
//! Downcasts `anyhow::Error` to `OrgwatchError` and appends a hint suited
//! to the terminal. The core keeps structured error data; presentation
//! lives here.

use anyhow::Error;
use orgwatch_core::OrgwatchError;

/// Formats an error for CLI display with helpful hints.
///
/// Errors that are not an `OrgwatchError` keep their full context chain.
pub fn format_error(error: &Error) -> String {
    let Some(err) = error.downcast_ref::<OrgwatchError>() else {
        return format!("{error:#}");
    };

    match err {
        OrgwatchError::Transport {
            status: Some(401 | 403),
            ..
        } => format!(
            "{err}\n\nTip: Set GH_TOKEN or GITHUB_TOKEN, or run `gh auth login`. \
             Anonymous access is heavily rate limited."
        ),
        OrgwatchError::Transport {
            status: Some(404), ..
        } => format!("{err}\n\nTip: Check the organization slugs in your config file."),
        OrgwatchError::Transport { .. } => {
            format!("{err}\n\nTip: Check your internet connection and GitHub token, then try again.")
        }
        OrgwatchError::Config { .. } => format!(
            "{err}\n\nTip: Pass --config <PATH> or set CONFIG_FILE to point at your YAML config."
        ),
        OrgwatchError::NoRepositories { .. } => {
            format!("{err}\n\nTip: Check the `global.organizations` list in your config file.")
        }
        OrgwatchError::UnknownOrganization { .. } => format!(
            "{err}\n\nTip: Every organization in a report must be listed under `global.organizations`."
        ),
        OrgwatchError::Report { .. } | OrgwatchError::Io(_) => {
            format!("{error:#}\n\nTip: Check that the report paths in your config file are writable.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_auth_failure_suggests_token() {
        let error = anyhow::Error::new(OrgwatchError::Transport {
            status: Some(401),
            message: "Bad credentials".to_string(),
        });
        let formatted = format_error(&error);

        assert!(formatted.contains("HTTP 401"));
        assert!(formatted.contains("GH_TOKEN"));
    }

    #[test]
    fn test_format_not_found_points_at_config() {
        let error = anyhow::Error::new(OrgwatchError::Transport {
            status: Some(404),
            message: "Not Found".to_string(),
        });

        assert!(format_error(&error).contains("organization slugs"));
    }

    #[test]
    fn test_format_config_error() {
        let error = anyhow::Error::new(OrgwatchError::Config {
            message: "configuration file \"x.yaml\" not found".to_string(),
        });
        let formatted = format_error(&error);

        assert!(formatted.contains("Configuration error"));
        assert!(formatted.contains("--config"));
    }

    #[test]
    fn test_format_survives_context() {
        let error = anyhow::Error::new(OrgwatchError::NoRepositories {
            organization: "acme".to_string(),
        })
        .context("Collection failed");
        let formatted = format_error(&error);

        assert!(formatted.contains("`acme`"));
        assert!(formatted.contains("global.organizations"));
    }

    #[test]
    fn test_format_non_orgwatch_error() {
        let error = anyhow::anyhow!("Some generic error");

        assert_eq!(format_error(&error), "Some generic error");
    }
}
