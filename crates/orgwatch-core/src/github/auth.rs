// SPDX-License-Identifier: Apache-2.0

//! GitHub token resolution and client construction.
//!
//! Tokens are resolved through a priority chain:
//! 1. Environment variable (`GH_TOKEN` or `GITHUB_TOKEN`)
//! 2. GitHub CLI (`gh auth token`)
//!
//! Without a token the client is built anonymously. Public listings still
//! work under the unauthenticated rate limit.

use std::process::Command;

use octocrab::Octocrab;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info, instrument, warn};

use crate::Result;
use crate::error::OrgwatchError;

/// Source of the GitHub authentication token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    /// Token from `GH_TOKEN` or `GITHUB_TOKEN` environment variable.
    Environment,
    /// Token from `gh auth token` command.
    GhCli,
}

impl std::fmt::Display for TokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenSource::Environment => write!(f, "environment variable"),
            TokenSource::GhCli => write!(f, "GitHub CLI"),
        }
    }
}

/// Attempts to get a token from the GitHub CLI (`gh auth token`).
///
/// Returns `None` if `gh` is missing, not authenticated, or fails.
#[instrument]
fn get_token_from_gh_cli() -> Option<SecretString> {
    debug!("Attempting to get token from gh CLI");

    match Command::new("gh").args(["auth", "token"]).output() {
        Ok(output) if output.status.success() => {
            let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
            if token.is_empty() {
                debug!("gh auth token returned empty output");
                None
            } else {
                Some(SecretString::from(token))
            }
        }
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!(
                status = ?output.status,
                stderr = %stderr.trim(),
                "gh auth token failed"
            );
            None
        }
        Err(e) => {
            debug!(error = %e, "Failed to execute gh command");
            None
        }
    }
}

/// Reads the first non-empty token variable.
fn token_from_env() -> Option<SecretString> {
    ["GH_TOKEN", "GITHUB_TOKEN"].into_iter().find_map(|name| {
        std::env::var(name)
            .ok()
            .filter(|token| !token.is_empty())
            .inspect(|_| debug!(variable = name, "Using token from environment"))
            .map(SecretString::from)
    })
}

/// Resolves a GitHub token using the priority chain.
///
/// Returns the token and its source, or `None` if no token is found.
#[instrument]
pub fn resolve_token() -> Option<(SecretString, TokenSource)> {
    if let Some(token) = token_from_env() {
        return Some((token, TokenSource::Environment));
    }

    if let Some(token) = get_token_from_gh_cli() {
        debug!("Using token from GitHub CLI");
        return Some((token, TokenSource::GhCli));
    }

    debug!("No token found in any source");
    None
}

/// Creates an Octocrab client, authenticated when a token can be resolved.
///
/// # Errors
///
/// Returns [`OrgwatchError::Config`] if the client cannot be built.
#[instrument]
pub fn create_client() -> Result<Octocrab> {
    match resolve_token() {
        Some((token, source)) => {
            info!(source = %source, "Creating GitHub client");
            create_client_with_token(&token)
        }
        None => {
            warn!("No GitHub token found, using anonymous access with low rate limits");
            Octocrab::builder().build().map_err(client_error)
        }
    }
}

/// Creates an authenticated Octocrab client using a provided token.
///
/// # Errors
///
/// Returns [`OrgwatchError::Config`] if the client cannot be built.
#[instrument(skip(token))]
pub fn create_client_with_token(token: &SecretString) -> Result<Octocrab> {
    let client = Octocrab::builder()
        .personal_token(token.expose_secret().to_string())
        .build()
        .map_err(client_error)?;

    debug!("Created authenticated GitHub client");
    Ok(client)
}

fn client_error(err: octocrab::Error) -> OrgwatchError {
    OrgwatchError::Config {
        message: format!("Failed to build GitHub client: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    fn clear_token_env() {
        // SAFETY: tests touching the environment are serialized.
        unsafe {
            std::env::remove_var("GH_TOKEN");
            std::env::remove_var("GITHUB_TOKEN");
        }
    }

    #[test]
    fn test_token_source_display() {
        assert_eq!(TokenSource::Environment.to_string(), "environment variable");
        assert_eq!(TokenSource::GhCli.to_string(), "GitHub CLI");
    }

    #[test]
    #[serial]
    fn test_gh_token_takes_priority() {
        clear_token_env();
        // SAFETY: serialized.
        unsafe {
            std::env::set_var("GH_TOKEN", "primary");
            std::env::set_var("GITHUB_TOKEN", "secondary");
        }

        let token = token_from_env().unwrap();
        assert_eq!(token.expose_secret(), "primary");

        clear_token_env();
    }

    #[test]
    #[serial]
    fn test_empty_gh_token_falls_through() {
        clear_token_env();
        // SAFETY: serialized.
        unsafe {
            std::env::set_var("GH_TOKEN", "");
            std::env::set_var("GITHUB_TOKEN", "secondary");
        }

        let token = token_from_env().unwrap();
        assert_eq!(token.expose_secret(), "secondary");

        clear_token_env();
    }

    #[test]
    #[serial]
    fn test_no_env_token() {
        clear_token_env();
        assert!(token_from_env().is_none());
    }

    #[tokio::test]
    async fn test_client_with_token_builds() {
        let token = SecretString::from("ghp_test".to_string());
        assert!(create_client_with_token(&token).is_ok());
    }
}
