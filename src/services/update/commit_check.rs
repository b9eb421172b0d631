use anyhow::Context;
use log::{info, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::services::config::UpdateSource;

/// Sent with every request; the GitHub API rejects requests without one.
const USER_AGENT: &str = concat!("esx-toolkit/", env!("CARGO_PKG_VERSION"));

/// Latest commit on the tracked branch.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CommitInfo {
    pub sha: String,
    pub message: String,
}

impl CommitInfo {
    pub fn short_sha(&self) -> &str {
        self.sha.get(..7).unwrap_or(&self.sha)
    }

    /// First line of the commit message.
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }
}

/// Result of an update check. Both fields are `None` when the check was
/// unavailable; `error` then says why.
#[derive(Debug, Clone, Serialize, Default)]
pub struct UpdateCheck {
    pub sha: Option<String>,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl UpdateCheck {
    pub fn is_available(&self) -> bool {
        self.sha.is_some()
    }

    /// The commit found by the check, if there was one.
    pub fn commit(&self) -> Option<CommitInfo> {
        match (&self.sha, &self.message) {
            (Some(sha), Some(message)) => Some(CommitInfo {
                sha: sha.clone(),
                message: message.clone(),
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CommitResponse {
    sha: String,
    commit: CommitDetail,
}

#[derive(Debug, Deserialize)]
struct CommitDetail {
    message: String,
}

/// Check the configured repository for its latest commit.
///
/// Never fails: any network, HTTP or parse error is logged and turned into
/// an unavailable result so the caller can carry on.
pub async fn check_for_update(source: &UpdateSource) -> UpdateCheck {
    let url = source.commits_url();
    match fetch_latest_commit(&url, Duration::from_secs(source.timeout_secs)).await {
        Ok(commit) => {
            info!("Latest commit {}: {}", commit.short_sha(), commit.summary());
            UpdateCheck {
                sha: Some(commit.sha),
                message: Some(commit.message),
                error: None,
            }
        }
        Err(e) => {
            warn!("Update check skipped: {e:#}");
            UpdateCheck {
                sha: None,
                message: None,
                error: Some(format!("{e:#}")),
            }
        }
    }
}

/// Single unauthenticated GET against a GitHub "commits" endpoint.
pub async fn fetch_latest_commit(url: &str, timeout: Duration) -> anyhow::Result<CommitInfo> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .context("failed to build HTTP client")?;

    let response = client
        .get(url)
        .header("Accept", "application/vnd.github+json")
        .send()
        .await
        .context("failed to fetch")?;

    if !response.status().is_success() {
        anyhow::bail!("failed to fetch: HTTP {}", response.status());
    }

    let body: CommitResponse = response
        .json()
        .await
        .context("failed to fetch: unexpected response body")?;

    Ok(CommitInfo {
        sha: body.sha,
        message: body.commit.message,
    })
}
