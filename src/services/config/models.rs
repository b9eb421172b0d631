use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_API_BASE: &str = "https://api.github.com";
const DEFAULT_OWNER: &str = "esx-toolkit";
const DEFAULT_REPO: &str = "esx-toolkit";
const DEFAULT_BRANCH: &str = "main";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Repository whose latest commit is reported by the update check.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct UpdateSource {
    pub api_base: String,
    pub owner: String,
    pub repo: String,
    pub branch: String,
    pub timeout_secs: u64,
}

impl UpdateSource {
    /// `GET {api_base}/repos/{owner}/{repo}/commits/{branch}`
    pub fn commits_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/commits/{}",
            self.api_base.trim_end_matches('/'),
            self.owner,
            self.repo,
            self.branch
        )
    }
}

impl Default for UpdateSource {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.into(),
            owner: DEFAULT_OWNER.into(),
            repo: DEFAULT_REPO.into(),
            branch: DEFAULT_BRANCH.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    /// Where projects are unpacked. `None` uses `<app data>/projects`.
    pub workspace_dir: Option<PathBuf>,
    /// Tag keys every access point must carry, e.g. `["mount", "switch-port"]`.
    pub required_tag_keys: Vec<String>,
    pub update: UpdateSource,
}
