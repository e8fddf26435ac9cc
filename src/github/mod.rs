//! Release coordinates and download URL construction.

use anyhow::{Result, anyhow};
use std::str::FromStr;

/// Base URL release assets are served from unless overridden.
pub const DEFAULT_DOWNLOAD_BASE: &str = "https://github.com";

#[derive(Debug, PartialEq, Clone)]
pub struct GitHubRepo {
    pub owner: String,
    pub repo: String,
}

impl std::fmt::Display for GitHubRepo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

impl FromStr for GitHubRepo {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
            Err(anyhow!("Invalid repository format. Expected 'owner/repo'."))
        } else {
            Ok(GitHubRepo {
                owner: parts[0].to_string(),
                repo: parts[1].to_string(),
            })
        }
    }
}

/// The URL a release asset is published under:
/// `<base>/<owner>/<repo>/releases/download/<tag>/<asset>`.
pub fn release_asset_url(base: &str, repo: &GitHubRepo, tag: &str, asset: &str) -> String {
    format!(
        "{}/{}/{}/releases/download/{}/{}",
        base.trim_end_matches('/'),
        repo.owner,
        repo.repo,
        tag,
        asset
    )
}
