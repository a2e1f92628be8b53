// Repository inference from the local git configuration.

use anyhow::{Context, Result};
use regex::Regex;
use std::fmt;
use std::path::Path;
use std::process::Command;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::debug;

use crate::error::CliError;

static SSH_REMOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^git@github\.com:([a-z]+)/([a-z-]+)\.git$").expect("valid remote pattern")
});

/// Owner/name pair identifying a repository on GitHub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// The remote URL is not of the form `git@github.com:owner/repo.git`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported remote format: {url} (expected git@github.com:owner/repo.git)")]
pub struct UnsupportedRemote {
    pub url: String,
}

/// Extract owner and name from an SSH GitHub remote URL.
///
/// Only lowercase owners and lowercase/hyphenated repository names are
/// recognised. Surrounding whitespace (git's trailing newline) is ignored.
pub fn parse_remote_url(url: &str) -> Result<RepoRef, UnsupportedRemote> {
    let url = url.trim();
    let caps = SSH_REMOTE.captures(url).ok_or_else(|| UnsupportedRemote {
        url: url.to_string(),
    })?;

    Ok(RepoRef {
        owner: caps[1].to_string(),
        name: caps[2].to_string(),
    })
}

/// Read `remote.origin.url` for the git repository at `dir`.
///
/// Returns `None` when git prints nothing, which covers both "not a
/// repository" and "no origin remote".
pub fn read_remote_url(dir: &Path) -> Result<Option<String>> {
    let output = Command::new("git")
        .args(["config", "--get", "remote.origin.url"])
        .current_dir(dir)
        .output()
        .context("Failed to run git")?;

    let url = String::from_utf8_lossy(&output.stdout).trim().to_string();
    debug!(dir = %dir.display(), url = %url, "read origin remote");

    Ok(if url.is_empty() { None } else { Some(url) })
}

/// Resolve the repository for the current working directory.
pub fn current_repo() -> Result<RepoRef> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    repo_at(&cwd)
}

/// Resolve the repository whose working tree is at `dir`.
pub fn repo_at(dir: &Path) -> Result<RepoRef> {
    let url = read_remote_url(dir)?.ok_or(CliError::NotARepository)?;
    let repo = parse_remote_url(&url).map_err(CliError::from)?;
    debug!(repo = %repo, "resolved repository");
    Ok(repo)
}
