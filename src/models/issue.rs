//! Issue and pull request models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::repository::Owner;

/// An issue, as listed for a repository or returned by issue search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub state: String,
    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub comments: u64,

    #[serde(default)]
    pub user: Option<Owner>,

    /// API URL of the repository (e.g., `https://api.github.com/repos/o/r`).
    #[serde(default)]
    pub repository_url: Option<String>,
}

impl Issue {
    /// `owner/name` of the repository, from the last two URL segments.
    pub fn repository(&self) -> Option<String> {
        let url = self.repository_url.as_deref()?;
        let mut segments = url.trim_end_matches('/').rsplit('/');
        let name = segments.next()?;
        let owner = segments.next()?;
        Some(format!("{owner}/{name}"))
    }
}

/// A pull request summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub state: String,
    pub created_at: DateTime<Utc>,
    pub user: Owner,
}
