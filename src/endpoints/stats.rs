//! Repository statistics endpoints.

use serde_json::Value;

use super::path;
use crate::client::GitHubClient;
use crate::error::Result;

impl GitHubClient {
    /// Weekly commit activity for the last year.
    #[tracing::instrument(skip(self))]
    pub async fn get_commit_activity(&self, owner: &str, repo: &str) -> Result<Value> {
        self.get(&path(&["repos", owner, repo, "stats", "commit_activity"])?)
            .await
    }

    /// Weekly additions and deletions.
    #[tracing::instrument(skip(self))]
    pub async fn get_code_frequency(&self, owner: &str, repo: &str) -> Result<Value> {
        self.get(&path(&["repos", owner, repo, "stats", "code_frequency"])?)
            .await
    }

    /// Per-contributor commit totals and weekly breakdown.
    #[tracing::instrument(skip(self))]
    pub async fn get_contributor_stats(&self, owner: &str, repo: &str) -> Result<Value> {
        self.get(&path(&["repos", owner, repo, "stats", "contributors"])?)
            .await
    }

    /// Weekly commit counts for the owner and for everyone.
    #[tracing::instrument(skip(self))]
    pub async fn get_weekly_commits(&self, owner: &str, repo: &str) -> Result<Value> {
        self.get(&path(&["repos", owner, repo, "stats", "participation"])?)
            .await
    }

    /// Commit counts per hour of each weekday.
    #[tracing::instrument(skip(self))]
    pub async fn get_punch_card(&self, owner: &str, repo: &str) -> Result<Value> {
        self.get(&path(&["repos", owner, repo, "stats", "punch_card"])?)
            .await
    }
}
