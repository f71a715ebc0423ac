//! Repository, issue, pull request, commit, workflow and webhook endpoints.

use serde_json::Value;

use super::{path, IssueState};
use crate::client::GitHubClient;
use crate::error::Result;
use crate::models::RepoStats;
use crate::request::Request;

impl GitHubClient {
    /// Get repository information.
    #[tracing::instrument(skip(self))]
    pub async fn get_repo(&self, owner: &str, repo: &str) -> Result<Value> {
        self.get(&path(&["repos", owner, repo])?).await
    }

    /// List contributors for a repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_repo_contributors(&self, owner: &str, repo: &str) -> Result<Value> {
        self.get(&path(&["repos", owner, repo, "contributors"])?).await
    }

    /// Bytes of code per language.
    #[tracing::instrument(skip(self))]
    pub async fn list_repo_languages(&self, owner: &str, repo: &str) -> Result<Value> {
        self.get(&path(&["repos", owner, repo, "languages"])?).await
    }

    /// Get the README for a repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_repo_readme(&self, owner: &str, repo: &str) -> Result<Value> {
        self.get(&path(&["repos", owner, repo, "readme"])?).await
    }

    /// List issues for a repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_repo_issues(
        &self,
        owner: &str,
        repo: &str,
        state: IssueState,
    ) -> Result<Value> {
        let request =
            Request::get(path(&["repos", owner, repo, "issues"])?).param("state", Some(state));
        self.fetch(request).await
    }

    /// List pull requests for a repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_pull_requests(
        &self,
        owner: &str,
        repo: &str,
        state: IssueState,
    ) -> Result<Value> {
        let request =
            Request::get(path(&["repos", owner, repo, "pulls"])?).param("state", Some(state));
        self.fetch(request).await
    }

    /// Get a single pull request.
    #[tracing::instrument(skip(self))]
    pub async fn get_pull_request(&self, owner: &str, repo: &str, number: u64) -> Result<Value> {
        let number = number.to_string();
        self.get(&path(&["repos", owner, repo, "pulls", &number])?).await
    }

    /// List classic projects for a repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_repo_projects(&self, owner: &str, repo: &str) -> Result<Value> {
        self.get(&path(&["repos", owner, repo, "projects"])?).await
    }

    /// List commits on the default branch.
    #[tracing::instrument(skip(self))]
    pub async fn list_commits(&self, owner: &str, repo: &str) -> Result<Value> {
        self.get(&path(&["repos", owner, repo, "commits"])?).await
    }

    /// Get a single commit by SHA.
    #[tracing::instrument(skip(self))]
    pub async fn get_commit(&self, owner: &str, repo: &str, sha: &str) -> Result<Value> {
        self.get(&path(&["repos", owner, repo, "commits", sha])?).await
    }

    /// List GitHub Actions workflow runs.
    #[tracing::instrument(skip(self))]
    pub async fn list_workflow_runs(&self, owner: &str, repo: &str) -> Result<Value> {
        self.get(&path(&["repos", owner, repo, "actions", "runs"])?).await
    }

    /// List configured webhooks. Requires admin access.
    #[tracing::instrument(skip(self))]
    pub async fn list_repo_webhooks(&self, owner: &str, repo: &str) -> Result<Value> {
        self.get(&path(&["repos", owner, repo, "hooks"])?).await
    }

    /// Stars, forks, open issues and watchers of a repository.
    ///
    /// Derived from [`get_repo`](Self::get_repo); costs one request.
    ///
    /// # Errors
    ///
    /// Returns a parse error if the repository payload lacks a counter.
    #[tracing::instrument(skip(self))]
    pub async fn get_repo_stats(&self, owner: &str, repo: &str) -> Result<RepoStats> {
        let data = self.get_repo(owner, repo).await?;
        Ok(RepoStats::from_repository(&data)?)
    }
}
