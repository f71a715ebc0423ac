//! User and gist endpoints.

use serde_json::Value;

use super::path;
use crate::client::GitHubClient;
use crate::error::Result;

impl GitHubClient {
    /// Get a user profile.
    #[tracing::instrument(skip(self))]
    pub async fn get_user(&self, username: &str) -> Result<Value> {
        self.get(&path(&["users", username])?).await
    }

    /// List public repositories of a user.
    #[tracing::instrument(skip(self))]
    pub async fn list_user_repos(&self, username: &str) -> Result<Value> {
        self.get(&path(&["users", username, "repos"])?).await
    }

    /// List public gists of a user.
    #[tracing::instrument(skip(self))]
    pub async fn list_user_gists(&self, username: &str) -> Result<Value> {
        self.get(&path(&["users", username, "gists"])?).await
    }
}
