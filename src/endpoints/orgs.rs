//! Organization endpoints.

use serde_json::Value;

use super::path;
use crate::client::GitHubClient;
use crate::error::Result;

impl GitHubClient {
    /// Get an organization profile.
    #[tracing::instrument(skip(self))]
    pub async fn get_organization(&self, org: &str) -> Result<Value> {
        self.get(&path(&["orgs", org])?).await
    }

    /// List repositories of an organization.
    #[tracing::instrument(skip(self))]
    pub async fn list_org_repos(&self, org: &str) -> Result<Value> {
        self.get(&path(&["orgs", org, "repos"])?).await
    }
}
