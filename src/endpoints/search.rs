//! Search endpoints.

use serde::Serialize;
use serde_json::Value;

use super::SortOrder;
use crate::client::GitHubClient;
use crate::error::Result;
use crate::request::Request;

/// Query parameters for the search endpoints.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchQuery {
    /// Search terms and qualifiers (e.g., `language:rust stars:>100`).
    pub q: String,

    /// Sort field, e.g. `stars` or `updated`. Best match when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,

    /// Sort direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
}

impl SearchQuery {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    #[must_use]
    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }
}

impl GitHubClient {
    /// Search for repositories.
    #[tracing::instrument(skip(self))]
    pub async fn search_repositories(&self, query: &SearchQuery) -> Result<Value> {
        self.fetch(Request::get("search/repositories").query(query)?)
            .await
    }

    /// Search for issues and pull requests.
    #[tracing::instrument(skip(self))]
    pub async fn search_issues(&self, query: &SearchQuery) -> Result<Value> {
        self.fetch(Request::get("search/issues").query(query)?).await
    }
}
