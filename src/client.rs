//! GitHub API client.
//!
//! Low-level HTTP client that owns the connection context and performs
//! one HTTP exchange per call. Endpoint methods live in
//! [`endpoints`](crate::endpoints) and all go through [`GitHubClient::dispatch`].

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::classify::{classify, Outcome};
use crate::config::{Config, DEFAULT_API_URL};
use crate::error::{GitHubError, Result};
use crate::request::Request;

/// Media type of the v3 JSON API.
pub const ACCEPT_V3: &str = "application/vnd.github.v3+json";

const USER_AGENT: &str = concat!("github-metrics/", env!("CARGO_PKG_VERSION"));

/// Low-level GitHub API client.
///
/// The header set (`Accept`, `User-Agent` and an optional `Authorization`)
/// is fixed at construction and shared read-only by every call.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use github_metrics::GitHubClient;
///
/// # async fn example() -> github_metrics::Result<()> {
/// // Token from GITHUB_API_TOKEN, if set
/// let client = GitHubClient::from_env()?;
///
/// // Or configure manually
/// let client = GitHubClient::new(Some("ghp_example"), "https://api.github.com")?;
/// let repo = client.get_repo("rust-lang", "rust").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GitHubClient {
    http: Client,
    base_url: Arc<Url>,
    authenticated: bool,
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("base_url", &self.base_url.as_str())
            .field("authenticated", &self.authenticated)
            .finish_non_exhaustive()
    }
}

impl GitHubClient {
    /// Create a client from environment variables.
    ///
    /// Uses `GITHUB_API_TOKEN` for authentication, if set, and optionally
    /// `GITHUB_API_URL` for the base URL (defaults to `https://api.github.com`).
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL or token is invalid.
    pub fn from_env() -> Result<Self> {
        Self::from_config(&Config::resolve(None, None))
    }

    /// Create a client from resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL or token is invalid.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.token.as_deref(), &config.api_url)
    }

    /// Create an unauthenticated client for the public API.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn anonymous() -> Result<Self> {
        Self::new(None, DEFAULT_API_URL)
    }

    /// Create a new client with an optional token and a base URL.
    ///
    /// No network I/O happens here.
    ///
    /// # Arguments
    ///
    /// * `token` - GitHub token, sent as `Authorization: token <value>`.
    ///   An empty token counts as no token.
    /// * `base_url` - Base URL for the REST API (e.g., `https://api.github.com`)
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the token contains
    /// characters not allowed in a header.
    pub fn new(token: Option<&str>, base_url: &str) -> Result<Self> {
        // Ensure base URL ends with /
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url_str)?;
        let token = token.filter(|t| !t.is_empty());

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_V3));
        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("token {token}"))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .build()
            .map_err(GitHubError::Http)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            authenticated: token.is_some(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether requests carry an `Authorization` header.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Send one request and classify the response.
    ///
    /// Transport failures (DNS, refused connections, TLS) are returned as
    /// [`GitHubError::Http`] without further translation.
    ///
    /// # Errors
    ///
    /// Returns the classified API error for unsuccessful statuses.
    #[tracing::instrument(skip(self, request), fields(method = %request.method(), endpoint = request.endpoint()))]
    pub async fn dispatch(&self, request: Request) -> Result<Outcome> {
        let url = self.base_url.join(request.endpoint())?;
        tracing::debug!(%url, "sending request");

        let mut builder = self.http.request(request.method().clone(), url);
        let params = request.wire_params();
        if !params.is_empty() {
            builder = builder.query(&params);
        }
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(GitHubError::Http)?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(GitHubError::Http)?;
        tracing::debug!(status, bytes = body.len(), "received response");

        let outcome = classify(status, &headers, &body);
        if let Err(ref err) = outcome {
            match err {
                GitHubError::RateLimitExceeded => tracing::warn!("rate limit exhausted"),
                _ => tracing::debug!(code = err.code(), "request failed"),
            }
        }
        outcome
    }

    /// Dispatch a GET and return the payload (`null` for an empty response).
    pub async fn get(&self, endpoint: &str) -> Result<Value> {
        self.dispatch(Request::get(endpoint))
            .await
            .map(Outcome::into_value)
    }

    /// Dispatch a prepared request and return the payload.
    pub async fn fetch(&self, request: Request) -> Result<Value> {
        self.dispatch(request).await.map(Outcome::into_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_debug() {
        let client = GitHubClient::new(Some("test-token"), "https://api.github.com").unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("GitHubClient"));
        assert!(debug.contains("base_url"));
        // Token should not be in debug output
        assert!(!debug.contains("test-token"));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client1 = GitHubClient::new(None, "https://api.github.com").unwrap();
        let client2 = GitHubClient::new(None, "https://api.github.com/").unwrap();
        assert_eq!(client1.base_url().as_str(), client2.base_url().as_str());
    }

    #[test]
    fn test_base_url_path_is_kept() {
        let client = GitHubClient::new(None, "https://ghe.example.com/api/v3").unwrap();
        let url = client.base_url().join("repos/o/r").unwrap();
        assert_eq!(url.as_str(), "https://ghe.example.com/api/v3/repos/o/r");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = GitHubClient::new(None, "not a url").unwrap_err();
        assert_eq!(err.code(), "INVALID_URL");
    }

    #[test]
    fn test_token_with_newline_is_rejected() {
        let err = GitHubClient::new(Some("bad\ntoken"), DEFAULT_API_URL).unwrap_err();
        assert_eq!(err.code(), "INVALID_TOKEN");
    }

    #[test]
    fn test_empty_token_is_anonymous() {
        let client = GitHubClient::new(Some(""), DEFAULT_API_URL).unwrap();
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_authentication_flag() {
        assert!(GitHubClient::new(Some("t"), DEFAULT_API_URL)
            .unwrap()
            .is_authenticated());
        assert!(!GitHubClient::anonymous().unwrap().is_authenticated());
    }
}
