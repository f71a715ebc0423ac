//! Client configuration.
//!
//! The environment is read once, here, before a client is built. A live
//! [`GitHubClient`](crate::GitHubClient) never looks at it again.

use std::env;

/// Environment variable holding the default API token.
pub const TOKEN_ENV: &str = "GITHUB_API_TOKEN";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "GITHUB_API_URL";

/// Public GitHub REST API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Resolved connection settings.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Token sent as `Authorization: token <value>`, if any.
    pub token: Option<String>,
    /// Base URL of the REST API.
    pub api_url: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: None,
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl Config {
    /// Resolve settings from explicit values, falling back to the environment.
    pub fn resolve(token: Option<String>, api_url: Option<String>) -> Self {
        Self::resolve_with(token, api_url, |key| env::var(key).ok())
    }

    /// Like [`Config::resolve`], with a caller-supplied variable lookup.
    pub fn resolve_with<F>(token: Option<String>, api_url: Option<String>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = non_empty(token).or_else(|| non_empty(lookup(TOKEN_ENV)));
        let api_url = non_empty(api_url)
            .or_else(|| non_empty(lookup(API_URL_ENV)))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self { token, api_url }
    }
}

/// Return the explicit token, or the one in `GITHUB_API_TOKEN`.
pub fn resolve_token(explicit: Option<String>) -> Option<String> {
    non_empty(explicit).or_else(|| non_empty(env::var(TOKEN_ENV).ok()))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
