//! GitHub metrics API client library.
//!
//! A Rust library for fetching repository, user and organization data
//! from the GitHub REST API. Every call goes through a single dispatch
//! operation that classifies the response into a payload or one of a
//! small set of typed errors.
//!
//! # Quick Start
//!
//! ```no_run
//! use github_metrics::{GitHubClient, SearchQuery};
//!
//! #[tokio::main]
//! async fn main() -> github_metrics::Result<()> {
//!     // Create client from environment variables
//!     let client = GitHubClient::from_env()?;
//!
//!     // Get a repository
//!     let repo = client.get_repo("rust-lang", "rust").await?;
//!     println!("Stars: {}", repo["stargazers_count"]);
//!
//!     // Render a report
//!     let languages = client.list_repo_languages("rust-lang", "rust").await?;
//!     println!("{}", github_metrics::format_repo_languages(&languages)?);
//!
//!     // Search
//!     let found = client.search_repositories(&SearchQuery::new("language:rust")).await?;
//!     println!("Found {} repositories", found["total_count"]);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Unsuccessful responses are mapped, in priority order, to
//! [`GitHubError::Authentication`] (401), [`GitHubError::RateLimitExceeded`]
//! (403 with `X-RateLimit-Remaining: 0`), [`GitHubError::NotFound`] (404),
//! [`GitHubError::Server`] (5xx) and [`GitHubError::Unknown`] (everything
//! else). Each carries a message and a short code such as `NOT_FOUND`.
//! Nothing is retried.
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `GITHUB_API_TOKEN` (optional) - Token sent as `Authorization: token <value>`
//! - `GITHUB_API_URL` (optional) - Base URL (defaults to `https://api.github.com`)

pub mod cli;
mod classify;
mod client;
mod config;
mod endpoints;
mod error;
mod models;
mod output;
mod request;

// Re-export core types
pub use classify::{classify, Outcome, RATE_LIMIT_REMAINING};
pub use client::{GitHubClient, ACCEPT_V3};
pub use config::{resolve_token, Config, API_URL_ENV, DEFAULT_API_URL, TOKEN_ENV};
pub use error::{ErrorKind, GitHubError, Result};
pub use request::Request;

// Re-export endpoint parameter types
pub use endpoints::{IssueState, SearchQuery, SortOrder};

// Re-export models
pub use models::{
    // Repository types
    Contributor,
    LanguageBytes,
    Languages,
    Owner,
    Readme,
    RepoStats,
    RepoSummary,
    Repository,
    // Issue types
    Issue,
    PullRequest,
    // User types
    Gist,
    Organization,
    User,
    // Search types
    SearchResults,
    // Statistics types
    CodeFrequencyWeek,
    CommitActivityWeek,
    ContributorStats,
    ContributorWeek,
    Participation,
    PunchCardEntry,
};

// Re-export formatters
pub use output::{
    format_code_frequency, format_commit_activity, format_contributor_stats, format_org_info,
    format_org_repos, format_pull_requests, format_punch_card, format_repo_contributors,
    format_repo_info, format_repo_issues, format_repo_languages, format_repo_readme,
    format_repo_stats, format_search_issues, format_search_repos, format_user_gists,
    format_user_info, format_user_repos, format_weekly_commits, PrettyPrint,
};
