//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the
//! `github-metrics` binary. [`execute`] runs a parsed command against a
//! client and returns the text to print.

mod run;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{API_URL_ENV, TOKEN_ENV};
use crate::endpoints::SortOrder;

pub use run::{error_line, execute};

/// GitHub metrics command-line interface.
#[derive(Parser, Debug)]
#[command(
    name = "github-metrics",
    about = "Fetch GitHub metrics and data",
    version
)]
pub struct Cli {
    /// GitHub API token.
    #[arg(long, global = true, env = TOKEN_ENV, hide_env_values = true)]
    pub token: Option<String>,

    /// Base URL of the GitHub REST API.
    #[arg(long, global = true, env = API_URL_ENV)]
    pub api_url: Option<String>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// How results are printed.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The raw API payload as indented JSON.
    Json,
    /// A human-readable report.
    #[default]
    Pretty,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Repository-related commands.
    Repo {
        /// Repository owner.
        owner: String,

        /// Repository name.
        repo: String,

        /// Action to perform on the repository.
        action: RepoAction,
    },

    /// User-related commands.
    User {
        /// GitHub username.
        username: String,

        /// Action to perform on the user.
        action: UserAction,
    },

    /// Organization-related commands.
    Org {
        /// Organization name.
        org: String,

        /// Action to perform on the organization.
        action: OrgAction,
    },

    /// Search-related commands.
    Search {
        /// Type of search to perform.
        kind: SearchKind,

        /// Search query.
        query: String,

        /// Sort field.
        #[arg(long)]
        sort: Option<String>,

        /// Sort order.
        #[arg(long, value_enum)]
        order: Option<SortOrder>,
    },
}

/// Repository actions.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepoAction {
    Info,
    Contributors,
    Languages,
    Readme,
    Issues,
    Pulls,
    Stats,
    #[value(alias = "commit_activity")]
    CommitActivity,
    #[value(alias = "code_frequency")]
    CodeFrequency,
    #[value(alias = "contributors_stats")]
    ContributorsStats,
    #[value(alias = "weekly_commits")]
    WeeklyCommits,
    #[value(alias = "punch_card")]
    PunchCard,
}

/// User actions.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserAction {
    Info,
    Repos,
    Gists,
}

/// Organization actions.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrgAction {
    Info,
    Repos,
}

/// Searchable entity types.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchKind {
    #[value(alias = "repositories")]
    Repos,
    Issues,
}
