//! CLI command execution.

use serde_json::Value;

use super::{Command, OrgAction, OutputFormat, RepoAction, SearchKind, UserAction};
use crate::client::GitHubClient;
use crate::endpoints::{IssueState, SearchQuery};
use crate::error::{GitHubError, Result};
use crate::output;

type Formatter = fn(&Value) -> Result<String>;

/// Run `command` and render its result in `format`.
///
/// # Errors
///
/// Returns the API error of the underlying call, or a parse error if the
/// payload does not have the shape the report expects.
#[tracing::instrument(skip(client))]
pub async fn execute(
    client: &GitHubClient,
    command: &Command,
    format: OutputFormat,
) -> Result<String> {
    let (data, formatter) = fetch(client, command).await?;

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&data)?),
        OutputFormat::Pretty => formatter(&data),
    }
}

/// The line printed to stderr when a command fails.
pub fn error_line(err: &GitHubError) -> String {
    format!("Error: {} (Code: {})", err.message(), err.code())
}

async fn fetch(client: &GitHubClient, command: &Command) -> Result<(Value, Formatter)> {
    match command {
        Command::Repo {
            owner,
            repo,
            action,
        } => fetch_repo(client, owner, repo, *action).await,
        Command::User { username, action } => {
            let result: (Value, Formatter) = match action {
                UserAction::Info => (client.get_user(username).await?, output::format_user_info),
                UserAction::Repos => (
                    client.list_user_repos(username).await?,
                    output::format_user_repos,
                ),
                UserAction::Gists => (
                    client.list_user_gists(username).await?,
                    output::format_user_gists,
                ),
            };
            Ok(result)
        }
        Command::Org { org, action } => {
            let result: (Value, Formatter) = match action {
                OrgAction::Info => (client.get_organization(org).await?, output::format_org_info),
                OrgAction::Repos => (client.list_org_repos(org).await?, output::format_org_repos),
            };
            Ok(result)
        }
        Command::Search {
            kind,
            query,
            sort,
            order,
        } => {
            let query = SearchQuery {
                q: query.clone(),
                sort: sort.clone(),
                order: *order,
            };
            let result: (Value, Formatter) = match kind {
                SearchKind::Repos => (
                    client.search_repositories(&query).await?,
                    output::format_search_repos,
                ),
                SearchKind::Issues => (
                    client.search_issues(&query).await?,
                    output::format_search_issues,
                ),
            };
            Ok(result)
        }
    }
}

async fn fetch_repo(
    client: &GitHubClient,
    owner: &str,
    repo: &str,
    action: RepoAction,
) -> Result<(Value, Formatter)> {
    let result: (Value, Formatter) = match action {
        RepoAction::Info => (client.get_repo(owner, repo).await?, output::format_repo_info),
        RepoAction::Contributors => (
            client.list_repo_contributors(owner, repo).await?,
            output::format_repo_contributors,
        ),
        RepoAction::Languages => (
            client.list_repo_languages(owner, repo).await?,
            output::format_repo_languages,
        ),
        RepoAction::Readme => (
            client.get_repo_readme(owner, repo).await?,
            output::format_repo_readme,
        ),
        RepoAction::Issues => (
            client.list_repo_issues(owner, repo, IssueState::Open).await?,
            output::format_repo_issues,
        ),
        RepoAction::Pulls => (
            client.list_pull_requests(owner, repo, IssueState::Open).await?,
            output::format_pull_requests,
        ),
        RepoAction::Stats => (
            serde_json::to_value(client.get_repo_stats(owner, repo).await?)?,
            output::format_repo_stats,
        ),
        RepoAction::CommitActivity => (
            client.get_commit_activity(owner, repo).await?,
            output::format_commit_activity,
        ),
        RepoAction::CodeFrequency => (
            client.get_code_frequency(owner, repo).await?,
            output::format_code_frequency,
        ),
        RepoAction::ContributorsStats => (
            client.get_contributor_stats(owner, repo).await?,
            output::format_contributor_stats,
        ),
        RepoAction::WeeklyCommits => (
            client.get_weekly_commits(owner, repo).await?,
            output::format_weekly_commits,
        ),
        RepoAction::PunchCard => (
            client.get_punch_card(owner, repo).await?,
            output::format_punch_card,
        ),
    };
    Ok(result)
}
