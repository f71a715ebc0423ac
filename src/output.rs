//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output as an
//! alternative to JSON, and one `format_*` function per report that takes
//! the raw payload of the matching endpoint.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;
use crate::models::{
    CodeFrequencyWeek, CommitActivityWeek, Contributor, ContributorStats, Gist, Issue, Languages,
    Organization, Participation, PullRequest, PunchCardEntry, Readme, RepoStats, RepoSummary,
    Repository, SearchResults, User,
};

const NOT_AVAILABLE: &str = "N/A";

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Trait for human-readable output.
///
/// Implemented by model types to provide formatted output suitable for
/// terminal display when JSON output is not requested.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

fn or_na(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(NOT_AVAILABLE)
}

fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d %H:%M:%S").to_string()
}

fn format_week(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

fn join_counts(counts: &[u64]) -> String {
    let counts: Vec<String> = counts.iter().map(u64::to_string).collect();
    format!("[{}]", counts.join(", "))
}

/// Heading followed by one block per item.
fn listing<T: PrettyPrint>(heading: String, items: &[T]) -> String {
    let mut lines = vec![heading];
    lines.extend(items.iter().map(PrettyPrint::pretty_print));
    lines.join("\n")
}

impl PrettyPrint for Repository {
    fn pretty_print(&self) -> String {
        [
            "Repository Information:".to_string(),
            format!("Name: {}", self.name),
            format!("Owner: {}", self.owner.login),
            format!("Description: {}", or_na(&self.description)),
            format!("Stars: {}", self.stargazers_count),
            format!("Forks: {}", self.forks_count),
            format!("Open Issues: {}", self.open_issues_count),
            format!("Language: {}", or_na(&self.language)),
            format!("Created: {}", format_date(&self.created_at)),
            format!("Last Updated: {}", format_date(&self.updated_at)),
        ]
        .join("\n")
    }
}

impl PrettyPrint for Contributor {
    fn pretty_print(&self) -> String {
        format!("- {} (Contributions: {})", self.login, self.contributions)
    }
}

impl PrettyPrint for Languages {
    fn pretty_print(&self) -> String {
        let mut lines = vec!["Repository Languages:".to_string()];
        for language in self {
            lines.push(format!(
                "- {}: {:.1}% ({} bytes)",
                language.name,
                self.percentage(language.bytes),
                language.bytes
            ));
        }
        lines.join("\n")
    }
}

impl PrettyPrint for Readme {
    fn pretty_print(&self) -> String {
        [
            "Repository README:".to_string(),
            format!("Name: {}", self.name),
            format!("Size: {} bytes", self.size),
            format!("Encoding: {}", self.encoding),
            "Content:".to_string(),
            self.content.clone(),
        ]
        .join("\n")
    }
}

impl PrettyPrint for Issue {
    fn pretty_print(&self) -> String {
        [
            format!("- #{}: {}", self.number, self.title),
            format!("  State: {}", self.state),
            format!("  Created: {}", format_date(&self.created_at)),
            format!("  Comments: {}\n", self.comments),
        ]
        .join("\n")
    }
}

/// An issue as listed in search results, where hits span repositories.
fn search_hit_block(issue: &Issue) -> String {
    let repository = issue.repository();
    [
        format!("- {} (#{})", issue.title, issue.number),
        format!("  Repository: {}", or_na(&repository)),
        format!("  State: {}", issue.state),
        format!("  Created: {}", format_date(&issue.created_at)),
        format!("  Comments: {}\n", issue.comments),
    ]
    .join("\n")
}

impl PrettyPrint for PullRequest {
    fn pretty_print(&self) -> String {
        [
            format!("- #{}: {}", self.number, self.title),
            format!("  State: {}", self.state),
            format!("  Created: {}", format_date(&self.created_at)),
            format!("  User: {}\n", self.user.login),
        ]
        .join("\n")
    }
}

impl PrettyPrint for User {
    fn pretty_print(&self) -> String {
        [
            "User Information:".to_string(),
            format!("Login: {}", self.login),
            format!("Name: {}", or_na(&self.name)),
            format!("Bio: {}", or_na(&self.bio)),
            format!("Location: {}", or_na(&self.location)),
            format!("Public Repos: {}", self.public_repos),
            format!("Followers: {}", self.followers),
            format!("Following: {}", self.following),
            format!("Created: {}", format_date(&self.created_at)),
        ]
        .join("\n")
    }
}

impl PrettyPrint for Organization {
    fn pretty_print(&self) -> String {
        [
            "Organization Information:".to_string(),
            format!("Login: {}", self.login),
            format!("Name: {}", or_na(&self.name)),
            format!("Description: {}", or_na(&self.description)),
            format!("Location: {}", or_na(&self.location)),
            format!("Public Repos: {}", self.public_repos),
            format!("Followers: {}", self.followers),
            format!("Following: {}", self.following),
            format!("Created: {}", format_date(&self.created_at)),
        ]
        .join("\n")
    }
}

impl PrettyPrint for RepoSummary {
    fn pretty_print(&self) -> String {
        repo_block(&self.name, self)
    }
}

fn repo_block(title: &str, repo: &RepoSummary) -> String {
    [
        format!("- {}", title),
        format!("  Description: {}", or_na(&repo.description)),
        format!("  Stars: {}", repo.stargazers_count),
        format!("  Forks: {}", repo.forks_count),
        format!("  Language: {}\n", or_na(&repo.language)),
    ]
    .join("\n")
}

impl PrettyPrint for Gist {
    fn pretty_print(&self) -> String {
        [
            format!("- {}", self.title().unwrap_or("(no files)")),
            format!("  Description: {}", or_na(&self.description)),
            format!("  Created: {}", format_date(&self.created_at)),
            format!("  Updated: {}", format_date(&self.updated_at)),
            format!("  Comments: {}\n", self.comments),
        ]
        .join("\n")
    }
}

impl PrettyPrint for RepoStats {
    fn pretty_print(&self) -> String {
        [
            "Repository Statistics:".to_string(),
            format!("Stars: {}", self.stars),
            format!("Forks: {}", self.forks),
            format!("Open Issues: {}", self.open_issues),
            format!("Watchers: {}", self.watchers),
        ]
        .join("\n")
    }
}

impl PrettyPrint for CommitActivityWeek {
    fn pretty_print(&self) -> String {
        let days: Vec<String> = WEEKDAYS
            .iter()
            .zip(self.days)
            .map(|(day, count)| format!("{}: {}", &day[..3], count))
            .collect();
        format!(
            "Week of {}: {} commits\n  {}",
            format_week(self.week),
            self.total,
            days.join(", ")
        )
    }
}

impl PrettyPrint for CodeFrequencyWeek {
    fn pretty_print(&self) -> String {
        format!(
            "Week of {}: +{} additions, -{} deletions",
            format_week(self.week()),
            self.additions(),
            self.deletions()
        )
    }
}

impl PrettyPrint for ContributorStats {
    fn pretty_print(&self) -> String {
        let mut lines = vec![
            format!("Username: {}", self.author.login),
            format!("  Total Commits: {}", self.total),
            "  Weekly Commits:".to_string(),
        ];
        let recent = &self.weeks[self.weeks.len().saturating_sub(4)..];
        for week in recent {
            lines.push(format!("    Week of {}: {} commits", format_week(week.w), week.c));
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

impl PrettyPrint for Participation {
    fn pretty_print(&self) -> String {
        [
            "Weekly Commit Counts:".to_string(),
            format!("  Owner: {}", join_counts(&self.owner)),
            format!("  All: {}", join_counts(&self.all)),
        ]
        .join("\n")
    }
}

impl PrettyPrint for PunchCardEntry {
    fn pretty_print(&self) -> String {
        let day = WEEKDAYS
            .get(usize::from(self.day()))
            .map(|d| d.to_string())
            .unwrap_or_else(|| format!("Day {}", self.day()));
        format!(
            "{} {:02}:00 - {:02}:59: {} commits",
            day,
            self.hour(),
            self.hour(),
            self.commits()
        )
    }
}

fn parse<T: DeserializeOwned>(value: &Value) -> Result<T> {
    Ok(T::deserialize(value)?)
}

/// Format the payload of [`get_repo`](crate::GitHubClient::get_repo).
pub fn format_repo_info(value: &Value) -> Result<String> {
    Ok(parse::<Repository>(value)?.pretty_print())
}

/// Format the payload of [`list_repo_contributors`](crate::GitHubClient::list_repo_contributors).
pub fn format_repo_contributors(value: &Value) -> Result<String> {
    let contributors: Vec<Contributor> = parse(value)?;
    Ok(listing("Repository Contributors:".to_string(), &contributors))
}

/// Format the payload of [`list_repo_languages`](crate::GitHubClient::list_repo_languages).
///
/// Each language is shown as its share of the total bytes, to one decimal.
pub fn format_repo_languages(value: &Value) -> Result<String> {
    Ok(parse::<Languages>(value)?.pretty_print())
}

pub fn format_repo_readme(value: &Value) -> Result<String> {
    Ok(parse::<Readme>(value)?.pretty_print())
}

pub fn format_repo_issues(value: &Value) -> Result<String> {
    let issues: Vec<Issue> = parse(value)?;
    Ok(listing("Repository Issues:".to_string(), &issues))
}

pub fn format_pull_requests(value: &Value) -> Result<String> {
    let pulls: Vec<PullRequest> = parse(value)?;
    Ok(listing("Pull Requests:".to_string(), &pulls))
}

pub fn format_user_info(value: &Value) -> Result<String> {
    Ok(parse::<User>(value)?.pretty_print())
}

pub fn format_user_repos(value: &Value) -> Result<String> {
    let repos: Vec<RepoSummary> = parse(value)?;
    Ok(listing("User Repositories:".to_string(), &repos))
}

pub fn format_user_gists(value: &Value) -> Result<String> {
    let gists: Vec<Gist> = parse(value)?;
    Ok(listing("User Gists:".to_string(), &gists))
}

pub fn format_org_info(value: &Value) -> Result<String> {
    Ok(parse::<Organization>(value)?.pretty_print())
}

pub fn format_org_repos(value: &Value) -> Result<String> {
    let repos: Vec<RepoSummary> = parse(value)?;
    Ok(listing("Organization Repositories:".to_string(), &repos))
}

pub fn format_search_repos(value: &Value) -> Result<String> {
    let results: SearchResults<RepoSummary> = parse(value)?;
    let mut lines = vec![format!("Search Results (Total: {}):", results.total_count)];
    lines.extend(results.items.iter().map(|r| repo_block(&r.full_name, r)));
    Ok(lines.join("\n"))
}

pub fn format_search_issues(value: &Value) -> Result<String> {
    let results: SearchResults<Issue> = parse(value)?;
    let mut lines = vec![format!("Search Results (Total: {}):", results.total_count)];
    lines.extend(results.items.iter().map(search_hit_block));
    Ok(lines.join("\n"))
}

/// Format the output of [`get_repo_stats`](crate::GitHubClient::get_repo_stats).
pub fn format_repo_stats(value: &Value) -> Result<String> {
    Ok(parse::<RepoStats>(value)?.pretty_print())
}

pub fn format_commit_activity(value: &Value) -> Result<String> {
    let weeks: Vec<CommitActivityWeek> = parse(value)?;
    Ok(listing("Weekly Commit Activity:".to_string(), &weeks))
}

pub fn format_code_frequency(value: &Value) -> Result<String> {
    let weeks: Vec<CodeFrequencyWeek> = parse(value)?;
    Ok(listing("Weekly Code Frequency:".to_string(), &weeks))
}

/// Format contributor statistics, showing only each author's last four weeks.
pub fn format_contributor_stats(value: &Value) -> Result<String> {
    let stats: Vec<ContributorStats> = parse(value)?;
    Ok(listing("Contributor Statistics:".to_string(), &stats))
}

pub fn format_weekly_commits(value: &Value) -> Result<String> {
    Ok(parse::<Participation>(value)?.pretty_print())
}

pub fn format_punch_card(value: &Value) -> Result<String> {
    let entries: Vec<PunchCardEntry> = parse(value)?;
    Ok(listing("Commit Punch Card:".to_string(), &entries))
}
