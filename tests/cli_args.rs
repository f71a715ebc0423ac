//! CLI argument parsing tests.

use clap::Parser;
use github_metrics::cli::{Cli, Command, OrgAction, OutputFormat, RepoAction, SearchKind, UserAction};
use github_metrics::SortOrder;

#[test]
fn test_cli_parses_repo_subcommand() {
    let cli = Cli::parse_from(["github-metrics", "repo", "rust-lang", "rust", "info"]);

    assert_eq!(cli.format, OutputFormat::Pretty);
    match cli.command {
        Command::Repo {
            owner,
            repo,
            action,
        } => {
            assert_eq!(owner, "rust-lang");
            assert_eq!(repo, "rust");
            assert_eq!(action, RepoAction::Info);
        }
        _ => panic!("Expected Repo command"),
    }
}

#[test]
fn test_repo_actions_accept_underscored_names() {
    let cases = [
        ("commit_activity", RepoAction::CommitActivity),
        ("commit-activity", RepoAction::CommitActivity),
        ("code_frequency", RepoAction::CodeFrequency),
        ("contributors_stats", RepoAction::ContributorsStats),
        ("weekly_commits", RepoAction::WeeklyCommits),
        ("punch_card", RepoAction::PunchCard),
        ("punch-card", RepoAction::PunchCard),
    ];

    for (name, expected) in cases {
        let cli = Cli::parse_from(["github-metrics", "repo", "o", "r", name]);
        assert!(
            matches!(cli.command, Command::Repo { action, .. } if action == expected),
            "action {name}"
        );
    }
}

#[test]
fn test_cli_parses_user_and_org_subcommands() {
    let cli = Cli::parse_from(["github-metrics", "user", "octocat", "gists"]);
    assert!(matches!(
        cli.command,
        Command::User { ref username, action: UserAction::Gists } if username == "octocat"
    ));

    let cli = Cli::parse_from(["github-metrics", "org", "github", "repos"]);
    assert!(matches!(
        cli.command,
        Command::Org { ref org, action: OrgAction::Repos } if org == "github"
    ));
}

#[test]
fn test_cli_parses_search_with_options() {
    let cli = Cli::parse_from([
        "github-metrics",
        "search",
        "repos",
        "language:rust",
        "--sort",
        "stars",
        "--order",
        "desc",
    ]);

    match cli.command {
        Command::Search {
            kind,
            query,
            sort,
            order,
        } => {
            assert_eq!(kind, SearchKind::Repos);
            assert_eq!(query, "language:rust");
            assert_eq!(sort.as_deref(), Some("stars"));
            assert_eq!(order, Some(SortOrder::Desc));
        }
        _ => panic!("Expected Search command"),
    }
}

#[test]
fn test_search_order_is_restricted() {
    let result = Cli::try_parse_from([
        "github-metrics",
        "search",
        "issues",
        "bug",
        "--order",
        "sideways",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_global_format_flag() {
    // --format before subcommand
    let cli = Cli::parse_from(["github-metrics", "--format", "json", "user", "octocat", "info"]);
    assert_eq!(cli.format, OutputFormat::Json);

    // --format after subcommand (global flag)
    let cli = Cli::parse_from(["github-metrics", "user", "octocat", "info", "--format", "json"]);
    assert_eq!(cli.format, OutputFormat::Json);
}

#[test]
fn test_explicit_token_and_api_url() {
    let cli = Cli::parse_from([
        "github-metrics",
        "--token",
        "abc123",
        "--api-url",
        "http://localhost:9000",
        "org",
        "github",
        "info",
    ]);

    assert_eq!(cli.token.as_deref(), Some("abc123"));
    assert_eq!(cli.api_url.as_deref(), Some("http://localhost:9000"));
}

#[test]
fn test_unknown_action_is_rejected() {
    let result = Cli::try_parse_from(["github-metrics", "repo", "o", "r", "delete"]);
    assert!(result.is_err());
}
