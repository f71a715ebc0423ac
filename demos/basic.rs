//! Basic example demonstrating the GitHub metrics client.
//!
//! Run with:
//! ```
//! GITHUB_API_TOKEN=your-token cargo run --example basic -- rust-lang rust
//! ```

use github_metrics::{
    format_repo_contributors, format_repo_languages, GitHubClient, GitHubError, IssueState,
    SearchQuery, SortOrder,
};

#[tokio::main]
async fn main() -> github_metrics::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let owner = args.next().unwrap_or_else(|| "rust-lang".to_string());
    let repo = args.next().unwrap_or_else(|| "rust".to_string());

    // Create client from environment variables
    println!("Creating GitHub client...");
    let client = GitHubClient::from_env()?;
    println!(
        "Connected to: {} (authenticated: {})",
        client.base_url(),
        client.is_authenticated()
    );

    println!("\n--- Repository Stats ---");
    let stats = client.get_repo_stats(&owner, &repo).await?;
    println!(
        "{}/{}: {} stars, {} forks, {} open issues, {} watchers",
        owner, repo, stats.stars, stats.forks, stats.open_issues, stats.watchers
    );

    println!("\n--- Languages ---");
    let languages = client.list_repo_languages(&owner, &repo).await?;
    println!("{}", format_repo_languages(&languages)?);

    println!("\n--- Contributors ---");
    let contributors = client.list_repo_contributors(&owner, &repo).await?;
    println!("{}", format_repo_contributors(&contributors)?);

    println!("\n--- Open Issues ---");
    let issues = client.list_repo_issues(&owner, &repo, IssueState::Open).await?;
    println!("{} open issues on the first page", issues.as_array().map_or(0, Vec::len));

    // Stats endpoints answer 202 while GitHub is still computing them
    println!("\n--- Punch Card ---");
    match client.get_punch_card(&owner, &repo).await {
        Ok(card) => println!("{}", github_metrics::format_punch_card(&card)?),
        Err(GitHubError::Unknown { status: 202 }) => {
            println!("Statistics are being computed, try again shortly")
        }
        Err(e) => return Err(e),
    }

    println!("\n--- Search ---");
    let query = SearchQuery::new(format!("repo:{owner}/{repo} is:pr is:open"))
        .sort("updated")
        .order(SortOrder::Desc);
    let results = client.search_issues(&query).await?;
    println!("{} open pull requests", results["total_count"]);

    println!("\nDone!");
    Ok(())
}
