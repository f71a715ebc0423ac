//! GitHub metrics CLI binary.
//!
//! A command-line interface for fetching GitHub metrics and data.

use std::process::ExitCode;

use clap::Parser;
use github_metrics::cli::{error_line, execute, Cli};
use github_metrics::{Config, GitHubClient, GitHubError};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::resolve(cli.token.clone(), cli.api_url.clone());

    let client = match GitHubClient::from_config(&config) {
        Ok(c) => c,
        Err(e) => return report(&e),
    };

    match execute(&client, &cli.command, cli.format).await {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => report(&e),
    }
}

fn report(err: &GitHubError) -> ExitCode {
    eprintln!("{}", error_line(err));
    if err.kind().is_none() {
        tracing::debug!(error = ?err, "request did not complete");
    }
    ExitCode::FAILURE
}
