//! Endpoint methods.
//!
//! Each method binds one REST path to typed arguments and goes through
//! [`GitHubClient::dispatch`](crate::GitHubClient::dispatch). Identifiers
//! are percent-encoded before being placed in the path.

mod orgs;
mod repos;
mod search;
mod stats;
mod users;

use std::fmt;

use serde::Serialize;

use crate::error::{GitHubError, Result};

pub use search::SearchQuery;

/// Join path segments, percent-encoding each one.
///
/// Empty segments and the dot segments `.` and `..` are rejected: URL
/// resolution would collapse them (encoded or not) into a different path.
pub(crate) fn path(segments: &[&str]) -> Result<String> {
    let mut encoded = Vec::with_capacity(segments.len());
    for segment in segments {
        if matches!(*segment, "" | "." | "..") {
            return Err(GitHubError::InvalidIdentifier((*segment).to_string()));
        }
        encoded.push(urlencoding::encode(segment));
    }
    Ok(encoded.join("/"))
}

/// Issue and pull request state filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    #[default]
    Open,
    Closed,
    All,
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::All => "all",
        })
    }
}

/// Search result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        })
    }
}
