//! Repository statistics models.
//!
//! GitHub computes these lazily; while it does, the endpoints answer
//! `202 Accepted`, which the client reports as an unknown failure.

use serde::{Deserialize, Serialize};

use super::repository::Owner;

/// One week of `stats/commit_activity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitActivityWeek {
    /// Start of the week as a unix timestamp.
    pub week: i64,
    pub total: u64,
    /// Commits per day, Sunday first.
    pub days: [u64; 7],
}

/// One week of `stats/code_frequency`: `[timestamp, additions, deletions]`.
///
/// Deletions are reported as a negative number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeFrequencyWeek(pub i64, pub i64, pub i64);

impl CodeFrequencyWeek {
    pub fn week(&self) -> i64 {
        self.0
    }

    pub fn additions(&self) -> i64 {
        self.1
    }

    pub fn deletions(&self) -> i64 {
        self.2.abs()
    }
}

/// Per-author entry of `stats/contributors`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributorStats {
    pub author: Owner,
    pub total: u64,
    #[serde(default)]
    pub weeks: Vec<ContributorWeek>,
}

/// One week of an author's activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributorWeek {
    /// Start of the week as a unix timestamp.
    pub w: i64,
    #[serde(default)]
    pub a: u64,
    #[serde(default)]
    pub d: u64,
    /// Commits.
    pub c: u64,
}

/// `stats/participation`: weekly commit counts for the last year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participation {
    pub all: Vec<u64>,
    pub owner: Vec<u64>,
}

/// One bucket of `stats/punch_card`: `[day, hour, commits]`, day 0 is Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchCardEntry(pub u8, pub u8, pub u64);

impl PunchCardEntry {
    pub fn day(&self) -> u8 {
        self.0
    }

    pub fn hour(&self) -> u8 {
        self.1
    }

    pub fn commits(&self) -> u64 {
        self.2
    }
}
