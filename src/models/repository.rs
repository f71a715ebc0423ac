//! Repository models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Minimal account reference embedded in other objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    /// Account login (e.g., "octocat").
    pub login: String,
}

/// A repository as returned by `GET /repos/{owner}/{repo}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    /// Repository name without the owner.
    pub name: String,

    /// `owner/name`.
    #[serde(default)]
    pub full_name: Option<String>,

    /// The owning user or organization.
    pub owner: Owner,

    #[serde(default)]
    pub description: Option<String>,

    pub stargazers_count: u64,
    pub forks_count: u64,
    pub open_issues_count: u64,

    /// Only present on the single-repository endpoint.
    #[serde(default)]
    pub subscribers_count: Option<u64>,

    /// Primary language as detected by GitHub.
    #[serde(default)]
    pub language: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A repository entry in user, organization and search listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoSummary {
    pub name: String,

    #[serde(default)]
    pub full_name: String,

    #[serde(default)]
    pub description: Option<String>,

    pub stargazers_count: u64,
    pub forks_count: u64,

    #[serde(default)]
    pub language: Option<String>,
}

/// A contributor with their commit count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contributor {
    pub login: String,
    pub contributions: u64,
}

/// README metadata and (base64) content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Readme {
    pub name: String,
    pub size: u64,
    pub encoding: String,
    pub content: String,
}

/// Headline repository counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoStats {
    pub stars: u64,
    pub forks: u64,
    pub open_issues: u64,
    pub watchers: u64,
}

impl RepoStats {
    /// Extract the counters from a repository payload.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the counters is missing.
    pub fn from_repository(repo: &Value) -> serde_json::Result<Self> {
        #[derive(Deserialize)]
        struct Counters {
            stargazers_count: u64,
            forks_count: u64,
            open_issues_count: u64,
            subscribers_count: u64,
        }

        let counters = Counters::deserialize(repo)?;
        Ok(Self {
            stars: counters.stargazers_count,
            forks: counters.forks_count,
            open_issues: counters.open_issues_count,
            watchers: counters.subscribers_count,
        })
    }
}

/// Bytes of code per language, in the order GitHub returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Languages(Vec<LanguageBytes>);

/// One language entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageBytes {
    pub name: String,
    pub bytes: u64,
}

impl Languages {
    pub fn iter(&self) -> std::slice::Iter<'_, LanguageBytes> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total bytes across all languages.
    pub fn total_bytes(&self) -> u64 {
        self.0.iter().map(|l| l.bytes).sum()
    }

    /// Share of the total for `bytes`, as a percentage.
    pub fn percentage(&self, bytes: u64) -> f64 {
        let total = self.total_bytes();
        if total == 0 {
            return 0.0;
        }
        bytes as f64 / total as f64 * 100.0
    }
}

impl TryFrom<Map<String, Value>> for Languages {
    type Error = String;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        map.into_iter()
            .map(|(name, bytes)| match bytes.as_u64() {
                Some(bytes) => Ok(LanguageBytes { name, bytes }),
                None => Err(format!("language '{name}' has a non-integer byte count: {bytes}")),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl From<Languages> for Map<String, Value> {
    fn from(languages: Languages) -> Self {
        languages
            .0
            .into_iter()
            .map(|l| (l.name, Value::from(l.bytes)))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Languages {
    type Item = &'a LanguageBytes;
    type IntoIter = std::slice::Iter<'a, LanguageBytes>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
