//! User, organization and gist models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A GitHub user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub login: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub bio: Option<String>,

    #[serde(default)]
    pub location: Option<String>,

    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
    pub created_at: DateTime<Utc>,
}

/// A GitHub organization profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub login: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub location: Option<String>,

    pub public_repos: u64,

    #[serde(default)]
    pub followers: u64,

    #[serde(default)]
    pub following: u64,

    pub created_at: DateTime<Utc>,
}

/// A public gist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gist {
    /// Files keyed by file name, in the order GitHub returned them.
    #[serde(default)]
    pub files: Map<String, Value>,

    #[serde(default)]
    pub description: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub comments: u64,
}

impl Gist {
    /// Name of the first file, which GitHub uses as the gist title.
    pub fn title(&self) -> Option<&str> {
        self.files.keys().next().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gist_title_is_first_file() {
        let gist: Gist = serde_json::from_value(serde_json::json!({
            "files": {"zeta.rs": {}, "alpha.rs": {}},
            "description": "two files",
            "created_at": "2020-01-01T00:00:00Z",
            "updated_at": "2020-01-02T00:00:00Z",
            "comments": 0
        }))
        .unwrap();
        assert_eq!(gist.title(), Some("zeta.rs"));
    }

    #[test]
    fn test_user_requires_counts() {
        let result: Result<User, _> = serde_json::from_value(serde_json::json!({
            "login": "octocat",
            "created_at": "2011-01-25T18:44:36Z"
        }));
        assert!(result.is_err());
    }
}
