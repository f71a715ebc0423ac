//! Error types for GitHub API operations.

use std::fmt;

use thiserror::Error;

/// The kind of failure the GitHub API reported.
///
/// Only responses that reached the server and came back with an
/// unsuccessful status carry a kind; transport and decoding failures
/// do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The rate limit window is exhausted. Back off until it resets.
    RateLimitExceeded,
    /// Credentials are invalid or missing.
    Authentication,
    /// The entity does not exist or is not visible to the caller.
    NotFound,
    /// Remote-side failure. Safe to retry later.
    Server,
    /// Any status the classifier has no dedicated kind for.
    Unknown,
}

impl ErrorKind {
    /// Short machine-readable code for this kind.
    pub fn code(self) -> &'static str {
        match self {
            Self::RateLimitExceeded => "RATE_LIMIT_EXCEEDED",
            Self::Authentication => "AUTHENTICATION_ERROR",
            Self::NotFound => "NOT_FOUND",
            Self::Server => "SERVER_ERROR",
            Self::Unknown => "UNKNOWN_ERROR",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Errors that can occur during GitHub API operations.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// 403 with `X-RateLimit-Remaining: 0`.
    #[error("GitHub API rate limit exceeded")]
    RateLimitExceeded,

    /// 401 Unauthorized.
    #[error("Invalid GitHub token")]
    Authentication,

    /// 404 Not Found.
    #[error("Requested resource not found")]
    NotFound,

    /// Any 5xx status.
    #[error("GitHub API server error")]
    Server { status: u16 },

    /// Any other unsuccessful status, including a 403 that is not a rate limit.
    #[error("GitHub API request failed: {status}")]
    Unknown { status: u16 },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The token cannot be carried in an HTTP header.
    #[error("Invalid token: {0}")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),

    /// An identifier that cannot stand as a single path segment.
    #[error("Invalid identifier: {0:?}")]
    InvalidIdentifier(String),
}

impl GitHubError {
    /// The API failure kind, or `None` for transport and local errors.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::RateLimitExceeded => Some(ErrorKind::RateLimitExceeded),
            Self::Authentication => Some(ErrorKind::Authentication),
            Self::NotFound => Some(ErrorKind::NotFound),
            Self::Server { .. } => Some(ErrorKind::Server),
            Self::Unknown { .. } => Some(ErrorKind::Unknown),
            Self::Http(_)
            | Self::Parse(_)
            | Self::Url(_)
            | Self::InvalidToken(_)
            | Self::InvalidIdentifier(_) => None,
        }
    }

    /// Short machine-readable code, e.g. `NOT_FOUND`.
    pub fn code(&self) -> &'static str {
        match self.kind() {
            Some(kind) => kind.code(),
            None => match self {
                Self::Http(_) => "HTTP_ERROR",
                Self::Parse(_) => "PARSE_ERROR",
                Self::Url(_) => "INVALID_URL",
                Self::InvalidIdentifier(_) => "INVALID_IDENTIFIER",
                _ => "INVALID_TOKEN",
            },
        }
    }

    /// Human-readable message.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// HTTP status of the response that produced this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RateLimitExceeded => Some(403),
            Self::Authentication => Some(401),
            Self::NotFound => Some(404),
            Self::Server { status } | Self::Unknown { status } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for GitHub operations.
pub type Result<T> = core::result::Result<T, GitHubError>;
