//! Response classification.
//!
//! Maps a raw HTTP exchange onto an [`Outcome`] or one of the
//! [`GitHubError`] API kinds. Rules are evaluated in a fixed priority
//! order and the first match wins:
//!
//! | Status | Result |
//! |---|---|
//! | 200 | [`Outcome::Payload`] with the parsed body |
//! | 204 | [`Outcome::Empty`] |
//! | 401 | [`GitHubError::Authentication`] |
//! | 403 with `X-RateLimit-Remaining: 0` | [`GitHubError::RateLimitExceeded`] |
//! | 404 | [`GitHubError::NotFound`] |
//! | 500..=599 | [`GitHubError::Server`] |
//! | anything else | [`GitHubError::Unknown`] |
//!
//! A 403 that is not a rate limit is reported as `Unknown`, not as an
//! authentication failure.

use reqwest::header::HeaderMap;
use serde_json::Value;

use crate::error::{GitHubError, Result};

/// Header GitHub uses to report the remaining requests in the current window.
pub const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";

/// Successful result of a dispatched request.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// 200 with its parsed JSON body.
    Payload(Value),
    /// 204, nothing to parse.
    Empty,
}

impl Outcome {
    /// Collapse into a JSON value, `Empty` becoming `null`.
    pub fn into_value(self) -> Value {
        match self {
            Self::Payload(value) => value,
            Self::Empty => Value::Null,
        }
    }

    /// The payload, if there is one.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            Self::Payload(value) => Some(value),
            Self::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Classify a response by status code, headers and body.
///
/// Pure: identical inputs always produce identical results.
///
/// # Errors
///
/// Returns the API error kind for the status, or [`GitHubError::Parse`]
/// when a 200 body is not valid JSON.
pub fn classify(status: u16, headers: &HeaderMap, body: &[u8]) -> Result<Outcome> {
    match status {
        200 => Ok(Outcome::Payload(serde_json::from_slice(body)?)),
        204 => Ok(Outcome::Empty),
        401 => Err(GitHubError::Authentication),
        403 if rate_limit_exhausted(headers) => Err(GitHubError::RateLimitExceeded),
        404 => Err(GitHubError::NotFound),
        500..=599 => Err(GitHubError::Server { status }),
        _ => Err(GitHubError::Unknown { status }),
    }
}

/// True when `X-RateLimit-Remaining` is present and parses to zero.
fn rate_limit_exhausted(headers: &HeaderMap) -> bool {
    headers
        .get(RATE_LIMIT_REMAINING)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<i64>().ok())
        == Some(0)
}
