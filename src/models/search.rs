//! Search result envelope.

use serde::{Deserialize, Serialize};

/// Response of the `search/*` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults<T> {
    /// Total matches, which may exceed `items.len()`.
    pub total_count: u64,

    /// True when GitHub timed out before collecting every match.
    #[serde(default)]
    pub incomplete_results: bool,

    pub items: Vec<T>,
}
