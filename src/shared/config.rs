use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Maximum number of posts kept in the in-memory feed view.
    pub page_limit: usize,
    /// Bound on how long a vote write may stay in flight before it is
    /// treated as failed and rolled back.
    pub vote_write_timeout_ms: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            page_limit: 100,
            vote_write_timeout_ms: 5_000,
        }
    }
}
