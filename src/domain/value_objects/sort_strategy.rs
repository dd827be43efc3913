use serde::{Deserialize, Serialize};

/// Ranking rule for a feed view. Transient UI state, nothing persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortStrategy {
    /// Newest first, the feed's initial ordering.
    #[default]
    Recency,
    /// Highest score first.
    Score,
}
