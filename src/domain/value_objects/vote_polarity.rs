use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a single vote on a post. Each voter holds at most one
/// vote per post; the store enforces that invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VotePolarity {
    Up,
    Down,
}

impl VotePolarity {
    /// Contribution of one vote to a post's score.
    pub fn delta(self) -> i64 {
        match self {
            VotePolarity::Up => 1,
            VotePolarity::Down => -1,
        }
    }

    pub fn from_is_upvote(is_upvote: bool) -> Self {
        if is_upvote {
            VotePolarity::Up
        } else {
            VotePolarity::Down
        }
    }
}

impl fmt::Display for VotePolarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VotePolarity::Up => write!(f, "up"),
            VotePolarity::Down => write!(f, "down"),
        }
    }
}
