use super::profile::Profile;
use super::subreddit::Subreddit;
use crate::domain::value_objects::PostId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A submitted link/text post. Created externally; this core treats it
/// as immutable input. Scores are derived from the vote collection and
/// never stored on the post itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub author: Profile,
    pub subreddit: Subreddit,
    pub created_at: DateTime<Utc>,
    pub comment_count: usize,
}

impl Post {
    pub fn new(
        id: PostId,
        title: String,
        author: Profile,
        subreddit: Subreddit,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            author,
            subreddit,
            created_at,
            comment_count: 0,
        }
    }

    pub fn with_comment_count(mut self, comment_count: usize) -> Self {
        self.comment_count = comment_count;
        self
    }
}
