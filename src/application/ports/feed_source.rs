use crate::domain::entities::{Post, Subreddit, Vote};
use crate::shared::error::AppError;
use async_trait::async_trait;

/// One post as selected from the store, with its nested vote rows.
#[derive(Debug, Clone)]
pub struct FeedRow {
    pub post: Post,
    pub votes: Vec<Vote>,
}

impl FeedRow {
    pub fn new(post: Post, votes: Vec<Vote>) -> Self {
        Self { post, votes }
    }
}

/// Read side of the external datastore for feed pages.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// All posts with nested vote/comment/author/subreddit rows, newest
    /// first.
    async fn front_page(&self) -> Result<Vec<FeedRow>, AppError>;

    /// Posts belonging to one subreddit, looked up by name. Unknown
    /// names are `NotFound`.
    async fn subreddit_feed(&self, name: &str) -> Result<Vec<FeedRow>, AppError>;

    async fn subreddits(&self) -> Result<Vec<Subreddit>, AppError>;
}
