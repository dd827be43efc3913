use crate::application::ports::feed_source::FeedSource;
use crate::domain::entities::Subreddit;
use crate::shared::error::AppError;
use std::sync::Arc;

/// Directory of subreddits for the sidebar listing.
pub struct SubredditService {
    source: Arc<dyn FeedSource>,
}

impl SubredditService {
    pub fn new(source: Arc<dyn FeedSource>) -> Self {
        Self { source }
    }

    pub async fn list_subreddits(&self) -> Result<Vec<Subreddit>, AppError> {
        self.source.subreddits().await
    }
}
