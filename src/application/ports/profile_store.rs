use super::feed_source::FeedRow;
use crate::domain::entities::{Comment, Profile};
use crate::domain::value_objects::{UserId, Username};
use crate::shared::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// A profile row with the user's posts and comments, as the store
/// returns them for the public profile page.
#[derive(Debug, Clone)]
pub struct ProfilePage {
    pub profile: Profile,
    pub posts: Vec<FeedRow>,
    pub comments: Vec<Comment>,
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn profile_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<ProfilePage>, AppError>;

    async fn profile_by_id(&self, id: &UserId) -> Result<Option<Profile>, AppError>;

    async fn update_username(
        &self,
        id: &UserId,
        username: &Username,
        updated_at: DateTime<Utc>,
    ) -> Result<Profile, AppError>;
}
