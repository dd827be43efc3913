use crate::domain::entities::Vote;
use crate::domain::value_objects::{PostId, UserId};
use crate::shared::error::AppError;
use async_trait::async_trait;

/// Write side of the external datastore for vote rows, keyed by
/// (post, voter). Failures surface as `RemoteWrite`.
#[async_trait]
pub trait VoteStore: Send + Sync {
    /// Insert a fresh vote; the returned vote carries the row id the
    /// store assigned.
    async fn insert_vote(&self, vote: &Vote) -> Result<Vote, AppError>;

    /// Flip the polarity of the voter's existing vote on the post.
    async fn update_vote(&self, vote: &Vote) -> Result<Vote, AppError>;

    /// Remove the voter's vote on the post.
    async fn delete_vote(&self, post_id: &PostId, voter_id: &UserId) -> Result<(), AppError>;
}
