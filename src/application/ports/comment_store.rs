use crate::domain::entities::Comment;
use crate::domain::value_objects::CommentId;
use crate::shared::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait CommentStore: Send + Sync {
    async fn get_comment(&self, id: &CommentId) -> Result<Option<Comment>, AppError>;

    async fn delete_comment(&self, id: &CommentId) -> Result<(), AppError>;
}
