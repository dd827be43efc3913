use crate::application::ports::comment_store::CommentStore;
use crate::application::ports::session::SessionProvider;
use crate::domain::value_objects::CommentId;
use crate::shared::error::{AppError, Result};
use std::sync::Arc;

pub struct CommentService {
    store: Arc<dyn CommentStore>,
    session: Arc<dyn SessionProvider>,
}

impl CommentService {
    pub fn new(store: Arc<dyn CommentStore>, session: Arc<dyn SessionProvider>) -> Self {
        Self { store, session }
    }

    /// Deletes a comment. Only the comment's author may delete it; the
    /// comment is not removed locally until the store confirms.
    pub async fn delete_comment(&self, id: &CommentId) -> Result<()> {
        let session = self.session.current_session().await?.ok_or_else(|| {
            AppError::Unauthenticated("deleting a comment requires a signed-in user".to_string())
        })?;

        let comment = self
            .store
            .get_comment(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("comment {id}")))?;
        if comment.author.id != session.user_id {
            return Err(AppError::Unauthenticated(
                "only the author may delete a comment".to_string(),
            ));
        }

        self.store.delete_comment(id).await
    }
}
