use super::profile::Profile;
use crate::domain::value_objects::{CommentId, PostId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub post_id: Option<PostId>,
    pub author: Profile,
    pub body: String,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(id: CommentId, author: Profile, body: String, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            post_id: None,
            author,
            body,
            updated_at,
        }
    }

    pub fn on_post(mut self, post_id: PostId) -> Self {
        self.post_id = Some(post_id);
        self
    }
}
