use crate::domain::value_objects::{PostId, UserId, VotePolarity};
use serde::{Deserialize, Serialize};

/// One voter's vote on one post. `id` is the store-assigned row id and
/// is absent while a locally-cast vote is still unconfirmed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    pub id: Option<String>,
    pub post_id: PostId,
    pub voter_id: UserId,
    pub polarity: VotePolarity,
}

impl Vote {
    pub fn new(post_id: PostId, voter_id: UserId, polarity: VotePolarity) -> Self {
        Self {
            id: None,
            post_id,
            voter_id,
            polarity,
        }
    }

    pub fn with_id(mut self, id: String) -> Self {
        self.id = Some(id);
        self
    }
}
