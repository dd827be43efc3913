use crate::domain::value_objects::SubredditId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subreddit {
    pub id: SubredditId,
    pub name: String,
}

impl Subreddit {
    pub fn new(id: SubredditId, name: String) -> Self {
        Self { id, name }
    }
}
