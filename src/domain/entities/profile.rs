use crate::domain::value_objects::{UserId, Username};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: UserId,
    pub username: Username,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Profile {
    pub fn new(id: UserId, username: Username) -> Self {
        Self {
            id,
            username,
            updated_at: None,
        }
    }

    pub fn rename(&mut self, username: Username, at: DateTime<Utc>) {
        self.username = username;
        self.updated_at = Some(at);
    }
}
