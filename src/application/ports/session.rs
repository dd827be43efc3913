use crate::domain::value_objects::UserId;
use crate::shared::error::AppError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The signed-in identity as reported by the auth collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: UserId,
}

impl Session {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

/// External authentication collaborator. Token handling, refresh and
/// the sign-in flow itself all live on the other side of this trait.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn current_session(&self) -> Result<Option<Session>, AppError>;

    async fn sign_out(&self) -> Result<(), AppError>;
}
