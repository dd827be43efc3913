use crate::application::ports::session::{Session, SessionProvider};
use crate::shared::error::AppError;
use std::sync::Arc;
use tracing::info;

/// Session-aware chrome: who is signed in, and signing out.
pub struct AuthService {
    session: Arc<dyn SessionProvider>,
}

impl AuthService {
    pub fn new(session: Arc<dyn SessionProvider>) -> Self {
        Self { session }
    }

    pub async fn current_session(&self) -> Result<Option<Session>, AppError> {
        self.session.current_session().await
    }

    /// Forwards to the auth collaborator. A provider failure leaves the
    /// session as it was and is recoverable.
    pub async fn sign_out(&self) -> Result<(), AppError> {
        self.session.sign_out().await?;
        info!("user signed out");
        Ok(())
    }
}
