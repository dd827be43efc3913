use crate::application::ports::feed_source::FeedRow;
use crate::application::ports::profile_store::ProfileStore;
use crate::application::ports::session::SessionProvider;
use crate::domain::entities::{Comment, Profile};
use crate::domain::feed::{sorter, tally, RankedPost};
use crate::domain::value_objects::{SortStrategy, Username};
use crate::shared::error::{AppError, Result};
use chrono::Utc;
use std::sync::Arc;

/// A user's public profile page: their posts (scored, newest first) and
/// their comments.
#[derive(Debug, Clone)]
pub struct ProfileView {
    pub profile: Profile,
    pub posts: Vec<RankedPost>,
    pub comments: Vec<Comment>,
}

pub struct ProfileService {
    store: Arc<dyn ProfileStore>,
    session: Arc<dyn SessionProvider>,
}

impl ProfileService {
    pub fn new(store: Arc<dyn ProfileStore>, session: Arc<dyn SessionProvider>) -> Self {
        Self { store, session }
    }

    pub async fn profile_page(&self, username: &str) -> Result<ProfileView> {
        let username = Username::parse(username).map_err(AppError::Validation)?;
        let page = self
            .store
            .profile_by_username(&username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("profile {username}")))?;

        Ok(ProfileView {
            profile: page.profile,
            posts: rank_rows(page.posts),
            comments: page.comments,
        })
    }

    /// The signed-in user's own profile, for the account page.
    pub async fn current_profile(&self) -> Result<Profile> {
        let session = self.session.current_session().await?.ok_or_else(|| {
            AppError::Unauthenticated("the account page requires a signed-in user".to_string())
        })?;
        self.store
            .profile_by_id(&session.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("profile for user {}", session.user_id)))
    }

    /// Renames the signed-in user, stamping `updated_at`.
    pub async fn update_username(&self, username: &str) -> Result<Profile> {
        let session = self.session.current_session().await?.ok_or_else(|| {
            AppError::Unauthenticated("updating a profile requires a signed-in user".to_string())
        })?;
        let username = Username::parse(username).map_err(AppError::Validation)?;
        self.store
            .update_username(&session.user_id, &username, Utc::now())
            .await
    }
}

fn rank_rows(rows: Vec<FeedRow>) -> Vec<RankedPost> {
    let ranked: Vec<RankedPost> = rows
        .into_iter()
        .map(|row| {
            let score = tally::compute_score(&row.votes);
            RankedPost {
                post: Arc::new(row.post),
                score,
                viewer_vote: None,
            }
        })
        .collect();
    sorter::sort_ranked(&ranked, SortStrategy::Recency)
}
