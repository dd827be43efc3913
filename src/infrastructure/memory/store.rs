use crate::application::ports::comment_store::CommentStore;
use crate::application::ports::feed_source::{FeedRow, FeedSource};
use crate::application::ports::profile_store::{ProfilePage, ProfileStore};
use crate::application::ports::session::{Session, SessionProvider};
use crate::application::ports::vote_store::VoteStore;
use crate::domain::entities::{Comment, Profile, Subreddit, Vote};
use crate::domain::value_objects::{CommentId, PostId, UserId, Username};
use crate::shared::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct MemoryData {
    subreddits: Vec<Subreddit>,
    rows: Vec<FeedRow>,
    profiles: Vec<Profile>,
    comments: Vec<Comment>,
    session: Option<Session>,
    fail_writes: bool,
}

/// Backend holding everything in memory, implementing all the external
/// ports. Used by the test suite and by embedders that want the full
/// pipeline without a live platform behind it.
#[derive(Default)]
pub struct MemoryBackend {
    inner: RwLock<MemoryData>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn seed_subreddit(&self, subreddit: Subreddit) {
        self.inner.write().await.subreddits.push(subreddit);
    }

    pub async fn seed_row(&self, row: FeedRow) {
        let mut data = self.inner.write().await;
        if !data
            .subreddits
            .iter()
            .any(|s| s.id == row.post.subreddit.id)
        {
            data.subreddits.push(row.post.subreddit.clone());
        }
        data.rows.push(row);
    }

    pub async fn seed_profile(&self, profile: Profile) {
        self.inner.write().await.profiles.push(profile);
    }

    pub async fn seed_comment(&self, comment: Comment) {
        self.inner.write().await.comments.push(comment);
    }

    pub async fn sign_in(&self, session: Session) {
        self.inner.write().await.session = Some(session);
    }

    /// Makes every subsequent write fail with `RemoteWrite`, for
    /// exercising rollback paths.
    pub async fn set_fail_writes(&self, fail: bool) {
        self.inner.write().await.fail_writes = fail;
    }

    fn write_guard(data: &MemoryData, what: &str) -> Result<(), AppError> {
        if data.fail_writes {
            return Err(AppError::RemoteWrite(format!("{what}: store unavailable")));
        }
        Ok(())
    }
}

#[async_trait]
impl FeedSource for MemoryBackend {
    async fn front_page(&self) -> Result<Vec<FeedRow>, AppError> {
        let data = self.inner.read().await;
        let mut rows = data.rows.clone();
        rows.sort_by(|a, b| b.post.created_at.cmp(&a.post.created_at));
        Ok(rows)
    }

    async fn subreddit_feed(&self, name: &str) -> Result<Vec<FeedRow>, AppError> {
        let data = self.inner.read().await;
        if !data.subreddits.iter().any(|s| s.name == name) {
            return Err(AppError::NotFound(format!("subreddit {name}")));
        }
        let mut rows: Vec<FeedRow> = data
            .rows
            .iter()
            .filter(|row| row.post.subreddit.name == name)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.post.created_at.cmp(&a.post.created_at));
        Ok(rows)
    }

    async fn subreddits(&self) -> Result<Vec<Subreddit>, AppError> {
        Ok(self.inner.read().await.subreddits.clone())
    }
}

#[async_trait]
impl VoteStore for MemoryBackend {
    async fn insert_vote(&self, vote: &Vote) -> Result<Vote, AppError> {
        let mut data = self.inner.write().await;
        Self::write_guard(&data, "insert vote")?;
        let row = data
            .rows
            .iter_mut()
            .find(|row| row.post.id == vote.post_id)
            .ok_or_else(|| AppError::NotFound(format!("post {}", vote.post_id)))?;
        let stored = vote.clone().with_id(Uuid::new_v4().to_string());
        row.votes.retain(|v| v.voter_id != vote.voter_id);
        row.votes.push(stored.clone());
        Ok(stored)
    }

    async fn update_vote(&self, vote: &Vote) -> Result<Vote, AppError> {
        let mut data = self.inner.write().await;
        Self::write_guard(&data, "update vote")?;
        let row = data
            .rows
            .iter_mut()
            .find(|row| row.post.id == vote.post_id)
            .ok_or_else(|| AppError::NotFound(format!("post {}", vote.post_id)))?;
        let existing = row
            .votes
            .iter_mut()
            .find(|v| v.voter_id == vote.voter_id)
            .ok_or_else(|| {
                AppError::NotFound(format!("vote by {} on {}", vote.voter_id, vote.post_id))
            })?;
        existing.polarity = vote.polarity;
        Ok(existing.clone())
    }

    async fn delete_vote(&self, post_id: &PostId, voter_id: &UserId) -> Result<(), AppError> {
        let mut data = self.inner.write().await;
        Self::write_guard(&data, "delete vote")?;
        let row = data
            .rows
            .iter_mut()
            .find(|row| row.post.id == *post_id)
            .ok_or_else(|| AppError::NotFound(format!("post {post_id}")))?;
        row.votes.retain(|v| v.voter_id != *voter_id);
        Ok(())
    }
}

#[async_trait]
impl SessionProvider for MemoryBackend {
    async fn current_session(&self) -> Result<Option<Session>, AppError> {
        Ok(self.inner.read().await.session.clone())
    }

    async fn sign_out(&self) -> Result<(), AppError> {
        let mut data = self.inner.write().await;
        Self::write_guard(&data, "sign out")?;
        data.session = None;
        Ok(())
    }
}

#[async_trait]
impl ProfileStore for MemoryBackend {
    async fn profile_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<ProfilePage>, AppError> {
        let data = self.inner.read().await;
        let profile = match data.profiles.iter().find(|p| p.username == *username) {
            Some(profile) => profile.clone(),
            None => return Ok(None),
        };
        let posts: Vec<FeedRow> = data
            .rows
            .iter()
            .filter(|row| row.post.author.id == profile.id)
            .cloned()
            .collect();
        let comments: Vec<Comment> = data
            .comments
            .iter()
            .filter(|comment| comment.author.id == profile.id)
            .cloned()
            .collect();
        Ok(Some(ProfilePage {
            profile,
            posts,
            comments,
        }))
    }

    async fn profile_by_id(&self, id: &UserId) -> Result<Option<Profile>, AppError> {
        let data = self.inner.read().await;
        Ok(data.profiles.iter().find(|p| p.id == *id).cloned())
    }

    async fn update_username(
        &self,
        id: &UserId,
        username: &Username,
        updated_at: DateTime<Utc>,
    ) -> Result<Profile, AppError> {
        let mut data = self.inner.write().await;
        Self::write_guard(&data, "update username")?;
        let profile = data
            .profiles
            .iter_mut()
            .find(|p| p.id == *id)
            .ok_or_else(|| AppError::NotFound(format!("profile for user {id}")))?;
        profile.rename(username.clone(), updated_at);
        Ok(profile.clone())
    }
}

#[async_trait]
impl CommentStore for MemoryBackend {
    async fn get_comment(&self, id: &CommentId) -> Result<Option<Comment>, AppError> {
        let data = self.inner.read().await;
        Ok(data.comments.iter().find(|c| c.id == *id).cloned())
    }

    async fn delete_comment(&self, id: &CommentId) -> Result<(), AppError> {
        let mut data = self.inner.write().await;
        Self::write_guard(&data, "delete comment")?;
        data.comments.retain(|c| c.id != *id);
        Ok(())
    }
}
