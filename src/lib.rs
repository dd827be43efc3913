//! Client core for a link-aggregation app: derives post scores from
//! vote rows, ranks feeds by recency or score, and applies votes
//! optimistically with rollback when the remote write fails.
//!
//! Persistence and authentication stay behind the port traits in
//! [`application::ports`]; the page-rendering layer sits on top of the
//! services in [`application::services`].

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

#[cfg(test)]
pub mod test_support;

pub use application::ports::{FeedRow, ProfilePage, Session};
pub use application::services::{
    AuthService, CommentService, FeedService, ProfileService, ProfileView, SubredditService,
    VoteOutcome,
};
pub use domain::{
    Comment, CommentId, Post, PostId, Profile, RankedPost, SortStrategy, Subreddit, SubredditId,
    UserId, Username, Vote, VotePolarity,
};
pub use shared::{AppError, FeedConfig, Result};

/// Installs the crate's tracing subscriber, honoring `RUST_LOG`.
pub fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "redfeed=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
