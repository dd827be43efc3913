pub mod auth_service;
pub mod comment_service;
pub mod feed_service;
pub mod profile_service;
pub mod subreddit_service;

pub use auth_service::AuthService;
pub use comment_service::CommentService;
pub use feed_service::{FeedService, VoteOutcome};
pub use profile_service::{ProfileService, ProfileView};
pub use subreddit_service::SubredditService;
