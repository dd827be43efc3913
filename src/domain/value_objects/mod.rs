pub mod comment_id;
pub mod post_id;
pub mod sort_strategy;
pub mod subreddit_id;
pub mod user_id;
pub mod username;
pub mod vote_polarity;

pub use comment_id::CommentId;
pub use post_id::PostId;
pub use sort_strategy::SortStrategy;
pub use subreddit_id::SubredditId;
pub use user_id::UserId;
pub use username::Username;
pub use vote_polarity::VotePolarity;
