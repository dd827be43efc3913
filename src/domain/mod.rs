pub mod entities;
pub mod feed;
pub mod value_objects;

pub use entities::{Comment, Post, Profile, Subreddit, Vote};
pub use feed::RankedPost;
pub use value_objects::{
    CommentId, PostId, SortStrategy, SubredditId, UserId, Username, VotePolarity,
};
