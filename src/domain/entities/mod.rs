pub mod comment;
pub mod post;
pub mod profile;
pub mod subreddit;
pub mod vote;

pub use comment::Comment;
pub use post::Post;
pub use profile::Profile;
pub use subreddit::Subreddit;
pub use vote::Vote;
