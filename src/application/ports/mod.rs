pub mod comment_store;
pub mod feed_source;
pub mod profile_store;
pub mod session;
pub mod vote_store;

pub use comment_store::CommentStore;
pub use feed_source::{FeedRow, FeedSource};
pub use profile_store::{ProfilePage, ProfileStore};
pub use session::{Session, SessionProvider};
pub use vote_store::VoteStore;
