pub mod ports;
pub mod services;

pub use services::{AuthService, CommentService, FeedService, ProfileService, SubredditService};
