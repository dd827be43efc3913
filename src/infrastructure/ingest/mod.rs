pub mod rows;

pub use rows::{
    comment_from_row, post_from_row, profile_from_row, profile_page_from_row, subreddit_from_row,
    vote_from_row,
};
