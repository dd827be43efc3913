//! Fixtures shared by the service and backend tests.

use crate::application::ports::feed_source::FeedRow;
use crate::domain::entities::{Comment, Post, Profile, Subreddit, Vote};
use crate::domain::value_objects::{
    CommentId, PostId, SubredditId, UserId, Username, VotePolarity,
};
use chrono::{Duration, TimeZone, Utc};

pub fn profile(id: &str, name: &str) -> Profile {
    Profile::new(
        UserId::new(id.into()).unwrap(),
        Username::new(name.into()).unwrap(),
    )
}

pub fn vote(post: &str, voter: &str, polarity: VotePolarity) -> Vote {
    Vote::new(
        PostId::new(post.into()).unwrap(),
        UserId::new(voter.into()).unwrap(),
        polarity,
    )
}

pub fn row(id: &str, author: &Profile, created_offset_secs: i64, votes: Vec<Vote>) -> FeedRow {
    let t0 = Utc.with_ymd_and_hms(2023, 3, 1, 12, 0, 0).unwrap();
    let subreddit = Subreddit::new(SubredditId::new("s1".into()).unwrap(), "rust".into());
    let post = Post::new(
        PostId::new(id.into()).unwrap(),
        format!("post {id}"),
        author.clone(),
        subreddit,
        t0 + Duration::seconds(created_offset_secs),
    );
    FeedRow::new(post, votes)
}

pub fn comment(id: &str, author: Profile, body: &str) -> Comment {
    let t0 = Utc.with_ymd_and_hms(2023, 3, 1, 14, 0, 0).unwrap();
    Comment::new(CommentId::new(id.into()).unwrap(), author, body.into(), t0)
}
