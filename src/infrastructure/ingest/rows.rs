//! Mapping of loosely-typed datastore rows into domain entities.
//!
//! The store hands back dynamically shaped JSON (`serde_json::Value`).
//! Everything is validated here, at the boundary, so the rest of the
//! crate only ever sees typed entities; malformed rows are rejected
//! with `InvalidData` instead of propagating loose objects.

use crate::application::ports::feed_source::FeedRow;
use crate::application::ports::profile_store::ProfilePage;
use crate::domain::entities::{Comment, Post, Profile, Subreddit, Vote};
use crate::domain::value_objects::{
    CommentId, PostId, SubredditId, UserId, Username, VotePolarity,
};
use crate::shared::error::{AppError, Result};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// A post row with its nested `post_votes`, `user`, `comments` and
/// `subreddit` relations.
pub fn post_from_row(value: &Value) -> Result<FeedRow> {
    let row = object(value, "post")?;
    let id = PostId::new(id_field(row, "id")?).map_err(AppError::InvalidData)?;
    let title = str_field(row, "title")?.to_string();
    let created_at = timestamp_field(row, "created_at")?;
    let author = profile_from_row(field(row, "user")?)?;
    let subreddit = subreddit_from_row(field(row, "subreddit")?)?;
    let comment_count = nested_rows(row, "comments").len();

    let mut votes = Vec::new();
    for vote_row in nested_rows(row, "post_votes") {
        votes.push(vote_from_row(vote_row)?);
    }

    let post = Post::new(id, title, author, subreddit, created_at)
        .with_comment_count(comment_count);
    Ok(FeedRow::new(post, votes))
}

/// A profile row with its nested `posts` and `comments` relations, as
/// the store returns it for the public profile page.
pub fn profile_page_from_row(value: &Value) -> Result<ProfilePage> {
    let row = object(value, "profile")?;
    let profile = profile_from_row(value)?;

    let mut posts = Vec::new();
    for post_row in nested_rows(row, "posts") {
        posts.push(post_from_row(post_row)?);
    }
    let mut comments = Vec::new();
    for comment_row in nested_rows(row, "comments") {
        comments.push(comment_from_row(comment_row)?);
    }

    Ok(ProfilePage {
        profile,
        posts,
        comments,
    })
}

pub fn vote_from_row(value: &Value) -> Result<Vote> {
    let row = object(value, "vote")?;
    let post_id = PostId::new(id_field(row, "post_id")?).map_err(AppError::InvalidData)?;
    let voter_id = UserId::new(id_field(row, "user_id")?).map_err(AppError::InvalidData)?;
    let polarity = VotePolarity::from_is_upvote(bool_field(row, "is_upvote")?);

    let vote = Vote::new(post_id, voter_id, polarity);
    Ok(match row.get("id").filter(|value| !value.is_null()) {
        Some(_) => vote.with_id(id_field(row, "id")?),
        None => vote,
    })
}

pub fn comment_from_row(value: &Value) -> Result<Comment> {
    let row = object(value, "comment")?;
    let id = CommentId::new(id_field(row, "id")?).map_err(AppError::InvalidData)?;
    let author = profile_from_row(field(row, "user")?)?;
    let body = str_field(row, "text")?.to_string();
    let updated_at = timestamp_field(row, "updated_at")?;

    let comment = Comment::new(id, author, body, updated_at);
    Ok(match row.get("post_id") {
        Some(Value::Null) | None => comment,
        Some(_) => {
            let post_id =
                PostId::new(id_field(row, "post_id")?).map_err(AppError::InvalidData)?;
            comment.on_post(post_id)
        }
    })
}

pub fn profile_from_row(value: &Value) -> Result<Profile> {
    let row = object(value, "profile")?;
    let id = UserId::new(id_field(row, "id")?).map_err(AppError::InvalidData)?;
    let username =
        Username::new(str_field(row, "username")?.to_string()).map_err(AppError::InvalidData)?;

    let mut profile = Profile::new(id, username);
    if let Some(value) = row.get("updated_at").filter(|v| !v.is_null()) {
        profile.updated_at = Some(parse_timestamp(value, "updated_at")?);
    }
    Ok(profile)
}

pub fn subreddit_from_row(value: &Value) -> Result<Subreddit> {
    let row = object(value, "subreddit")?;
    let id = SubredditId::new(id_field(row, "id")?).map_err(AppError::InvalidData)?;
    let name = str_field(row, "name")?.to_string();
    Ok(Subreddit::new(id, name))
}

fn object<'a>(value: &'a Value, what: &str) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| AppError::InvalidData(format!("{what} row is not an object")))
}

fn field<'a>(row: &'a Map<String, Value>, name: &str) -> Result<&'a Value> {
    row.get(name)
        .filter(|value| !value.is_null())
        .ok_or_else(|| AppError::InvalidData(format!("missing field `{name}`")))
}

/// Ids arrive as strings (uuid columns) or integers (serial columns);
/// both normalize to a string.
fn id_field(row: &Map<String, Value>, name: &str) -> Result<String> {
    match field(row, name)? {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(AppError::InvalidData(format!(
            "field `{name}` is not an id"
        ))),
    }
}

fn str_field<'a>(row: &'a Map<String, Value>, name: &str) -> Result<&'a str> {
    field(row, name)?
        .as_str()
        .ok_or_else(|| AppError::InvalidData(format!("field `{name}` is not a string")))
}

fn bool_field(row: &Map<String, Value>, name: &str) -> Result<bool> {
    field(row, name)?
        .as_bool()
        .ok_or_else(|| AppError::InvalidData(format!("field `{name}` is not a boolean")))
}

fn timestamp_field(row: &Map<String, Value>, name: &str) -> Result<DateTime<Utc>> {
    parse_timestamp(field(row, name)?, name)
}

fn parse_timestamp(value: &Value, name: &str) -> Result<DateTime<Utc>> {
    let raw = value
        .as_str()
        .ok_or_else(|| AppError::InvalidData(format!("field `{name}` is not a timestamp")))?;
    DateTime::parse_from_rfc3339(raw)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|err| AppError::InvalidData(format!("field `{name}`: {err}")))
}

/// Nested relation arrays may be omitted entirely when the select did
/// not ask for them; that reads as empty, not malformed.
fn nested_rows<'a>(row: &'a Map<String, Value>, name: &str) -> &'a [Value] {
    row.get(name)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
