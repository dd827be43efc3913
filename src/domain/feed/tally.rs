use crate::domain::entities::Vote;

/// Net score of a post: upvotes minus downvotes.
///
/// Pure fold over the vote collection, so recomputation is idempotent
/// and the input ordering never matters. An empty collection scores 0.
pub fn compute_score<'a, I>(votes: I) -> i64
where
    I: IntoIterator<Item = &'a Vote>,
{
    votes.into_iter().map(|vote| vote.polarity.delta()).sum()
}
