use super::RankedPost;
use crate::domain::value_objects::SortStrategy;

/// Orders a feed by the given strategy without touching the input.
///
/// Both strategies sort descending and rely on a stable sort: posts
/// with equal keys keep their relative input order. That stability is a
/// correctness requirement, not a performance choice.
pub fn sort_ranked(posts: &[RankedPost], strategy: SortStrategy) -> Vec<RankedPost> {
    let mut ordered = posts.to_vec();
    match strategy {
        SortStrategy::Recency => {
            ordered.sort_by(|a, b| b.post.created_at.cmp(&a.post.created_at));
        }
        SortStrategy::Score => {
            ordered.sort_by(|a, b| b.score.cmp(&a.score));
        }
    }
    ordered
}
