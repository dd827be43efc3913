pub mod sorter;
pub mod tally;

use crate::domain::entities::Post;
use crate::domain::value_objects::VotePolarity;
use std::sync::Arc;

/// A post paired with its derived score, ready for rendering.
///
/// The post sits behind an `Arc` so that re-deriving or re-sorting the
/// feed hands out the same allocation per post id; per-post state held
/// by a caller keyed on identity survives reordering.
#[derive(Debug, Clone)]
pub struct RankedPost {
    pub post: Arc<Post>,
    pub score: i64,
    /// The viewing user's own vote, when a session is present.
    pub viewer_vote: Option<VotePolarity>,
}
