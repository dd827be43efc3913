use crate::application::ports::feed_source::{FeedRow, FeedSource};
use crate::application::ports::session::SessionProvider;
use crate::application::ports::vote_store::VoteStore;
use crate::domain::entities::{Post, Vote};
use crate::domain::feed::{sorter, tally, RankedPost};
use crate::domain::value_objects::{PostId, SortStrategy, UserId, VotePolarity};
use crate::shared::config::FeedConfig;
use crate::shared::error::{AppError, Result};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Resolution of a vote submission, as seen by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteOutcome {
    /// The store confirmed the write; `score` is the post's score with
    /// the confirmed vote applied.
    Confirmed { score: i64 },
    /// A newer vote for the same (post, voter) pair superseded this one
    /// while it was in flight. Its resolution was discarded and the
    /// feed reflects the newer vote.
    Superseded,
}

#[derive(Debug, Clone)]
struct PendingVote {
    seq: u64,
    /// What the store authoritatively holds for this (post, voter)
    /// pair: the vote in view when the oldest in-flight write for the
    /// pair was issued, updated as stale successes resolve. Restored
    /// on rollback.
    previous: Option<Vote>,
}

#[derive(Default)]
struct FeedState {
    posts: Vec<Arc<Post>>,
    votes: HashMap<PostId, HashMap<UserId, Vote>>,
    pending: HashMap<(PostId, UserId), PendingVote>,
    strategy: SortStrategy,
    next_seq: u64,
}

impl FeedState {
    fn score_of(&self, post_id: &PostId) -> i64 {
        self.votes
            .get(post_id)
            .map(|by_voter| tally::compute_score(by_voter.values()))
            .unwrap_or(0)
    }

    fn contains_post(&self, post_id: &PostId) -> bool {
        self.posts.iter().any(|post| post.id == *post_id)
    }
}

/// Holds the in-memory post/vote view and owns every mutation of it.
///
/// Votes are applied optimistically: the local view changes before the
/// remote write resolves, and rolls back if it fails. For one
/// (post, voter) pair, edits are ordered by a sequence number and only
/// the most recent edit's resolution may mutate state; a stale
/// response, success or failure, is dropped.
pub struct FeedService {
    source: Arc<dyn FeedSource>,
    votes: Arc<dyn VoteStore>,
    session: Arc<dyn SessionProvider>,
    state: Arc<RwLock<FeedState>>,
    page_limit: usize,
    write_timeout: Duration,
}

impl FeedService {
    pub fn new(
        source: Arc<dyn FeedSource>,
        votes: Arc<dyn VoteStore>,
        session: Arc<dyn SessionProvider>,
        config: FeedConfig,
    ) -> Self {
        Self {
            source,
            votes,
            session,
            state: Arc::new(RwLock::new(FeedState::default())),
            page_limit: config.page_limit,
            write_timeout: Duration::from_millis(config.vote_write_timeout_ms),
        }
    }

    /// Replaces the view with the front page from the store.
    pub async fn load_front_page(&self) -> Result<usize> {
        let rows = self.source.front_page().await?;
        Ok(self.install(rows).await)
    }

    /// Replaces the view with one subreddit's posts.
    pub async fn load_subreddit(&self, name: &str) -> Result<usize> {
        let rows = self.source.subreddit_feed(name).await?;
        Ok(self.install(rows).await)
    }

    async fn install(&self, rows: Vec<FeedRow>) -> usize {
        let mut posts = Vec::with_capacity(rows.len());
        let mut votes: HashMap<PostId, HashMap<UserId, Vote>> = HashMap::new();
        for row in rows.into_iter().take(self.page_limit) {
            let FeedRow {
                post,
                votes: post_votes,
            } = row;
            let by_voter = votes.entry(post.id.clone()).or_default();
            for vote in post_votes {
                by_voter.insert(vote.voter_id.clone(), vote);
            }
            posts.push(Arc::new(post));
        }

        let count = posts.len();
        let mut state = self.state.write().await;
        state.posts = posts;
        state.votes = votes;
        // An authoritative refresh supersedes whatever was in flight;
        // late resolutions will find no matching pending entry.
        state.pending.clear();
        debug!("installed feed view with {count} posts");
        count
    }

    pub async fn strategy(&self) -> SortStrategy {
        self.state.read().await.strategy
    }

    pub async fn set_strategy(&self, strategy: SortStrategy) {
        self.state.write().await.strategy = strategy;
    }

    /// The ordered, scored post list under the active strategy.
    ///
    /// Derived fresh on every call; the per-post `Arc`s are shared with
    /// previous snapshots, so identity per post id is stable across
    /// re-derivations.
    pub async fn snapshot(&self) -> Result<Vec<RankedPost>> {
        let viewer = self
            .session
            .current_session()
            .await?
            .map(|session| session.user_id);

        let state = self.state.read().await;
        let ranked: Vec<RankedPost> = state
            .posts
            .iter()
            .map(|post| {
                let by_voter = state.votes.get(&post.id);
                let score = by_voter
                    .map(|votes| tally::compute_score(votes.values()))
                    .unwrap_or(0);
                let viewer_vote = viewer.as_ref().and_then(|user_id| {
                    by_voter
                        .and_then(|votes| votes.get(user_id))
                        .map(|vote| vote.polarity)
                });
                RankedPost {
                    post: Arc::clone(post),
                    score,
                    viewer_vote,
                }
            })
            .collect();

        Ok(sorter::sort_ranked(&ranked, state.strategy))
    }

    /// Casts, flips, or retracts the signed-in user's vote on a post.
    ///
    /// Repeating the current polarity retracts the vote. The local view
    /// is updated before the remote write is issued and rolled back if
    /// the write fails or times out.
    pub async fn cast_vote(&self, post_id: &PostId, polarity: VotePolarity) -> Result<VoteOutcome> {
        let session = self.session.current_session().await?.ok_or_else(|| {
            AppError::Unauthenticated("voting requires a signed-in user".to_string())
        })?;
        let voter = session.user_id;
        let key = (post_id.clone(), voter.clone());

        // Optimistic apply: synchronous with respect to the view, no
        // await between reading the previous vote and writing the new
        // one.
        let (seq, previous, next) = {
            let mut state = self.state.write().await;
            if !state.contains_post(post_id) {
                return Err(AppError::NotFound(format!("post {post_id}")));
            }

            let seq = state.next_seq;
            state.next_seq += 1;

            let by_voter = state.votes.entry(post_id.clone()).or_default();
            let previous = by_voter.get(&voter).cloned();
            // Voting the same way twice retracts the vote.
            let next = match &previous {
                Some(vote) if vote.polarity == polarity => None,
                _ => Some(Vote::new(post_id.clone(), voter.clone(), polarity)),
            };
            match &next {
                Some(vote) => {
                    by_voter.insert(voter.clone(), vote.clone());
                }
                None => {
                    by_voter.remove(&voter);
                }
            }

            // Rollback must land on what the store holds, so a
            // superseding edit inherits the in-flight entry's
            // baseline instead of the live (possibly optimistic) view.
            let baseline = match state.pending.get(&key) {
                Some(in_flight) => in_flight.previous.clone(),
                None => previous.clone(),
            };
            state.pending.insert(
                key.clone(),
                PendingVote {
                    seq,
                    previous: baseline,
                },
            );
            (seq, previous, next)
        };

        let write = async {
            match (&previous, &next) {
                (Some(_), Some(vote)) => self.votes.update_vote(vote).await.map(Some),
                (None, Some(vote)) => self.votes.insert_vote(vote).await.map(Some),
                (Some(_), None) => self.votes.delete_vote(post_id, &voter).await.map(|_| None),
                (None, None) => Ok(None),
            }
        };
        let outcome = match tokio::time::timeout(self.write_timeout, write).await {
            Ok(result) => result,
            Err(_) => Err(AppError::RemoteWrite(format!(
                "vote write for post {post_id} timed out"
            ))),
        };

        let mut state = self.state.write().await;
        let resolved = match state.pending.remove(&key) {
            Some(pending) if pending.seq == seq => pending,
            Some(mut newer) => {
                // A later edit owns this key. Fold what the store now
                // holds into its rollback baseline, then drop this
                // resolution on the floor.
                if let Ok(confirmed) = &outcome {
                    newer.previous = confirmed.clone();
                }
                state.pending.insert(key, newer);
                return Ok(VoteOutcome::Superseded);
            }
            None => return Ok(VoteOutcome::Superseded),
        };

        match outcome {
            Ok(confirmed) => {
                // Adopt the store-assigned row id for the confirmed vote.
                if let Some(vote) = confirmed {
                    if let Some(local) = state
                        .votes
                        .get_mut(post_id)
                        .and_then(|by_voter| by_voter.get_mut(&voter))
                    {
                        if local.polarity == vote.polarity {
                            local.id = vote.id;
                        }
                    }
                }
                Ok(VoteOutcome::Confirmed {
                    score: state.score_of(post_id),
                })
            }
            Err(err) => {
                warn!("vote write for post {post_id} failed, rolling back: {err}");
                let by_voter = state.votes.entry(post_id.clone()).or_default();
                match resolved.previous {
                    Some(vote) => {
                        by_voter.insert(voter, vote);
                    }
                    None => {
                        by_voter.remove(&voter);
                    }
                }
                Err(err)
            }
        }
    }
}
