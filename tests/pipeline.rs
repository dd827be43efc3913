//! End-to-end pipeline: JSON rows in, ranked scored feed out, with
//! optimistic votes against the in-memory backend.

use redfeed::infrastructure::ingest;
use redfeed::infrastructure::memory::MemoryBackend;
use redfeed::{
    AppError, FeedConfig, FeedService, PostId, Session, SortStrategy, SubredditService, UserId,
    VoteOutcome, VotePolarity,
};
use serde_json::json;
use std::sync::Arc;

fn sample_rows() -> Vec<serde_json::Value> {
    vec![
        json!({
            "id": 1,
            "title": "Older post, net one upvote",
            "created_at": "2023-03-01T12:00:00+00:00",
            "user": { "id": "u1", "username": "alice" },
            "subreddit": { "id": 1, "name": "rust" },
            "comments": [],
            "post_votes": [
                { "id": 1, "post_id": 1, "user_id": "a", "is_upvote": true },
                { "id": 2, "post_id": 1, "user_id": "b", "is_upvote": true },
                { "id": 3, "post_id": 1, "user_id": "c", "is_upvote": false }
            ]
        }),
        json!({
            "id": 2,
            "title": "Newer post, one upvote",
            "created_at": "2023-03-01T12:01:00+00:00",
            "user": { "id": "u2", "username": "bob" },
            "subreddit": { "id": 1, "name": "rust" },
            "comments": [],
            "post_votes": [
                { "id": 4, "post_id": 2, "user_id": "a", "is_upvote": true }
            ]
        }),
    ]
}

async fn seeded_backend() -> Arc<MemoryBackend> {
    let backend = Arc::new(MemoryBackend::new());
    for value in sample_rows() {
        let row = ingest::post_from_row(&value).expect("sample row maps cleanly");
        backend.seed_row(row).await;
    }
    backend
}

fn feed_service(backend: &Arc<MemoryBackend>) -> FeedService {
    FeedService::new(
        backend.clone(),
        backend.clone(),
        backend.clone(),
        FeedConfig::default(),
    )
}

#[tokio::test]
async fn ranked_feed_matches_the_reference_scenario() {
    let backend = seeded_backend().await;
    let service = feed_service(&backend);
    service.load_front_page().await.unwrap();

    // Recency: the newer post leads.
    let by_recency = service.snapshot().await.unwrap();
    assert_eq!(by_recency[0].post.id.as_str(), "2");
    assert_eq!(by_recency[1].post.id.as_str(), "1");

    // Score: both score 1, so input (insertion) order holds.
    service.set_strategy(SortStrategy::Score).await;
    let by_score = service.snapshot().await.unwrap();
    assert_eq!(by_score[0].post.id.as_str(), "1");
    assert_eq!(by_score[0].score, 1);
    assert_eq!(by_score[1].post.id.as_str(), "2");
    assert_eq!(by_score[1].score, 1);
}

#[tokio::test]
async fn confirmed_vote_agrees_with_a_fresh_authoritative_load() {
    let backend = seeded_backend().await;
    let service = feed_service(&backend);
    service.load_front_page().await.unwrap();
    backend
        .sign_in(Session::new(UserId::new("viewer".into()).unwrap()))
        .await;

    let post = PostId::new("1".into()).unwrap();
    let outcome = service.cast_vote(&post, VotePolarity::Up).await.unwrap();
    assert_eq!(outcome, VoteOutcome::Confirmed { score: 2 });

    // Reloading from the store must converge to the same score.
    service.load_front_page().await.unwrap();
    let snapshot = service.snapshot().await.unwrap();
    let reloaded = snapshot
        .iter()
        .find(|p| p.post.id == post)
        .expect("post still present");
    assert_eq!(reloaded.score, 2);
    assert_eq!(reloaded.viewer_vote, Some(VotePolarity::Up));
}

#[tokio::test]
async fn rejected_vote_leaves_the_authoritative_view_intact() {
    let backend = seeded_backend().await;
    let service = feed_service(&backend);
    service.load_front_page().await.unwrap();
    backend
        .sign_in(Session::new(UserId::new("viewer".into()).unwrap()))
        .await;
    backend.set_fail_writes(true).await;

    let post = PostId::new("2".into()).unwrap();
    let err = service.cast_vote(&post, VotePolarity::Down).await.unwrap_err();
    assert!(matches!(err, AppError::RemoteWrite(_)));

    let snapshot = service.snapshot().await.unwrap();
    let unchanged = snapshot.iter().find(|p| p.post.id == post).unwrap();
    assert_eq!(unchanged.score, 1);
    assert_eq!(unchanged.viewer_vote, None);
}

#[tokio::test]
async fn subreddit_directory_and_feed() {
    let backend = seeded_backend().await;

    let directory = SubredditService::new(backend.clone());
    let subreddits = directory.list_subreddits().await.unwrap();
    assert_eq!(subreddits.len(), 1);
    assert_eq!(subreddits[0].name, "rust");

    let service = feed_service(&backend);
    assert_eq!(service.load_subreddit("rust").await.unwrap(), 2);
    let err = service.load_subreddit("cooking").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}
