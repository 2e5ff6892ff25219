use std::sync::Arc;
use tokio::time::{sleep, Duration};
use tokio_util::sync::CancellationToken;
use visitor_counter_jobs::{JobRunner, VisitRetentionJob};

mod helpers;
use helpers::{make_purge_use_case, MockVisitRepository};

#[tokio::test]
async fn test_job_runner_empty_starts_cleanly() {
    let started = JobRunner::new().start().await;
    assert_eq!(started, 0);
}

#[tokio::test]
async fn test_job_runner_with_visit_retention() {
    let repo = Arc::new(MockVisitRepository::new());
    repo.add_old_visit("192.168.1.50", 60).await;
    repo.add_recent_visit("192.168.1.51").await;

    let job = VisitRetentionJob::new(make_purge_use_case(repo.clone()));
    let started = JobRunner::new().with_visit_retention(job).start().await;
    sleep(Duration::from_millis(50)).await;

    assert_eq!(started, 1);
    assert_eq!(repo.count().await, 1);
}

#[tokio::test]
async fn test_job_runner_shutdown_token_reaches_jobs() {
    let repo = Arc::new(MockVisitRepository::new());
    let token = CancellationToken::new();

    let job = VisitRetentionJob::new(make_purge_use_case(repo.clone())).with_interval(1);
    JobRunner::new()
        .with_visit_retention(job)
        .with_shutdown_token(token.clone())
        .start()
        .await;
    sleep(Duration::from_millis(50)).await;
    assert_eq!(repo.purge_call_count(), 1);

    token.cancel();
    sleep(Duration::from_millis(1200)).await;

    assert_eq!(repo.purge_call_count(), 1, "Cancelled job must stop ticking");
}
