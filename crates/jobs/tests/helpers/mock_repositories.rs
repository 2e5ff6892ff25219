#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use visitor_counter_application::ports::{SystemClock, VisitRepository};
use visitor_counter_application::use_cases::PurgeStaleVisitsUseCase;
use visitor_counter_domain::DomainError;

pub struct MockVisitRepository {
    visits: Arc<RwLock<Vec<(DateTime<Utc>, String)>>>,
    purge_calls: AtomicU64,
    should_fail: Arc<RwLock<bool>>,
}

impl MockVisitRepository {
    pub fn new() -> Self {
        Self {
            visits: Arc::new(RwLock::new(Vec::new())),
            purge_calls: AtomicU64::new(0),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn add_recent_visit(&self, client: &str) {
        self.visits
            .write()
            .await
            .push((Utc::now() - Duration::minutes(1), client.to_string()));
    }

    pub async fn add_old_visit(&self, client: &str, days_ago: i64) {
        self.visits
            .write()
            .await
            .push((Utc::now() - Duration::days(days_ago), client.to_string()));
    }

    pub async fn count(&self) -> usize {
        self.visits.read().await.len()
    }

    pub fn purge_call_count(&self) -> u64 {
        self.purge_calls.load(Ordering::Relaxed)
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }
}

#[async_trait]
impl VisitRepository for MockVisitRepository {
    async fn record(&self, client_identifier: &str) -> Result<(), DomainError> {
        self.visits
            .write()
            .await
            .push((Utc::now(), client_identifier.to_string()));
        Ok(())
    }

    async fn count_since(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError> {
        Ok(self
            .visits
            .read()
            .await
            .iter()
            .filter(|(ts, _)| *ts > cutoff)
            .count() as u64)
    }

    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError> {
        self.purge_calls.fetch_add(1, Ordering::Relaxed);
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError("database is locked".to_string()));
        }
        let mut visits = self.visits.write().await;
        let before = visits.len();
        visits.retain(|(ts, _)| *ts >= cutoff);
        Ok((before - visits.len()) as u64)
    }
}

pub fn make_purge_use_case(repo: Arc<MockVisitRepository>) -> Arc<PurgeStaleVisitsUseCase> {
    Arc::new(PurgeStaleVisitsUseCase::new(
        repo,
        Arc::new(SystemClock),
        Duration::days(30),
    ))
}
