#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;
use visitor_counter_application::ports::{Clock, JobRegistry, SchemaManager, VisitRepository};
use visitor_counter_domain::{DomainError, ScheduledJob};

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

#[derive(Debug, Clone)]
pub struct StoredVisit {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub client_identifier: String,
}

pub struct MockVisitRepository {
    clock: Arc<FixedClock>,
    visits: Arc<RwLock<Vec<StoredVisit>>>,
    next_id: AtomicU64,
    should_fail: Arc<RwLock<bool>>,
    count_calls: AtomicU64,
}

impl MockVisitRepository {
    pub fn new(clock: Arc<FixedClock>) -> Self {
        Self {
            clock,
            visits: Arc::new(RwLock::new(Vec::new())),
            next_id: AtomicU64::new(1),
            should_fail: Arc::new(RwLock::new(false)),
            count_calls: AtomicU64::new(0),
        }
    }

    pub async fn add_visit_at(&self, timestamp: DateTime<Utc>, client: &str) {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) as i64;
        self.visits.write().await.push(StoredVisit {
            id,
            timestamp,
            client_identifier: client.to_string(),
        });
    }

    pub async fn add_visit_ago(&self, age: Duration, client: &str) {
        let ts = self.clock.now() - age;
        self.add_visit_at(ts, client).await;
    }

    pub async fn count(&self) -> usize {
        self.visits.read().await.len()
    }

    pub async fn all(&self) -> Vec<StoredVisit> {
        self.visits.read().await.clone()
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }

    pub fn count_calls(&self) -> u64 {
        self.count_calls.load(Ordering::Relaxed)
    }

    async fn check_failure(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError("connection lost".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl VisitRepository for MockVisitRepository {
    async fn record(&self, client_identifier: &str) -> Result<(), DomainError> {
        self.check_failure().await?;
        let now = self.clock.now();
        self.add_visit_at(now, client_identifier).await;
        Ok(())
    }

    async fn count_since(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError> {
        self.count_calls.fetch_add(1, Ordering::Relaxed);
        self.check_failure().await?;
        Ok(self
            .visits
            .read()
            .await
            .iter()
            .filter(|v| v.timestamp > cutoff)
            .count() as u64)
    }

    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError> {
        self.check_failure().await?;
        let mut visits = self.visits.write().await;
        let before = visits.len();
        visits.retain(|v| v.timestamp >= cutoff);
        Ok((before - visits.len()) as u64)
    }
}

pub struct MockSchemaManager {
    exists: Arc<RwLock<bool>>,
    create_calls: AtomicU64,
    should_fail: Arc<RwLock<bool>>,
}

impl MockSchemaManager {
    pub fn new() -> Self {
        Self {
            exists: Arc::new(RwLock::new(false)),
            create_calls: AtomicU64::new(0),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub fn create_calls(&self) -> u64 {
        self.create_calls.load(Ordering::Relaxed)
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }
}

#[async_trait]
impl SchemaManager for MockSchemaManager {
    async fn create_tables(&self) -> Result<(), DomainError> {
        self.create_calls.fetch_add(1, Ordering::Relaxed);
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError("disk full".to_string()));
        }
        *self.exists.write().await = true;
        Ok(())
    }

    async fn drop_tables(&self) -> Result<(), DomainError> {
        *self.exists.write().await = false;
        Ok(())
    }

    async fn tables_exist(&self) -> Result<bool, DomainError> {
        Ok(*self.exists.read().await)
    }
}

pub struct MockJobRegistry {
    jobs: Arc<RwLock<HashMap<String, ScheduledJob>>>,
}

impl MockJobRegistry {
    pub fn new() -> Self {
        Self {
            jobs: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn len(&self) -> usize {
        self.jobs.read().await.len()
    }
}

#[async_trait]
impl JobRegistry for MockJobRegistry {
    async fn find(&self, name: &str) -> Result<Option<ScheduledJob>, DomainError> {
        Ok(self.jobs.read().await.get(name).cloned())
    }

    async fn register(&self, job: &ScheduledJob) -> Result<bool, DomainError> {
        let mut jobs = self.jobs.write().await;
        if jobs.contains_key(&job.name) {
            return Ok(false);
        }
        jobs.insert(job.name.clone(), job.clone());
        Ok(true)
    }

    async fn deregister(&self, name: &str) -> Result<bool, DomainError> {
        Ok(self.jobs.write().await.remove(name).is_some())
    }
}
