use async_trait::async_trait;
use visitor_counter_domain::{DomainError, ScheduledJob};

#[async_trait]
pub trait JobRegistry: Send + Sync {
    async fn find(&self, name: &str) -> Result<Option<ScheduledJob>, DomainError>;

    /// Returns `false` when a job with the same name already exists.
    async fn register(&self, job: &ScheduledJob) -> Result<bool, DomainError>;

    /// Returns `false` when nothing was registered under `name`.
    async fn deregister(&self, name: &str) -> Result<bool, DomainError>;
}
