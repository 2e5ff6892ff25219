use async_trait::async_trait;
use chrono::{DateTime, Utc};
use visitor_counter_domain::DomainError;

#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Append one visit; storage stamps the insertion time.
    async fn record(&self, client_identifier: &str) -> Result<(), DomainError>;

    /// Number of visits strictly newer than `cutoff`.
    async fn count_since(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError>;

    /// Remove visits strictly older than `cutoff`, returning how many went.
    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError>;
}
