use async_trait::async_trait;
use visitor_counter_domain::DomainError;

#[async_trait]
pub trait SchemaManager: Send + Sync {
    /// Create the visit table and its timestamp index when absent.
    async fn create_tables(&self) -> Result<(), DomainError>;
    async fn drop_tables(&self) -> Result<(), DomainError>;
    async fn tables_exist(&self) -> Result<bool, DomainError>;
}
