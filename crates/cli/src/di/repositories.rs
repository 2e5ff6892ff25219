use sqlx::SqlitePool;
use std::sync::Arc;
use visitor_counter_domain::{config::DatabaseConfig, DomainError};
use visitor_counter_infrastructure::{
    database::{SqliteSchemaManager, TableNames},
    repositories::{
        job_registry_repository::SqliteJobRegistry, visit_repository::SqliteVisitRepository,
    },
};

pub struct Repositories {
    pub visits: Arc<SqliteVisitRepository>,
    pub schema: Arc<SqliteSchemaManager>,
    pub jobs: Arc<SqliteJobRegistry>,
}

impl Repositories {
    pub async fn new(pool: SqlitePool, cfg: &DatabaseConfig) -> Result<Self, DomainError> {
        let tables = TableNames::new(&cfg.table_prefix)?;

        let jobs = SqliteJobRegistry::new(pool.clone(), &tables);
        jobs.ensure_table().await?;

        Ok(Self {
            visits: Arc::new(SqliteVisitRepository::new(pool.clone(), &tables)),
            schema: Arc::new(SqliteSchemaManager::new(pool, tables)),
            jobs: Arc::new(jobs),
        })
    }
}
