mod helpers;
mod reader;
mod writer;

use crate::database::TableNames;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use visitor_counter_application::ports::VisitRepository;
use visitor_counter_domain::{DomainError, VisitRecord};

pub use helpers::{format_cutoff, TIMESTAMP_FORMAT};

pub struct SqliteVisitRepository {
    pool: SqlitePool,
    table: String,
}

impl SqliteVisitRepository {
    pub fn new(pool: SqlitePool, tables: &TableNames) -> Self {
        Self {
            pool,
            table: tables.visitors.clone(),
        }
    }

    /// Every stored visit in insertion order.
    pub async fn records(&self) -> Result<Vec<VisitRecord>, DomainError> {
        reader::fetch_all(&self.pool, &self.table).await
    }
}

#[async_trait]
impl VisitRepository for SqliteVisitRepository {
    async fn record(&self, client_identifier: &str) -> Result<(), DomainError> {
        writer::insert_visit(&self.pool, &self.table, client_identifier).await
    }

    async fn count_since(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError> {
        reader::count_since(&self.pool, &self.table, cutoff).await
    }

    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError> {
        writer::delete_older_than(&self.pool, &self.table, cutoff).await
    }
}
