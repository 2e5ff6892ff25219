use crate::database::TableNames;
use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{error, info, instrument};
use visitor_counter_application::ports::JobRegistry;
use visitor_counter_domain::{DomainError, ScheduledJob};

/// Recurring trigger registrations, kept next to the data they act on.
pub struct SqliteJobRegistry {
    pool: SqlitePool,
    table: String,
}

impl SqliteJobRegistry {
    pub fn new(pool: SqlitePool, tables: &TableNames) -> Self {
        Self {
            pool,
            table: tables.scheduled_jobs.clone(),
        }
    }

    /// Creates the registry table. Called once at startup.
    pub async fn ensure_table(&self) -> Result<(), DomainError> {
        let sql = format!(
            "CREATE TABLE IF NOT EXISTS {} (
                name TEXT PRIMARY KEY,
                interval_secs INTEGER NOT NULL,
                registered_at DATETIME NOT NULL DEFAULT (datetime('now'))
            )",
            self.table
        );

        sqlx::query(&sql).execute(&self.pool).await.map_err(|e| {
            error!(error = %e, table = %self.table, "Failed to create job registry table");
            DomainError::DatabaseError(e.to_string())
        })?;
        Ok(())
    }

    fn row_to_job(row: (String, i64, String)) -> ScheduledJob {
        let (name, interval_secs, registered_at) = row;
        ScheduledJob {
            name,
            interval_secs: interval_secs.max(0) as u64,
            registered_at: Some(registered_at),
        }
    }
}

#[async_trait]
impl JobRegistry for SqliteJobRegistry {
    #[instrument(skip(self))]
    async fn find(&self, name: &str) -> Result<Option<ScheduledJob>, DomainError> {
        let sql = format!(
            "SELECT name, interval_secs, datetime(registered_at) FROM {} WHERE name = ?",
            self.table
        );

        let row = sqlx::query_as::<_, (String, i64, String)>(&sql)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to look up scheduled job");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(row.map(Self::row_to_job))
    }

    #[instrument(skip(self))]
    async fn register(&self, job: &ScheduledJob) -> Result<bool, DomainError> {
        let sql = format!(
            "INSERT OR IGNORE INTO {} (name, interval_secs) VALUES (?, ?)",
            self.table
        );

        let result = sqlx::query(&sql)
            .bind(&job.name)
            .bind(job.interval_secs as i64)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to register scheduled job");
                DomainError::DatabaseError(e.to_string())
            })?;

        let inserted = result.rows_affected() > 0;
        if inserted {
            info!(job = %job.name, interval_secs = job.interval_secs, "Scheduled job registered");
        }
        Ok(inserted)
    }

    #[instrument(skip(self))]
    async fn deregister(&self, name: &str) -> Result<bool, DomainError> {
        let sql = format!("DELETE FROM {} WHERE name = ?", self.table);

        let result = sqlx::query(&sql)
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to deregister scheduled job");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }
}
