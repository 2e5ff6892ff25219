use super::TableNames;
use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{error, info, instrument};
use visitor_counter_application::ports::SchemaManager;
use visitor_counter_domain::DomainError;

/// Owns the DDL of the visit log table.
pub struct SqliteSchemaManager {
    pool: SqlitePool,
    tables: TableNames,
}

impl SqliteSchemaManager {
    pub fn new(pool: SqlitePool, tables: TableNames) -> Self {
        Self { pool, tables }
    }

    async fn execute(&self, sql: &str, action: &str) -> Result<(), DomainError> {
        sqlx::query(sql).execute(&self.pool).await.map_err(|e| {
            error!(error = %e, table = %self.tables.visitors, action, "Schema statement failed");
            DomainError::DatabaseError(format!("Failed to {} {}: {}", action, self.tables.visitors, e))
        })?;
        Ok(())
    }
}

#[async_trait]
impl SchemaManager for SqliteSchemaManager {
    #[instrument(skip(self))]
    async fn create_tables(&self) -> Result<(), DomainError> {
        let create_table = format!(
            "CREATE TABLE IF NOT EXISTS {} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                timestamp DATETIME NOT NULL DEFAULT (datetime('now')),
                client_identifier VARCHAR(100) NOT NULL
            )",
            self.tables.visitors
        );
        self.execute(&create_table, "create").await?;

        let create_index = format!(
            "CREATE INDEX IF NOT EXISTS {} ON {} (timestamp)",
            self.tables.visitors_timestamp_idx, self.tables.visitors
        );
        self.execute(&create_index, "index").await?;

        info!(table = %self.tables.visitors, "Visit table ready");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn drop_tables(&self) -> Result<(), DomainError> {
        let drop_table = format!("DROP TABLE IF EXISTS {}", self.tables.visitors);
        self.execute(&drop_table, "drop").await?;

        info!(table = %self.tables.visitors, "Visit table dropped");
        Ok(())
    }

    async fn tables_exist(&self) -> Result<bool, DomainError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
        )
        .bind(&self.tables.visitors)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to inspect schema");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(count > 0)
    }
}
