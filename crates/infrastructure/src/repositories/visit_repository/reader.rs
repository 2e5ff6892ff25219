use super::helpers::{format_cutoff, row_to_visit};
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::{debug, error, instrument};
use visitor_counter_domain::{DomainError, VisitRecord};

#[instrument(skip(pool))]
pub(super) async fn count_since(
    pool: &SqlitePool,
    table: &str,
    cutoff: DateTime<Utc>,
) -> Result<u64, DomainError> {
    let cutoff = format_cutoff(cutoff);
    let sql = format!("SELECT COUNT(*) FROM {} WHERE timestamp > ?", table);

    let count: Option<i64> = sqlx::query_scalar(&sql)
        .bind(&cutoff)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to count visits");
            DomainError::DatabaseError(format!("Failed to count visits: {}", e))
        })?;

    let count = count.unwrap_or(0) as u64;
    debug!(count, cutoff = %cutoff, "Visits counted");
    Ok(count)
}

pub(super) async fn fetch_all(pool: &SqlitePool, table: &str) -> Result<Vec<VisitRecord>, DomainError> {
    let sql = format!(
        "SELECT id, datetime(timestamp) AS timestamp, client_identifier FROM {} ORDER BY id",
        table
    );

    let rows = sqlx::query(&sql).fetch_all(pool).await.map_err(|e| {
        error!(error = %e, "Failed to fetch visits");
        DomainError::DatabaseError(e.to_string())
    })?;

    Ok(rows.into_iter().map(row_to_visit).collect())
}
