use super::helpers::format_cutoff;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::time::Duration;
use tracing::{debug, error, info, instrument};
use visitor_counter_domain::DomainError;

const DELETE_BATCH_SIZE: i64 = 5000;
const DELETE_BATCH_PAUSE: Duration = Duration::from_millis(50);

#[instrument(skip(pool, client_identifier))]
pub(super) async fn insert_visit(
    pool: &SqlitePool,
    table: &str,
    client_identifier: &str,
) -> Result<(), DomainError> {
    let sql = format!("INSERT INTO {} (client_identifier) VALUES (?)", table);

    sqlx::query(&sql)
        .bind(client_identifier)
        .execute(pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to record visit");
            DomainError::DatabaseError(format!("Failed to record visit: {}", e))
        })?;

    debug!("Visit recorded");
    Ok(())
}

/// Deletes in bounded batches so a long backlog does not pin the writer.
pub(super) async fn delete_older_than(
    pool: &SqlitePool,
    table: &str,
    cutoff: DateTime<Utc>,
) -> Result<u64, DomainError> {
    let cutoff = format_cutoff(cutoff);
    let sql = format!(
        "DELETE FROM {table} WHERE rowid IN (SELECT rowid FROM {table} WHERE timestamp < ? LIMIT ?)",
        table = table
    );
    let mut total_deleted: u64 = 0;

    loop {
        let result = sqlx::query(&sql)
            .bind(&cutoff)
            .bind(DELETE_BATCH_SIZE)
            .execute(pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete stale visits");
                DomainError::DatabaseError(format!("Failed to delete stale visits: {}", e))
            })?;

        let deleted = result.rows_affected();
        total_deleted += deleted;
        if deleted < DELETE_BATCH_SIZE as u64 {
            break;
        }
        tokio::time::sleep(DELETE_BATCH_PAUSE).await;
    }

    info!(deleted = total_deleted, cutoff = %cutoff, "Stale visits deleted (batched)");
    Ok(total_deleted)
}
