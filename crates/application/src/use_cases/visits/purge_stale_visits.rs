use crate::ports::{Clock, VisitRepository};
use chrono::Duration;
use std::sync::Arc;
use tracing::info;
use visitor_counter_domain::DomainError;

/// Use case: delete visits older than the retention horizon
/// Should be run daily
pub struct PurgeStaleVisitsUseCase {
    repository: Arc<dyn VisitRepository>,
    clock: Arc<dyn Clock>,
    retention: Duration,
}

impl PurgeStaleVisitsUseCase {
    pub fn new(
        repository: Arc<dyn VisitRepository>,
        clock: Arc<dyn Clock>,
        retention: Duration,
    ) -> Self {
        Self {
            repository,
            clock,
            retention,
        }
    }

    pub fn retention(&self) -> Duration {
        self.retention
    }

    pub async fn execute(&self) -> Result<u64, DomainError> {
        let cutoff = self
            .clock
            .now()
            .checked_sub_signed(self.retention)
            .ok_or_else(|| {
                DomainError::InvalidConfiguration(format!(
                    "Retention of {} days reaches before the earliest timestamp",
                    self.retention.num_days()
                ))
            })?;
        let deleted = self.repository.delete_older_than(cutoff).await?;
        info!(
            deleted,
            retention_days = self.retention.num_days(),
            "Stale visits purged"
        );
        Ok(deleted)
    }
}
