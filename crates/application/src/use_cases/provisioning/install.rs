use crate::ports::{JobRegistry, SchemaManager};
use std::sync::Arc;
use tracing::info;
use visitor_counter_domain::{DomainError, ScheduledJob, PURGE_JOB_NAME};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    /// `false` when the purge trigger was already registered.
    pub trigger_registered: bool,
    pub purge_interval_secs: u64,
}

/// Use case: create the visit table and register the purge trigger.
/// Safe to run repeatedly.
pub struct InstallUseCase {
    schema: Arc<dyn SchemaManager>,
    registry: Arc<dyn JobRegistry>,
    purge_interval_secs: u64,
}

impl InstallUseCase {
    pub fn new(
        schema: Arc<dyn SchemaManager>,
        registry: Arc<dyn JobRegistry>,
        purge_interval_secs: u64,
    ) -> Self {
        Self {
            schema,
            registry,
            purge_interval_secs,
        }
    }

    pub async fn execute(&self) -> Result<InstallOutcome, DomainError> {
        self.schema.create_tables().await?;

        if let Some(existing) = self.registry.find(PURGE_JOB_NAME).await? {
            info!(
                job = PURGE_JOB_NAME,
                interval_secs = existing.interval_secs,
                "Purge trigger already registered"
            );
            return Ok(InstallOutcome {
                trigger_registered: false,
                purge_interval_secs: existing.interval_secs,
            });
        }

        let job = ScheduledJob::new(PURGE_JOB_NAME, self.purge_interval_secs);
        let trigger_registered = self.registry.register(&job).await?;
        info!(
            job = PURGE_JOB_NAME,
            interval_secs = self.purge_interval_secs,
            "Purge trigger registered"
        );

        Ok(InstallOutcome {
            trigger_registered,
            purge_interval_secs: self.purge_interval_secs,
        })
    }
}
