use crate::ports::{JobRegistry, SchemaManager};
use std::sync::Arc;
use tracing::info;
use visitor_counter_domain::{DomainError, PURGE_JOB_NAME};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UninstallOutcome {
    pub trigger_removed: bool,
}

/// Use case: drop the visit table and remove the purge trigger
pub struct UninstallUseCase {
    schema: Arc<dyn SchemaManager>,
    registry: Arc<dyn JobRegistry>,
}

impl UninstallUseCase {
    pub fn new(schema: Arc<dyn SchemaManager>, registry: Arc<dyn JobRegistry>) -> Self {
        Self { schema, registry }
    }

    pub async fn execute(&self) -> Result<UninstallOutcome, DomainError> {
        let trigger_removed = self.registry.deregister(PURGE_JOB_NAME).await?;
        self.schema.drop_tables().await?;

        info!(trigger_removed, "Visitor counter uninstalled");
        Ok(UninstallOutcome { trigger_removed })
    }
}
