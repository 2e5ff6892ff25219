use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use visitor_counter_application::use_cases::PurgeStaleVisitsUseCase;
use visitor_counter_domain::scheduled_job::DAILY_INTERVAL_SECS;

/// Periodically purges visits past the retention horizon.
///
/// The first tick fires immediately, so a freshly started server sweeps once
/// before settling into its cadence.
pub struct VisitRetentionJob {
    purge: Arc<PurgeStaleVisitsUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl VisitRetentionJob {
    pub fn new(purge: Arc<PurgeStaleVisitsUseCase>) -> Self {
        Self {
            purge,
            interval_secs: DAILY_INTERVAL_SECS,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs.max(1);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn interval_secs(&self) -> u64 {
        self.interval_secs
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval_secs,
            retention_days = self.purge.retention().num_days(),
            "Starting visit retention job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("VisitRetentionJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.purge.execute().await {
                            Ok(deleted) => {
                                info!(deleted, "Visit retention sweep completed");
                            }
                            Err(e) => {
                                error!(error = %e, "Visit retention sweep failed");
                            }
                        }
                    }
                }
            }
        });
    }
}
